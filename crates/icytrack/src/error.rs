use icytrack_config::ConfigError;
use thiserror::Error as ThisError;

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Schema(#[from] icytrack_schema::Error),

    #[error("failed to serialize schema: {0}")]
    Serialize(#[from] serde_json::Error),
}
