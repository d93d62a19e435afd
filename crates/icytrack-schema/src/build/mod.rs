use crate::{Error, ThisError, node::Schema, prelude::*, validate::validate_schema};
use icytrack_config::ValidateConfig;
use std::sync::{LazyLock, RwLock, RwLockReadGuard, RwLockWriteGuard};

///
/// BuildError
///

#[derive(Debug, ThisError)]
pub enum BuildError {
    #[error("validation failed: {0}")]
    Validation(ErrorTree),
}

///
/// SCHEMA
/// the static data structure, filled by macro-emitted constructors at startup
///

static SCHEMA: LazyLock<RwLock<Schema>> = LazyLock::new(|| RwLock::new(Schema::new()));

/// Acquire a write guard to the global schema during startup registration.
pub fn schema_write() -> RwLockWriteGuard<'static, Schema> {
    SCHEMA
        .write()
        .expect("schema RwLock poisoned while acquiring write lock")
}

// schema_read
// just reads the schema directly without validation
pub fn schema_read() -> RwLockReadGuard<'static, Schema> {
    SCHEMA
        .read()
        .expect("schema RwLock poisoned while acquiring read lock")
}

/// Read the global schema after validating it with default settings.
pub fn get_schema() -> Result<RwLockReadGuard<'static, Schema>, Error> {
    get_schema_with(&ValidateConfig::default())
}

/// Read the global schema after validating it with `config`.
pub fn get_schema_with(
    config: &ValidateConfig,
) -> Result<RwLockReadGuard<'static, Schema>, Error> {
    let schema = schema_read();
    validate_schema(&schema, config).map_err(BuildError::Validation)?;

    Ok(schema)
}
