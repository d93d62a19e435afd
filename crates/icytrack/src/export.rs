use crate::Error;
use icytrack_config::ValidateConfig;
use icytrack_schema::build::get_schema_with;

/// The registered schema as pretty-printed JSON, validated with defaults.
pub fn schema_json() -> Result<String, Error> {
    schema_json_with(&ValidateConfig::default())
}

/// The registered schema as pretty-printed JSON, validated with `config`.
pub fn schema_json_with(config: &ValidateConfig) -> Result<String, Error> {
    let schema = get_schema_with(config)?;

    Ok(serde_json::to_string_pretty(&*schema)?)
}
