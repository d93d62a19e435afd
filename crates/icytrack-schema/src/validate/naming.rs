use crate::{node::Entity, prelude::*};
use std::collections::BTreeMap;

/// Resolved entity names must be unique across the schema.
pub fn validate_entity_naming(schema: &Schema, errs: &mut ErrorTree) {
    let mut seen: BTreeMap<&str, &str> = BTreeMap::new();

    for (entity_path, entity) in schema.get_nodes::<Entity>() {
        let name = entity.resolved_name();

        if let Some(prev) = seen.insert(name, entity_path) {
            err!(
                errs,
                "duplicate entity name '{name}' for '{prev}' and '{entity_path}'"
            );
        }
    }
}
