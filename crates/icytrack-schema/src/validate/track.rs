use crate::{node::Entity, prelude::*};
use icytrack_config::ValidateConfig;

/// Report declarations that can never produce a change entry.
///
/// Inert declarations are legal; they are only rejected when the
/// configuration opts into `deny_inert`.
pub fn validate_inert_declarations(schema: &Schema, config: &ValidateConfig, errs: &mut ErrorTree) {
    for (entity_path, entity) in schema.tracked_entities() {
        let Some(track) = &entity.track else {
            continue;
        };

        if !track.is_inert() {
            continue;
        }

        if config.deny_inert {
            errs.add_for(
                entity_path,
                "track declaration names no rules and does not track files",
            );
        } else {
            tracing::warn!(entity = %entity_path, "track declaration is inert");
        }
    }
}

///
/// TESTS
///
