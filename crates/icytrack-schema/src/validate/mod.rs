//! Schema validation orchestration and shared helpers.
//!
//! Declarations are never validated where they are attached; this pass is
//! run by consumers that read the registered schema.

pub mod naming;
pub mod track;

use crate::{
    error::ErrorTree,
    node::{Schema, VisitableNode},
    visit::ValidateVisitor,
};
use icytrack_config::ValidateConfig;

/// Run full schema validation in a staged, deterministic order.
pub fn validate_schema(schema: &Schema, config: &ValidateConfig) -> Result<(), ErrorTree> {
    // Phase 1: validate each node (structural + local invariants).
    let mut errors = validate_nodes(schema);

    // Phase 2: enforce schema-wide invariants.
    validate_global(schema, config, &mut errors);

    if errors.is_empty() {
        tracing::debug!(nodes = schema.len(), "schema validated");
    } else {
        tracing::debug!(errors = errors.len(), "schema validation failed");
    }

    errors.result()
}

// Validate all nodes via a visitor to retain route-aware error aggregation.
fn validate_nodes(schema: &Schema) -> ErrorTree {
    let mut visitor = ValidateVisitor::new();
    schema.accept(&mut visitor);

    visitor.errors
}

// Run global validation passes that require a full schema view.
fn validate_global(schema: &Schema, config: &ValidateConfig, errors: &mut ErrorTree) {
    naming::validate_entity_naming(schema, errors);
    track::validate_inert_declarations(schema, config, errors);
}
