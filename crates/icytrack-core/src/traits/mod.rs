use crate::model::track::TrackModel;

// ============================================================================
// FOUNDATIONAL KINDS
// ============================================================================

///
/// Path
/// Fully-qualified schema path.
///

pub trait Path {
    const PATH: &'static str;
}

///
/// FieldRule
///
/// Marker for types the tracking engine accepts as field-tracking rules.
/// The rule's own shape is the engine's concern.
///

pub trait FieldRule: Path {}

///
/// MessageRule
///
/// Marker for types the tracking engine accepts as message or body
/// generation rules.
///

pub trait MessageRule: Path {}

// ============================================================================
// ENTITY
// ============================================================================

///
/// EntityKind
///
/// Declared facts about a domain-model type, emitted by `#[entity]`.
///
/// `TRACK` is `None` for types declared without `track(...)`; it is never a
/// default-valued declaration standing in for an absent one.
///

pub trait EntityKind: Path + 'static {
    const ENTITY_NAME: &'static str;
    const FIELDS: &'static [&'static str];
    const TRACK: Option<&'static TrackModel>;
}
