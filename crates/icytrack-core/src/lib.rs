//! Runtime surface for change-tracking declarations.
//!
//! Schema code (`icytrack-schema`) describes *what was declared*; this crate
//! holds the `'static` models an engine reads at persistence time and the
//! traits macro-generated entities implement.

pub mod model;
pub mod traits;

use crate::{model::track::TrackModel, traits::EntityKind};

/// Declaration attached to `E`, or `None` when the type is not tracked.
#[must_use]
pub const fn track_of<E: EntityKind>() -> Option<&'static TrackModel> {
    E::TRACK
}

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        model::track::{LifecycleEvent, TrackEvent, TrackField, TrackMessage, TrackModel},
        track_of,
        traits::{EntityKind, FieldRule, MessageRule, Path},
    };
}
