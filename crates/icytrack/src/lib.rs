//! Declarative change-tracking metadata for domain-model types.
//!
//! `#[entity]` attaches an optional track declaration to a struct. The
//! declaration is plain `'static` data: which field rules to diff, which
//! message rules render summaries and bodies, whether to auto-subscribe,
//! whether attachments are tracked, and on which lifecycle event it fires.
//! The engine that does the diffing reads it through
//! [`EntityKind::TRACK`](crate::traits::EntityKind::TRACK) or the registered
//! schema.
//!
//! ```
//! use icytrack::prelude::*;
//!
//! pub struct StatusRule;
//! impl Path for StatusRule {
//!     const PATH: &'static str = "docs::StatusRule";
//! }
//! impl FieldRule for StatusRule {}
//!
//! #[entity(track(field = "StatusRule", on = "Create"))]
//! pub struct Invoice {
//!     pub status: String,
//! }
//!
//! #[entity]
//! pub struct Customer {
//!     pub name: String,
//! }
//!
//! fn main() {
//!     let track = Invoice::TRACK.unwrap();
//!     assert_eq!(track.on, TrackEvent::Create);
//!     assert_eq!(track.fields[0].path(), "docs::StatusRule");
//!     assert!(!track.subscribe && !track.files);
//!
//!     assert!(track_of::<Customer>().is_none());
//! }
//! ```
//!
//! Only the three declared events are accepted:
//!
//! ```compile_fail
//! use icytrack::prelude::*;
//!
//! #[entity(track(on = "Delete"))]
//! pub struct Invoice {
//!     pub total: u64,
//! }
//!
//! fn main() {}
//! ```
//!
//! Rule kinds are checked; a message rule cannot be listed as a field rule:
//!
//! ```compile_fail
//! use icytrack::prelude::*;
//!
//! pub struct ChangedMessage;
//! impl Path for ChangedMessage {
//!     const PATH: &'static str = "docs::ChangedMessage";
//! }
//! impl MessageRule for ChangedMessage {}
//!
//! #[entity(track(field = "ChangedMessage"))]
//! pub struct Invoice {
//!     pub total: u64,
//! }
//!
//! fn main() {}
//! ```
//!
//! ## Crate layout
//! - `core`: runtime models and traits read by engines.
//! - `schema`: schema AST, startup registry, and validation.
//! - `macros`: the `#[entity]` attribute.
//! - `config`: `icytrack.toml` loading.

mod error;
pub mod export;
pub mod telemetry;

pub use error::Error;
pub use icytrack_config as config;
pub use icytrack_core as core;
pub use icytrack_core::{model, track_of, traits};
pub use icytrack_schema as schema;
pub use icytrack_schema_derive as macros;

use icytrack_config::TrackConfig;
use icytrack_schema::build::get_schema_with;

/// re-exports
///
/// generated code reaches dependencies through here so users do not have to
/// list them in their own Cargo.toml
pub mod __reexports {
    pub use ctor;
}

/// Load configuration, install tracing, and validate the registered schema.
///
/// Returns the configuration that was applied.
pub fn start() -> Result<TrackConfig, Error> {
    let config = TrackConfig::load_default()?;
    telemetry::init_tracing(&config.log);

    let schema = get_schema_with(&config.validate)?;
    tracing::info!(
        entities = schema.len(),
        tracked = schema.tracked_entities().count(),
        "track schema ready"
    );

    Ok(config)
}

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        core::prelude::*,
        macros::entity,
    };
}
