//! Runtime data model definitions.
//!
//! In general:
//! - Schema / macro code defines *what exists*
//! - `model` defines *what runs*
pub mod track;
