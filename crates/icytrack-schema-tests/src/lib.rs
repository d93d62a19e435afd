//! Fixture entities for exercising `#[entity]` expansion and the startup
//! registry end to end.

pub mod schema;

#[cfg(test)]
mod test;

mod prelude {
    pub use icytrack::prelude::*;
}
