mod def;
mod entity;
mod track;

mod traits;

// pub use all node types
pub use self::def::*;
pub use self::entity::*;
pub use self::track::*;

// use traits
pub use traits::*;
