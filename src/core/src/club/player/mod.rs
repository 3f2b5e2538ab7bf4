mod builder;
mod collection;
mod lifecycle;
mod player;
mod stats;

pub use builder::*;
pub use collection::*;
pub use lifecycle::*;
pub use player::*;
pub use stats::*;
