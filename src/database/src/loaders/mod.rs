mod loader;
mod names;
mod world;

pub use loader::*;
pub use names::*;
pub use world::*;
