mod date;
mod phase;

pub use date::*;
pub use phase::*;
