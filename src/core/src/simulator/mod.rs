mod context;
mod data;
mod orchestrator;
mod result;

pub use context::*;
pub use data::*;
pub use orchestrator::*;
pub use result::*;
