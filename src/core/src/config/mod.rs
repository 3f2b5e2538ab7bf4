mod role;
mod settings;
mod stats;

pub use role::*;
pub use settings::*;
pub use stats::*;
