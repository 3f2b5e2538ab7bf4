mod rating;
mod result;
mod simulator;

pub use rating::*;
pub use result::*;
pub use simulator::*;
