mod calendar;
mod league;
mod result;
mod schedule;
mod table;

pub use calendar::*;
pub use league::*;
pub use result::*;
pub use schedule::*;
pub use table::*;
