pub mod logbook;
pub use logbook::*;

pub mod sink;
pub use sink::*;
