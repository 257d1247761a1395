pub mod actor;
pub use actor::*;

pub mod card;
pub use card::*;

pub mod catalog;
pub use catalog::*;

pub mod class;
pub use class::*;

pub mod clue;
pub use clue::*;

pub mod confusion;
pub use confusion::*;
