pub mod lineup;
pub use lineup::*;

pub mod options;
pub use options::*;

pub mod outcome;
pub use outcome::*;

pub mod round;
pub use round::*;

pub mod scoring;
pub use scoring::*;

pub mod session;
pub use session::*;
