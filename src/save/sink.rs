use crate::Error;
use crate::game::Outcome;

/// Destination for completed-round records. Append-only; one call
/// adds exactly one record. Failures are surfaced to the caller; the
/// session reports and moves on.
pub trait Sink {
    fn append(&mut self, outcome: &Outcome) -> Result<(), Error>;
}

/// Discards every record. The default when no durable log is wanted.
#[derive(Debug, Default)]
pub struct Void;

impl Sink for Void {
    fn append(&mut self, _: &Outcome) -> Result<(), Error> {
        Ok(())
    }
}
