use super::sink::Sink;
use crate::Error;
use crate::game::Outcome;
use std::io::Write;
use std::path::PathBuf;

/// Append-only CSV log of round outcomes. The file and its parent
/// directory are created on first write, with the header row written
/// exactly once; every append lands one row.
#[derive(Debug, Clone)]
pub struct Logbook {
    path: PathBuf,
}

impl Logbook {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl Sink for Logbook {
    fn append(&mut self, outcome: &Outcome) -> Result<(), Error> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let fresh = !self.path.exists();
        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        if fresh {
            writeln!(file, "{}", Outcome::HEADER)?;
        }
        writeln!(file, "{}", outcome.row())?;
        log::debug!("recorded outcome to {}", self.path.display());
        Ok(())
    }
}
