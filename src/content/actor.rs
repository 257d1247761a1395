use super::class::Class;
use super::clue::Clue;
use serde::Deserialize;
use serde::Serialize;

/// An anonymized profile representing one information-ecosystem
/// participant. Tagged with its true class and an ordered clue pool.
/// Immutable after load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    pub id: String,
    #[serde(rename = "class_id")]
    pub class: Class,
    pub name: String,
    pub clues: Vec<Clue>,
}

impl std::fmt::Display for Actor {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} ({} clues)", self.id, self.clues.len())
    }
}
