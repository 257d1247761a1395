use super::class::Class;
use serde::Deserialize;
use serde::Serialize;

/// Tutorial card introducing one class before play begins.
/// Reference data for the intro carousel; the state machine never
/// reads these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    #[serde(rename = "id")]
    pub class: Class,
    pub name: String,
    pub summary: String,
    #[serde(default)]
    pub key_signals: Vec<String>,
    #[serde(default)]
    pub example_clues: Vec<String>,
}
