use crate::Points;
use chrono::DateTime;
use chrono::SecondsFormat;
use chrono::Utc;

/// Self-reported confidence in the guess, recorded for the log only.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Confidence {
    Low,
    #[default]
    Medium,
    High,
}

impl Confidence {
    pub const fn all() -> &'static [Self] {
        &[Self::Low, Self::Medium, Self::High]
    }
    pub const fn percent(&self) -> u8 {
        match self {
            Self::Low => 50,
            Self::Medium => 70,
            Self::High => 90,
        }
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.percent())
    }
}

/// Which kind of signal the player says swayed the guess. Log only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Behavior,
    Network,
    Operational,
    Content,
}

impl Signal {
    pub const fn all() -> &'static [Self] {
        &[Self::Behavior, Self::Network, Self::Operational, Self::Content]
    }
}

impl std::fmt::Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Behavior => write!(f, "Davranış"),
            Self::Network => write!(f, "Ağ"),
            Self::Operational => write!(f, "Operasyonel"),
            Self::Content => write!(f, "İçerik"),
        }
    }
}

/// Durable summary of one completed round. One of these goes to the
/// outcome sink per submitted guess; classes are logged by display
/// name, matching what the player saw.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub timestamp: DateTime<Utc>,
    pub target_actor_id: String,
    pub target_class: String,
    pub guess_class: String,
    pub correct: bool,
    pub clues_revealed: usize,
    pub confidence: Confidence,
    pub explanation: Option<Signal>,
    pub used_elimination: bool,
    pub points: Points,
    pub duration_sec: f64,
}

impl Outcome {
    pub const HEADER: &'static str = "timestamp,target_actor_id,target_class,guess_class,\
        correct,clues_revealed,confidence,explanation,used_elimination,points,duration_sec";

    /// One CSV row. None of the fields can contain a comma: classes
    /// and signals render from fixed enums, actor ids are plain codes.
    pub fn row(&self) -> String {
        format!(
            "{},{},{},{},{},{},{},{},{},{},{:.2}",
            self.timestamp.to_rfc3339_opts(SecondsFormat::Secs, true),
            self.target_actor_id,
            self.target_class,
            self.guess_class,
            self.correct as u8,
            self.clues_revealed,
            self.confidence,
            self.explanation.map(|s| s.to_string()).unwrap_or_default(),
            self.used_elimination as u8,
            self.points,
            self.duration_sec,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn outcome() -> Outcome {
        Outcome {
            timestamp: Utc.with_ymd_and_hms(2026, 8, 23, 12, 0, 0).unwrap(),
            target_actor_id: "BOT_00".to_string(),
            target_class: "Bot Ağı".to_string(),
            guess_class: "Trol Çiftliği".to_string(),
            correct: false,
            clues_revealed: 3,
            confidence: Confidence::High,
            explanation: Some(Signal::Network),
            used_elimination: true,
            points: 50,
            duration_sec: 12.3456,
        }
    }

    #[test]
    fn row_renders_flat_record() {
        let row = outcome().row();
        assert!(
            row == "2026-08-23T12:00:00Z,BOT_00,Bot Ağı,Trol Çiftliği,0,3,90,Ağ,1,50,12.35"
        );
        assert!(row.split(',').count() == Outcome::HEADER.split(',').count());
    }

    #[test]
    fn missing_explanation_leaves_field_empty() {
        let mut outcome = outcome();
        outcome.explanation = None;
        assert!(outcome.row().contains(",90,,1,"));
    }

    #[test]
    fn confidence_percentages() {
        assert!(Confidence::Low.percent() == 50);
        assert!(Confidence::Medium.percent() == 70);
        assert!(Confidence::High.percent() == 90);
        assert!(Confidence::default() == Confidence::Medium);
    }
}
