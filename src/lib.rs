//! Core rules engine for the information-ecosystem guessing game.
//!
//! A player is shown progressively revealed clues about an anonymized
//! actor (bot network, troll farm, fact-checking org, ...) and guesses
//! which class it belongs to. Early correct guesses pay more; wrong
//! guesses and the one-shot elimination joker cost points.

pub mod content;
pub mod error;
pub mod game;
pub mod save;

pub use error::Error;

/// Round and session scores. Signed so the arithmetic reads naturally;
/// every public result is floored at zero.
pub type Points = i32;

// ============================================================================
// SCORING PARAMETERS
// ============================================================================
/// Starting value of a round before penalties and bonuses.
pub const BASE_POINTS: Points = 100;
/// Deduction per clue revealed beyond the first.
pub const CLUE_PENALTY: Points = 15;
/// Flat deduction for an incorrect guess.
pub const WRONG_PENALTY: Points = 20;
/// Bonus per unrevealed clue on a correct guess.
pub const EARLY_BONUS: Points = 10;
/// Flat session-score cost of the elimination joker.
pub const ELIMINATION_COST: Points = 15;

// ============================================================================
// ROUND SHAPE
// ============================================================================
/// Upper bound on clues selected for a round.
pub const MAX_CLUES: usize = 5;
/// Upper bound on distractor classes drawn from the confusability table.
pub const MAX_DISTRACTORS: usize = 4;
/// Elimination is refused once this few options remain.
pub const MIN_OPTIONS: usize = 2;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
