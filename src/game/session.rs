use super::outcome::Confidence;
use super::outcome::Outcome;
use super::outcome::Signal;
use super::round::Round;
use crate::ELIMINATION_COST;
use crate::Error;
use crate::Points;
use crate::content::Catalog;
use crate::content::Class;
use crate::content::Confusion;
use crate::save::Sink;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;

/// Where the player is in the app flow. Intro and Rules are pure
/// navigation with no game data; a round exists only while Playing.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Intro,
    Rules,
    Playing,
}

/// Central coordinator for one player's sitting.
///
/// Owns the catalog, the confusability table, the cumulative score,
/// the seedable random source, and the outcome sink; every transition
/// goes through here. The sink is fire-and-forget: an append failure
/// is reported and the in-memory state stays authoritative.
pub struct Session {
    phase: Phase,
    score: Points,
    round: Option<Round>,
    catalog: Catalog,
    confusion: Confusion,
    rng: SmallRng,
    sink: Box<dyn Sink>,
}

impl Session {
    pub fn new(catalog: Catalog, confusion: Confusion, sink: Box<dyn Sink>) -> Self {
        Self::with_rng(catalog, confusion, sink, SmallRng::from_os_rng())
    }

    /// Deterministic sessions for tests and replays.
    pub fn seeded(catalog: Catalog, confusion: Confusion, sink: Box<dyn Sink>, seed: u64) -> Self {
        Self::with_rng(catalog, confusion, sink, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(catalog: Catalog, confusion: Confusion, sink: Box<dyn Sink>, rng: SmallRng) -> Self {
        Self {
            phase: Phase::Intro,
            score: 0,
            round: None,
            catalog,
            confusion,
            rng,
            sink,
        }
    }

    //
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn score(&self) -> Points {
        self.score
    }
    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    //
    pub fn intro(&mut self) {
        self.phase = Phase::Intro;
    }
    pub fn rules(&mut self) {
        self.phase = Phase::Rules;
    }

    /// Start play with a fresh round: one uniformly random actor, a
    /// shuffled option set, and the clue lineup at one revealed.
    /// Replaces any previous round; only an explicit call gets here.
    pub fn deal(&mut self) {
        let actor = self
            .catalog
            .actors()
            .choose(&mut self.rng)
            .cloned()
            .expect("catalog is validated non-empty");
        log::info!("dealing round for {}", actor.id);
        self.round = Some(Round::new(actor, &self.confusion, &mut self.rng));
        self.phase = Phase::Playing;
    }

    //
    pub fn reveal(&mut self) {
        if let Some(round) = self.round.as_mut() {
            round.reveal();
        }
    }
    pub fn select(&mut self, class: Class) {
        if let Some(round) = self.round.as_mut() {
            round.select(class);
        }
    }
    pub fn confide(&mut self, confidence: Confidence) {
        if let Some(round) = self.round.as_mut() {
            round.confide(confidence);
        }
    }
    pub fn tag(&mut self, signal: Option<Signal>) {
        if let Some(round) = self.round.as_mut() {
            round.tag(signal);
        }
    }

    /// Spend the round's elimination joker. Costs a flat 15 off the
    /// session score, floored at zero, charged only when an option
    /// actually goes.
    pub fn eliminate(&mut self) -> Option<Class> {
        let round = self.round.as_mut()?;
        let removed = round.eliminate(&mut self.rng)?;
        self.score = (self.score - ELIMINATION_COST).max(0);
        log::info!("eliminated {}, score {}", removed, self.score);
        Some(removed)
    }

    /// Settle the current round and hand the outcome to the sink.
    /// Refusals (`NoRound`, `RoundSettled`, `NoSelection`) leave
    /// score, reveal count, and terminal flag untouched. A sink
    /// failure is logged, never propagated.
    pub fn submit(&mut self) -> Result<Outcome, Error> {
        let round = self.round.as_mut().ok_or(Error::NoRound)?;
        let outcome = round.submit()?;
        self.score = (self.score + outcome.points).max(0);
        log::info!(
            "round settled: {} guessed {} for {} points, score {}",
            outcome.target_actor_id,
            outcome.guess_class,
            outcome.points,
            self.score,
        );
        if let Err(e) = self.sink.append(&outcome) {
            log::warn!("failed to record outcome: {}", e);
        }
        Ok(outcome)
    }
}
