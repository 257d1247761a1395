use super::lineup::Lineup;
use super::options::Options;
use super::outcome::Confidence;
use super::outcome::Outcome;
use super::outcome::Signal;
use super::scoring;
use crate::Error;
use crate::Points;
use crate::content::Actor;
use crate::content::Class;
use crate::content::Clue;
use crate::content::Confusion;
use chrono::Utc;
use rand::Rng;
use std::time::Instant;

/// One play-through from actor selection to guess submission.
///
/// Mutated strictly by sequential caller-triggered transitions; every
/// transition is a quiet no-op once it would violate an invariant.
/// Settling the round (a submitted guess) is absorbing: afterwards the
/// revealed count, the option set, and the selection are frozen.
#[derive(Debug)]
pub struct Round {
    actor: Actor,
    lineup: Lineup,
    options: Options,
    revealed: usize,
    selection: Option<Class>,
    confidence: Confidence,
    signal: Option<Signal>,
    eliminated: bool,
    terminal: bool,
    points: Points,
    started: Instant,
}

impl Round {
    pub fn new<R: Rng>(actor: Actor, table: &Confusion, rng: &mut R) -> Self {
        let lineup = Lineup::from(actor.clues.as_slice());
        let options = Options::build(actor.class, table, rng);
        assert!(!lineup.is_empty(), "catalog actors always carry clues");
        Self {
            actor,
            lineup,
            options,
            revealed: 1,
            selection: None,
            confidence: Confidence::default(),
            signal: None,
            eliminated: false,
            terminal: false,
            points: 0,
            started: Instant::now(),
        }
    }

    //
    pub fn truth(&self) -> Class {
        self.actor.class
    }
    pub fn actor(&self) -> &Actor {
        &self.actor
    }
    pub fn options(&self) -> &Options {
        &self.options
    }
    pub fn revealed(&self) -> usize {
        self.revealed
    }
    /// Reveal cap for this round: min(5, pool size), enforced by Lineup.
    pub fn cap(&self) -> usize {
        self.lineup.len()
    }
    pub fn visible(&self) -> &[Clue] {
        &self.lineup.clues()[..self.revealed]
    }
    /// Clues the player never opened, shown after the round settles.
    pub fn hidden(&self) -> &[Clue] {
        &self.lineup.clues()[self.revealed..]
    }
    pub fn selection(&self) -> Option<Class> {
        self.selection
    }
    pub fn confidence(&self) -> Confidence {
        self.confidence
    }
    pub fn signal(&self) -> Option<Signal> {
        self.signal
    }
    pub fn eliminated(&self) -> bool {
        self.eliminated
    }
    pub fn terminal(&self) -> bool {
        self.terminal
    }
    /// Points earned by this round, zero until settled.
    pub fn points(&self) -> Points {
        self.points
    }

    //
    /// Open the next clue. Quiet no-op at the cap or after settling.
    pub fn reveal(&mut self) {
        if self.terminal || self.revealed >= self.cap() {
            return;
        }
        self.revealed += 1;
        log::debug!("revealed clue {}/{}", self.revealed, self.cap());
    }

    /// Pick a candidate class. Overwrites any previous pick and does
    /// not end the round. Quiet no-op after settling or when the class
    /// is not on offer.
    pub fn select(&mut self, class: Class) {
        if self.terminal || !self.options.contains(class) {
            return;
        }
        self.selection = Some(class);
    }

    pub fn confide(&mut self, confidence: Confidence) {
        if self.terminal {
            return;
        }
        self.confidence = confidence;
    }

    pub fn tag(&mut self, signal: Option<Signal>) {
        if self.terminal {
            return;
        }
        self.signal = signal;
    }

    /// Spend the one-shot joker: remove a uniformly random wrong
    /// option. Returns None after settling, after a previous use, or
    /// when only two options remain. If the removed option was the
    /// current selection, the selection is cleared rather than left
    /// pointing at a class that can no longer be guessed.
    pub fn eliminate<R: Rng>(&mut self, rng: &mut R) -> Option<Class> {
        if self.terminal || self.eliminated {
            return None;
        }
        let removed = self.options.eliminate(self.truth(), rng)?;
        self.eliminated = true;
        if self.selection == Some(removed) {
            self.selection = None;
        }
        Some(removed)
    }

    /// Settle the round against the current selection. Surfaces
    /// `RoundSettled` once settled and `NoSelection` when nothing is
    /// picked; both leave the state untouched.
    pub fn submit(&mut self) -> Result<Outcome, Error> {
        if self.terminal {
            return Err(Error::RoundSettled);
        }
        let guess = self.selection.ok_or(Error::NoSelection)?;
        let correct = guess == self.truth();
        self.points = scoring::points(correct, self.revealed);
        self.terminal = true;
        Ok(Outcome {
            timestamp: Utc::now(),
            target_actor_id: self.actor.id.clone(),
            target_class: self.truth().name().to_string(),
            guess_class: guess.name().to_string(),
            correct,
            clues_revealed: self.revealed,
            confidence: self.confidence,
            explanation: self.signal,
            used_elimination: self.eliminated,
            points: self.points,
            duration_sec: self.started.elapsed().as_secs_f64(),
        })
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} {}/{} clues, {} options",
            self.actor.id,
            self.revealed,
            self.cap(),
            self.options.len(),
        )
    }
}
