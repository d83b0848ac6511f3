//! Matching Engine - energy-gated likes, skips and blocks
//!
//! Operates on the displayed candidate (`current_profile`) and the active
//! match (`current_match`) of a [`State`].

use crate::domain::{chat_id_for, DomainError, Sender, State};
use crate::ports::RandomSource;
use crate::services::{chat, generator};

/// Opening line the counterpart posts into a fresh match's empty chat
pub const MATCH_GREETING: &str = "Хэй! Поймал(а) твой сигнал 🙂";

/// Matching parameters
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Probability that a like turns into a match
    pub match_probability: f64,
    /// Attempts to find an unblocked candidate
    pub generation_attempts: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            match_probability: 0.35,
            generation_attempts: generator::MAX_ATTEMPTS,
        }
    }
}

/// Result of a like
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeOutcome {
    /// Energy was 0; nothing changed
    OutOfEnergy,
    /// Energy spent, next candidate shown
    NoMatch,
    /// Energy spent, candidate became the active match
    Matched,
}

impl LikeOutcome {
    pub fn accepted(self) -> bool {
        self != LikeOutcome::OutOfEnergy
    }

    pub fn matched(self) -> bool {
        self == LikeOutcome::Matched
    }
}

pub struct MatchingEngine {
    config: MatchConfig,
}

impl MatchingEngine {
    pub fn new(config: Option<MatchConfig>) -> Self {
        Self {
            config: config.unwrap_or_default(),
        }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Spend one energy on the displayed candidate and draw the match outcome
    pub fn like<R: RandomSource>(
        &self,
        state: &mut State,
        rng: &mut R,
    ) -> Result<LikeOutcome, DomainError> {
        if state.energy == 0 {
            return Ok(LikeOutcome::OutOfEnergy);
        }
        let candidate = state
            .current_profile
            .clone()
            .ok_or(DomainError::NoCandidate)?;

        state.set_energy(state.energy as i64 - 1);

        if !rng.chance(self.config.match_probability) {
            self.advance(state, rng);
            return Ok(LikeOutcome::NoMatch);
        }

        tracing::info!("Matched with {} ({})", candidate.name, candidate.id);

        let chat_id = candidate.chat_id();
        if state.transcript(&chat_id).is_empty() {
            chat::send(state, &chat_id, Sender::Them, MATCH_GREETING);
        }
        state.current_match = Some(candidate);

        Ok(LikeOutcome::Matched)
    }

    /// Show the next candidate without spending energy
    pub fn skip<R: RandomSource>(&self, state: &mut State, rng: &mut R) {
        self.advance(state, rng);
    }

    /// Block a profile: drop its chat, clear it as match, move on
    pub fn block<R: RandomSource>(&self, state: &mut State, profile_id: &str, rng: &mut R) {
        state.blocked.insert(profile_id.to_string());
        state.chats.remove(&chat_id_for(profile_id));

        if state
            .current_match
            .as_ref()
            .is_some_and(|m| m.id == profile_id)
        {
            state.current_match = None;
        }

        tracing::info!("Blocked profile {}", profile_id);

        self.advance(state, rng);
    }

    /// Replace the displayed candidate
    pub fn advance<R: RandomSource>(&self, state: &mut State, rng: &mut R) {
        generator::advance(state, rng, self.config.generation_attempts);
    }
}
