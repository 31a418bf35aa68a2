/// Ranking engine orchestrator.
///
/// Owns the single `RankingState` of a session together with the item list and
/// rating parameters. The caller presents pairs and feeds decisions back one at
/// a time; `&mut self` on `apply_decision` keeps mutations serialized.
use log::{debug, info};
use rand::Rng;

use crate::constants::{DEFAULT_BASE_RATING, DEFAULT_K_FACTOR};
use crate::elo;
use crate::error::{RankError, Result};
use crate::pairing::pick_pair;
use crate::state::RankingState;
use crate::types::{Decision, Pair};

/// Configuration for the ranking engine.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Rating given to items on first reference.
    pub base_rating: i64,
    /// Maximum rating change per comparison.
    pub k_factor: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            base_rating: DEFAULT_BASE_RATING,
            k_factor: DEFAULT_K_FACTOR,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.k_factor.is_finite() || self.k_factor <= 0.0 {
            return Err(RankError::InvalidConfig(format!(
                "k_factor must be a positive number, got {}",
                self.k_factor
            )));
        }
        Ok(())
    }
}

pub struct RankingEngine {
    item_ids: Vec<String>,
    state: RankingState,
    config: EngineConfig,
}

impl RankingEngine {
    /// Wrap an existing (loaded or fresh) state. Items missing from `state`
    /// are added at the configured base rating.
    pub fn new(item_ids: Vec<String>, mut state: RankingState, config: EngineConfig) -> Result<Self> {
        config.validate()?;
        state.ensure_items(&item_ids, config.base_rating);
        Ok(RankingEngine { item_ids, state, config })
    }

    /// Start from scratch: every item at the base rating.
    pub fn fresh(item_ids: Vec<String>, config: EngineConfig) -> Result<Self> {
        let state = initialize(&item_ids, config.base_rating);
        RankingEngine::new(item_ids, state, config)
    }

    pub fn item_ids(&self) -> &[String] {
        &self.item_ids
    }

    pub fn state(&self) -> &RankingState {
        &self.state
    }

    /// Choose the next pair to present.
    pub fn next_pair(&self, rng: &mut impl Rng) -> Result<Pair> {
        next_pair(&self.state, &self.item_ids, rng)
    }

    /// Apply one decision: rating update, history append, and last-used touch
    /// for both participants.
    ///
    /// `shown` is the pair as it was displayed; it is what goes into history.
    pub fn apply_decision(&mut self, shown: &Pair, decision: &Decision, now: f64) -> Result<()> {
        let (left, right) = shown;
        let matches_shown = (decision.winner == *left && decision.loser == *right)
            || (decision.winner == *right && decision.loser == *left);
        if !matches_shown {
            return Err(RankError::InvalidDecision(format!(
                "decision {} over {} does not match shown pair ({left}, {right})",
                decision.winner, decision.loser
            )));
        }
        apply_decision(&mut self.state, shown, decision, now, &self.config)
    }
}

/// Fresh state with every item at `base_rating` and never used.
pub fn initialize<S: AsRef<str>>(item_ids: &[S], base_rating: i64) -> RankingState {
    RankingState::initialize(item_ids, base_rating)
}

/// Next pair for `state` over `item_ids`: stalest item first, random partner second.
pub fn next_pair<S: AsRef<str>>(state: &RankingState, item_ids: &[S], rng: &mut impl Rng) -> Result<Pair> {
    pick_pair(state, item_ids, rng)
}

/// Apply a decision to `state` as one transaction.
///
/// Validation happens before any mutation, so an error leaves `state` unchanged.
pub fn apply_decision(
    state: &mut RankingState,
    shown: &Pair,
    decision: &Decision,
    now: f64,
    config: &EngineConfig,
) -> Result<()> {
    if decision.winner == decision.loser {
        return Err(RankError::InvalidDecision(format!(
            "{} cannot be compared against itself",
            decision.winner
        )));
    }

    let winner_rating = state.rating_or(&decision.winner, config.base_rating);
    let loser_rating = state.rating_or(&decision.loser, config.base_rating);
    let (new_winner, new_loser) = elo::update(winner_rating, loser_rating, config.k_factor);

    state.set_rating(&decision.winner, new_winner);
    state.set_rating(&decision.loser, new_loser);
    state.record_comparison(&shown.0, &shown.1);
    state.touch(&decision.winner, now);
    state.touch(&decision.loser, now);

    debug!(
        "{} ({winner_rating} -> {new_winner}) beat {} ({loser_rating} -> {new_loser})",
        decision.winner, decision.loser
    );
    if state.comparison_count() % 50 == 0 {
        info!("{} comparisons recorded", state.comparison_count());
    }
    Ok(())
}
