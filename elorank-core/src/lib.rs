/// elorank-core: ELO ranking from pairwise preferences.
///
/// Someone is shown two items, says which one they prefer, and the core turns
/// that into rating updates. The next pair always includes whichever item has
/// gone longest without being shown, so nothing starves.
///
/// Items are identified by caller-provided string IDs (file names, in the
/// image use case). Presentation is the caller's job; the core only picks
/// pairs, applies decisions, and persists state.
///
/// # Quick start
///
/// ```rust
/// use elorank_core::{Decision, EngineConfig, RankingEngine};
///
/// let items = vec!["cat.png".to_string(), "dog.png".to_string(), "owl.png".to_string()];
/// let mut engine = RankingEngine::fresh(items, EngineConfig::default()).unwrap();
///
/// let mut rng = rand::rng();
/// let shown = engine.next_pair(&mut rng).unwrap();
/// let decision = Decision::new(shown.0.clone(), shown.1.clone());
/// engine.apply_decision(&shown, &decision, 1.0).unwrap();
///
/// for r in engine.state().leaderboard() {
///     println!("{}: {}", r.item, r.rating);
/// }
/// ```

pub mod constants;
pub mod elo;
pub mod engine;
pub mod error;
pub mod pairing;
pub mod state;
pub mod store;
pub mod types;

// Re-export primary public API at crate root.
pub use engine::{apply_decision, initialize, next_pair, EngineConfig, RankingEngine};
pub use error::{RankError, Result};
pub use pairing::pick_pair;
pub use state::RankingState;
pub use store::RatingStore;
pub use types::{ComparisonRecord, Decision, Pair, RankedItem};
