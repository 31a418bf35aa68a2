/// The aggregate ranking state: ratings, comparison history, and last-used times.
///
/// Every operation here is a pure state transition. Reading and writing the
/// state file lives in `store`.
use std::collections::{BTreeMap, HashMap};

use log::debug;
use serde::{Deserialize, Serialize, Serializer};

use crate::constants::NEVER_USED;
use crate::types::{ComparisonRecord, RankedItem};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RankingState {
    /// Written highest rating first so the file reads as a leaderboard.
    #[serde(serialize_with = "serialize_by_rating")]
    elo_ratings: BTreeMap<String, i64>,
    /// Append-only, chronological.
    history: Vec<ComparisonRecord>,
    last_used: BTreeMap<String, f64>,
}

fn serialize_by_rating<S: Serializer>(
    ratings: &BTreeMap<String, i64>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut entries: Vec<(&String, &i64)> = ratings.iter().collect();
    entries.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
    serializer.collect_map(entries)
}

impl RankingState {
    /// Fresh state: every item at `base_rating`, never used, empty history.
    pub fn initialize<S: AsRef<str>>(item_ids: &[S], base_rating: i64) -> Self {
        let mut state = RankingState::default();
        state.ensure_items(item_ids, base_rating);
        state
    }

    /// Add rating and last-used entries for items not seen before.
    /// Existing entries are left alone; nothing is ever removed.
    /// Returns the number of items added.
    pub fn ensure_items<S: AsRef<str>>(&mut self, item_ids: &[S], base_rating: i64) -> usize {
        let mut added = 0;
        for id in item_ids {
            let id = id.as_ref();
            if !self.elo_ratings.contains_key(id) {
                self.elo_ratings.insert(id.to_string(), base_rating);
                added += 1;
            }
            self.last_used.entry(id.to_string()).or_insert(NEVER_USED);
        }
        if added > 0 {
            debug!("Added {added} new items at base rating {base_rating}");
        }
        added
    }

    pub fn rating(&self, item: &str) -> Option<i64> {
        self.elo_ratings.get(item).copied()
    }

    /// Rating of `item`, or `base_rating` if it has never been rated.
    pub fn rating_or(&self, item: &str, base_rating: i64) -> i64 {
        self.rating(item).unwrap_or(base_rating)
    }

    pub fn set_rating(&mut self, item: &str, rating: i64) {
        self.elo_ratings.insert(item.to_string(), rating);
    }

    /// Last time `item` was shown, or `NEVER_USED`.
    pub fn last_used(&self, item: &str) -> f64 {
        self.last_used.get(item).copied().unwrap_or(NEVER_USED)
    }

    /// Append one presented matchup to the history.
    pub fn record_comparison(&mut self, shown_first: &str, shown_second: &str) {
        self.history.push(ComparisonRecord::new(shown_first, shown_second));
    }

    /// Mark `item` as used at `now`. A timestamp older than the stored one is
    /// ignored so `last_used` never moves backwards.
    pub fn touch(&mut self, item: &str, now: f64) {
        let entry = self.last_used.entry(item.to_string()).or_insert(NEVER_USED);
        if now > *entry {
            *entry = now;
        }
    }

    pub fn elo_ratings(&self) -> &BTreeMap<String, i64> {
        &self.elo_ratings
    }

    pub fn history(&self) -> &[ComparisonRecord] {
        &self.history
    }

    pub fn last_used_times(&self) -> &BTreeMap<String, f64> {
        &self.last_used
    }

    pub fn comparison_count(&self) -> usize {
        self.history.len()
    }

    /// All rated items, highest rating first (ties by id).
    pub fn leaderboard(&self) -> Vec<RankedItem> {
        let mut appearances: HashMap<&str, usize> = HashMap::new();
        for record in &self.history {
            *appearances.entry(record.shown_first()).or_insert(0) += 1;
            *appearances.entry(record.shown_second()).or_insert(0) += 1;
        }

        let mut ranked: Vec<RankedItem> = self
            .elo_ratings
            .iter()
            .map(|(item, &rating)| RankedItem {
                item: item.clone(),
                rating,
                comparisons: appearances.get(item.as_str()).copied().unwrap_or(0),
            })
            .collect();
        ranked.sort_by(|a, b| b.rating.cmp(&a.rating).then_with(|| a.item.cmp(&b.item)));
        ranked
    }

    /// Schema checks serde cannot express. Returns a human-readable reason on failure.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(id) = self.elo_ratings.keys().find(|id| id.is_empty()) {
            return Err(format!("empty item id in elo_ratings: {id:?}"));
        }
        for (id, &ts) in &self.last_used {
            if id.is_empty() {
                return Err("empty item id in last_used".to_string());
            }
            if !ts.is_finite() || ts < 0.0 {
                return Err(format!("last_used[{id:?}] is not a valid timestamp: {ts}"));
            }
        }
        for (i, record) in self.history.iter().enumerate() {
            if record.shown_first().is_empty() || record.shown_second().is_empty() {
                return Err(format!("history entry {i} has an empty item id"));
            }
        }
        Ok(())
    }
}
