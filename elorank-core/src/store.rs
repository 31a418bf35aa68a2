/// File persistence for `RankingState`.
///
/// The whole document is rewritten on every save: serialize to `<path>.tmp`,
/// then rename over the real file, so a reader never sees a half-written state.
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::error::{RankError, Result};
use crate::state::RankingState;

pub struct RatingStore {
    path: PathBuf,
}

impl RatingStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        RatingStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn io_error(&self, source: io::Error) -> RankError {
        RankError::Persistence {
            path: self.path.clone(),
            source,
        }
    }

    fn corrupt(&self, reason: impl std::fmt::Display) -> RankError {
        RankError::CorruptState {
            path: self.path.clone(),
            reason: reason.to_string(),
        }
    }

    /// Read the persisted state. `Ok(None)` if no state file exists yet.
    pub fn restore(&self) -> Result<Option<RankingState>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No state file at {}", self.path.display());
                return Ok(None);
            }
            Err(e) => return Err(self.io_error(e)),
        };

        let state: RankingState = serde_json::from_str(&content).map_err(|e| self.corrupt(e))?;
        state.validate().map_err(|reason| self.corrupt(reason))?;

        info!(
            "Loaded {} ratings and {} comparisons from {}",
            state.elo_ratings().len(),
            state.comparison_count(),
            self.path.display()
        );
        Ok(Some(state))
    }

    /// Load persisted state, or start fresh when none exists.
    ///
    /// Items in `item_ids` that the persisted state has never seen are added at
    /// `base_rating`. A corrupt file is an error, never silently replaced.
    pub fn load<S: AsRef<str>>(&self, item_ids: &[S], base_rating: i64) -> Result<RankingState> {
        match self.restore()? {
            Some(mut state) => {
                let added = state.ensure_items(item_ids, base_rating);
                if added > 0 {
                    info!("Discovered {added} new items since last save");
                }
                Ok(state)
            }
            None => {
                info!("Starting fresh state with {} items", item_ids.len());
                Ok(RankingState::initialize(item_ids, base_rating))
            }
        }
    }

    /// Write the full state, replacing whatever was there before.
    pub fn save(&self, state: &RankingState) -> Result<()> {
        let json = to_pretty_json(state).map_err(|e| self.io_error(io::Error::other(e)))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let tmp = self.tmp_path();
        fs::write(&tmp, json).map_err(|e| self.io_error(e))?;
        fs::rename(&tmp, &self.path).map_err(|e| self.io_error(e))?;

        debug!(
            "Saved {} comparisons to {}",
            state.comparison_count(),
            self.path.display()
        );
        Ok(())
    }
}

/// Pretty JSON with four-space indentation.
fn to_pretty_json(state: &RankingState) -> serde_json::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    serde::Serialize::serialize(state, &mut serializer)?;
    buf.push(b'\n');
    Ok(buf)
}
