/// Rating assigned to an item the first time it is referenced.
pub const DEFAULT_BASE_RATING: i64 = 1000;

/// Maximum rating adjustment from a single comparison.
pub const DEFAULT_K_FACTOR: f64 = 32.0;

/// Logistic scale of the expected-score curve.
/// A rating gap of this many points means the stronger item is expected to
/// win ten times as often as it loses.
pub const ELO_SCALE: f64 = 400.0;

/// `last_used` value for an item that has never been shown.
pub const NEVER_USED: f64 = 0.0;

/// File name of the persisted state, relative to the item directory.
pub const DEFAULT_STATE_FILE: &str = "elo_image_results.json";
