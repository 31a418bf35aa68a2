/// Text shown to the operator for each pair.
use std::path::Path;

use elorank_core::{Pair, RankingState};

use crate::parse::INPUT_HELP;

/// Build the prompt for one pair. Items are shown as full paths so they can
/// be opened in an image viewer.
pub fn render_pair(dir: &Path, shown: &Pair, state: &RankingState, comparison_number: usize) -> String {
    let (left, right) = shown;
    let rating = |item: &str| {
        state
            .rating(item)
            .map(|r| r.to_string())
            .unwrap_or_else(|| "-".to_string())
    };
    format!(
        "\nComparison #{comparison_number}\n\
         Left:  {} ({})\n\
         Right: {} ({})\n\
         [{INPUT_HELP}] > ",
        dir.join(left).display(),
        rating(left.as_str()),
        dir.join(right).display(),
        rating(right.as_str()),
    )
}
