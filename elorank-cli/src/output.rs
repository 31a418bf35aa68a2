/// Output formatting: terminal table and JSON.
use elorank_core::RankedItem;
use serde::Serialize;

#[derive(Serialize)]
struct JsonRankedItem<'a> {
    rank: usize,
    name: &'a str,
    rating: i64,
    comparisons: usize,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    items: Vec<JsonRankedItem<'a>>,
    total_comparisons: usize,
}

/// Format the leaderboard as a terminal table.
pub fn render_table(rankings: &[RankedItem], total_comparisons: usize) -> String {
    // Find the widest item name for padding
    let name_width = rankings
        .iter()
        .map(|r| r.item.chars().count())
        .max()
        .unwrap_or(4)
        .max(4); // at least "Item"

    let mut out = String::new();
    out.push_str(&format!("  # | {:<name_width$} | Rating | Comparisons\n", "Item"));
    out.push_str(&format!("----|-{}-|--------|------------\n", "-".repeat(name_width)));

    for (i, r) in rankings.iter().enumerate() {
        out.push_str(&format!(
            "{:>3} | {:<name_width$} | {:>6} | {:>11}\n",
            i + 1,
            r.item,
            r.rating,
            r.comparisons,
        ));
    }

    out.push_str(&format!(
        "\n{} items ranked from {} comparisons\n",
        rankings.len(),
        total_comparisons
    ));
    out
}

/// Format the leaderboard as pretty JSON.
pub fn render_json(rankings: &[RankedItem], total_comparisons: usize) -> serde_json::Result<String> {
    let items = rankings
        .iter()
        .enumerate()
        .map(|(i, r)| JsonRankedItem {
            rank: i + 1,
            name: &r.item,
            rating: r.rating,
            comparisons: r.comparisons,
        })
        .collect();

    serde_json::to_string_pretty(&JsonOutput {
        items,
        total_comparisons,
    })
}
