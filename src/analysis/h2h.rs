//! Keyword cues read from the free-text head-to-head summary.
//!
//! Matching is a plain lower-cased substring scan. "over" inside
//! "Moreover" or "turnover" counts as an over cue.

use crate::models::TotalDirection;

/// True when the summary contains `"<team> won"`, ignoring case.
pub fn team_won(summary: &str, team: &str) -> bool {
    let needle = format!("{} won", team.to_lowercase());
    summary.to_lowercase().contains(&needle)
}

/// Direction suggested for the total market. `"over"` is checked before
/// `"under"`.
pub fn total_cue(summary: &str) -> Option<TotalDirection> {
    let summary = summary.to_lowercase();
    if summary.contains("over") {
        Some(TotalDirection::Over)
    } else if summary.contains("under") {
        Some(TotalDirection::Under)
    } else {
        None
    }
}
