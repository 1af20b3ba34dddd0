use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder shown when parlay figures cannot be computed
pub const NO_VALUE: &str = "-";

/// Per-game input to the analysis engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameInput {
    pub sport_name: String,
    pub home_team: String,
    /// "<wins>-<losses>", e.g. "15-2"
    #[serde(rename = "ht_record")]
    pub home_record: String,
    /// Most recent result first: "W" | "L" | "D"
    #[serde(rename = "ht_form")]
    pub home_form: Vec<String>,
    pub away_team: String,
    #[serde(rename = "at_record")]
    pub away_record: String,
    #[serde(rename = "at_form")]
    pub away_form: Vec<String>,
    pub commence_time_utc: DateTime<Utc>,
    pub ml_home_odds: String,
    pub ml_away_odds: String,
    pub spread_home_points: String,
    pub spread_home_price: String,
    pub spread_away_points: String,
    pub spread_away_price: String,
    pub total_over_points: String,
    pub total_over_price: String,
    pub total_under_points: String,
    pub total_under_price: String,
    /// Free-text head-to-head notes, scanned for keyword cues
    pub h2h_summary: String,
}

/// Output of `generate_betting_analysis`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub predicted_moneyline_winner: String,
    /// Not clamped: head-to-head adjustments may push it outside 0–100
    pub moneyline_confidence_percent: i32,
    pub predicted_spread_winner_team: String,
    pub spread_confidence_percent: i32,
    pub predicted_total_direction: TotalDirection,
    pub total_confidence_percent: i32,
    #[serde(rename = "brief_rationale_for_main_pick")]
    pub brief_rationale: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TotalDirection {
    Over,
    Under,
    /// Never produced by the current scoring rules
    Push,
}

impl TotalDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TotalDirection::Over => "Over",
            TotalDirection::Under => "Under",
            TotalDirection::Push => "Push",
        }
    }
}

impl fmt::Display for TotalDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Win/loss tally parsed from a record string
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Record {
    pub wins: i64,
    pub losses: i64,
}

/// A pick the user can add to a parlay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PickItem {
    pub id: u32,
    pub sport: String,
    /// e.g. "Lakers vs Warriors"
    pub teams: String,
    pub prediction: String,
    /// Display string, e.g. "72%"
    pub probability: String,
    /// American odds, always signed: "+145", "-110"
    pub odds: String,
    pub parlay_options: Vec<String>,
}

/// Combined figures for the current parlay slip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParlayStats {
    /// American odds string or `NO_VALUE`
    pub total_odds: String,
    /// "NN.NN%" or `NO_VALUE`
    pub total_probability: String,
}

impl ParlayStats {
    pub fn unavailable() -> Self {
        ParlayStats {
            total_odds: NO_VALUE.to_string(),
            total_probability: NO_VALUE.to_string(),
        }
    }

    pub fn is_available(&self) -> bool {
        self.total_odds != NO_VALUE || self.total_probability != NO_VALUE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_input_uses_original_wire_names() {
        let raw = serde_json::json!({
            "sport_name": "Soccer",
            "home_team": "Real Madrid",
            "ht_record": "15-2",
            "ht_form": ["W", "W", "W", "W", "D"],
            "away_team": "Getafe",
            "at_record": "5-12",
            "at_form": ["L", "L", "D", "L", "W"],
            "commence_time_utc": "2024-01-01T12:00:00Z",
            "ml_home_odds": "-300",
            "ml_away_odds": "+700",
            "spread_home_points": "-1.5",
            "spread_home_price": "-110",
            "spread_away_points": "+1.5",
            "spread_away_price": "-110",
            "total_over_points": "2.5",
            "total_over_price": "-120",
            "total_under_points": "2.5",
            "total_under_price": "+100",
            "h2h_summary": "Real Madrid won 4 of last 5 H2H."
        });
        let game: GameInput = serde_json::from_value(raw).unwrap();
        assert_eq!(game.home_record, "15-2");
        assert_eq!(game.away_form.len(), 5);
        assert_eq!(game.commence_time_utc.to_rfc3339(), "2024-01-01T12:00:00+00:00");
    }

    #[test]
    fn analysis_result_serializes_rationale_key() {
        let result = AnalysisResult {
            predicted_moneyline_winner: "A".into(),
            moneyline_confidence_percent: 50,
            predicted_spread_winner_team: "A".into(),
            spread_confidence_percent: 50,
            predicted_total_direction: TotalDirection::Under,
            total_confidence_percent: 55,
            brief_rationale: "A is favored for the moneyline.".into(),
        };
        let v = serde_json::to_value(&result).unwrap();
        assert_eq!(v["brief_rationale_for_main_pick"], "A is favored for the moneyline.");
        assert_eq!(v["predicted_total_direction"], "Under");
    }

    #[test]
    fn parlay_stats_camel_case() {
        let v = serde_json::to_value(ParlayStats::unavailable()).unwrap();
        assert_eq!(v["totalOdds"], "-");
        assert_eq!(v["totalProbability"], "-");
        assert!(!ParlayStats::unavailable().is_available());
    }
}
