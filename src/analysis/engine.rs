//! Rule-based pick generator.
//!
//! Moneyline, spread and total picks are derived from team records, recent
//! form and keyword cues in the head-to-head summary. Rules are applied in a
//! fixed order and later rules may override earlier ones:
//!
//! 1. Record + form comparison sets the moneyline pick (50/60/65).
//! 2. A "`<team>` won" cue in the H2H text forces that team, ±5 confidence.
//! 3. Spread follows the moneyline pick at 10 points less, floor 50.
//! 4. Total defaults to Over at 50, or 55 on an over/under cue.
//!
//! Confidence is never clamped.

use tracing::debug;

use crate::models::{AnalysisResult, GameInput, TotalDirection};

use super::h2h::{team_won, total_cue};
use super::record::{count_recent_wins, parse_record};

const BASE_CONFIDENCE: i32 = 50;
/// Better record and at least as good recent form.
const RECORD_AND_FORM_CONFIDENCE: i32 = 65;
/// Better record only.
const RECORD_ONLY_CONFIDENCE: i32 = 60;
const H2H_ADJUSTMENT: i32 = 5;
const SPREAD_DISCOUNT: i32 = 10;
const TOTAL_CUE_CONFIDENCE: i32 = 55;

pub fn generate_betting_analysis(game: &GameInput) -> AnalysisResult {
    let home_record = parse_record(&game.home_record);
    let away_record = parse_record(&game.away_record);
    let home_recent_wins = count_recent_wins(&game.home_form);
    let away_recent_wins = count_recent_wins(&game.away_form);
    debug!(
        "records {}-{} vs {}-{}, recent wins {} vs {}",
        home_record.wins,
        home_record.losses,
        away_record.wins,
        away_record.losses,
        home_recent_wins,
        away_recent_wins
    );

    let (mut winner, mut confidence) = if home_record.wins > away_record.wins
        && home_recent_wins >= away_recent_wins
    {
        (&game.home_team, RECORD_AND_FORM_CONFIDENCE)
    } else if away_record.wins > home_record.wins && away_recent_wins >= home_recent_wins {
        (&game.away_team, RECORD_AND_FORM_CONFIDENCE)
    } else if home_record.wins > away_record.wins {
        (&game.home_team, RECORD_ONLY_CONFIDENCE)
    } else if away_record.wins > home_record.wins {
        (&game.away_team, RECORD_ONLY_CONFIDENCE)
    } else {
        (&game.home_team, BASE_CONFIDENCE)
    };
    debug!(
        "{} vs {}: record/form pick {} at {}%",
        game.home_team, game.away_team, winner, confidence
    );

    // Home cue wins when both teams are named.
    let h2h_pick = if team_won(&game.h2h_summary, &game.home_team) {
        Some(&game.home_team)
    } else if team_won(&game.h2h_summary, &game.away_team) {
        Some(&game.away_team)
    } else {
        None
    };
    if let Some(h2h_team) = h2h_pick {
        if winner == h2h_team {
            confidence += H2H_ADJUSTMENT;
        } else {
            confidence -= H2H_ADJUSTMENT;
        }
        winner = h2h_team;
        debug!("H2H cue favours {}, confidence now {}%", winner, confidence);
    }

    let spread_confidence = (confidence - SPREAD_DISCOUNT).max(BASE_CONFIDENCE);

    let (total_direction, total_confidence) = match total_cue(&game.h2h_summary) {
        Some(direction) => (direction, TOTAL_CUE_CONFIDENCE),
        None => (TotalDirection::Over, BASE_CONFIDENCE),
    };

    let brief_rationale = format!(
        "Prediction based on analysis of team records ({} vs {}), recent form \
         ({} wins vs {} wins in last 5), and H2H data. {} is favored for the moneyline.",
        game.home_record, game.away_record, home_recent_wins, away_recent_wins, winner
    );

    AnalysisResult {
        predicted_moneyline_winner: winner.clone(),
        moneyline_confidence_percent: confidence,
        predicted_spread_winner_team: winner.clone(),
        spread_confidence_percent: spread_confidence,
        predicted_total_direction: total_direction,
        total_confidence_percent: total_confidence,
        brief_rationale,
    }
}
