use crate::models::PickItem;

/// Built-in pick catalogue used when no picks file is configured.
pub fn sample_picks() -> Vec<PickItem> {
    vec![
        pick(
            1,
            "NBA",
            "Lakers vs Warriors",
            "Lakers to win by +5.5",
            "72%",
            "+145",
            &["Moneyline", "Spread", "Over/Under"],
        ),
        pick(
            2,
            "NFL",
            "Chiefs vs Buccaneers",
            "Chiefs -3.5 ATS",
            "68%",
            "+120",
            &["ATS", "Total Points Over 48.5"],
        ),
        pick(
            3,
            "MLB",
            "Yankees vs Red Sox",
            "Under 9.5 Runs",
            "63%",
            "+110",
            &["Under", "Yankees ML"],
        ),
        pick(
            4,
            "NHL",
            "Maple Leafs vs Bruins",
            "Bruins to win in regulation",
            "65%",
            "+130",
            &["Moneyline", "Total Goals Under 6.5"],
        ),
    ]
}

/// Look a pick up by identifier.
pub fn find(picks: &[PickItem], id: u32) -> Option<&PickItem> {
    picks.iter().find(|p| p.id == id)
}

fn pick(
    id: u32,
    sport: &str,
    teams: &str,
    prediction: &str,
    probability: &str,
    odds: &str,
    parlay_options: &[&str],
) -> PickItem {
    PickItem {
        id,
        sport: sport.to_string(),
        teams: teams.to_string(),
        prediction: prediction.to_string(),
        probability: probability.to_string(),
        odds: odds.to_string(),
        parlay_options: parlay_options.iter().map(|s| s.to_string()).collect(),
    }
}
