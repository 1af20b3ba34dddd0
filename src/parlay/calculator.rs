use tracing::debug;

use crate::models::{ParlayStats, PickItem};

use super::odds::{
    american_to_decimal, format_combined_odds, implied_probability, parse_american_odds, to_fixed_2,
};

/// Combined odds and probability for a parlay slip.
///
/// Fewer than two selections is not a parlay and yields `ParlayStats::unavailable()`.
/// Combined decimal odds are the product of each leg's decimal odds; the
/// reported probability is the mean of the legs' implied probabilities.
/// Unparseable odds propagate as `NaN` rather than failing.
pub fn calculate_parlay_odds(selections: &[PickItem]) -> ParlayStats {
    if selections.len() < 2 {
        return ParlayStats::unavailable();
    }

    let mut decimal_product = 1.0;
    let mut probability_sum = 0.0;
    for pick in selections {
        let american = parse_american_odds(&pick.odds);
        decimal_product *= american_to_decimal(american);
        probability_sum += implied_probability(american);
    }

    let average_probability = probability_sum * 100.0 / selections.len() as f64;
    let stats = ParlayStats {
        total_odds: format_combined_odds(decimal_product),
        total_probability: format!("{}%", to_fixed_2(average_probability)),
    };
    debug!(
        "{}-leg parlay: decimal {:.4} -> {} ({})",
        selections.len(),
        decimal_product,
        stats.total_odds,
        stats.total_probability
    );
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NO_VALUE;

    fn pick(id: u32, odds: &str) -> PickItem {
        PickItem {
            id,
            sport: "NBA".into(),
            teams: "A vs B".into(),
            prediction: "A to win".into(),
            probability: "60%".into(),
            odds: odds.into(),
            parlay_options: vec!["Moneyline".into()],
        }
    }

    #[test]
    fn fewer_than_two_legs_is_unavailable() {
        assert_eq!(calculate_parlay_odds(&[]), ParlayStats::unavailable());
        let stats = calculate_parlay_odds(&[pick(1, "-110")]);
        assert_eq!(stats.total_odds, NO_VALUE);
        assert_eq!(stats.total_probability, NO_VALUE);
    }

    #[test]
    fn two_even_money_legs() {
        let stats = calculate_parlay_odds(&[pick(1, "+100"), pick(2, "+100")]);
        assert_eq!(stats.total_odds, "+300");
        assert_eq!(stats.total_probability, "50.00%");
    }

    #[test]
    fn two_underdog_legs() {
        let stats = calculate_parlay_odds(&[pick(1, "+145"), pick(2, "+120")]);
        assert_eq!(stats.total_odds, "+439");
        assert_eq!(stats.total_probability, "43.14%");
    }

    #[test]
    fn two_standard_juice_legs() {
        let stats = calculate_parlay_odds(&[pick(1, "-110"), pick(2, "-110")]);
        assert_eq!(stats.total_odds, "+264");
        assert_eq!(stats.total_probability, "52.38%");
    }

    #[test]
    fn heavy_favorites_give_negative_odds() {
        let stats = calculate_parlay_odds(&[pick(1, "-500"), pick(2, "-500")]);
        assert_eq!(stats.total_odds, "-227");
        assert_eq!(stats.total_probability, "83.33%");
    }

    #[test]
    fn exact_half_hundredth_rounds_up() {
        let stats = calculate_parlay_odds(&[pick(1, "+100"), pick(2, "+1500")]);
        assert_eq!(stats.total_probability, "28.13%");
        assert_eq!(stats.total_odds, "+3100");

        let stats = calculate_parlay_odds(&[pick(1, "+300"), pick(2, "+1500")]);
        assert_eq!(stats.total_probability, "15.63%");
    }

    #[test]
    fn unparseable_leg_propagates_nan() {
        let stats = calculate_parlay_odds(&[pick(1, "abc"), pick(2, "+100")]);
        assert_eq!(stats.total_odds, NO_VALUE);
        assert_eq!(stats.total_probability, "NaN%");
    }

    #[test]
    fn recomputation_is_idempotent() {
        let legs = [pick(1, "+145"), pick(2, "-110"), pick(3, "+130")];
        assert_eq!(calculate_parlay_odds(&legs), calculate_parlay_odds(&legs));
    }
}
