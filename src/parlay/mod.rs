pub mod calculator;
pub mod odds;

pub use calculator::calculate_parlay_odds;
