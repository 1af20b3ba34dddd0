pub mod engine;
pub mod h2h;
pub mod record;

pub use engine::generate_betting_analysis;
