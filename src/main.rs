use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::{info, warn};

mod analysis;
mod config;
mod input;
mod models;
mod parlay;
mod picks;
mod state;

use analysis::generate_betting_analysis;
use config::{Command, Config, Step};
use models::{AnalysisResult, PickItem};
use state::{ActiveTab, AppState, Message};

fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only JSON
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::parse();
    config.validate()?;

    let catalogue = match &config.picks_file {
        Some(path) => input::load_picks(path)
            .with_context(|| format!("Failed to load picks from {}", path.display()))?,
        None => picks::sample_picks(),
    };

    match &config.command {
        Command::Analyze { game_file } => {
            let games = input::load_games(game_file)
                .with_context(|| format!("Failed to load games from {}", game_file.display()))?;
            info!("Analysing {} game(s)", games.len());
            let results: Vec<AnalysisResult> = games
                .iter()
                .map(|game| {
                    let result = generate_betting_analysis(game);
                    info!(
                        "{} {} vs {} ({}): {} ML {}%, total {} {}%",
                        game.sport_name,
                        game.home_team,
                        game.away_team,
                        game.commence_time_utc.format("%Y-%m-%d %H:%M UTC"),
                        result.predicted_moneyline_winner,
                        result.moneyline_confidence_percent,
                        result.predicted_total_direction,
                        result.total_confidence_percent
                    );
                    result
                })
                .collect();
            print_json(&results, config.pretty)?;
        }
        Command::Picks => {
            info!("{} pick(s) available", catalogue.len());
            print_json(&catalogue, config.pretty)?;
        }
        Command::Parlay { ids } => {
            let mut state = AppState::default().update(Message::SelectTab(ActiveTab::Picks));
            for id in ids {
                state = state.update(Message::ToggleParlaySelection(lookup_pick(&catalogue, *id)?));
            }
            state = state.update(Message::SelectTab(ActiveTab::Parlay));

            let stats = state.parlay_stats();
            if !stats.is_available() {
                warn!(
                    "Parlay needs at least 2 picks, slip has {}",
                    state.selection_count()
                );
            }
            info!(
                "Parlay of {:?}: {} ({})",
                state.selected_ids(),
                stats.total_odds,
                stats.total_probability
            );
            print_json(
                &ParlaySlip {
                    selections: &state.parlay_selections,
                    stats,
                },
                config.pretty,
            )?;
        }
        Command::Session { steps } => {
            let mut state = AppState::default();
            for step in steps {
                let message = match *step {
                    Step::Tab(tab) => Message::SelectTab(tab),
                    Step::Menu(None) => Message::ToggleMenu,
                    Step::Menu(Some(open)) => Message::SetMenuOpen(open),
                    Step::Pick(id) => Message::ToggleParlaySelection(lookup_pick(&catalogue, id)?),
                };
                state = state.update(message);
            }
            info!(
                "Session ended on {:?} tab with {} pick(s) selected",
                state.active_tab,
                state.selection_count()
            );
            print_json(
                &SessionView {
                    active_tab: state.active_tab,
                    is_menu_open: state.is_menu_open,
                    selected_ids: state.selected_ids(),
                    stats: state.parlay_stats(),
                },
                config.pretty,
            )?;
        }
    }

    Ok(())
}

fn lookup_pick(catalogue: &[PickItem], id: u32) -> Result<PickItem> {
    picks::find(catalogue, id)
        .cloned()
        .with_context(|| format!("No pick with id {}", id))
}

#[derive(Serialize)]
struct ParlaySlip<'a> {
    selections: &'a [PickItem],
    stats: models::ParlayStats,
}

#[derive(Serialize)]
struct SessionView {
    active_tab: ActiveTab,
    is_menu_open: bool,
    selected_ids: Vec<u32>,
    stats: models::ParlayStats,
}

fn print_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", out);
    Ok(())
}
