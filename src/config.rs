use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;

use crate::state::ActiveTab;

/// Sports pick analysis and parlay builder
#[derive(Parser, Debug, Clone)]
#[command(name = "picks-parlay", version, about)]
pub struct Config {
    /// JSON file with the pick catalogue (defaults to the built-in sample picks)
    #[arg(long, env = "PICKS_FILE", global = true)]
    pub picks_file: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(
        long,
        env = "PRETTY_JSON",
        default_value = "true",
        action = clap::ArgAction::Set,
        global = true
    )]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Generate moneyline, spread and total picks for one or more games
    Analyze {
        /// JSON file holding a game object or an array of games
        game_file: PathBuf,
    },
    /// List the pick catalogue
    Picks,
    /// Toggle picks onto a parlay slip in order and show the combined odds
    Parlay {
        /// Pick ids; repeating an id removes it again
        #[arg(required = true)]
        ids: Vec<u32>,
    },
    /// Replay a sequence of UI steps and print the resulting view state
    Session {
        /// Steps in order: `tab:<home|picks|parlay|about>`, `menu`,
        /// `menu:open`, `menu:closed`, `pick:<id>`
        #[arg(required = true)]
        steps: Vec<Step>,
    },
}

/// One user action in a replayed session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Tab(ActiveTab),
    /// `None` flips the menu, `Some` sets it
    Menu(Option<bool>),
    Pick(u32),
}

impl FromStr for Step {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, arg) = match s.split_once(':') {
            Some((kind, arg)) => (kind, Some(arg)),
            None => (s, None),
        };
        match (kind, arg) {
            ("tab", Some(tab)) => tab.parse().map(Step::Tab),
            ("menu", None) => Ok(Step::Menu(None)),
            ("menu", Some("open")) => Ok(Step::Menu(Some(true))),
            ("menu", Some("closed")) => Ok(Step::Menu(Some(false))),
            ("pick", Some(id)) => id
                .parse()
                .map(Step::Pick)
                .map_err(|_| format!("invalid pick id '{}'", id)),
            _ => Err(format!("unknown step '{}'", s)),
        }
    }
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        if let Some(path) = &self.picks_file {
            if !path.is_file() {
                anyhow::bail!("picks file {} does not exist", path.display());
            }
        }
        if let Command::Analyze { game_file } = &self.command {
            if !game_file.is_file() {
                anyhow::bail!("game file {} does not exist", game_file.display());
            }
        }
        Ok(())
    }
}
