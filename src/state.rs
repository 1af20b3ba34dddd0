//! Session view state.
//!
//! `AppState` is an immutable value; every user action is a `Message` and
//! `AppState::update` returns the next state. The parlay slip only changes
//! through `toggle_selection`, so it never holds two picks with the same id.

use serde::Serialize;
use std::str::FromStr;
use tracing::debug;

use crate::models::{ParlayStats, PickItem};
use crate::parlay::calculate_parlay_odds;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveTab {
    #[default]
    Home,
    Picks,
    Parlay,
    About,
}

impl FromStr for ActiveTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "home" => Ok(ActiveTab::Home),
            "picks" => Ok(ActiveTab::Picks),
            "parlay" => Ok(ActiveTab::Parlay),
            "about" => Ok(ActiveTab::About),
            other => Err(format!("unknown tab '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    SelectTab(ActiveTab),
    SetMenuOpen(bool),
    ToggleMenu,
    /// Add the pick to the slip, or remove it if already present
    ToggleParlaySelection(PickItem),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub active_tab: ActiveTab,
    pub is_menu_open: bool,
    pub parlay_selections: Vec<PickItem>,
}

impl AppState {
    pub fn update(self, message: Message) -> AppState {
        match message {
            Message::SelectTab(tab) => {
                debug!("tab {:?} -> {:?}", self.active_tab, tab);
                AppState {
                    active_tab: tab,
                    is_menu_open: false,
                    ..self
                }
            }
            Message::SetMenuOpen(open) => AppState {
                is_menu_open: open,
                ..self
            },
            Message::ToggleMenu => AppState {
                is_menu_open: !self.is_menu_open,
                ..self
            },
            Message::ToggleParlaySelection(pick) => {
                let parlay_selections = toggle_selection(&self.parlay_selections, pick);
                debug!("parlay slip now has {} pick(s)", parlay_selections.len());
                AppState {
                    parlay_selections,
                    ..self
                }
            }
        }
    }

    /// Recomputed from the full slip on every call.
    pub fn parlay_stats(&self) -> ParlayStats {
        calculate_parlay_odds(&self.parlay_selections)
    }

    pub fn selected_ids(&self) -> Vec<u32> {
        self.parlay_selections.iter().map(|p| p.id).collect()
    }

    pub fn selection_count(&self) -> usize {
        self.parlay_selections.len()
    }
}

/// Remove the pick if its id is already selected, otherwise append it.
pub fn toggle_selection(selections: &[PickItem], pick: PickItem) -> Vec<PickItem> {
    if selections.iter().any(|p| p.id == pick.id) {
        selections.iter().filter(|p| p.id != pick.id).cloned().collect()
    } else {
        let mut next = selections.to_vec();
        next.push(pick);
        next
    }
}
