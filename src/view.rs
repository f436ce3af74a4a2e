//! The render pipeline: pure derivation of the full visual state from a
//! payload. No DOM types here; components apply the result.

use crate::model::{EntryState, Grid, HistoryItem, PowerState};
use crate::util::{Locale, format_duration, format_label};

/// The three-valued page state driving class names, status text and colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StateClass {
    Pending,
    On,
    Off,
}

impl StateClass {
    pub fn from_grid(grid: Grid) -> Self {
        match grid {
            Grid::Pending => StateClass::Pending,
            Grid::On => StateClass::On,
            Grid::Off => StateClass::Off,
        }
    }

    pub fn css(self) -> &'static str {
        match self {
            StateClass::Pending => "pending",
            StateClass::On => "on",
            StateClass::Off => "off",
        }
    }

    pub fn body_css(self) -> &'static str {
        match self {
            StateClass::Pending => "power-pending",
            StateClass::On => "power-on",
            StateClass::Off => "power-off",
        }
    }

    pub fn status_text(self) -> &'static str {
        match self {
            StateClass::Pending => "Loading...",
            StateClass::On => "Power On",
            StateClass::Off => "Power Outage",
        }
    }
}

/// Fixed two-palette color scheme for the bulb and the favicon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BulbPalette {
    pub body: &'static str,
    pub filament: &'static str,
    pub base_light: &'static str,
    pub base_dark: &'static str,
    /// Glow marker class is toggled only while lit.
    pub glow: bool,
}

impl BulbPalette {
    pub fn for_grid(grid: Grid) -> Self {
        Self::lit(grid == Grid::On)
    }

    pub fn lit(on: bool) -> Self {
        if on {
            Self {
                body: "#FFE46A",
                filament: "#FAAF63",
                base_light: "#ABBDDB",
                base_dark: "#6B83A5",
                glow: true,
            }
        } else {
            Self {
                body: "#1e1e2e",
                filament: "#1a1a28",
                base_light: "#1a1a28",
                base_dark: "#111118",
                glow: false,
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct OutageLine {
    pub text: String,
    /// Upstream classification ("emergency", ...) surfaced as a marker class.
    pub kind: Option<String>,
}

/// Banner under the badge. Hidden while pending even if an outage is present,
/// and hidden whenever there is no outage.
pub fn outage_line(state: &PowerState, locale: Locale) -> Option<OutageLine> {
    if state.grid == Grid::Pending {
        return None;
    }
    let outage = state.outage.as_ref()?;
    let text = match outage.to {
        Some(to) => format!("Expected to end at {}", format_label(to, locale)),
        None => "Ongoing".to_owned(),
    };
    Some(OutageLine {
        text,
        kind: outage.kind.clone(),
    })
}

#[derive(Clone, Debug, PartialEq)]
pub struct HistoryRow {
    /// "on" or "off", colors the dot and the inline "now" label.
    pub state_css: &'static str,
    pub ongoing: bool,
    /// Active outage rows are flagged distinctly.
    pub ongoing_off: bool,
    pub from_label: String,
    /// Absent for the ongoing row, which renders the "now" label instead.
    pub to_label: Option<String>,
    /// Only closed rows show a duration.
    pub duration: Option<String>,
}

/// Most recent first; each payload rebuilds the whole list.
pub fn history_rows(history: &[HistoryItem], locale: Locale) -> Vec<HistoryRow> {
    history
        .iter()
        .rev()
        .map(|item| {
            let is_off = item.state == EntryState::Off;
            let ongoing = item.to.is_none();
            HistoryRow {
                state_css: if is_off { "off" } else { "on" },
                ongoing,
                ongoing_off: is_off && ongoing,
                from_label: format_label(item.from, locale),
                to_label: item.to.map(|to| format_label(to, locale)),
                duration: item.to.map(|to| format_duration(item.from, to)),
            }
        })
        .collect()
}
