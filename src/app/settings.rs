//! Settings menu model (data only).
//!
//! Keeping these definitions outside the input handler lets both the handler
//! and UI renderers consume the same source of truth without cross-importing.

use super::state::{ActiveView, AppState};

/// A single item in the settings menu.
pub enum SettingsItem {
    /// Opens a submenu.
    Submenu {
        label: &'static str,
        view: ActiveView,
    },
    /// Boolean toggle — reads/writes via accessors on `AppState`.
    Toggle {
        label: &'static str,
        get: fn(&AppState) -> bool,
        set: fn(&mut AppState, bool),
    },
    /// Cycles through a finite set of values.
    Cycle {
        label: &'static str,
        value: fn(&AppState) -> String,
        cycle: fn(&mut AppState),
    },
}

impl SettingsItem {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Submenu { label, .. }
            | Self::Toggle { label, .. }
            | Self::Cycle { label, .. } => label,
        }
    }
}

/// Flip delays offered by the settings menu.
const FLIP_DELAYS: &[u64] = &[0, 100, 200, 300, 500];

/// All items shown in the settings popup, in display order.
pub static SETTINGS_ITEMS: &[SettingsItem] = &[
    SettingsItem::Submenu {
        label: "Controls",
        view: ActiveView::ControlsSubmenu,
    },
    SettingsItem::Cycle {
        label: "Flip Delay",
        value: |s| format!("{}ms", s.config.flip_delay_ms),
        cycle: |s| {
            let idx = FLIP_DELAYS
                .iter()
                .position(|&d| d == s.config.flip_delay_ms)
                .unwrap_or(1);
            s.config.flip_delay_ms = FLIP_DELAYS[(idx + 1) % FLIP_DELAYS.len()];
            s.config.save_or_warn();
            s.status_message = Some(format!("Flip delay: {}ms", s.config.flip_delay_ms));
        },
    },
    SettingsItem::Cycle {
        label: "Default Topic",
        value: |s| s.config.default_category.label().to_string(),
        cycle: |s| {
            s.config.default_category = s.config.default_category.next();
            s.config.save_or_warn();
            s.status_message = Some(format!(
                "Default topic: {}",
                s.config.default_category.label()
            ));
        },
    },
    SettingsItem::Toggle {
        label: "Show Part of Speech",
        get: |s| s.config.show_part_of_speech,
        set: |s, v| {
            s.config.show_part_of_speech = v;
            s.config.save_or_warn();
        },
    },
];
