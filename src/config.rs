//! User configuration — keybindings, study settings and persistence.
//!
//! Stored as simple `key = value` lines at
//! `$XDG_CONFIG_HOME/econ-vocab/config.toml` (default
//! `~/.config/econ-vocab/config.toml`).  Unknown or malformed lines are
//! skipped and fall back to defaults.

use std::collections::HashMap;
use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::vocabulary::CategoryFilter;

/// Upper bound for the flashcard flip delay.
pub const MAX_FLIP_DELAY_MS: u64 = 2000;

// ───────────────────────────────────────── actions ───────────

/// All configurable user actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveUp,
    MoveDown,
    Select,
    Back,
    Flip,
    NextCard,
    PrevCard,
    CycleTopic,
    Restart,
    OpenSettings,
    Quit,
}

impl Action {
    /// Ordered list of all actions (used for the controls menu).
    pub const ALL: &[Action] = &[
        Action::MoveUp,
        Action::MoveDown,
        Action::Select,
        Action::Back,
        Action::Flip,
        Action::NextCard,
        Action::PrevCard,
        Action::CycleTopic,
        Action::Restart,
        Action::OpenSettings,
        Action::Quit,
    ];

    /// Human-readable label for the UI.
    pub fn label(self) -> &'static str {
        match self {
            Action::MoveUp => "Move Up",
            Action::MoveDown => "Move Down",
            Action::Select => "Select / Confirm",
            Action::Back => "Back to Menu",
            Action::Flip => "Flip Card",
            Action::NextCard => "Next Card / Question",
            Action::PrevCard => "Previous Card",
            Action::CycleTopic => "Change Topic",
            Action::Restart => "Retry Quiz",
            Action::OpenSettings => "Open Settings",
            Action::Quit => "Quit",
        }
    }

    /// Key used in the config file.
    fn config_key(self) -> &'static str {
        match self {
            Action::MoveUp => "move_up",
            Action::MoveDown => "move_down",
            Action::Select => "select",
            Action::Back => "back",
            Action::Flip => "flip",
            Action::NextCard => "next",
            Action::PrevCard => "prev",
            Action::CycleTopic => "cycle_topic",
            Action::Restart => "restart",
            Action::OpenSettings => "open_settings",
            Action::Quit => "quit",
        }
    }

    fn from_config_key(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|a| a.config_key() == s)
    }
}

// ───────────────────────────────────────── key bind ──────────

/// A single key binding — key code + modifier combination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBind {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

/// Only these modifiers take part in matching.
fn modifier_mask() -> KeyModifiers {
    KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SHIFT
}

impl KeyBind {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Does this binding match a key event?  Platform modifiers like SUPER
    /// are ignored.
    pub fn matches(&self, event: KeyEvent) -> bool {
        let mask = modifier_mask();
        self.code == event.code && (self.modifiers & mask) == (event.modifiers & mask)
    }

    /// Create a binding from a raw key event (used during rebinding).
    pub fn from_key_event(event: KeyEvent) -> Self {
        Self {
            code: event.code,
            modifiers: event.modifiers & modifier_mask(),
        }
    }

    /// User-friendly display string (e.g. `"→"`, `"Ctrl+c"`, `"Space"`).
    pub fn display(&self) -> String {
        self.render(true)
    }

    /// Config-file form (e.g. `"Right"`, `"Ctrl+c"`, `"Space"`).
    fn to_config_string(&self) -> String {
        self.render(false)
    }

    fn render(&self, pretty: bool) -> String {
        let mut s = String::new();
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            s.push_str("Ctrl+");
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            s.push_str("Alt+");
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            s.push_str("Shift+");
        }
        let name = match (self.code, pretty) {
            (KeyCode::Char(' '), _) => "Space".to_string(),
            (KeyCode::Char(c), _) => c.to_string(),
            (KeyCode::Up, true) => "↑".into(),
            (KeyCode::Down, true) => "↓".into(),
            (KeyCode::Left, true) => "←".into(),
            (KeyCode::Right, true) => "→".into(),
            (KeyCode::Up, false) => "Up".into(),
            (KeyCode::Down, false) => "Down".into(),
            (KeyCode::Left, false) => "Left".into(),
            (KeyCode::Right, false) => "Right".into(),
            (KeyCode::Enter, _) => "Enter".into(),
            (KeyCode::Esc, _) => "Esc".into(),
            (KeyCode::Tab, _) => "Tab".into(),
            (KeyCode::BackTab, _) => "BackTab".into(),
            (KeyCode::Backspace, true) => "Bksp".into(),
            (KeyCode::Backspace, false) => "Backspace".into(),
            (KeyCode::Delete, true) => "Del".into(),
            (KeyCode::Delete, false) => "Delete".into(),
            (KeyCode::Home, _) => "Home".into(),
            (KeyCode::End, _) => "End".into(),
            (KeyCode::PageUp, true) => "PgUp".into(),
            (KeyCode::PageUp, false) => "PageUp".into(),
            (KeyCode::PageDown, true) => "PgDn".into(),
            (KeyCode::PageDown, false) => "PageDown".into(),
            (KeyCode::F(n), _) => format!("F{n}"),
            (other, _) => format!("{other:?}"),
        };
        s.push_str(&name);
        s
    }

    /// Parse a key string like `"Ctrl+c"`, `"Right"`, `"q"`, `"Space"`.
    fn parse(s: &str) -> Option<Self> {
        let mut modifiers = KeyModifiers::NONE;
        let parts: Vec<&str> = s.split('+').collect();
        let (key_part, mods) = parts.split_last()?;

        for part in mods {
            match part.to_lowercase().as_str() {
                "ctrl" => modifiers |= KeyModifiers::CONTROL,
                "alt" => modifiers |= KeyModifiers::ALT,
                "shift" => modifiers |= KeyModifiers::SHIFT,
                _ => return None,
            }
        }

        let lower = key_part.to_lowercase();
        let code = match lower.as_str() {
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "enter" | "return" => KeyCode::Enter,
            "esc" | "escape" => KeyCode::Esc,
            "tab" => KeyCode::Tab,
            "backtab" => KeyCode::BackTab,
            "backspace" | "bksp" => KeyCode::Backspace,
            "delete" | "del" => KeyCode::Delete,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "pageup" | "pgup" => KeyCode::PageUp,
            "pagedown" | "pgdn" => KeyCode::PageDown,
            "space" => KeyCode::Char(' '),
            k if k.starts_with('f') && k.len() > 1 => KeyCode::F(k[1..].parse().ok()?),
            // Single characters keep their case so `R` and `r` stay distinct.
            _ if key_part.chars().count() == 1 => KeyCode::Char(key_part.chars().next()?),
            _ => return None,
        };

        Some(KeyBind { code, modifiers })
    }
}

// ───────────────────────────────────────── config ────────────

/// Application configuration — keybindings and study settings.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bindings: HashMap<Action, Vec<KeyBind>>,
    /// Delay between un-flipping a card and showing the next one.
    pub flip_delay_ms: u64,
    /// Topic selected when the app starts.
    pub default_category: CategoryFilter,
    /// Show `(noun)` / `(verb)` on the card front.
    pub show_part_of_speech: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bindings: Self::default_bindings(),
            flip_delay_ms: 200,
            default_category: CategoryFilter::All,
            show_part_of_speech: true,
        }
    }
}

impl AppConfig {
    /// Built-in bindings.
    pub fn default_bindings() -> HashMap<Action, Vec<KeyBind>> {
        use Action::*;
        use KeyCode::*;
        let n = KeyModifiers::NONE;
        let mut m = HashMap::new();

        m.insert(MoveUp, vec![KeyBind::new(Up, n), KeyBind::new(Char('k'), n)]);
        m.insert(MoveDown, vec![KeyBind::new(Down, n), KeyBind::new(Char('j'), n)]);
        m.insert(Select, vec![KeyBind::new(Enter, n)]);
        m.insert(Back, vec![KeyBind::new(Esc, n), KeyBind::new(Char('b'), n)]);
        m.insert(Flip, vec![KeyBind::new(Char(' '), n), KeyBind::new(Char('f'), n)]);
        m.insert(NextCard, vec![KeyBind::new(Right, n), KeyBind::new(Char('l'), n)]);
        m.insert(PrevCard, vec![KeyBind::new(Left, n), KeyBind::new(Char('h'), n)]);
        m.insert(CycleTopic, vec![KeyBind::new(Tab, n), KeyBind::new(Char('t'), n)]);
        m.insert(Restart, vec![KeyBind::new(Char('r'), n)]);
        m.insert(OpenSettings, vec![KeyBind::new(Char('?'), n)]);
        m.insert(Quit, vec![KeyBind::new(Char('q'), n)]);

        m
    }

    /// Find the action that matches a key event.  When multiple bindings
    /// match, the one with the most modifiers wins.
    pub fn match_key(&self, event: KeyEvent) -> Option<Action> {
        let mut best: Option<(Action, u32)> = None;
        for (&action, binds) in &self.bindings {
            for bind in binds.iter().filter(|b| b.matches(event)) {
                let mc = bind.modifiers.bits().count_ones();
                if best.map_or(true, |(_, best_mc)| mc > best_mc) {
                    best = Some((action, mc));
                }
            }
        }
        best.map(|(action, _)| action)
    }

    /// Add a binding for `action`, removing the same key from every other
    /// action first.
    pub fn add_binding(&mut self, action: Action, bind: KeyBind) {
        for binds in self.bindings.values_mut() {
            binds.retain(|b| b != &bind);
        }
        self.bindings.entry(action).or_default().push(bind);
    }

    pub fn clear_bindings(&mut self, action: Action) {
        self.bindings.insert(action, Vec::new());
    }

    /// Restore all bindings to the built-in defaults.
    pub fn reset_defaults(&mut self) {
        self.bindings = Self::default_bindings();
    }

    /// Format the binding list for a given action (e.g. `"↑/k"`).
    pub fn display_bindings(&self, action: Action) -> String {
        match self.bindings.get(&action) {
            Some(binds) if !binds.is_empty() => {
                binds.iter().map(|b| b.display()).collect::<Vec<_>>().join("/")
            }
            _ => "unbound".into(),
        }
    }

    /// Short display of the first binding only (for the status bar).
    pub fn short_binding(&self, action: Action) -> String {
        match self.bindings.get(&action).and_then(|b| b.first()) {
            Some(bind) => bind.display(),
            None => "?".into(),
        }
    }

    // ── persistence ─────────────────────────────────────────────

    /// Load config from disk, falling back to defaults.
    pub fn load() -> Self {
        let path = config_path();
        match std::fs::read_to_string(&path) {
            Ok(contents) => Self::parse_config(&contents),
            Err(e) => {
                tracing::debug!("no config at {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Persist current config to disk.
    pub fn save(&self) -> anyhow::Result<()> {
        let path = config_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, self.serialise())?;
        Ok(())
    }

    /// Save, logging instead of failing (settings toggles call this).
    pub fn save_or_warn(&self) {
        if let Err(e) = self.save() {
            tracing::warn!("failed to save config: {e:#}");
        }
    }

    fn parse_config(s: &str) -> Self {
        let mut config = Self::default();

        for line in s.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('[') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim();
            let value = value.trim().trim_matches('"');

            match key {
                "flip_delay_ms" => {
                    if let Ok(v) = value.parse::<u64>() {
                        config.flip_delay_ms = v.min(MAX_FLIP_DELAY_MS);
                    }
                    continue;
                }
                "default_topic" => {
                    if let Ok(c) = value.parse() {
                        config.default_category = c;
                    }
                    continue;
                }
                "show_part_of_speech" => {
                    config.show_part_of_speech = value == "true";
                    continue;
                }
                _ => {}
            }

            let Some(action) = Action::from_config_key(key) else {
                continue;
            };

            let parsed: Vec<KeyBind> = value
                .split(',')
                .filter_map(|part| KeyBind::parse(part.trim().trim_matches('"')))
                .collect();
            if !parsed.is_empty() {
                config.bindings.insert(action, parsed);
            }
        }

        config
    }

    fn serialise(&self) -> String {
        let mut lines = vec![
            "# econ-vocab configuration".to_string(),
            String::new(),
            "# Study settings".to_string(),
            format!("flip_delay_ms = {}", self.flip_delay_ms),
            format!("default_topic = {}", self.default_category.config_key()),
            format!("show_part_of_speech = {}", self.show_part_of_speech),
            String::new(),
            "# Key bindings".to_string(),
            "# Format: action = Key1, Key2, ...".to_string(),
            "# Modifiers: Ctrl+, Alt+, Shift+ (prefix)".to_string(),
            "# Special keys: Up, Down, Left, Right, Enter, Esc, Tab,".to_string(),
            "#   Backspace, Delete, Home, End, PageUp, PageDown, Space, F1-F12".to_string(),
            String::new(),
        ];

        for &action in Action::ALL {
            if let Some(binds) = self.bindings.get(&action) {
                let keys: Vec<String> = binds.iter().map(|b| b.to_config_string()).collect();
                lines.push(format!("{} = {}", action.config_key(), keys.join(", ")));
            }
        }
        lines.push(String::new());
        lines.join("\n")
    }
}

/// Return the config file path (`$XDG_CONFIG_HOME/econ-vocab/config.toml`).
fn config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            PathBuf::from(home).join(".config")
        });
    config_dir.join(env!("CARGO_PKG_NAME")).join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn default_bindings_resolve() {
        let config = AppConfig::default();
        assert_eq!(config.match_key(key(KeyCode::Char(' '))), Some(Action::Flip));
        assert_eq!(config.match_key(key(KeyCode::Right)), Some(Action::NextCard));
        assert_eq!(config.match_key(key(KeyCode::Esc)), Some(Action::Back));
        assert_eq!(config.match_key(key(KeyCode::Char('z'))), None);
    }

    #[test]
    fn modifiers_must_match() {
        let config = AppConfig::default();
        let ctrl_q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL);
        assert_eq!(config.match_key(ctrl_q), None);
    }

    #[test]
    fn key_strings_parse() {
        assert_eq!(
            KeyBind::parse("Ctrl+n"),
            Some(KeyBind::new(KeyCode::Char('n'), KeyModifiers::CONTROL))
        );
        assert_eq!(KeyBind::parse("Space"), Some(KeyBind::new(KeyCode::Char(' '), KeyModifiers::NONE)));
        assert_eq!(KeyBind::parse("F5"), Some(KeyBind::new(KeyCode::F(5), KeyModifiers::NONE)));
        assert_eq!(KeyBind::parse("R"), Some(KeyBind::new(KeyCode::Char('R'), KeyModifiers::NONE)));
        assert_eq!(KeyBind::parse("Hyper+x"), None);
        assert_eq!(KeyBind::parse("nonsense"), None);
    }

    #[test]
    fn serialised_config_reads_back() {
        let mut config = AppConfig::default();
        config.flip_delay_ms = 500;
        config.default_category = CategoryFilter::Labor;
        config.show_part_of_speech = false;
        config.add_binding(Action::Flip, KeyBind::new(KeyCode::Char('x'), KeyModifiers::ALT));

        let parsed = AppConfig::parse_config(&config.serialise());
        assert_eq!(parsed.flip_delay_ms, 500);
        assert_eq!(parsed.default_category, CategoryFilter::Labor);
        assert!(!parsed.show_part_of_speech);
        assert_eq!(parsed.bindings.get(&Action::Flip), config.bindings.get(&Action::Flip));
    }

    #[test]
    fn bad_lines_fall_back_to_defaults() {
        let parsed = AppConfig::parse_config(
            "flip_delay_ms = 99999\ndefault_topic = space\nbogus\nflip = Hyper+x\n",
        );
        assert_eq!(parsed.flip_delay_ms, MAX_FLIP_DELAY_MS);
        assert_eq!(parsed.default_category, CategoryFilter::All);
        assert_eq!(
            parsed.bindings.get(&Action::Flip),
            AppConfig::default_bindings().get(&Action::Flip)
        );
    }

    #[test]
    fn add_binding_steals_key_from_other_action() {
        let mut config = AppConfig::default();
        config.add_binding(Action::Restart, KeyBind::new(KeyCode::Char('q'), KeyModifiers::NONE));
        assert_eq!(config.match_key(key(KeyCode::Char('q'))), Some(Action::Restart));
        assert_eq!(config.display_bindings(Action::Quit), "unbound");
    }
}
