//! Colour palette and text styles used across the UI.

use ratatui::style::{Color, Modifier, Style};

/// Central theme — change colours here and they propagate everywhere.
pub struct Theme;

impl Theme {
    pub const ACCENT: Color = Color::Indexed(99); // indigo
    pub const PROGRESS_FILL: Color = Color::Indexed(99);
    pub const PROGRESS_TRACK: Color = Color::DarkGray;

    // ── menu ───────────────────────────────────────────────────
    pub fn app_title_style() -> Style {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    pub fn subtitle_style() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn topic_style(selected: bool) -> Style {
        if selected {
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        }
    }

    /// Accent colour per menu entry (blue / purple / green).
    pub fn entry_color(index: usize) -> Color {
        match index {
            0 => Color::LightBlue,
            1 => Color::LightMagenta,
            _ => Color::LightGreen,
        }
    }

    // ── flashcards ─────────────────────────────────────────────
    pub fn card_front_style() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn card_back_style() -> Style {
        Style::default().fg(Color::White).bg(Self::ACCENT)
    }

    pub fn card_label_style() -> Style {
        Style::default()
            .fg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn term_style() -> Style {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    // ── quiz ───────────────────────────────────────────────────
    pub fn option_style(highlighted: bool) -> Style {
        if highlighted {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        }
    }

    pub fn correct_style() -> Style {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    }

    pub fn incorrect_style() -> Style {
        Style::default()
            .fg(Color::Red)
            .add_modifier(Modifier::BOLD)
    }

    pub fn score_badge_style() -> Style {
        Style::default()
            .fg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    // ── chrome ─────────────────────────────────────────────────
    pub fn border_style() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn dim_style() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn title_style() -> Style {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_bar_style() -> Style {
        Style::default().bg(Color::DarkGray).fg(Color::White)
    }

    pub fn input_style() -> Style {
        Style::default().fg(Color::Yellow)
    }
}
