//! Layout helpers — split the terminal area into regions.
//!
//! Renderers and the mouse handler both derive their geometry from here, so
//! a click always lands on what was drawn.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Primary screen layout: header line, body and a bottom status bar.
pub struct AppLayout {
    pub header_area: Rect,
    pub body_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Compute the layout from the full terminal area.
    pub fn from_area(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // header: title / progress
                Constraint::Min(3),    // body
                Constraint::Length(1), // status bar
            ])
            .split(area);

        Self {
            header_area: chunks[0],
            body_area: chunks[1],
            status_area: chunks[2],
        }
    }
}

/// Menu regions: title block, topic selector, one box per study mode, footer.
pub struct MenuLayout {
    pub title_area: Rect,
    pub topics_area: Rect,
    pub entries: Vec<Rect>,
    pub footer_area: Rect,
}

impl MenuLayout {
    pub fn from_area(body: Rect, entry_count: usize) -> Self {
        let column = centered_column(body, 76);
        let entries_height = 4 * entry_count as u16;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Length(2),
                Constraint::Length(entries_height),
                Constraint::Length(2),
                Constraint::Min(0),
            ])
            .split(column);

        let entries = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Length(4); entry_count])
            .split(chunks[2])
            .to_vec();

        Self {
            title_area: chunks[0],
            topics_area: chunks[1],
            entries,
            footer_area: chunks[3],
        }
    }
}

/// Centered flashcard rectangle at full (un-animated) width.
pub fn card_area(body: Rect) -> Rect {
    centered_fixed(64, 14, body)
}

/// Quiz regions for one question.
pub struct QuizLayout {
    pub prompt_area: Rect,
    /// One box per multiple-choice option (empty in writing mode).
    pub options: Vec<Rect>,
    /// Text field for writing mode.
    pub input_area: Rect,
    pub feedback_area: Rect,
}

impl QuizLayout {
    pub fn from_area(body: Rect, option_count: usize) -> Self {
        let column = centered_column(body, 80);
        let answer_height = if option_count == 0 {
            3
        } else {
            3 * option_count as u16
        };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(6),
                Constraint::Length(answer_height),
                Constraint::Length(5),
                Constraint::Min(0),
            ])
            .split(column);

        let options = if option_count == 0 {
            Vec::new()
        } else {
            Layout::default()
                .direction(Direction::Vertical)
                .constraints(vec![Constraint::Length(3); option_count])
                .split(chunks[1])
                .to_vec()
        };

        Self {
            prompt_area: chunks[0],
            options,
            input_area: chunks[1],
            feedback_area: chunks[2],
        }
    }
}

/// Completion screen regions.
pub struct ResultLayout {
    pub panel: Rect,
    pub headline_area: Rect,
    pub score_area: Rect,
    pub bar_area: Rect,
    pub actions_area: Rect,
}

impl ResultLayout {
    pub fn from_area(body: Rect) -> Self {
        let panel = centered_fixed(52, 12, body);
        // Inside a one-cell border with one column of padding.
        let inner = Rect::new(
            panel.x.saturating_add(2),
            panel.y.saturating_add(1),
            panel.width.saturating_sub(4),
            panel.height.saturating_sub(2),
        );
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Length(2),
                Constraint::Min(0),
            ])
            .split(inner);

        Self {
            panel,
            headline_area: chunks[1],
            score_area: chunks[2],
            bar_area: chunks[3],
            actions_area: chunks[4],
        }
    }
}

/// Create a centered rectangle with fixed dimensions, clamped to the available area.
pub fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

/// Full-height column of at most `max_width`, centered horizontally.
fn centered_column(area: Rect, max_width: u16) -> Rect {
    let w = max_width.min(area.width);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    Rect::new(x, area.y, w, area.height)
}

pub fn point_in_rect(area: Rect, col: u16, row: u16) -> bool {
    col >= area.x
        && col < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}
