//! UI / rendering layer — everything that touches Ratatui widgets.
//!
//! This layer takes the *core* study state and turns it into cells on the
//! terminal.  Nothing here mutates state.

pub mod card_flip;
pub mod flashcard;
pub mod layout;
pub mod menu;
pub mod popup;
pub mod quiz;
pub mod theme;

use ratatui::{
    layout::Alignment,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::state::{ActiveView, AppState};
use crate::config::Action;

use self::flashcard::FlashcardWidget;
use self::layout::AppLayout;
use self::menu::MenuWidget;
use self::popup::{ControlsPopup, SettingsPopup};
use self::quiz::QuizWidget;
use self::theme::Theme;

/// Render one frame for the current state.
pub fn draw(frame: &mut Frame, state: &AppState) {
    let layout = AppLayout::from_area(frame.area());

    frame.render_widget(header(state), layout.header_area);

    match state.active_view {
        ActiveView::Menu | ActiveView::SettingsMenu | ActiveView::ControlsSubmenu => {
            frame.render_widget(
                MenuWidget {
                    category: state.category,
                    selected: state.menu_selected,
                    word_count: state.words.len(),
                },
                layout.body_area,
            );
        }
        ActiveView::Flashcards => {
            frame.render_widget(
                FlashcardWidget {
                    deck: &state.deck,
                    flip: &state.card_flip,
                    show_part_of_speech: state.config.show_part_of_speech,
                },
                layout.body_area,
            );
        }
        ActiveView::Quiz => {
            if let Some(session) = &state.quiz {
                frame.render_widget(
                    QuizWidget {
                        session,
                        option_selected: state.option_selected,
                        text_input: &state.text_input,
                    },
                    layout.body_area,
                );
            }
        }
    }

    let hint = status_hint(state);
    let status_text = state.status_message.as_deref().unwrap_or(&hint);
    frame.render_widget(
        Paragraph::new(status_text).style(Theme::status_bar_style()),
        layout.status_area,
    );

    match state.active_view {
        ActiveView::SettingsMenu => {
            frame.render_widget(SettingsPopup { state }, frame.area());
        }
        ActiveView::ControlsSubmenu => {
            frame.render_widget(
                ControlsPopup {
                    config: &state.config,
                    selected: state.controls_selected,
                    awaiting_rebind: state.awaiting_rebind,
                },
                frame.area(),
            );
        }
        _ => {}
    }
}

fn header(state: &AppState) -> Paragraph<'static> {
    let line = match (state.active_view, &state.quiz) {
        (ActiveView::Quiz, Some(session)) => Line::from(vec![
            Span::styled(format!(" {} ", session.mode().label()), Theme::title_style()),
            Span::raw("  "),
            Span::styled(format!("Score: {}", session.score()), Theme::score_badge_style()),
            Span::raw("  "),
            Span::styled(session.progress_label(), Theme::dim_style()),
        ]),
        (ActiveView::Flashcards, _) => Line::from(vec![
            Span::styled(" Flashcards ", Theme::title_style()),
            Span::styled(state.category.label(), Theme::dim_style()),
        ]),
        _ => Line::styled(" econ-vocab ", Theme::title_style()),
    };
    Paragraph::new(line).alignment(Alignment::Left)
}

/// Key hints for the status bar, built from the current bindings.
fn status_hint(state: &AppState) -> String {
    let c = &state.config;
    match state.active_view {
        ActiveView::Menu => format!(
            "{}: choose | {}: topic | {}: open | {}: settings | {}: quit",
            c.short_binding(Action::MoveDown),
            c.short_binding(Action::CycleTopic),
            c.short_binding(Action::Select),
            c.short_binding(Action::OpenSettings),
            c.short_binding(Action::Quit),
        ),
        ActiveView::Flashcards => format!(
            "{}: flip | {}/{}: prev/next | {}: menu",
            c.short_binding(Action::Flip),
            c.short_binding(Action::PrevCard),
            c.short_binding(Action::NextCard),
            c.short_binding(Action::Back),
        ),
        ActiveView::Quiz => match &state.quiz {
            Some(q) if q.is_complete() => format!(
                "{}: retry | {}: menu",
                c.short_binding(Action::Restart),
                c.short_binding(Action::Back),
            ),
            Some(q) if q.has_answered() => format!(
                "{}: next question | {}: menu",
                c.short_binding(Action::Select),
                c.short_binding(Action::Back),
            ),
            Some(q) if q.current().is_some_and(|qq| qq.options.is_some()) => format!(
                "1-4 or {}: answer | {}: menu",
                c.short_binding(Action::Select),
                c.short_binding(Action::Back),
            ),
            _ => "type your answer | Enter: submit | Esc: menu".to_string(),
        },
        ActiveView::SettingsMenu | ActiveView::ControlsSubmenu => String::new(),
    }
}
