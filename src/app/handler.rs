//! Input handling — maps key/mouse events to state mutations.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::config::{Action, KeyBind};
use crate::core::{
    error::StudyError,
    flashcards::{FlashcardDeck, Step},
    quiz::QuizMode,
    session::{Phase, QuizSession},
};
use crate::ui::layout::{
    card_area, point_in_rect, AppLayout, MenuLayout, QuizLayout, ResultLayout,
};

use super::settings::{SettingsItem, SETTINGS_ITEMS};
use super::state::{ActiveView, AppState, MenuEntry};

/// Total selectable rows in the controls submenu (actions + "Reset").
pub fn controls_item_count() -> usize {
    Action::ALL.len() + 1
}

/// Process a key event, dispatching based on the active view.
pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    // Ctrl+c always quits, regardless of view.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    match state.active_view {
        ActiveView::Menu => handle_menu_key(state, key),
        ActiveView::Flashcards => handle_flashcard_key(state, key),
        ActiveView::Quiz => handle_quiz_key(state, key),
        ActiveView::SettingsMenu => handle_settings_key(state, key),
        ActiveView::ControlsSubmenu => {
            if state.awaiting_rebind {
                handle_rebind_key(state, key);
            } else {
                handle_controls_key(state, key);
            }
        }
    }
}

// ── Menu ────────────────────────────────────────────────────────

fn handle_menu_key(state: &mut AppState, key: KeyEvent) {
    if let KeyCode::Char(c @ '1'..='9') = key.code {
        let idx = c as usize - '1' as usize;
        if let Some(&entry) = MenuEntry::ALL.get(idx) {
            state.menu_selected = idx;
            open_entry(state, entry);
        }
        return;
    }

    let Some(action) = state.config.match_key(key) else {
        return;
    };

    match action {
        Action::Quit => state.should_quit = true,
        Action::OpenSettings => {
            state.active_view = ActiveView::SettingsMenu;
            state.settings_selected = 0;
        }
        Action::MoveUp => {
            state.menu_selected = state.menu_selected.saturating_sub(1);
        }
        Action::MoveDown => {
            if state.menu_selected + 1 < MenuEntry::ALL.len() {
                state.menu_selected += 1;
            }
        }
        Action::CycleTopic | Action::NextCard => {
            let next = state.category.next();
            state.set_category(next);
            state.status_message = None;
        }
        Action::Select => {
            if let Some(&entry) = MenuEntry::ALL.get(state.menu_selected) {
                open_entry(state, entry);
            }
        }
        _ => {}
    }
}

/// Enter a study view, or report why it can't be entered.
pub fn open_entry(state: &mut AppState, entry: MenuEntry) {
    let result = match entry {
        MenuEntry::Flashcards => enter_flashcards(state),
        MenuEntry::MultipleChoice => enter_quiz(state, QuizMode::MultipleChoice),
        MenuEntry::Writing => enter_quiz(state, QuizMode::Writing),
    };
    if let Err(e) = result {
        tracing::debug!("cannot open {}: {e}", entry.title());
        state.status_message = Some(e.to_string());
    }
}

fn ensure_words(state: &AppState) -> Result<(), StudyError> {
    if state.words.is_empty() {
        return Err(StudyError::EmptySelection {
            category: state.category,
        });
    }
    Ok(())
}

pub fn enter_flashcards(state: &mut AppState) -> Result<(), StudyError> {
    ensure_words(state)?;
    state.deck = FlashcardDeck::new(state.words.clone());
    state.deck_generation = state.deck_generation.wrapping_add(1);
    state.pending_steps.clear();
    state.card_flip.set_target(false);
    state.active_view = ActiveView::Flashcards;
    state.status_message = None;
    tracing::debug!(cards = state.deck.len(), topic = state.category.label(), "flashcards");
    Ok(())
}

pub fn enter_quiz(state: &mut AppState, mode: QuizMode) -> Result<(), StudyError> {
    ensure_words(state)?;
    state.quiz = Some(QuizSession::start(state.words.clone(), mode, &mut state.rng));
    reset_answer_inputs(state);
    state.active_view = ActiveView::Quiz;
    state.status_message = None;
    Ok(())
}

fn back_to_menu(state: &mut AppState) {
    state.active_view = ActiveView::Menu;
    state.quiz = None;
    state.pending_steps.clear();
    reset_answer_inputs(state);
}

// ── Flashcards ──────────────────────────────────────────────────

fn handle_flashcard_key(state: &mut AppState, key: KeyEvent) {
    let Some(action) = state.config.match_key(key) else {
        return;
    };

    match action {
        Action::Quit => state.should_quit = true,
        Action::Back => back_to_menu(state),
        Action::Flip | Action::Select => {
            state.deck.flip();
            state.card_flip.set_target(state.deck.is_flipped());
        }
        Action::NextCard | Action::MoveDown => request_step(state, Step::Next),
        Action::PrevCard | Action::MoveUp => request_step(state, Step::Prev),
        _ => {}
    }
}

/// Show the front of the card now; move to the next/previous card after
/// the configured flip delay.
pub fn request_step(state: &mut AppState, step: Step) {
    if state.deck.is_empty() {
        return;
    }
    state.deck.unflip();
    state.card_flip.set_target(false);
    if state.config.flip_delay_ms == 0 {
        step.apply(&mut state.deck);
    } else {
        state.pending_steps.push(step);
    }
}

/// Apply a step that waited out the flip delay.  Steps requested for a deck
/// that has since been replaced are dropped.
pub fn apply_deferred_step(state: &mut AppState, generation: u64, step: Step) {
    if generation != state.deck_generation || state.active_view != ActiveView::Flashcards {
        return;
    }
    step.apply(&mut state.deck);
    state.card_flip.set_target(state.deck.is_flipped());
}

// ── Quiz ────────────────────────────────────────────────────────

fn handle_quiz_key(state: &mut AppState, key: KeyEvent) {
    let Some(session) = state.quiz.as_ref() else {
        back_to_menu(state);
        return;
    };
    let phase = session.phase();
    let mode = session.mode();
    let answered = session.has_answered();

    if phase == Phase::Complete {
        match state.config.match_key(key) {
            Some(Action::Restart) | Some(Action::Select) => restart_quiz(state),
            Some(Action::Back) => back_to_menu(state),
            Some(Action::Quit) => state.should_quit = true,
            _ => {}
        }
        return;
    }

    // Letters typed ahead of Enter never reach the char bindings.
    if mode == QuizMode::Writing {
        if !answered {
            handle_text_entry(state, key);
        } else if state.config.match_key(key) == Some(Action::Select) {
            advance_quiz(state);
        } else if key.code == KeyCode::Esc {
            back_to_menu(state);
        }
        return;
    }

    if mode == QuizMode::MultipleChoice && !answered {
        if let KeyCode::Char(c @ '1'..='9') = key.code {
            choose_option(state, c as usize - '1' as usize);
            return;
        }
    }

    let Some(action) = state.config.match_key(key) else {
        return;
    };
    match action {
        Action::Quit => state.should_quit = true,
        Action::Back => back_to_menu(state),
        Action::Select | Action::NextCard if answered => advance_quiz(state),
        Action::Select => {
            let idx = state.option_selected;
            choose_option(state, idx);
        }
        Action::MoveUp if !answered => {
            state.option_selected = state.option_selected.saturating_sub(1);
        }
        Action::MoveDown if !answered => {
            let count = current_option_count(state);
            if state.option_selected + 1 < count {
                state.option_selected += 1;
            }
        }
        _ => {}
    }
}

/// Writing mode: every printable key edits the answer.
fn handle_text_entry(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => back_to_menu(state),
        KeyCode::Enter => {
            let text = std::mem::take(&mut state.text_input);
            submit_answer(state, &text);
            state.text_input = text;
        }
        KeyCode::Backspace => {
            state.text_input.pop();
        }
        KeyCode::Char(ch)
            if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            state.text_input.push(ch);
        }
        _ => {}
    }
}

fn current_option_count(state: &AppState) -> usize {
    state
        .quiz
        .as_ref()
        .and_then(|s| s.current())
        .and_then(|q| q.options.as_ref())
        .map_or(0, |o| o.len())
}

/// Answer the current multiple-choice question with option `idx`.
pub fn choose_option(state: &mut AppState, idx: usize) {
    let option = state
        .quiz
        .as_ref()
        .and_then(|s| s.current())
        .and_then(|q| q.options.as_ref())
        .and_then(|o| o.get(idx))
        .cloned();
    if let Some(option) = option {
        state.option_selected = idx;
        submit_answer(state, &option);
    }
}

pub fn submit_answer(state: &mut AppState, text: &str) {
    let Some(session) = state.quiz.as_mut() else {
        return;
    };
    if let Some(correct) = session.submit(text) {
        tracing::debug!(
            question = session.progress_label(),
            correct,
            score = session.score(),
            "answer submitted"
        );
    }
}

pub fn advance_quiz(state: &mut AppState) {
    if let Some(session) = state.quiz.as_mut() {
        if session.advance() {
            reset_answer_inputs(state);
        }
    }
}

pub fn restart_quiz(state: &mut AppState) {
    if let Some(session) = state.quiz.as_mut() {
        session.restart(&mut state.rng);
    }
    reset_answer_inputs(state);
}

fn reset_answer_inputs(state: &mut AppState) {
    state.option_selected = 0;
    state.text_input.clear();
}

// ── Settings menu ───────────────────────────────────────────────

fn handle_settings_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            state.active_view = ActiveView::Menu;
            return;
        }
        KeyCode::Up => {
            state.settings_selected = state.settings_selected.saturating_sub(1);
            return;
        }
        KeyCode::Down => {
            if state.settings_selected + 1 < SETTINGS_ITEMS.len() {
                state.settings_selected += 1;
            }
            return;
        }
        KeyCode::Enter | KeyCode::Char(' ') => {}
        _ => {
            if state.config.match_key(key) == Some(Action::Quit) {
                state.should_quit = true;
            }
            return;
        }
    }

    let Some(item) = SETTINGS_ITEMS.get(state.settings_selected) else {
        return;
    };
    match item {
        SettingsItem::Submenu { view, .. } => {
            state.active_view = *view;
            state.controls_selected = 0;
            state.awaiting_rebind = false;
        }
        SettingsItem::Toggle { get, set, .. } => {
            let current = get(state);
            set(state, !current);
        }
        SettingsItem::Cycle { cycle, .. } => cycle(state),
    }
}

// ── Controls submenu ────────────────────────────────────────────

fn handle_controls_key(state: &mut AppState, key: KeyEvent) {
    let count = controls_item_count();
    match key.code {
        KeyCode::Esc => {
            state.active_view = ActiveView::SettingsMenu;
        }
        KeyCode::Up => {
            state.controls_selected = state.controls_selected.saturating_sub(1);
        }
        KeyCode::Down => {
            if state.controls_selected + 1 < count {
                state.controls_selected += 1;
            }
        }
        KeyCode::Enter => {
            if state.controls_selected == Action::ALL.len() {
                state.config.reset_defaults();
                state.config.save_or_warn();
                state.status_message = Some("Controls reset to defaults".to_string());
            } else {
                state.awaiting_rebind = true;
            }
        }
        KeyCode::Delete | KeyCode::Backspace => {
            if let Some(&action) = Action::ALL.get(state.controls_selected) {
                state.config.clear_bindings(action);
                state.config.save_or_warn();
            }
        }
        _ => {}
    }
}

fn handle_rebind_key(state: &mut AppState, key: KeyEvent) {
    state.awaiting_rebind = false;
    if key.code == KeyCode::Esc {
        return;
    }
    if let Some(&action) = Action::ALL.get(state.controls_selected) {
        let bind = KeyBind::from_key_event(key);
        state.status_message = Some(format!("{} → {}", action.label(), bind.display()));
        state.config.add_binding(action, bind);
        state.config.save_or_warn();
    }
}

// ── Mouse ───────────────────────────────────────────────────────

pub fn handle_mouse(state: &mut AppState, mouse: MouseEvent) {
    let body = AppLayout::from_area(state.terminal_area).body_area;

    match (state.active_view, mouse.kind) {
        (ActiveView::Menu, MouseEventKind::Down(MouseButton::Left)) => {
            let layout = MenuLayout::from_area(body, MenuEntry::ALL.len());
            if point_in_rect(layout.topics_area, mouse.column, mouse.row) {
                let next = state.category.next();
                state.set_category(next);
                return;
            }
            let hit = layout
                .entries
                .iter()
                .position(|r| point_in_rect(*r, mouse.column, mouse.row));
            if let Some(idx) = hit {
                state.menu_selected = idx;
                open_entry(state, MenuEntry::ALL[idx]);
            }
        }
        (ActiveView::Flashcards, MouseEventKind::Down(MouseButton::Left)) => {
            if point_in_rect(card_area(body), mouse.column, mouse.row) {
                state.deck.flip();
                state.card_flip.set_target(state.deck.is_flipped());
            }
        }
        (ActiveView::Flashcards, MouseEventKind::ScrollDown) => request_step(state, Step::Next),
        (ActiveView::Flashcards, MouseEventKind::ScrollUp) => request_step(state, Step::Prev),
        (ActiveView::Quiz, MouseEventKind::Down(MouseButton::Left))
            if state.quiz.as_ref().is_some_and(|s| s.is_complete()) =>
        {
            // Left half of the action row is Menu, right half is Retry.
            let actions = ResultLayout::from_area(body).actions_area;
            if !point_in_rect(actions, mouse.column, mouse.row) {
                return;
            }
            if mouse.column < actions.x + actions.width / 2 {
                back_to_menu(state);
            } else {
                restart_quiz(state);
            }
        }
        (ActiveView::Quiz, MouseEventKind::Down(MouseButton::Left)) => {
            let answered = state.quiz.as_ref().is_some_and(|s| s.has_answered());
            let count = current_option_count(state);
            let layout = QuizLayout::from_area(body, count);
            if answered {
                if point_in_rect(layout.feedback_area, mouse.column, mouse.row) {
                    advance_quiz(state);
                }
                return;
            }
            let hit = layout
                .options
                .iter()
                .position(|r| point_in_rect(*r, mouse.column, mouse.row));
            if let Some(idx) = hit {
                choose_option(state, idx);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::core::vocabulary::CategoryFilter;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn state() -> AppState {
        AppState::new(CategoryFilter::All, AppConfig::default(), ChaCha8Rng::seed_from_u64(1))
    }

    fn press(state: &mut AppState, code: KeyCode) {
        handle_key(state, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(state: &mut AppState, text: &str) {
        for ch in text.chars() {
            press(state, KeyCode::Char(ch));
        }
    }

    #[test]
    fn menu_opens_each_mode() {
        let mut s = state();
        press(&mut s, KeyCode::Enter);
        assert_eq!(s.active_view, ActiveView::Flashcards);
        press(&mut s, KeyCode::Esc);
        assert_eq!(s.active_view, ActiveView::Menu);

        press(&mut s, KeyCode::Char('2'));
        assert_eq!(s.active_view, ActiveView::Quiz);
        assert_eq!(s.quiz.as_ref().map(|q| q.mode()), Some(QuizMode::MultipleChoice));
        press(&mut s, KeyCode::Esc);
        assert!(s.quiz.is_none());

        press(&mut s, KeyCode::Down);
        press(&mut s, KeyCode::Down);
        press(&mut s, KeyCode::Enter);
        assert_eq!(s.quiz.as_ref().map(|q| q.mode()), Some(QuizMode::Writing));
    }

    #[test]
    fn topic_cycles_and_filters_words() {
        let mut s = state();
        assert_eq!(s.words.len(), 51);
        press(&mut s, KeyCode::Tab);
        assert_eq!(s.category, CategoryFilter::Climate);
        assert_eq!(s.words.len(), 26);
        press(&mut s, KeyCode::Tab);
        assert_eq!(s.words.len(), 25);
        press(&mut s, KeyCode::Tab);
        assert_eq!(s.category, CategoryFilter::All);
    }

    #[test]
    fn empty_selection_stays_on_menu() {
        let mut s = state();
        s.words.clear();
        press(&mut s, KeyCode::Char('1'));
        assert_eq!(s.active_view, ActiveView::Menu);
        assert_eq!(s.status_message.as_deref(), Some("no words available for All Topics"));
        press(&mut s, KeyCode::Char('3'));
        assert!(s.quiz.is_none());
    }

    #[test]
    fn flashcard_step_waits_for_delay() {
        let mut s = state();
        enter_flashcards(&mut s).expect("words available");
        press(&mut s, KeyCode::Char(' '));
        assert!(s.deck.is_flipped());

        press(&mut s, KeyCode::Right);
        assert!(!s.deck.is_flipped());
        assert_eq!(s.deck.index(), 0);
        assert_eq!(s.pending_steps, vec![Step::Next]);

        let generation = s.deck_generation;
        s.pending_steps.clear();
        apply_deferred_step(&mut s, generation, Step::Next);
        assert_eq!(s.deck.index(), 1);
    }

    #[test]
    fn stale_deferred_step_is_dropped() {
        let mut s = state();
        enter_flashcards(&mut s).expect("words available");
        let old = s.deck_generation;
        press(&mut s, KeyCode::Esc);
        enter_flashcards(&mut s).expect("words available");
        apply_deferred_step(&mut s, old, Step::Prev);
        assert_eq!(s.deck.index(), 0);
    }

    #[test]
    fn zero_delay_steps_immediately() {
        let mut s = state();
        s.config.flip_delay_ms = 0;
        enter_flashcards(&mut s).expect("words available");
        press(&mut s, KeyCode::Left);
        assert_eq!(s.deck.index(), s.deck.len() - 1);
        assert!(s.pending_steps.is_empty());
    }

    #[test]
    fn mcq_answer_then_advance() {
        let mut s = state();
        enter_quiz(&mut s, QuizMode::MultipleChoice).expect("words available");
        let correct = s.quiz.as_ref().and_then(|q| q.current()).map(|q| q.correct_answer());
        let options = s
            .quiz
            .as_ref()
            .and_then(|q| q.current())
            .and_then(|q| q.options.clone())
            .expect("options");
        let idx = options.iter().position(|o| Some(o.as_str()) == correct).expect("correct option");

        press(&mut s, KeyCode::Char(char::from(b'1' + idx as u8)));
        assert_eq!(s.quiz.as_ref().map(|q| q.score()), Some(1));

        // Answering again does nothing.
        press(&mut s, KeyCode::Char('1'));
        assert_eq!(s.quiz.as_ref().map(|q| q.score()), Some(1));

        press(&mut s, KeyCode::Enter);
        assert_eq!(s.quiz.as_ref().map(|q| q.index()), Some(1));
        assert!(!s.quiz.as_ref().is_some_and(|q| q.has_answered()));
    }

    #[test]
    fn writing_mode_types_submits_and_advances() {
        let mut s = state();
        enter_quiz(&mut s, QuizMode::Writing).expect("words available");
        let correct = s
            .quiz
            .as_ref()
            .and_then(|q| q.current())
            .map(|q| q.correct_answer())
            .expect("question");

        // `q` is text here, not quit.
        type_text(&mut s, "q");
        press(&mut s, KeyCode::Backspace);
        assert!(!s.should_quit);

        type_text(&mut s, correct);
        press(&mut s, KeyCode::Enter);
        assert_eq!(s.quiz.as_ref().map(|q| q.score()), Some(1));

        press(&mut s, KeyCode::Enter);
        assert_eq!(s.quiz.as_ref().map(|q| q.index()), Some(1));
        assert!(s.text_input.is_empty());
    }

    #[test]
    fn completed_quiz_restarts_on_r() {
        let mut s = state();
        s.set_category(CategoryFilter::Labor);
        enter_quiz(&mut s, QuizMode::Writing).expect("words available");
        while !s.quiz.as_ref().is_some_and(|q| q.is_complete()) {
            type_text(&mut s, "?");
            press(&mut s, KeyCode::Enter);
            press(&mut s, KeyCode::Enter);
        }
        press(&mut s, KeyCode::Char('r'));
        let quiz = s.quiz.as_ref().expect("quiz");
        assert!(!quiz.is_complete());
        assert_eq!(quiz.index(), 0);
        assert_eq!(quiz.score(), 0);
    }

    #[test]
    fn revealed_writing_answer_ignores_char_bindings() {
        let mut s = state();
        enter_quiz(&mut s, QuizMode::Writing).expect("words available");
        type_text(&mut s, "?");
        press(&mut s, KeyCode::Enter);
        assert!(s.quiz.as_ref().is_some_and(|q| q.has_answered()));

        type_text(&mut s, "qb");
        assert!(!s.should_quit);
        assert_eq!(s.active_view, ActiveView::Quiz);
        assert_eq!(s.quiz.as_ref().map(|q| q.index()), Some(0));

        press(&mut s, KeyCode::Enter);
        assert_eq!(s.quiz.as_ref().map(|q| q.index()), Some(1));
    }

    fn finish_labor_quiz(s: &mut AppState) {
        s.set_category(CategoryFilter::Labor);
        enter_quiz(s, QuizMode::Writing).expect("words available");
        while !s.quiz.as_ref().is_some_and(|q| q.is_complete()) {
            type_text(s, "?");
            press(s, KeyCode::Enter);
            press(s, KeyCode::Enter);
        }
    }

    fn click(s: &mut AppState, column: u16, row: u16) {
        handle_mouse(
            s,
            MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                modifiers: KeyModifiers::NONE,
            },
        );
    }

    #[test]
    fn completion_screen_buttons_respond_to_clicks() {
        let mut s = state();
        s.terminal_area = ratatui::layout::Rect::new(0, 0, 80, 24);
        let body = AppLayout::from_area(s.terminal_area).body_area;
        let actions = ResultLayout::from_area(body).actions_area;

        finish_labor_quiz(&mut s);
        click(&mut s, actions.x + actions.width - 1, actions.y);
        let quiz = s.quiz.as_ref().expect("quiz");
        assert!(!quiz.is_complete());
        assert_eq!(quiz.index(), 0);

        finish_labor_quiz(&mut s);
        click(&mut s, actions.x, actions.y);
        assert_eq!(s.active_view, ActiveView::Menu);
        assert!(s.quiz.is_none());
    }

    #[test]
    fn ctrl_c_quits_from_writing_mode() {
        let mut s = state();
        enter_quiz(&mut s, QuizMode::Writing).expect("words available");
        handle_key(&mut s, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(s.should_quit);
    }

    #[test]
    fn key_release_is_ignored() {
        let mut s = state();
        let mut release = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        handle_key(&mut s, release);
        assert!(!s.should_quit);
    }
}
