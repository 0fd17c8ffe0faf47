//! Central application state.
//!
//! All mutable state lives here so that the rest of the app can be pure
//! functions over `&AppState` (rendering) or `&mut AppState` (event handling).

use rand_chacha::ChaCha8Rng;
use ratatui::layout::Rect;

use crate::config::AppConfig;
use crate::core::{
    flashcards::{FlashcardDeck, Step},
    session::QuizSession,
    vocabulary::{filter_words, CategoryFilter, Word},
};
use crate::ui::card_flip::CardFlip;

/// Which view / overlay is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Menu,
    Flashcards,
    Quiz,
    SettingsMenu,
    ControlsSubmenu,
}

/// The three study modes offered on the menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    Flashcards,
    MultipleChoice,
    Writing,
}

impl MenuEntry {
    pub const ALL: &[MenuEntry] = &[
        MenuEntry::Flashcards,
        MenuEntry::MultipleChoice,
        MenuEntry::Writing,
    ];

    pub fn title(self) -> &'static str {
        match self {
            MenuEntry::Flashcards => "Flashcards",
            MenuEntry::MultipleChoice => "Multiple Choice",
            MenuEntry::Writing => "Writing Practice",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            MenuEntry::Flashcards => {
                "Review terms, definitions, and translations at your own pace."
            }
            MenuEntry::MultipleChoice => "Test your recognition of terms and definitions.",
            MenuEntry::Writing => "Practice spelling and recall by typing the answers.",
        }
    }
}

/// Top-level application state.
pub struct AppState {
    /// Topic selected on the menu.
    pub category: CategoryFilter,
    /// Active word list derived from `category`.
    pub words: Vec<&'static Word>,
    /// Highlighted menu entry.
    pub menu_selected: usize,
    /// Flashcard navigation state.
    pub deck: FlashcardDeck,
    /// Flip animation for the current card.
    pub card_flip: CardFlip,
    /// Card steps requested by the handler, waiting to be scheduled after
    /// the flip delay.  Drained by the main loop.
    pub pending_steps: Vec<Step>,
    /// Bumped whenever the flashcard view is (re)entered so that steps
    /// scheduled for an older deck are dropped.
    pub deck_generation: u64,
    /// The running quiz, if any.
    pub quiz: Option<QuizSession>,
    /// Highlighted option in a multiple-choice question.
    pub option_selected: usize,
    /// Free-text answer being typed in writing mode.
    pub text_input: String,
    /// Source of all quiz randomness (seedable from the CLI).
    pub rng: ChaCha8Rng,
    /// Controls the main event loop.
    pub should_quit: bool,
    /// An optional status message shown in the bottom bar.
    pub status_message: Option<String>,
    /// Which view / overlay is currently shown.
    pub active_view: ActiveView,
    /// User-configurable keybindings and settings.
    pub config: AppConfig,
    /// Currently highlighted item in the settings menu.
    pub settings_selected: usize,
    /// Currently highlighted item in the controls submenu.
    pub controls_selected: usize,
    /// When `true`, the controls submenu is waiting for the user to press
    /// a key to rebind the action at `controls_selected`.
    pub awaiting_rebind: bool,
    /// Last known terminal size, for mouse hit-testing.
    pub terminal_area: Rect,
}

impl AppState {
    pub fn new(category: CategoryFilter, config: AppConfig, rng: ChaCha8Rng) -> Self {
        Self {
            category,
            words: filter_words(category),
            menu_selected: 0,
            deck: FlashcardDeck::default(),
            card_flip: CardFlip::default(),
            pending_steps: Vec::new(),
            deck_generation: 0,
            quiz: None,
            option_selected: 0,
            text_input: String::new(),
            rng,
            should_quit: false,
            status_message: None,
            active_view: ActiveView::default(),
            config,
            settings_selected: 0,
            controls_selected: 0,
            awaiting_rebind: false,
            terminal_area: Rect::default(),
        }
    }

    /// Change the topic and recompute the active word list.
    pub fn set_category(&mut self, category: CategoryFilter) {
        self.category = category;
        self.words = filter_words(category);
    }
}
