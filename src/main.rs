//! Terminal flashcards and quizzes for English/French economics vocabulary.
//!
//! Run the binary to open the study menu.
//! Run with `--list` to print the word table instead.

mod app;
mod config;
mod core;
mod ui;

use std::io::{self, stderr, Write};
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};

use crate::app::{
    event::{spawn_deferred_step, spawn_event_reader, AppEvent, DeferredStep},
    handler,
    state::{AppState, MenuEntry},
};
use crate::core::{
    error::StudyError,
    quiz::QuizMode,
    vocabulary::{filter_words, CategoryFilter},
};

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Economics vocabulary trainer (EN/FR)")]
struct Cli {
    /// Topic to study: all, climate or labor (defaults to the configured topic).
    #[arg(long, value_parser = parse_topic)]
    topic: Option<CategoryFilter>,

    /// Open a study mode directly instead of the menu: flashcards, mcq or writing.
    #[arg(long, value_parser = parse_mode)]
    mode: Option<MenuEntry>,

    /// Seed for question order and options (reproducible sessions).
    #[arg(long)]
    seed: Option<u64>,

    /// Print the word list for the topic and exit.
    #[arg(long)]
    list: bool,
}

fn parse_topic(s: &str) -> Result<CategoryFilter, String> {
    s.parse().map_err(|e: StudyError| e.to_string())
}

fn parse_mode(s: &str) -> Result<MenuEntry, String> {
    if s.trim().eq_ignore_ascii_case("flashcards") {
        return Ok(MenuEntry::Flashcards);
    }
    match s.parse::<QuizMode>() {
        Ok(QuizMode::MultipleChoice) => Ok(MenuEntry::MultipleChoice),
        Ok(QuizMode::Writing) => Ok(MenuEntry::Writing),
        Err(e) => Err(e.to_string()),
    }
}

/// Print the filtered table as tab-separated columns.
fn print_word_list(category: CategoryFilter) -> Result<()> {
    let mut out = io::stdout().lock();
    for word in filter_words(category) {
        let pos = word.part_of_speech.map(|p| p.to_string()).unwrap_or_default();
        writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}",
            word.id, word.english, word.french, pos, word.definition
        )?;
    }
    Ok(())
}

// ───────────────────────────────────────── main ─────────────

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise tracing (only emits when RUST_LOG is set).
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr) // never pollute stdout
        .init();

    let cli = Cli::parse();
    let user_config = config::AppConfig::load();
    let category = cli.topic.unwrap_or(user_config.default_category);

    if cli.list {
        return print_word_list(category);
    }

    let rng = match cli.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let mut state = AppState::new(category, user_config, rng);
    tracing::info!(topic = category.label(), words = state.words.len(), "starting");

    if let Some(mode) = cli.mode {
        handler::open_entry(&mut state, mode);
    }

    // ── terminal setup ────────────────────────────────────────
    enable_raw_mode()?;
    let mut stderr_handle = stderr();
    execute!(stderr_handle, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stderr());
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut state).await;

    // ── teardown ──────────────────────────────────────────────
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

async fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stderr>>,
    state: &mut AppState,
) -> Result<()> {
    let mut events = spawn_event_reader(Duration::from_millis(50));
    let (step_tx, mut step_rx) = tokio::sync::mpsc::unbounded_channel::<DeferredStep>();

    loop {
        let size = terminal.size()?;
        state.terminal_area = Rect::new(0, 0, size.width, size.height);
        terminal.draw(|frame| ui::draw(frame, state))?;

        // ── schedule card steps requested by the handler ──────────
        if !state.pending_steps.is_empty() {
            let delay = Duration::from_millis(state.config.flip_delay_ms);
            for step in state.pending_steps.drain(..) {
                spawn_deferred_step(&step_tx, state.deck_generation, step, delay);
            }
        }

        tokio::select! {
            biased;

            Some(event) = events.recv() => {
                match event {
                    AppEvent::Key(k) => handler::handle_key(state, k),
                    AppEvent::Mouse(m) => handler::handle_mouse(state, m),
                    AppEvent::Resize(w, h) => state.terminal_area = Rect::new(0, 0, w, h),
                    AppEvent::Tick => state.card_flip.tick(),
                }
            }

            Some((generation, step)) = step_rx.recv() => {
                handler::apply_deferred_step(state, generation, step);
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}
