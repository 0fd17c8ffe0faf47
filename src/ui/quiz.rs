//! Quiz screens: the current question with options or a text field,
//! answer feedback, and the completion summary.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::core::answer::is_exact_option;
use crate::core::session::QuizSession;

use super::layout::{QuizLayout, ResultLayout};
use super::theme::Theme;

// ───────────────────────────────────────── question ──────────

pub struct QuizWidget<'a> {
    pub session: &'a QuizSession,
    pub option_selected: usize,
    pub text_input: &'a str,
}

impl<'a> Widget for QuizWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(question) = self.session.current() else {
            ResultWidget { session: self.session }.render(area, buf);
            return;
        };

        let options = question.options.as_deref().unwrap_or(&[]);
        let layout = QuizLayout::from_area(area, options.len());
        let answer = self.session.answer();

        Paragraph::new(question.prompt())
            .style(Theme::term_style())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Theme::border_style())
                    .title(format!(" Question {} · {} ", self.session.progress_label(), question.kind))
                    .title_style(Theme::dim_style()),
            )
            .render(layout.prompt_area, buf);

        if options.is_empty() {
            let (text, style) = match answer {
                Some(record) => (record.submitted.clone(), Theme::dim_style()),
                None => (format!("{}▏", self.text_input), Theme::input_style()),
            };
            Paragraph::new(text)
                .style(style)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(Theme::border_style())
                        .title(" Type your answer ")
                        .title_style(Theme::dim_style()),
                )
                .render(layout.input_area, buf);
        } else {
            for (i, (option, rect)) in options.iter().zip(&layout.options).enumerate() {
                let border = match answer {
                    Some(_) if is_exact_option(option, question) => Theme::correct_style(),
                    Some(record) if record.submitted == *option => Theme::incorrect_style(),
                    Some(_) => Theme::dim_style(),
                    None if i == self.option_selected => Style::default().fg(Theme::ACCENT),
                    None => Theme::dim_style(),
                };
                let text_style = match answer {
                    Some(_) => border,
                    None => Theme::option_style(i == self.option_selected),
                };
                Paragraph::new(Line::from(vec![
                    Span::styled(format!("{} ", i + 1), Theme::dim_style()),
                    Span::styled(option.as_str(), text_style),
                ]))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(border),
                )
                .render(*rect, buf);
            }
        }

        if let Some(record) = answer {
            let mut lines = if record.correct {
                vec![Line::styled("✓ Correct!", Theme::correct_style())]
            } else {
                vec![
                    Line::styled("✗ Incorrect", Theme::incorrect_style()),
                    Line::from(vec![
                        Span::raw("The correct answer was: "),
                        Span::styled(question.correct_answer(), Theme::term_style()),
                    ]),
                ]
            };
            lines.push(Line::styled("Enter: next →", Theme::dim_style()));
            Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(if record.correct {
                            Theme::correct_style()
                        } else {
                            Theme::incorrect_style()
                        }),
                )
                .render(layout.feedback_area, buf);
        }
    }
}

// ───────────────────────────────────────── result ────────────

/// Completion summary with a score bar.
pub struct ResultWidget<'a> {
    pub session: &'a QuizSession,
}

impl<'a> Widget for ResultWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = ResultLayout::from_area(area);
        Clear.render(layout.panel, buf);
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Theme::border_style())
            .render(layout.panel, buf);

        Paragraph::new(Line::styled("★ Quiz Complete!", Theme::app_title_style()))
            .alignment(Alignment::Center)
            .render(layout.headline_area, buf);

        Paragraph::new(format!(
            "You scored {} out of {}",
            self.session.score(),
            self.session.len()
        ))
            .style(Theme::subtitle_style())
            .alignment(Alignment::Center)
            .render(layout.score_area, buf);

        let bar = layout.bar_area;
        let filled = (bar.width as f64 * self.session.score_ratio()).round() as u16;
        for x in 0..bar.width {
            let color = if x < filled {
                Theme::PROGRESS_FILL
            } else {
                Theme::PROGRESS_TRACK
            };
            buf[(bar.x + x, bar.y)].set_symbol(" ").set_bg(color);
        }

        Paragraph::new(Line::from(vec![
            Span::styled("Esc", Theme::score_badge_style()),
            Span::raw(" Menu    "),
            Span::styled("r", Theme::score_badge_style()),
            Span::raw(" Retry"),
        ]))
        .alignment(Alignment::Center)
        .render(layout.actions_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::quiz::QuizMode;
    use crate::core::vocabulary::{filter_words, CategoryFilter};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    /// Run a two-word MCQ session, answering the first `correct` questions right.
    fn finished_session(correct: usize) -> QuizSession {
        let mut rng = ChaCha8Rng::seed_from_u64(12);
        let words = filter_words(CategoryFilter::Climate)[..2].to_vec();
        let mut session = QuizSession::start(words, QuizMode::MultipleChoice, &mut rng);
        let mut answered = 0;
        while let Some(answer) = session.current().map(|q| q.correct_answer()) {
            let submitted = if answered < correct { answer } else { "zzz" };
            session.submit(submitted);
            session.advance();
            answered += 1;
        }
        session
    }

    fn bar_colors(session: &QuizSession) -> Vec<ratatui::style::Color> {
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        ResultWidget { session }.render(area, &mut buf);
        let bar = ResultLayout::from_area(area).bar_area;
        (bar.x..bar.x + bar.width).map(|x| buf[(x, bar.y)].bg).collect()
    }

    #[test]
    fn perfect_score_fills_the_whole_bar() {
        let session = finished_session(2);
        assert_eq!(session.score_ratio(), 1.0);
        let colors = bar_colors(&session);
        assert!(!colors.is_empty());
        assert!(colors.iter().all(|c| *c == Theme::PROGRESS_FILL));
    }

    #[test]
    fn half_score_fills_half() {
        let session = finished_session(1);
        assert_eq!(session.score(), 1);
        let colors = bar_colors(&session);
        let filled = colors.iter().filter(|c| **c == Theme::PROGRESS_FILL).count();
        assert_eq!(filled, colors.len() / 2);
    }

    #[test]
    fn empty_session_leaves_the_bar_unfilled() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let session = QuizSession::start(Vec::new(), QuizMode::Writing, &mut rng);
        let colors = bar_colors(&session);
        assert!(colors.iter().all(|c| *c == Theme::PROGRESS_TRACK));
    }

    #[test]
    fn two_question_quiz_ends_on_full_bar() {
        let session = finished_session(2);

        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        QuizWidget { session: &session, option_selected: 0, text_input: "" }.render(area, &mut buf);

        let bar = ResultLayout::from_area(area).bar_area;
        for x in bar.x..bar.x + bar.width {
            assert_eq!(buf[(x, bar.y)].bg, Theme::PROGRESS_FILL);
        }
        let score_row: String = (0..area.width)
            .map(|x| buf[(x, ResultLayout::from_area(area).score_area.y)].symbol().to_string())
            .collect();
        assert!(score_row.contains("You scored 2 out of 2"));
    }
}
