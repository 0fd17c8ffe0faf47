//! Flashcard widget: English term on the front, French translation and
//! definition on the back.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::core::flashcards::FlashcardDeck;

use super::card_flip::CardFlip;
use super::layout::{card_area, centered_fixed};
use super::theme::Theme;

pub struct FlashcardWidget<'a> {
    pub deck: &'a FlashcardDeck,
    pub flip: &'a CardFlip,
    pub show_part_of_speech: bool,
}

impl<'a> Widget for FlashcardWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(word) = self.deck.current() else {
            Paragraph::new("No words to review in this topic.")
                .style(Theme::dim_style())
                .alignment(Alignment::Center)
                .render(centered_fixed(area.width, 1, area), buf);
            return;
        };

        let full = card_area(area);
        let card = centered_fixed(self.flip.width(full.width), full.height, full);
        Clear.render(card, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Theme::border_style())
            .title_bottom(Line::from(format!(" {} ", self.deck.position_label())).centered());

        // Text reflows badly on a collapsed card; draw only the frame then.
        if self.flip.is_animating() && card.width < full.width / 2 {
            block.render(card, buf);
            return;
        }

        let lines = if self.deck.is_flipped() {
            vec![
                Line::raw(""),
                Line::styled("FRENCH TRANSLATION", Theme::card_label_style()),
                Line::styled(word.french, Theme::term_style()),
                Line::raw(""),
                Line::styled("DEFINITION", Theme::card_label_style()),
                Line::raw(word.definition),
            ]
        } else {
            let mut lines = vec![
                Line::raw(""),
                Line::styled("ENGLISH TERM", Theme::card_label_style()),
                Line::raw(""),
                Line::styled(word.english, Theme::term_style()),
            ];
            if let Some(pos) = word.part_of_speech.filter(|_| self.show_part_of_speech) {
                lines.push(Line::styled(format!("({pos})"), Theme::dim_style()));
            }
            lines.push(Line::raw(""));
            lines.push(Line::styled("Space to flip", Theme::dim_style()));
            lines
        };

        let style = if self.deck.is_flipped() {
            Theme::card_back_style()
        } else {
            Theme::card_front_style()
        };

        Paragraph::new(lines)
            .style(style)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block)
            .render(card, buf);
    }
}
