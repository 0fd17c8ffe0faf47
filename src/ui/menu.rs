//! Main menu: topic selector, study modes and word count.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

use crate::app::state::MenuEntry;
use crate::core::vocabulary::CategoryFilter;

use super::layout::MenuLayout;
use super::theme::Theme;

pub struct MenuWidget {
    pub category: CategoryFilter,
    pub selected: usize,
    pub word_count: usize,
}

impl Widget for MenuWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = MenuLayout::from_area(area, MenuEntry::ALL.len());

        Paragraph::new(vec![
            Line::raw(""),
            Line::styled("L3 Economics English", Theme::app_title_style()),
            Line::styled(
                "Master the vocabulary for Climate Change and Labor Relations.",
                Theme::subtitle_style(),
            ),
        ])
        .alignment(Alignment::Center)
        .render(layout.title_area, buf);

        let mut topics = vec![Span::styled("Topic: ", Theme::dim_style())];
        for (i, cat) in CategoryFilter::ALL.iter().enumerate() {
            if i > 0 {
                topics.push(Span::raw("  "));
            }
            topics.push(Span::styled(
                format!(" {} ", cat.label()),
                Theme::topic_style(*cat == self.category),
            ));
        }
        Paragraph::new(Line::from(topics))
            .alignment(Alignment::Center)
            .render(layout.topics_area, buf);

        for (i, (entry, rect)) in MenuEntry::ALL.iter().zip(&layout.entries).enumerate() {
            let color = Theme::entry_color(i);
            let is_selected = i == self.selected;
            let border = if is_selected {
                Style::default().fg(color)
            } else {
                Theme::dim_style()
            };
            let block = Block::default()
                .title(format!(" {} {} ", i + 1, entry.title()))
                .title_style(Style::default().fg(color))
                .borders(Borders::ALL)
                .border_type(if is_selected {
                    BorderType::Thick
                } else {
                    BorderType::Rounded
                })
                .border_style(border);
            Paragraph::new(entry.description())
                .style(Theme::option_style(is_selected))
                .wrap(Wrap { trim: true })
                .block(block)
                .render(*rect, buf);
        }

        let footer = if self.word_count == 0 {
            Line::styled("No words in this topic", Theme::incorrect_style())
        } else {
            Line::styled(
                format!("{} words available in current selection", self.word_count),
                Theme::dim_style(),
            )
        };
        Paragraph::new(footer)
            .alignment(Alignment::Center)
            .render(layout.footer_area, buf);
    }
}
