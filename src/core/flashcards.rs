//! Flashcard deck navigation.

use super::vocabulary::Word;

/// Direction of a card change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Next,
    Prev,
}

impl Step {
    pub fn apply(self, deck: &mut FlashcardDeck) {
        match self {
            Step::Next => deck.next(),
            Step::Prev => deck.prev(),
        }
    }
}

/// Current card index plus flipped state.  Navigation wraps in both
/// directions; any index change shows the front again.
#[derive(Debug, Default)]
pub struct FlashcardDeck {
    words: Vec<&'static Word>,
    index: usize,
    flipped: bool,
}

impl FlashcardDeck {
    pub fn new(words: Vec<&'static Word>) -> Self {
        Self {
            words,
            index: 0,
            flipped: false,
        }
    }

    pub fn next(&mut self) {
        if self.words.is_empty() {
            return;
        }
        self.index = (self.index + 1) % self.words.len();
        self.flipped = false;
    }

    pub fn prev(&mut self) {
        if self.words.is_empty() {
            return;
        }
        let len = self.words.len();
        self.index = (self.index + len - 1) % len;
        self.flipped = false;
    }

    pub fn flip(&mut self) {
        if !self.words.is_empty() {
            self.flipped = !self.flipped;
        }
    }

    /// Show the front without moving.
    pub fn unflip(&mut self) {
        self.flipped = false;
    }

    pub fn current(&self) -> Option<&'static Word> {
        self.words.get(self.index).copied()
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    #[cfg(test)]
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// `"3 / 26"`.
    pub fn position_label(&self) -> String {
        if self.words.is_empty() {
            return "0 / 0".to_string();
        }
        format!("{} / {}", self.index + 1, self.words.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::vocabulary::{filter_words, CategoryFilter};

    fn deck() -> FlashcardDeck {
        FlashcardDeck::new(filter_words(CategoryFilter::Labor))
    }

    #[test]
    fn prev_from_first_wraps_to_last() {
        let mut d = deck();
        d.prev();
        assert_eq!(d.index(), d.len() - 1);
    }

    #[test]
    fn next_from_last_wraps_to_first() {
        let mut d = deck();
        for _ in 0..d.len() - 1 {
            d.next();
        }
        assert_eq!(d.index(), d.len() - 1);
        d.next();
        assert_eq!(d.index(), 0);
    }

    #[test]
    fn flip_toggles_and_moving_resets_it() {
        let mut d = deck();
        d.flip();
        assert!(d.is_flipped());
        d.flip();
        assert!(!d.is_flipped());
        d.flip();
        Step::Next.apply(&mut d);
        assert!(!d.is_flipped());
        d.flip();
        Step::Prev.apply(&mut d);
        assert!(!d.is_flipped());
        assert_eq!(d.index(), 0);
    }

    #[test]
    fn single_card_deck_stays_put() {
        let words = filter_words(CategoryFilter::Climate)[..1].to_vec();
        let mut d = FlashcardDeck::new(words);
        d.next();
        assert_eq!(d.index(), 0);
        d.prev();
        assert_eq!(d.index(), 0);
        assert_eq!(d.position_label(), "1 / 1");
    }

    #[test]
    fn empty_deck_is_inert() {
        let mut d = FlashcardDeck::new(Vec::new());
        d.next();
        d.prev();
        d.flip();
        assert!(d.current().is_none());
        assert!(!d.is_flipped());
        assert_eq!(d.position_label(), "0 / 0");
    }
}
