//! Question generation for a quiz session.
//!
//! All randomness (order, question type, distractors, option order) is drawn
//! from a caller-supplied [`Rng`], so a seeded `ChaCha8Rng` reproduces a
//! session exactly.

use std::fmt;
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;

use super::error::StudyError;
use super::vocabulary::Word;

/// Number of options shown for a multiple-choice question when enough
/// distinct answers exist.
pub const OPTION_COUNT: usize = 4;

// ───────────────────────────────────────── mode ──────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizMode {
    MultipleChoice,
    Writing,
}

impl QuizMode {
    pub fn label(self) -> &'static str {
        match self {
            QuizMode::MultipleChoice => "Multiple Choice",
            QuizMode::Writing => "Writing Practice",
        }
    }
}

impl FromStr for QuizMode {
    type Err = StudyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mcq" | "multiple-choice" | "choice" => Ok(QuizMode::MultipleChoice),
            "write" | "writing" => Ok(QuizMode::Writing),
            other => Err(StudyError::UnknownMode(other.to_string())),
        }
    }
}

// ───────────────────────────────────────── question ──────────

/// Which side of the word is shown and which is expected back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestionType {
    /// Show English, expect French.
    EnFr,
    /// Show French, expect English.
    FrEn,
    /// Show the definition, expect English.
    DefEn,
}

impl QuestionType {
    pub const ALL: &[QuestionType] = &[QuestionType::EnFr, QuestionType::FrEn, QuestionType::DefEn];

    /// The field of `word` that answers a question of this type.
    pub fn answer_field(self, word: &Word) -> &'static str {
        match self {
            QuestionType::EnFr => word.french,
            QuestionType::FrEn | QuestionType::DefEn => word.english,
        }
    }

    pub fn prompt(self, word: &Word) -> String {
        match self {
            QuestionType::EnFr => format!("Translate to French: \"{}\"", word.english),
            QuestionType::FrEn => format!("Translate to English: \"{}\"", word.french),
            QuestionType::DefEn => {
                format!("What term matches this definition?\n\"{}\"", word.definition)
            }
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            QuestionType::EnFr => "en-fr",
            QuestionType::FrEn => "fr-en",
            QuestionType::DefEn => "def-en",
        })
    }
}

#[derive(Debug, Clone)]
pub struct Question {
    pub word: &'static Word,
    pub kind: QuestionType,
    /// Present only in multiple-choice mode.
    pub options: Option<Vec<String>>,
}

impl Question {
    pub fn correct_answer(&self) -> &'static str {
        self.kind.answer_field(self.word)
    }

    pub fn prompt(&self) -> String {
        self.kind.prompt(self.word)
    }
}

// ───────────────────────────────────────── generation ────────

/// One question per word, each word exactly once, in random order.
pub fn generate_questions<R: Rng + ?Sized>(
    words: &[&'static Word],
    mode: QuizMode,
    rng: &mut R,
) -> Vec<Question> {
    let mut order: Vec<&'static Word> = words.to_vec();
    order.shuffle(rng);

    order
        .into_iter()
        .map(|word| {
            let kind = QuestionType::ALL[rng.gen_range(0..QuestionType::ALL.len())];
            let options = match mode {
                QuizMode::MultipleChoice => Some(build_options(word, kind, words, rng)),
                QuizMode::Writing => None,
            };
            Question { word, kind, options }
        })
        .collect()
}

/// The correct answer plus up to `OPTION_COUNT - 1` distractors, shuffled.
///
/// Distractors are other words whose answer text differs from the correct
/// answer and from each other; with too few candidates the option set is
/// simply shorter.
fn build_options<R: Rng + ?Sized>(
    word: &'static Word,
    kind: QuestionType,
    words: &[&'static Word],
    rng: &mut R,
) -> Vec<String> {
    let correct = kind.answer_field(word);

    let mut candidates: Vec<&'static Word> =
        words.iter().copied().filter(|w| w.id != word.id).collect();
    candidates.shuffle(rng);

    let mut options: Vec<String> = Vec::with_capacity(OPTION_COUNT);
    options.push(correct.to_string());
    for candidate in candidates {
        if options.len() == OPTION_COUNT {
            break;
        }
        let text = kind.answer_field(candidate);
        if options.iter().all(|o| o != text) {
            options.push(text.to_string());
        }
    }

    options.shuffle(rng);
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::vocabulary::{filter_words, CategoryFilter};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    fn rng(seed: u64) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(seed)
    }

    #[test]
    fn every_word_appears_exactly_once() {
        for filter in CategoryFilter::ALL {
            let words = filter_words(*filter);
            let questions = generate_questions(&words, QuizMode::Writing, &mut rng(7));
            assert_eq!(questions.len(), words.len());
            let ids: HashSet<_> = questions.iter().map(|q| q.word.id).collect();
            assert_eq!(ids.len(), words.len());
            for w in &words {
                assert!(ids.contains(w.id));
            }
        }
    }

    #[test]
    fn writing_mode_has_no_options() {
        let words = filter_words(CategoryFilter::Labor);
        let questions = generate_questions(&words, QuizMode::Writing, &mut rng(1));
        assert!(questions.iter().all(|q| q.options.is_none()));
    }

    #[test]
    fn mcq_options_are_four_distinct_with_one_correct() {
        let words = filter_words(CategoryFilter::All);
        for seed in 0..20 {
            let questions = generate_questions(&words, QuizMode::MultipleChoice, &mut rng(seed));
            for q in &questions {
                let options = q.options.as_ref().expect("mcq question has options");
                assert_eq!(options.len(), OPTION_COUNT);
                let distinct: HashSet<_> = options.iter().collect();
                assert_eq!(distinct.len(), OPTION_COUNT);
                let correct = options.iter().filter(|o| *o == q.correct_answer()).count();
                assert_eq!(correct, 1);
            }
        }
    }

    #[test]
    fn small_lists_clamp_the_option_count() {
        let words = filter_words(CategoryFilter::Climate);
        let two = &words[..2];
        let questions = generate_questions(two, QuizMode::MultipleChoice, &mut rng(3));
        assert_eq!(questions.len(), 2);
        for q in &questions {
            let options = q.options.as_ref().expect("options");
            assert_eq!(options.len(), 2);
            assert!(options.iter().any(|o| o == q.correct_answer()));
        }

        let one = &words[..1];
        let questions = generate_questions(one, QuizMode::MultipleChoice, &mut rng(3));
        assert_eq!(questions[0].options.as_deref(), Some(&[questions[0].correct_answer().to_string()][..]));
    }

    #[test]
    fn empty_list_yields_no_questions() {
        let questions = generate_questions(&[], QuizMode::MultipleChoice, &mut rng(0));
        assert!(questions.is_empty());
    }

    #[test]
    fn same_seed_same_session() {
        let words = filter_words(CategoryFilter::All);
        let a = generate_questions(&words, QuizMode::MultipleChoice, &mut rng(42));
        let b = generate_questions(&words, QuizMode::MultipleChoice, &mut rng(42));
        for (qa, qb) in a.iter().zip(b.iter()) {
            assert_eq!(qa.word.id, qb.word.id);
            assert_eq!(qa.kind, qb.kind);
            assert_eq!(qa.options, qb.options);
        }
    }

    #[test]
    fn every_question_type_shows_up() {
        let words = filter_words(CategoryFilter::All);
        let questions = generate_questions(&words, QuizMode::Writing, &mut rng(11));
        let kinds: HashSet<_> = questions.iter().map(|q| q.kind).collect();
        assert_eq!(kinds.len(), QuestionType::ALL.len());
    }

    #[test]
    fn answer_field_follows_question_type() {
        let word = crate::core::vocabulary::find("c6").expect("c6");
        assert_eq!(QuestionType::EnFr.answer_field(word), "Taxe carbone");
        assert_eq!(QuestionType::FrEn.answer_field(word), "Carbon Tax");
        assert_eq!(QuestionType::DefEn.answer_field(word), "Carbon Tax");
        assert!(QuestionType::DefEn.prompt(word).starts_with("What term matches this definition?\n"));
    }

    #[test]
    fn mode_parses() {
        assert_eq!("mcq".parse::<QuizMode>(), Ok(QuizMode::MultipleChoice));
        assert_eq!("Writing".parse::<QuizMode>(), Ok(QuizMode::Writing));
        assert!("essay".parse::<QuizMode>().is_err());
    }
}
