//! Quiz session lifecycle: answer once, advance forward, complete, restart.

use rand::Rng;

use super::answer;
use super::quiz::{generate_questions, Question, QuizMode};
use super::vocabulary::Word;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    InProgress,
    Complete,
}

/// What the user submitted for the current question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    pub submitted: String,
    pub correct: bool,
}

/// One pass through a shuffled question sequence.
#[derive(Debug)]
pub struct QuizSession {
    mode: QuizMode,
    words: Vec<&'static Word>,
    questions: Vec<Question>,
    index: usize,
    score: usize,
    answer: Option<AnswerRecord>,
    phase: Phase,
}

impl QuizSession {
    /// Generate a fresh question sequence over `words`.  An empty word list
    /// gives a session that is already complete with a 0/0 score.
    pub fn start<R: Rng + ?Sized>(words: Vec<&'static Word>, mode: QuizMode, rng: &mut R) -> Self {
        let mut session = Self {
            mode,
            words,
            questions: Vec::new(),
            index: 0,
            score: 0,
            answer: None,
            phase: Phase::InProgress,
        };
        session.restart(rng);
        session
    }

    /// Regenerate questions and reset to the first one with a zero score.
    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.questions = generate_questions(&self.words, self.mode, rng);
        self.index = 0;
        self.score = 0;
        self.answer = None;
        self.phase = if self.questions.is_empty() {
            Phase::Complete
        } else {
            Phase::InProgress
        };
        tracing::debug!(
            mode = self.mode.label(),
            questions = self.questions.len(),
            "quiz session started"
        );
    }

    /// Evaluate `submission` against the current question.
    ///
    /// Returns `None` when the question was already answered or the session
    /// is complete; the submission is then ignored.
    pub fn submit(&mut self, submission: &str) -> Option<bool> {
        if self.phase == Phase::Complete || self.answer.is_some() {
            return None;
        }
        let question = self.questions.get(self.index)?;
        let correct = answer::evaluate(submission, question);
        if correct {
            self.score += 1;
        }
        self.answer = Some(AnswerRecord {
            submitted: submission.to_string(),
            correct,
        });
        Some(correct)
    }

    /// Move past the current (answered) question.  Unanswered questions
    /// can't be skipped.  Returns `true` if the session moved.
    pub fn advance(&mut self) -> bool {
        if self.phase == Phase::Complete || self.answer.is_none() {
            return false;
        }
        self.answer = None;
        if self.index + 1 < self.questions.len() {
            self.index += 1;
        } else {
            self.phase = Phase::Complete;
            tracing::debug!(score = self.score, total = self.questions.len(), "quiz complete");
        }
        true
    }

    pub fn current(&self) -> Option<&Question> {
        match self.phase {
            Phase::InProgress => self.questions.get(self.index),
            Phase::Complete => None,
        }
    }

    pub fn mode(&self) -> QuizMode {
        self.mode
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }

    pub fn answer(&self) -> Option<&AnswerRecord> {
        self.answer.as_ref()
    }

    pub fn has_answered(&self) -> bool {
        self.answer.is_some()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    #[cfg(test)]
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[cfg(test)]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// `"3/26"` — 1-based position of the current question.
    pub fn progress_label(&self) -> String {
        if self.is_empty() {
            return "0/0".to_string();
        }
        let shown = (self.index + 1).min(self.questions.len());
        format!("{}/{}", shown, self.questions.len())
    }

    /// Fraction of questions answered correctly, in `[0, 1]`.
    pub fn score_ratio(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.score as f64 / self.questions.len() as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::vocabulary::{filter_words, CategoryFilter};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn correct_of(session: &QuizSession) -> String {
        session.current().expect("in progress").correct_answer().to_string()
    }

    #[test]
    fn two_question_mcq_answered_correctly_scores_full() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let words = filter_words(CategoryFilter::Labor)[..2].to_vec();
        let mut session = QuizSession::start(words, QuizMode::MultipleChoice, &mut rng);
        assert_eq!(session.len(), 2);

        for _ in 0..2 {
            let answer = correct_of(&session);
            let options = session.current().and_then(|q| q.options.clone()).expect("options");
            assert!(options.contains(&answer));
            assert_eq!(session.submit(&answer), Some(true));
            assert!(session.advance());
        }

        assert!(session.is_complete());
        assert_eq!(session.score(), 2);
        assert_eq!(session.len(), 2);
        assert_eq!(session.score_ratio(), 1.0);
    }

    #[test]
    fn second_submission_is_ignored() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let mut session =
            QuizSession::start(filter_words(CategoryFilter::Climate), QuizMode::Writing, &mut rng);
        let answer = correct_of(&session);
        assert_eq!(session.submit(&answer), Some(true));
        assert_eq!(session.submit(&answer), None);
        assert_eq!(session.submit("wrong"), None);
        assert_eq!(session.score(), 1);
        assert_eq!(session.answer().map(|a| a.correct), Some(true));
    }

    #[test]
    fn wrong_answer_scores_nothing() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut session =
            QuizSession::start(filter_words(CategoryFilter::All), QuizMode::Writing, &mut rng);
        assert_eq!(session.submit("qwertyuiop"), Some(false));
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn cannot_advance_without_answering() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let mut session =
            QuizSession::start(filter_words(CategoryFilter::Labor), QuizMode::Writing, &mut rng);
        assert!(!session.advance());
        assert_eq!(session.index(), 0);
        session.submit("x");
        assert!(session.advance());
        assert_eq!(session.index(), 1);
        assert!(!session.has_answered());
        assert_eq!(session.progress_label(), "2/25");
    }

    #[test]
    fn completes_after_last_question_and_stays_complete() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let words = filter_words(CategoryFilter::Climate)[..3].to_vec();
        let mut session = QuizSession::start(words, QuizMode::Writing, &mut rng);
        for _ in 0..3 {
            session.submit("nope");
            session.advance();
        }
        assert_eq!(session.phase(), Phase::Complete);
        assert!(session.current().is_none());
        assert_eq!(session.submit("anything"), None);
        assert!(!session.advance());
    }

    #[test]
    fn restart_resets_score_and_reshuffles() {
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        let mut session =
            QuizSession::start(filter_words(CategoryFilter::All), QuizMode::MultipleChoice, &mut rng);
        let first_order: Vec<_> = session.questions().iter().map(|q| q.word.id).collect();
        while !session.is_complete() {
            let answer = correct_of(&session);
            session.submit(&answer);
            session.advance();
        }
        assert_eq!(session.score(), session.len());

        session.restart(&mut rng);
        assert_eq!(session.phase(), Phase::InProgress);
        assert_eq!(session.index(), 0);
        assert_eq!(session.score(), 0);
        assert!(!session.has_answered());
        let second_order: Vec<_> = session.questions().iter().map(|q| q.word.id).collect();
        assert_eq!(second_order.len(), first_order.len());
        assert_ne!(first_order, second_order);
    }

    #[test]
    fn empty_word_list_is_immediately_complete() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut session = QuizSession::start(Vec::new(), QuizMode::MultipleChoice, &mut rng);
        assert!(session.is_empty());
        assert!(session.is_complete());
        assert_eq!(session.score_ratio(), 0.0);
        assert_eq!(session.progress_label(), "0/0");
        assert_eq!(session.submit("x"), None);
    }
}
