//! Answer evaluation.
//!
//! Matching is deliberately lenient: a submission is accepted when, after
//! normalisation, it equals one of the `/`-separated synonyms of the correct
//! answer *or contains one as a substring*.  So "internaliser les
//! externalités" is accepted for "Internaliser", and so is any sentence that
//! happens to include the right word.  This is known behaviour and is kept
//! as-is; tightening it would change which answers score.

use super::quiz::Question;

/// Lower-case and trim an answer string before comparison.
pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Normalised, non-empty synonyms of a correct-answer field.
pub fn synonyms(correct: &str) -> Vec<String> {
    correct
        .split('/')
        .map(normalize)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Lenient match of `submission` against the correct-answer field `correct`.
pub fn matches(submission: &str, correct: &str) -> bool {
    let submitted = normalize(submission);
    synonyms(correct)
        .iter()
        .any(|ans| submitted == *ans || submitted.contains(ans.as_str()))
}

/// Is `submission` a correct answer to `question`?
pub fn evaluate(submission: &str, question: &Question) -> bool {
    matches(submission, question.correct_answer())
}

/// Strict check used to highlight the correct option after answering.
pub fn is_exact_option(option: &str, question: &Question) -> bool {
    option == question.correct_answer()
}
