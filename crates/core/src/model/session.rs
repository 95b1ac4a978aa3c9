use thiserror::Error;

use crate::model::Question;

/// XP granted per correctly answered question.
pub const XP_PER_CORRECT: u32 = 10;

/// Flat XP granted for finishing a session, regardless of the result.
pub const SESSION_COMPLETION_XP: u32 = 50;

/// The user's response to one question in a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    /// The zero-based index of the chosen option.
    Selected(usize),
    /// The question was skipped or the timer ran out before it was reached.
    Unanswered,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionBatchError {
    #[error("session batch is empty")]
    Empty,

    #[error("answer count ({answers}) does not match question count ({questions})")]
    LengthMismatch { questions: usize, answers: usize },

    #[error(
        "answer at position {position} selects option {selected} but the question has {options} options"
    )]
    AnswerOutOfRange {
        position: usize,
        selected: usize,
        options: usize,
    },
}

/// A completed session: questions paired by position with the user's answers.
///
/// Construction fails fast on contract violations (empty batch, length
/// mismatch, out-of-range selection) so the reducer never has to guard
/// against them and cannot half-apply a corrupt batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionBatch {
    questions: Vec<Question>,
    answers: Vec<Answer>,
}

impl SessionBatch {
    /// Pair questions with answers, validating the batch.
    ///
    /// # Errors
    ///
    /// Returns `SessionBatchError` if the batch is empty, the lists differ
    /// in length, or any selected index does not fit its question.
    pub fn new(questions: Vec<Question>, answers: Vec<Answer>) -> Result<Self, SessionBatchError> {
        if questions.is_empty() {
            return Err(SessionBatchError::Empty);
        }
        if questions.len() != answers.len() {
            return Err(SessionBatchError::LengthMismatch {
                questions: questions.len(),
                answers: answers.len(),
            });
        }
        for (position, (question, answer)) in questions.iter().zip(&answers).enumerate() {
            if let Answer::Selected(selected) = *answer {
                if selected >= question.options().len() {
                    return Err(SessionBatchError::AnswerOutOfRange {
                        position,
                        selected,
                        options: question.options().len(),
                    });
                }
            }
        }

        Ok(Self { questions, answers })
    }

    /// Iterate over (question, answer) pairs in presentation order.
    pub fn pairs(&self) -> impl Iterator<Item = (&Question, Answer)> {
        self.questions.iter().zip(self.answers.iter().copied())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Number of questions that received an answer.
    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers
            .iter()
            .filter(|a| matches!(a, Answer::Selected(_)))
            .count()
    }

    /// Number of correctly answered questions.
    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.pairs()
            .filter(|(q, a)| matches!(a, Answer::Selected(s) if *s == q.correct_answer()))
            .count()
    }

    /// Session score as an integer percentage.
    ///
    /// The denominator is the full batch length, unanswered questions
    /// included, so skipping a question lowers the score. This mirrors the
    /// shipped scoring behavior even though the per-domain and per-topic
    /// counters only move for answered questions. An empty denominator
    /// scores 0, though `new` rejects empty batches.
    #[must_use]
    pub fn score(&self) -> u8 {
        if self.questions.is_empty() {
            return 0;
        }
        (self.correct_count() as f64 * 100.0 / self.questions.len() as f64).round() as u8
    }

    /// XP this session earns: per-correct award plus the completion bonus.
    #[must_use]
    pub fn xp_earned(&self) -> u32 {
        let correct = u32::try_from(self.correct_count()).unwrap_or(u32::MAX);
        correct
            .saturating_mul(XP_PER_CORRECT)
            .saturating_add(SESSION_COMPLETION_XP)
    }

    /// Summary of the batch for the end-of-session screen.
    #[must_use]
    pub fn report(&self) -> SessionReport {
        SessionReport {
            total: self.len(),
            answered: self.answered_count(),
            correct: self.correct_count(),
            score: self.score(),
            xp_earned: self.xp_earned(),
        }
    }
}

/// What a finished session looked like, independent of the running totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionReport {
    pub total: usize,
    pub answered: usize,
    pub correct: usize,
    pub score: u8,
    pub xp_earned: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Domain;

    fn question(id: &str, correct: usize) -> Question {
        Question::new(
            id,
            Domain::DisabilitiesChallengesAt,
            "Models",
            "Prompt?",
            vec!["a".into(), "b".into(), "c".into(), "d".into()],
            correct,
            "Explanation.",
        )
        .unwrap()
    }

    #[test]
    fn rejects_empty_batch() {
        let err = SessionBatch::new(Vec::new(), Vec::new()).unwrap_err();
        assert_eq!(err, SessionBatchError::Empty);
    }

    #[test]
    fn rejects_length_mismatch() {
        let err = SessionBatch::new(vec![question("q1", 0)], Vec::new()).unwrap_err();
        assert_eq!(
            err,
            SessionBatchError::LengthMismatch {
                questions: 1,
                answers: 0
            }
        );
    }

    #[test]
    fn rejects_selection_outside_the_option_list() {
        let err = SessionBatch::new(vec![question("q1", 0)], vec![Answer::Selected(4)])
            .unwrap_err();
        assert_eq!(
            err,
            SessionBatchError::AnswerOutOfRange {
                position: 0,
                selected: 4,
                options: 4
            }
        );
    }

    #[test]
    fn score_divides_by_the_full_batch_length() {
        // Preserved quirk: an unanswered question is excluded from every
        // counter but still drags the session score down.
        let batch = SessionBatch::new(
            vec![question("q1", 1), question("q2", 2), question("q3", 0)],
            vec![Answer::Selected(1), Answer::Selected(1), Answer::Unanswered],
        )
        .unwrap();

        assert_eq!(batch.answered_count(), 2);
        assert_eq!(batch.correct_count(), 1);
        assert_eq!(batch.score(), 33);
    }

    #[test]
    fn report_totals_line_up() {
        let batch = SessionBatch::new(
            vec![question("q1", 1), question("q2", 2)],
            vec![Answer::Selected(1), Answer::Selected(2)],
        )
        .unwrap();

        let report = batch.report();
        assert_eq!(report.total, 2);
        assert_eq!(report.answered, 2);
        assert_eq!(report.correct, 2);
        assert_eq!(report.score, 100);
        assert_eq!(report.xp_earned, 70);
    }
}
