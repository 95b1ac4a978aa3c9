use thiserror::Error;

use crate::model::Domain;

/// Topic key used when a question carries no topic label.
pub const GENERAL_TOPIC: &str = "General";

/// Errors that can occur while constructing a question.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question must have at least one option")]
    NoOptions,

    #[error("correct answer index {index} is out of range for {len} options")]
    CorrectAnswerOutOfRange { index: usize, len: usize },
}

/// A single multiple-choice question, as supplied by the question provider.
///
/// Immutable once constructed; the constructor enforces that
/// `correct_answer` indexes into `options`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: String,
    domain: Domain,
    topic: String,
    text: String,
    options: Vec<String>,
    correct_answer: usize,
    explanation: String,
}

impl Question {
    /// Build a question, validating the correct-answer index.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::NoOptions` for an empty option list and
    /// `QuestionError::CorrectAnswerOutOfRange` when `correct_answer` does
    /// not index into `options`.
    pub fn new(
        id: impl Into<String>,
        domain: Domain,
        topic: impl Into<String>,
        text: impl Into<String>,
        options: Vec<String>,
        correct_answer: usize,
        explanation: impl Into<String>,
    ) -> Result<Self, QuestionError> {
        if options.is_empty() {
            return Err(QuestionError::NoOptions);
        }
        if correct_answer >= options.len() {
            return Err(QuestionError::CorrectAnswerOutOfRange {
                index: correct_answer,
                len: options.len(),
            });
        }

        Ok(Self {
            id: id.into(),
            domain,
            topic: topic.into(),
            text: text.into(),
            options,
            correct_answer,
            explanation: explanation.into(),
        })
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn domain(&self) -> Domain {
        self.domain
    }

    #[must_use]
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Topic label used for performance rollups.
    ///
    /// Blank topics collapse to [`GENERAL_TOPIC`].
    #[must_use]
    pub fn topic_key(&self) -> &str {
        if self.topic.trim().is_empty() {
            GENERAL_TOPIC
        } else {
            &self.topic
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct_answer(&self) -> usize {
        self.correct_answer
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("option {i}")).collect()
    }

    #[test]
    fn rejects_out_of_range_correct_answer() {
        let err = Question::new(
            "q1",
            Domain::DisabilitiesChallengesAt,
            "Models",
            "Which model?",
            options(4),
            4,
            "",
        )
        .unwrap_err();
        assert_eq!(
            err,
            QuestionError::CorrectAnswerOutOfRange { index: 4, len: 4 }
        );
    }

    #[test]
    fn rejects_empty_option_list() {
        let err = Question::new(
            "q1",
            Domain::DisabilitiesChallengesAt,
            "Models",
            "Which model?",
            Vec::new(),
            0,
            "",
        )
        .unwrap_err();
        assert_eq!(err, QuestionError::NoOptions);
    }

    #[test]
    fn blank_topic_collapses_to_general() {
        let q = Question::new(
            "q1",
            Domain::AccessibilityUniversalDesign,
            "  ",
            "Prompt",
            options(4),
            1,
            "Because.",
        )
        .unwrap();
        assert_eq!(q.topic_key(), GENERAL_TOPIC);

        let q = Question::new(
            "q2",
            Domain::AccessibilityUniversalDesign,
            "UDL Guidelines",
            "Prompt",
            options(4),
            1,
            "Because.",
        )
        .unwrap();
        assert_eq!(q.topic_key(), "UDL Guidelines");
    }
}
