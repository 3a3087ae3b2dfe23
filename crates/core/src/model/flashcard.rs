use thiserror::Error;

//
// ─── SIDE ──────────────────────────────────────────────────────────────────────
//

/// Which face of a card is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Side {
    #[default]
    Question,
    Answer,
}

impl Side {
    /// Returns the opposite face.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Side::Question => Side::Answer,
            Side::Answer => Side::Question,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Side::Question => "QUESTION",
            Side::Answer => "ANSWER",
        }
    }
}

//
// ─── FLASHCARD ─────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flashcard {
    question: String,
    answer: String,
}

impl Flashcard {
    /// Builds a card from a question/answer pair.
    ///
    /// # Errors
    ///
    /// Returns `CardError::EmptyQuestion` or `CardError::EmptyAnswer` when the
    /// corresponding text is blank.
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
    ) -> Result<Self, CardError> {
        let question = question.into();
        let answer = answer.into();

        if question.trim().is_empty() {
            return Err(CardError::EmptyQuestion);
        }
        if answer.trim().is_empty() {
            return Err(CardError::EmptyAnswer);
        }

        Ok(Self { question, answer })
    }

    /// For compiled-in text that is known to be non-blank.
    pub(super) fn from_static(question: &'static str, answer: &'static str) -> Self {
        Self {
            question: question.to_string(),
            answer: answer.to_string(),
        }
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Text printed on the given face.
    #[must_use]
    pub fn face(&self, side: Side) -> &str {
        match side {
            Side::Question => &self.question,
            Side::Answer => &self.answer,
        }
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CardError {
    #[error("question must not be empty")]
    EmptyQuestion,
    #[error("answer must not be empty")]
    EmptyAnswer,
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
