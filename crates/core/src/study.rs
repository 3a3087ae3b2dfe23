use std::num::NonZeroUsize;

use thiserror::Error;

use crate::model::{Deck, Side};

/// A user action on the study state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StudyIntent {
    Next,
    Prev,
    Flip,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StudyError {
    #[error("start card {index} is outside a deck of {len} cards")]
    StartOutOfRange { index: usize, len: usize },
}

/// Current card index and which side is showing.
///
/// Every transition is total. Moving to another card always shows its
/// question side first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StudyState {
    index: usize,
    flipped: bool,
    len: NonZeroUsize,
}

impl StudyState {
    #[must_use]
    pub fn new(len: NonZeroUsize) -> Self {
        Self {
            index: 0,
            flipped: false,
            len,
        }
    }

    #[must_use]
    pub fn for_deck(deck: &Deck) -> Self {
        Self::new(deck.len())
    }

    /// Starts on the zero-based `index`.
    ///
    /// # Errors
    ///
    /// Returns `StudyError::StartOutOfRange` if `index` is not a card in the deck.
    pub fn starting_at(len: NonZeroUsize, index: usize) -> Result<Self, StudyError> {
        if index >= len.get() {
            return Err(StudyError::StartOutOfRange {
                index,
                len: len.get(),
            });
        }
        Ok(Self {
            index,
            flipped: false,
            len,
        })
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.len.get();
        self.flipped = false;
    }

    pub fn prev(&mut self) {
        let len = self.len.get();
        self.index = (self.index + len - 1) % len;
        self.flipped = false;
    }

    pub fn flip(&mut self) {
        self.flipped = !self.flipped;
    }

    pub fn apply(&mut self, intent: StudyIntent) {
        match intent {
            StudyIntent::Next => self.next(),
            StudyIntent::Prev => self.prev(),
            StudyIntent::Flip => self.flip(),
        }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// One-based position for display.
    #[must_use]
    pub fn position(&self) -> usize {
        self.index + 1
    }

    #[must_use]
    pub fn len(&self) -> NonZeroUsize {
        self.len
    }

    #[must_use]
    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    #[must_use]
    pub fn side(&self) -> Side {
        if self.flipped {
            Side::Answer
        } else {
            Side::Question
        }
    }

    /// Fraction of the deck reached, in `(0, 1]`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f64 {
        self.position() as f64 / self.len.get() as f64
    }

    #[must_use]
    pub fn percent(&self) -> f64 {
        self.progress() * 100.0
    }
}
