use std::num::NonZeroUsize;
use std::sync::OnceLock;

use thiserror::Error;

use super::builtin::BUILTIN_CARDS;
use super::flashcard::{CardError, Flashcard};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DeckError {
    #[error("a deck needs at least one card")]
    Empty,
    #[error("card {position} is invalid: {source}")]
    InvalidCard {
        position: usize,
        #[source]
        source: CardError,
    },
}

/// An ordered, non-empty sequence of cards.
///
/// A deck has no mutating methods; its length is fixed once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Flashcard>,
}

impl Deck {
    /// # Errors
    ///
    /// Returns `DeckError::Empty` if `cards` is empty.
    pub fn new(cards: Vec<Flashcard>) -> Result<Self, DeckError> {
        if cards.is_empty() {
            return Err(DeckError::Empty);
        }
        Ok(Self { cards })
    }

    /// Builds a deck from raw question/answer pairs.
    ///
    /// # Errors
    ///
    /// Returns `DeckError::InvalidCard` with the 1-based position of the first
    /// blank pair, or `DeckError::Empty` for no pairs.
    pub fn from_pairs<Q, A>(pairs: impl IntoIterator<Item = (Q, A)>) -> Result<Self, DeckError>
    where
        Q: Into<String>,
        A: Into<String>,
    {
        let cards = pairs
            .into_iter()
            .enumerate()
            .map(|(idx, (question, answer))| {
                Flashcard::new(question, answer).map_err(|source| DeckError::InvalidCard {
                    position: idx + 1,
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(cards)
    }

    /// The built-in general knowledge deck, initialized once per process.
    #[must_use]
    pub fn builtin() -> &'static Deck {
        static BUILTIN: OnceLock<Deck> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            let cards = BUILTIN_CARDS
                .iter()
                .map(|&(question, answer)| Flashcard::from_static(question, answer))
                .collect();
            Deck { cards }
        })
    }

    #[must_use]
    pub fn len(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.cards.len()).unwrap_or(NonZeroUsize::MIN)
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Flashcard> {
        self.cards.get(index)
    }

    /// Card at `index`, wrapping around the end of the deck.
    #[must_use]
    pub fn card(&self, index: usize) -> &Flashcard {
        &self.cards[index % self.cards.len()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Flashcard> {
        self.cards.iter()
    }
}
