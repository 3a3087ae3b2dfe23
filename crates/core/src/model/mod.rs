mod builtin;
mod deck;
mod flashcard;

pub use deck::{Deck, DeckError};
pub use flashcard::{CardError, Flashcard, Side};
