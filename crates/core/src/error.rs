use thiserror::Error;

use crate::model::{CardError, DeckError};
use crate::study::StudyError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Card(#[from] CardError),
    #[error(transparent)]
    Deck(#[from] DeckError),
    #[error(transparent)]
    Study(#[from] StudyError),
}
