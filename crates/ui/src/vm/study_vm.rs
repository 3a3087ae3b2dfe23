use std::sync::Arc;

use dioxus::prelude::Key;
use study_core::model::{Deck, Side};
use study_core::Error;
use study_core::study::{StudyIntent, StudyState};

/// Maps a key press to a study action. Only the horizontal arrows navigate.
#[must_use]
pub fn intent_for_key(key: &Key) -> Option<StudyIntent> {
    match key {
        Key::ArrowLeft => Some(StudyIntent::Prev),
        Key::ArrowRight => Some(StudyIntent::Next),
        _ => None,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct StudyVm {
    deck: Arc<Deck>,
    state: StudyState,
}

impl StudyVm {
    #[must_use]
    pub fn new(deck: Arc<Deck>) -> Self {
        let state = StudyState::for_deck(&deck);
        Self { deck, state }
    }

    /// # Errors
    ///
    /// Returns `Error::Study` when `index` is past the last card.
    pub fn starting_at(deck: Arc<Deck>, index: usize) -> Result<Self, Error> {
        let state = StudyState::starting_at(deck.len(), index)?;
        Ok(Self { deck, state })
    }

    pub fn dispatch(&mut self, intent: StudyIntent) {
        self.state.apply(intent);
        log::debug!(
            "{intent:?} -> card {} of {} ({:?})",
            self.state.position(),
            self.state.len(),
            self.state.side()
        );
    }

    #[must_use]
    pub fn state(&self) -> StudyState {
        self.state
    }

    #[must_use]
    pub fn question(&self) -> &str {
        self.deck.card(self.state.index()).question()
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        self.deck.card(self.state.index()).answer()
    }

    #[must_use]
    pub fn is_flipped(&self) -> bool {
        self.state.is_flipped()
    }

    #[must_use]
    pub fn side(&self) -> Side {
        self.state.side()
    }

    #[must_use]
    pub fn position_label(&self) -> String {
        self.state.position().to_string()
    }

    #[must_use]
    pub fn progress_label(&self) -> String {
        format!("Card {} of {}", self.state.position(), self.state.len())
    }

    #[must_use]
    pub fn progress_style(&self) -> String {
        format!("width: {:.2}%;", self.state.percent())
    }
}
