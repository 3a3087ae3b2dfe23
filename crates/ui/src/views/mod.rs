mod flashcard;
mod progress;
mod study;

pub use flashcard::FlashcardView;
pub use progress::ProgressBar;
pub use study::StudyView;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
