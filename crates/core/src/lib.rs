pub mod error;
pub mod model;
pub mod study;

pub use error::Error;
