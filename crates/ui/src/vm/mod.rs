mod study_vm;

pub use study_vm::{StudyVm, intent_for_key};
