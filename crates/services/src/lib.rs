#![forbid(unsafe_code)]

pub mod error;
pub mod progress_service;
pub mod question_bank;
pub mod question_source;

pub use exam_core::Clock;

pub use error::QuestionSourceError;
pub use progress_service::ProgressService;
pub use question_bank::fallback_questions;
pub use question_source::{GenerationRequest, QuestionSource, QuestionSourceConfig};
