mod badge;
mod domain;
mod question;
mod session;
mod stats;

pub use badge::{Badge, BADGE_CATALOG};
pub use domain::Domain;
pub use question::{Question, QuestionError, GENERAL_TOPIC};
pub use session::{
    Answer, SessionBatch, SessionBatchError, SessionReport, SESSION_COMPLETION_XP, XP_PER_CORRECT,
};
pub use stats::{AggregateStats, DomainScore, TopicStats, RECENT_SCORES_CAP, XP_PER_LEVEL};
