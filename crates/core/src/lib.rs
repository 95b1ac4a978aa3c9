#![forbid(unsafe_code)]

pub mod model;
pub mod reducer;
pub mod time;

pub use model::{
    AggregateStats, Answer, Badge, Domain, DomainScore, Question, QuestionError, SessionBatch,
    SessionBatchError, SessionReport, TopicStats, BADGE_CATALOG, GENERAL_TOPIC,
};
pub use time::Clock;
