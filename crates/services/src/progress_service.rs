use std::sync::Arc;

use tracing::warn;

use exam_core::{
    AggregateStats, Answer, Question, SessionBatch, SessionBatchError, SessionReport,
};
use storage::StatsRepository;

use crate::Clock;

/// Applies the session reducer and keeps the stored record in sync.
///
/// Stats are threaded through the caller: every operation takes the
/// current record and returns the next one. The service never holds
/// mutable state of its own beyond the repository handle.
#[derive(Clone)]
pub struct ProgressService {
    stats_store: Arc<dyn StatsRepository>,
    clock: Clock,
}

impl ProgressService {
    #[must_use]
    pub fn new(stats_store: Arc<dyn StatsRepository>) -> Self {
        Self {
            stats_store,
            clock: Clock::default_clock(),
        }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Load the stored record, falling back to the zeroed default.
    ///
    /// Absence is the normal first-run case. A read or parse failure is
    /// logged and swallowed; the user starts from zero rather than seeing
    /// an error.
    #[must_use]
    pub fn load(&self) -> AggregateStats {
        match self.stats_store.load() {
            Ok(Some(stats)) => stats,
            Ok(None) => AggregateStats::new(),
            Err(err) => {
                warn!(error = %err, "failed to load stored stats, starting from zero");
                AggregateStats::new()
            }
        }
    }

    /// Fold a completed session into `stats` and persist the result.
    ///
    /// The write is fire-and-forget: a save failure is logged but the
    /// updated record is still returned, so the in-memory state never
    /// diverges from what the user just did.
    #[must_use]
    pub fn complete_session(
        &self,
        stats: &AggregateStats,
        batch: &SessionBatch,
    ) -> (AggregateStats, SessionReport) {
        let next = stats.apply_session(batch, self.clock.now());
        self.persist(&next);
        (next, batch.report())
    }

    /// Variant of [`complete_session`](Self::complete_session) for callers
    /// holding raw question and answer lists, as the exam view does.
    ///
    /// # Errors
    ///
    /// Returns `SessionBatchError` if the lists do not form a valid batch.
    pub fn complete_session_raw(
        &self,
        stats: &AggregateStats,
        questions: Vec<Question>,
        answers: Vec<Answer>,
    ) -> Result<(AggregateStats, SessionReport), SessionBatchError> {
        let batch = SessionBatch::new(questions, answers)?;
        Ok(self.complete_session(stats, &batch))
    }

    /// Discard all progress and persist the zeroed default.
    #[must_use]
    pub fn reset(&self) -> AggregateStats {
        let fresh = AggregateStats::new();
        self.persist(&fresh);
        fresh
    }

    fn persist(&self, stats: &AggregateStats) {
        if let Err(err) = self.stats_store.save(stats) {
            warn!(error = %err, "failed to persist stats record");
        }
    }
}
