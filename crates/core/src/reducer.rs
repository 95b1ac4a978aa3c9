//! The session-completion reducer.
//!
//! One call per finished session folds a [`SessionBatch`] into the running
//! [`AggregateStats`]. The input record is untouched; callers persist the
//! returned value.

use chrono::{DateTime, NaiveDate, Utc};

use crate::model::{
    AggregateStats, Answer, SessionBatch, TopicStats, RECENT_SCORES_CAP, SESSION_COMPLETION_XP,
    XP_PER_CORRECT,
};

impl AggregateStats {
    /// Fold a completed session into the running totals.
    ///
    /// For every answered question this advances the lifetime counters and
    /// the domain and topic rollups; unanswered questions touch nothing.
    /// The daily streak is updated once per call from the calendar date of
    /// `completed_at`, the flat completion bonus is added on top of the
    /// per-correct XP, and the session score is pushed onto the bounded
    /// recent-scores list.
    #[must_use]
    pub fn apply_session(
        &self,
        batch: &SessionBatch,
        completed_at: DateTime<Utc>,
    ) -> AggregateStats {
        let mut next = self.clone();
        let mut session_xp = 0_u32;

        for (question, answer) in batch.pairs() {
            let Answer::Selected(selected) = answer else {
                continue;
            };
            let is_correct = selected == question.correct_answer();

            next.total_questions_answered = next.total_questions_answered.saturating_add(1);
            if is_correct {
                next.correct_answers = next.correct_answers.saturating_add(1);
                session_xp = session_xp.saturating_add(XP_PER_CORRECT);
            }

            let domain = next.domain_performance.entry(question.domain()).or_default();
            domain.total = domain.total.saturating_add(1);
            if is_correct {
                domain.correct = domain.correct.saturating_add(1);
            }

            let topic = next
                .topic_performance
                .entry(question.topic_key().to_owned())
                .or_insert_with(|| TopicStats::first_seen(completed_at));
            topic.total = topic.total.saturating_add(1);
            if is_correct {
                topic.correct = topic.correct.saturating_add(1);
                // Doubles without a cap; an incorrect answer resets it.
                topic.interval = topic.interval.saturating_mul(2);
            } else {
                topic.interval = 1;
            }
            topic.last_tested = completed_at;
        }

        next.update_streak(completed_at.date_naive());

        next.xp = next
            .xp
            .saturating_add(session_xp)
            .saturating_add(SESSION_COMPLETION_XP);

        next.recent_scores.insert(0, batch.score());
        next.recent_scores.truncate(RECENT_SCORES_CAP);

        next
    }

    /// Streak bookkeeping, applied once per completed session.
    ///
    /// Consecutive calendar days extend the streak; a repeat on the same
    /// day is a no-op; any other prior date, including gaps and dates in
    /// the future of `today`, restarts the streak at 1.
    fn update_streak(&mut self, today: NaiveDate) {
        match self.last_activity_date {
            Some(last) if last == today => {}
            Some(last) if last.succ_opt() == Some(today) => {
                self.streak = self.streak.saturating_add(1);
                self.last_activity_date = Some(today);
            }
            _ => {
                self.streak = 1;
                self.last_activity_date = Some(today);
            }
        }
    }
}
