use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::model::Domain;

/// Maximum number of session scores retained, most recent first.
pub const RECENT_SCORES_CAP: usize = 10;

/// XP required per level.
pub const XP_PER_LEVEL: u32 = 500;

/// Correct/total counters for a single domain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainScore {
    pub correct: u32,
    pub total: u32,
}

impl DomainScore {
    /// Accuracy as an integer percentage, 0 when nothing was answered yet.
    #[must_use]
    pub fn percent(&self) -> u8 {
        percent(self.correct, self.total)
    }
}

/// Per-topic counters plus spaced-repetition bookkeeping.
///
/// `interval` doubles on every correct answer and resets to 1 on any
/// incorrect one. It is stored for future scheduling but nothing reads it
/// back yet to pick questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicStats {
    pub correct: u32,
    pub total: u32,
    pub last_tested: DateTime<Utc>,
    pub interval: u64,
}

impl TopicStats {
    /// Fresh entry for a topic first seen at `at`.
    #[must_use]
    pub fn first_seen(at: DateTime<Utc>) -> Self {
        Self {
            correct: 0,
            total: 0,
            last_tested: at,
            interval: 1,
        }
    }

    #[must_use]
    pub fn percent(&self) -> u8 {
        percent(self.correct, self.total)
    }
}

/// The whole persisted study record for one user profile.
///
/// This is the single source of truth the dashboard renders from. It is
/// updated only by [`apply_session`](AggregateStats::apply_session) and by
/// the reset action, and serializes to the JSON record kept under the
/// fixed storage key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateStats {
    pub total_questions_answered: u32,
    pub correct_answers: u32,
    pub xp: u32,
    pub badges: Vec<String>,
    pub domain_performance: HashMap<Domain, DomainScore>,
    pub topic_performance: HashMap<String, TopicStats>,
    pub recent_scores: Vec<u8>,
    pub streak: u32,
    pub last_activity_date: Option<NaiveDate>,
}

impl AggregateStats {
    /// The zeroed starting record, with all three domain keys present.
    #[must_use]
    pub fn new() -> Self {
        Self {
            total_questions_answered: 0,
            correct_answers: 0,
            xp: 0,
            badges: Vec::new(),
            domain_performance: Domain::ALL
                .into_iter()
                .map(|d| (d, DomainScore::default()))
                .collect(),
            topic_performance: HashMap::new(),
            recent_scores: Vec::new(),
            streak: 0,
            last_activity_date: None,
        }
    }

    /// Current level, starting at 1.
    #[must_use]
    pub fn level(&self) -> u32 {
        self.xp / XP_PER_LEVEL + 1
    }

    /// Progress through the current level as a percentage.
    #[must_use]
    pub fn level_progress_percent(&self) -> u8 {
        ((self.xp % XP_PER_LEVEL) / (XP_PER_LEVEL / 100)) as u8
    }

    /// Lifetime accuracy as an integer percentage.
    #[must_use]
    pub fn accuracy_percent(&self) -> u8 {
        percent(self.correct_answers, self.total_questions_answered)
    }

    /// Accuracy for one domain, 0 with no answers yet.
    #[must_use]
    pub fn domain_percent(&self, domain: Domain) -> u8 {
        self.domain_performance
            .get(&domain)
            .map(DomainScore::percent)
            .unwrap_or(0)
    }

    /// The lowest-accuracy domain among those with at least one answer.
    ///
    /// `None` until any question has been answered.
    #[must_use]
    pub fn weakest_domain(&self) -> Option<Domain> {
        Domain::ALL
            .into_iter()
            .filter_map(|d| {
                let score = self.domain_performance.get(&d)?;
                (score.total > 0).then(|| (d, f64::from(score.correct) / f64::from(score.total)))
            })
            .min_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(d, _)| d)
    }
}

impl Default for AggregateStats {
    fn default() -> Self {
        Self::new()
    }
}

fn percent(correct: u32, total: u32) -> u8 {
    if total == 0 {
        return 0;
    }
    (f64::from(correct) * 100.0 / f64::from(total)).round() as u8
}
