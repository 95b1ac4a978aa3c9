/// A badge definition: identifier, display label, and emoji icon.
///
/// `AggregateStats::badges` stores earned badge ids from this catalog.
/// Unlock rules are not part of the progress engine; the catalog only
/// defines what can be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

pub const BADGE_CATALOG: [Badge; 6] = [
    Badge {
        id: "first_step",
        label: "First Step",
        icon: "🎯",
    },
    Badge {
        id: "domain_1_master",
        label: "Disability Expert",
        icon: "🧠",
    },
    Badge {
        id: "domain_2_master",
        label: "UD Architect",
        icon: "🏗️",
    },
    Badge {
        id: "domain_3_master",
        label: "Policy Guru",
        icon: "📜",
    },
    Badge {
        id: "perfect_score",
        label: "Unstoppable",
        icon: "🔥",
    },
    Badge {
        id: "streak_3",
        label: "Committed",
        icon: "🗓️",
    },
];

impl Badge {
    /// Looks up a catalog badge by id.
    #[must_use]
    pub fn by_id(id: &str) -> Option<&'static Badge> {
        BADGE_CATALOG.iter().find(|b| b.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_ids_are_unique() {
        for (i, badge) in BADGE_CATALOG.iter().enumerate() {
            assert!(
                BADGE_CATALOG[i + 1..].iter().all(|other| other.id != badge.id),
                "duplicate badge id {}",
                badge.id
            );
        }
    }

    #[test]
    fn by_id_finds_catalog_entries() {
        assert_eq!(Badge::by_id("first_step").unwrap().label, "First Step");
        assert!(Badge::by_id("nonexistent").is_none());
    }
}
