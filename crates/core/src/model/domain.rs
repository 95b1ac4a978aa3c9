use std::fmt;

use serde::{Deserialize, Serialize};

/// The three fixed CPACC knowledge domains.
///
/// The serialized form of each variant is its full label string. Those
/// labels are both the wire format of the question provider and the keys
/// of the persisted `domainPerformance` map, so they must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Domain {
    #[serde(rename = "Domain 1: Disabilities, Challenges & AT")]
    DisabilitiesChallengesAt,
    #[serde(rename = "Domain 2: Accessibility & Universal Design")]
    AccessibilityUniversalDesign,
    #[serde(rename = "Domain 3: Standards, Laws & Management")]
    StandardsLawsManagement,
}

impl Domain {
    pub const ALL: [Domain; 3] = [
        Domain::DisabilitiesChallengesAt,
        Domain::AccessibilityUniversalDesign,
        Domain::StandardsLawsManagement,
    ];

    /// Full label as used by the question provider and the stored record.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Domain::DisabilitiesChallengesAt => "Domain 1: Disabilities, Challenges & AT",
            Domain::AccessibilityUniversalDesign => "Domain 2: Accessibility & Universal Design",
            Domain::StandardsLawsManagement => "Domain 3: Standards, Laws & Management",
        }
    }

    /// Short name for compact reporting, the part of the label before the colon.
    #[must_use]
    pub fn short_name(&self) -> &'static str {
        match self {
            Domain::DisabilitiesChallengesAt => "Domain 1",
            Domain::AccessibilityUniversalDesign => "Domain 2",
            Domain::StandardsLawsManagement => "Domain 3",
        }
    }

    /// Resolves a provider label back to a domain, `None` for unknown labels.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.label() == label)
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
