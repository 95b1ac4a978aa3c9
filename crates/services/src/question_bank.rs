//! Bundled fallback questions.
//!
//! Used whenever the AI provider is unconfigured, unreachable, or returns
//! something unusable, so a study session can always start.

use exam_core::{Domain, Question};

/// The static question set shipped with the app.
///
/// # Panics
///
/// Panics if the bundled set is internally inconsistent, which would be a
/// build-time content error.
#[must_use]
pub fn fallback_questions() -> Vec<Question> {
    vec![
        Question::new(
            "fallback-1",
            Domain::DisabilitiesChallengesAt,
            "Theoretical Models",
            "Which model of disability views the issue of disability as a socially created \
             problem and a matter of the full integration of individuals into society?",
            vec![
                "Medical Model".into(),
                "Social Model".into(),
                "Biopsychosocial Model".into(),
                "Economic Model".into(),
            ],
            1,
            "The Social Model sees disability as a socially created problem rather than an \
             attribute of an individual, emphasizing the removal of societal barriers.",
        ),
        Question::new(
            "fallback-2",
            Domain::AccessibilityUniversalDesign,
            "Universal Design",
            "What is the primary difference between Universal Design (UD) and Individualized \
             Accommodations?",
            vec![
                "UD is more expensive than accommodations".into(),
                "Accommodations are for everyone, UD is for specific people".into(),
                "UD is proactive and for a wide range of users, accommodations are reactive \
                 for individuals"
                    .into(),
                "There is no difference between the two".into(),
            ],
            2,
            "Universal Design aims to be used by the widest range of people from the start, \
             while accommodations are specific modifications for an individual case.",
        ),
        Question::new(
            "fallback-3",
            Domain::StandardsLawsManagement,
            "International Conventions",
            "Which UN instrument is the first binding international human rights instrument \
             that specifically addresses the rights of people with disabilities?",
            vec![
                "Universal Declaration of Human Rights".into(),
                "Convention on the Rights of Persons with Disabilities (CRPD)".into(),
                "Marrakesh Treaty".into(),
                "Equality Act 2010".into(),
            ],
            1,
            "The CRPD (2006) is the first legally binding convention specifically protecting \
             and recognizing the rights of people with disabilities.",
        ),
        Question::new(
            "fallback-4",
            Domain::DisabilitiesChallengesAt,
            "Visual Disabilities",
            "What percentage of males globally are affected by Red-green color vision defects?",
            vec!["0.5%".into(), "2.2%".into(), "8.3%".into(), "12%".into()],
            2,
            "According to NIH statistics in the Body of Knowledge, Red-green color vision \
             defects affect 1 in 12 males (8.3%).",
        ),
        Question::new(
            "fallback-5",
            Domain::AccessibilityUniversalDesign,
            "UDL Guidelines",
            "The UDL framework is built around three overall guidelines: Engagement, \
             Representation, and what third pillar?",
            vec![
                "Usability".into(),
                "Accessibility".into(),
                "Action & Expression".into(),
                "Compliance".into(),
            ],
            2,
            "The three UDL guidelines are Engagement (the Why), Representation (the What), \
             and Action & Expression (the How).",
        ),
    ]
    .into_iter()
    .collect::<Result<Vec<_>, _>>()
    .expect("bundled question set should be valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_set_is_valid_and_covers_all_domains() {
        let bank = fallback_questions();
        assert_eq!(bank.len(), 5);
        for domain in Domain::ALL {
            assert!(bank.iter().any(|q| q.domain() == domain));
        }
    }

    #[test]
    fn bundled_ids_are_unique() {
        let bank = fallback_questions();
        for (i, q) in bank.iter().enumerate() {
            assert!(bank[i + 1..].iter().all(|other| other.id() != q.id()));
        }
    }
}
