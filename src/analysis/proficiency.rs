//! Phrase-based proficiency estimation
//!
//! Proficiency is read off fixed English phrase templates, checked against
//! the lowercased document in strict descending tier order. The highest
//! tier with any matching phrase wins; a document claiming "advanced X"
//! anywhere outranks a generic "experience with X" elsewhere. No averaging.

use crate::analysis::skills::SkillLevel;

/// Phrase templates per tier, highest first. `{}` is the skill name.
const TIERS: &[(u8, &[&str])] = &[
    (5, &["expert in {}", "advanced {}", "senior {}", "5+ years of {}"]),
    (4, &["proficient in {}", "strong {} skills", "3-5 years of {}"]),
    (3, &["experience with {}", "working knowledge of {}", "1-3 years of {}"]),
    (2, &["familiar with {}", "basic {} knowledge", "beginner level {}"]),
];

/// Estimate the proficiency level for `skill` from the full document text.
///
/// Deterministic and case-insensitive. Returns 1 (baseline awareness) when
/// no template matches; a skill that reached this function was already
/// recognized in the text, so it is never absent.
pub fn estimate(skill: &str, text: &str) -> SkillLevel {
    let text = text.to_lowercase();
    let skill = skill.to_lowercase();

    for (level, templates) in TIERS {
        let matched = templates
            .iter()
            .any(|template| text.contains(&template.replace("{}", &skill)));
        if matched {
            return SkillLevel::new(*level);
        }
    }
    SkillLevel::MIN
}
