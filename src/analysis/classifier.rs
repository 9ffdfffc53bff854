//! Gap classification between observed and required skill maps

use crate::analysis::skills::{SkillLevel, SkillMap};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One required skill and where the candidate stands on it.
///
/// `current_level` is 0 only for missing skills; everywhere else it holds a
/// real observed level in 1..=5.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GapEntry {
    pub skill: String,
    pub required_level: SkillLevel,
    pub current_level: u8,
}

impl GapEntry {
    /// Distance left to the required level. Positive for below-level and
    /// missing skills, zero for matching ones.
    pub fn gap(&self) -> u8 {
        self.required_level.get().saturating_sub(self.current_level)
    }
}

/// Three-way partition of the required skill set.
///
/// The partitions are pairwise disjoint and their key union is exactly the
/// required map's key set. Skills observed but not required do not appear.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GapAnalysis {
    /// current >= required
    pub matching: BTreeMap<String, GapEntry>,
    /// 0 < current < required
    pub below_level: BTreeMap<String, GapEntry>,
    /// not observed at all; current recorded as 0
    pub missing: BTreeMap<String, GapEntry>,
}

impl GapAnalysis {
    pub fn required_count(&self) -> usize {
        self.matching.len() + self.below_level.len() + self.missing.len()
    }

    /// Skills that need attention: missing first, then below-level, each
    /// group in key order.
    pub fn needs_attention(&self) -> impl Iterator<Item = &GapEntry> {
        self.missing.values().chain(self.below_level.values())
    }
}

/// Partition every required skill by how the observed map measures up.
///
/// Pure over well-formed inputs: levels are range-checked at parse time, so
/// no re-validation happens here, and the inputs are never mutated.
pub fn classify(observed: &SkillMap, required: &SkillMap) -> GapAnalysis {
    let mut analysis = GapAnalysis::default();

    for (skill, required_level) in required.iter() {
        let entry = |current: u8| GapEntry {
            skill: skill.to_string(),
            required_level,
            current_level: current,
        };

        match observed.get(skill) {
            None => {
                analysis.missing.insert(skill.to_string(), entry(0));
            }
            Some(current) if current >= required_level => {
                analysis.matching.insert(skill.to_string(), entry(current.get()));
            }
            Some(current) => {
                analysis
                    .below_level
                    .insert(skill.to_string(), entry(current.get()));
            }
        }
    }
    analysis
}
