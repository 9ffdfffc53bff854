//! Skill level and skill map types shared by the extraction and
//! classification engines

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Proficiency level in the 1..=5 range.
///
/// Level 0 is never stored here; it exists only as the `current_level`
/// sentinel on a missing-skill gap entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct SkillLevel(u8);

impl SkillLevel {
    pub const MIN: SkillLevel = SkillLevel(1);
    pub const MAX: SkillLevel = SkillLevel(5);

    /// Build a level, clamping out-of-range values into 1..=5.
    pub fn new(raw: u8) -> Self {
        SkillLevel(raw.clamp(1, 5))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Human-readable tier name.
    pub fn describe(self) -> &'static str {
        match self.0 {
            5 => "expert",
            4 => "advanced",
            3 => "intermediate",
            2 => "basic",
            _ => "awareness",
        }
    }
}

impl TryFrom<u8> for SkillLevel {
    type Error = String;

    fn try_from(raw: u8) -> std::result::Result<Self, Self::Error> {
        if (1..=5).contains(&raw) {
            Ok(SkillLevel(raw))
        } else {
            Err(format!("proficiency level {} is outside the valid range 1-5", raw))
        }
    }
}

impl From<SkillLevel> for u8 {
    fn from(level: SkillLevel) -> u8 {
        level.0
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Mapping from skill name to proficiency level.
///
/// Keys are compared case-insensitively; the casing of the first insertion
/// is preserved for display. Serializes as a plain `{name: level}` object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<String, SkillLevel>",
    into = "BTreeMap<String, SkillLevel>"
)]
pub struct SkillMap {
    entries: BTreeMap<String, SkillEntry>,
}

#[derive(Debug, Clone, PartialEq)]
struct SkillEntry {
    display: String,
    level: SkillLevel,
}

impl SkillMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a skill. An existing case-insensitive match keeps its display
    /// casing and takes the new level.
    pub fn insert(&mut self, name: impl Into<String>, level: SkillLevel) {
        let display = name.into();
        let key = display.to_lowercase();
        self.entries
            .entry(key)
            .and_modify(|e| e.level = level)
            .or_insert(SkillEntry { display, level });
    }

    pub fn get(&self, name: &str) -> Option<SkillLevel> {
        self.entries.get(&name.to_lowercase()).map(|e| e.level)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&name.to_lowercase())
    }

    /// Iterate over (display name, level) pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, SkillLevel)> {
        self.entries.values().map(|e| (e.display.as_str(), e.level))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<BTreeMap<String, SkillLevel>> for SkillMap {
    fn from(map: BTreeMap<String, SkillLevel>) -> Self {
        let mut skills = SkillMap::new();
        for (name, level) in map {
            skills.insert(name, level);
        }
        skills
    }
}

impl From<SkillMap> for BTreeMap<String, SkillLevel> {
    fn from(skills: SkillMap) -> Self {
        skills
            .entries
            .into_values()
            .map(|e| (e.display, e.level))
            .collect()
    }
}

impl FromIterator<(String, SkillLevel)> for SkillMap {
    fn from_iter<I: IntoIterator<Item = (String, SkillLevel)>>(iter: I) -> Self {
        let mut skills = SkillMap::new();
        for (name, level) in iter {
            skills.insert(name, level);
        }
        skills
    }
}
