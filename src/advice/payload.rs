//! Typed payloads returned by the advice generation service
//!
//! The service is a best-effort text generator; every field defaults so a
//! partially-formed response still deserializes. The engine threads these
//! payloads through to the report without interpreting their content.

use serde::{Deserialize, Serialize};

/// Structured learning path for one skill.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LearningPath {
    #[serde(default)]
    pub skill: String,
    #[serde(default)]
    pub current_level: u8,
    #[serde(default)]
    pub target_level: u8,
    #[serde(default)]
    pub current_level_desc: String,
    #[serde(default)]
    pub target_level_desc: String,
    #[serde(default)]
    pub learning_path: Vec<String>,
    #[serde(default)]
    pub resources: Vec<Resource>,
    #[serde(default)]
    pub time_commitment: String,
    #[serde(default)]
    pub projects: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Resource {
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
}

/// Quick next-level tips for a skill the candidate already matches on.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImprovementTips {
    #[serde(default)]
    pub skill: String,
    #[serde(default)]
    pub current_level: u8,
    #[serde(default)]
    pub target_level: u8,
    #[serde(default)]
    pub tips: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_learning_path_tolerates_missing_fields() {
        let json = r#"{"skill": "Python", "learning_path": ["Step 1"]}"#;
        let path: LearningPath = serde_json::from_str(json).unwrap();
        assert_eq!(path.skill, "Python");
        assert_eq!(path.learning_path.len(), 1);
        assert!(path.resources.is_empty());
        assert!(path.time_commitment.is_empty());
    }

    #[test]
    fn test_resource_type_field_rename() {
        let json = r#"{"type": "Course", "title": "Intro", "url": "https://example.com"}"#;
        let resource: Resource = serde_json::from_str(json).unwrap();
        assert_eq!(resource.kind, "Course");
    }

    #[test]
    fn test_tips_tolerate_empty_object() {
        let tips: ImprovementTips = serde_json::from_str("{}").unwrap();
        assert!(tips.tips.is_empty());
    }
}
