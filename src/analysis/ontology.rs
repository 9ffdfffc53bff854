//! Skill ontology: the controlled vocabulary for skill recognition

use crate::error::{Result, SkillGapError};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

/// Metadata attached to an ontology skill entry.
///
/// Real ontology files carry free-form extras; only the fields this engine
/// reads are modeled, everything else is ignored on load.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillMetadata {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub aliases: Vec<String>,
}

/// JSON file shape: `{"skills": {category: {name: metadata}}}`
#[derive(Debug, Deserialize)]
struct OntologyFile {
    #[serde(default)]
    skills: BTreeMap<String, BTreeMap<String, SkillMetadata>>,
}

/// Loaded, read-only skill ontology.
///
/// Skill names are unique case-insensitively across all categories; a
/// duplicate keeps the first entry seen. Aliases are indexed for
/// recognition and resolve to their canonical name.
#[derive(Debug, Clone, Default)]
pub struct SkillOntology {
    categories: BTreeMap<String, BTreeMap<String, SkillMetadata>>,
    // lowercase name or alias -> (category, canonical name)
    index: HashMap<String, (String, String)>,
}

impl SkillOntology {
    /// Empty ontology: recognizes nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load from a JSON file. A missing file degrades to an empty ontology.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            warn!(
                "Skill ontology not found at {}, using empty ontology",
                path.display()
            );
            return Ok(Self::empty());
        }

        let content = std::fs::read_to_string(path)?;
        let ontology = Self::from_json(&content)?;
        debug!(
            "Loaded skill ontology: {} skills in {} categories",
            ontology.skill_count(),
            ontology.category_count()
        );
        Ok(ontology)
    }

    /// Parse from a JSON string of shape `{"skills": {category: {name: ..}}}`.
    pub fn from_json(content: &str) -> Result<Self> {
        let file: OntologyFile = serde_json::from_str(content)
            .map_err(|e| SkillGapError::Ontology(format!("Failed to parse ontology: {}", e)))?;

        let mut ontology = Self::empty();
        for (category, skills) in file.skills {
            for (name, metadata) in skills {
                ontology.add_skill(&category, &name, metadata);
            }
            ontology.categories.entry(category).or_default();
        }
        Ok(ontology)
    }

    fn add_skill(&mut self, category: &str, name: &str, metadata: SkillMetadata) {
        let key = name.to_lowercase();
        if self.index.contains_key(&key) {
            warn!("Duplicate ontology skill '{}', keeping the first entry", name);
            return;
        }

        self.index
            .insert(key, (category.to_string(), name.to_string()));
        for alias in &metadata.aliases {
            let alias_key = alias.to_lowercase();
            if !self.index.contains_key(&alias_key) {
                self.index
                    .insert(alias_key, (category.to_string(), name.to_string()));
            }
        }
        self.categories
            .entry(category.to_string())
            .or_default()
            .insert(name.to_string(), metadata);
    }

    /// Resolve a name or alias (case-insensitive) to its canonical name.
    pub fn canonical(&self, name: &str) -> Option<&str> {
        self.index
            .get(&name.to_lowercase())
            .map(|(_, canonical)| canonical.as_str())
    }

    /// Category a name or alias belongs to.
    pub fn category_of(&self, name: &str) -> Option<&str> {
        self.index
            .get(&name.to_lowercase())
            .map(|(category, _)| category.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(&name.to_lowercase())
    }

    /// All recognizable surface forms: canonical names and aliases.
    pub fn recognizable_names(&self) -> Vec<&str> {
        self.index.keys().map(|k| k.as_str()).collect()
    }

    pub fn categories(&self) -> impl Iterator<Item = (&str, &BTreeMap<String, SkillMetadata>)> {
        self.categories.iter().map(|(c, s)| (c.as_str(), s))
    }

    pub fn skill_count(&self) -> usize {
        self.categories.values().map(|s| s.len()).sum()
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}
