//! Skill extraction from plain document text
//!
//! Candidates come from two independent sources: a substring scan of every
//! ontology name over the full text, and a dependency-pattern scan around a
//! small set of trigger words. Both are recall-oriented; the ontology is
//! the controlled vocabulary that filters the union down.

use crate::analysis::ontology::SkillOntology;
use crate::analysis::proficiency;
use crate::analysis::skills::SkillMap;
use crate::analysis::tagger::{DepLabel, DependencyTagger, RuleBasedTagger};
use crate::error::{Result, SkillGapError};
use aho_corasick::AhoCorasick;
use log::debug;
use std::collections::BTreeSet;

/// Tokens whose surroundings are inspected by the pattern scan.
const TRIGGER_WORDS: [&str; 4] = ["experience", "proficient", "skilled", "familiar"];

pub struct SkillExtractor<'a> {
    ontology: &'a SkillOntology,
    scanner: AhoCorasick,
    // pattern id -> the scanned surface form
    names: Vec<String>,
    tagger: Box<dyn DependencyTagger + Send + Sync>,
}

impl<'a> SkillExtractor<'a> {
    /// Build an extractor over a loaded ontology, scanning with the default
    /// rule-based tagger.
    pub fn new(ontology: &'a SkillOntology) -> Result<Self> {
        Self::with_tagger(ontology, Box::new(RuleBasedTagger::new()))
    }

    pub fn with_tagger(
        ontology: &'a SkillOntology,
        tagger: Box<dyn DependencyTagger + Send + Sync>,
    ) -> Result<Self> {
        let mut names: Vec<String> = ontology
            .recognizable_names()
            .into_iter()
            .map(|s| s.to_string())
            .collect();
        // Longest first so the automaton prefers "machine learning" over "machine"
        names.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        let scanner = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(aho_corasick::MatchKind::LeftmostLongest)
            .build(&names)
            .map_err(|e| {
                SkillGapError::TextProcessing(format!("Failed to build ontology scanner: {}", e))
            })?;

        Ok(Self {
            ontology,
            scanner,
            names,
            tagger,
        })
    }

    /// Extract the observed skill map from plain text.
    ///
    /// Empty text (or an empty ontology) yields an empty map, not an error.
    pub fn extract(&self, text: &str) -> SkillMap {
        let mut candidates: BTreeSet<String> = BTreeSet::new();

        for name in self.ontology_scan(text) {
            candidates.insert(name);
        }
        for name in self.pattern_scan(text) {
            candidates.insert(name);
        }

        debug!("Extraction candidates: {}", candidates.len());

        let mut skills = SkillMap::new();
        for candidate in candidates {
            // The ontology is the controlled vocabulary: linguistically
            // plausible candidates outside it are dropped.
            let Some(canonical) = self.ontology.canonical(&candidate) else {
                continue;
            };
            if skills.contains(canonical) {
                continue;
            }
            // Score against the full document, not a local window.
            let level = proficiency::estimate(canonical, text);
            skills.insert(canonical.to_string(), level);
        }
        skills
    }

    /// Candidate source A: case-insensitive substring containment of every
    /// ontology name in the full text.
    fn ontology_scan(&self, text: &str) -> Vec<String> {
        self.scanner
            .find_iter(text)
            .map(|mat| self.names[mat.pattern().as_usize()].clone())
            .collect()
    }

    /// Candidate source B: dependents of each trigger word's syntactic head.
    ///
    /// The head-is-"with" exclusion mirrors the proximity phrases already
    /// covered by the estimator ("experience with X"); it is a heuristic
    /// filter, not a guarantee.
    fn pattern_scan(&self, text: &str) -> Vec<String> {
        let tokens = self.tagger.parse(text);
        let mut found = Vec::new();

        for (idx, token) in tokens.iter().enumerate() {
            if !TRIGGER_WORDS.contains(&token.lemma.as_str()) {
                continue;
            }
            let head = token.head;
            if tokens[head].lemma == "with" {
                continue;
            }
            for (child_idx, child) in tokens.iter().enumerate() {
                if child_idx == head || child.head != head || child_idx == idx {
                    continue;
                }
                if matches!(
                    child.dep,
                    DepLabel::DirectObject | DepLabel::Attribute | DepLabel::Conjunct
                ) {
                    found.push(child.text.clone());
                }
            }
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::tagger::{PosTag, Token};

    const ONTOLOGY: &str = r#"{
        "skills": {
            "programming": {
                "Python": {},
                "SQL": {},
                "Rust": {}
            },
            "data": {
                "Machine Learning": {"aliases": ["ML"]},
                "Data Analysis": {}
            }
        }
    }"#;

    fn ontology() -> SkillOntology {
        SkillOntology::from_json(ONTOLOGY).unwrap()
    }

    /// Tagger double returning a fixed token stream.
    struct CannedTagger(Vec<Token>);

    impl DependencyTagger for CannedTagger {
        fn parse(&self, _text: &str) -> Vec<Token> {
            self.0.clone()
        }
    }

    fn token(text: &str, pos: PosTag, head: usize, dep: DepLabel) -> Token {
        Token {
            text: text.to_string(),
            lemma: text.to_lowercase(),
            pos,
            head,
            dep,
        }
    }

    #[test]
    fn test_ontology_scan_with_proficiency_phrases() {
        let ontology = ontology();
        let extractor = SkillExtractor::new(&ontology).unwrap();

        let text = "Senior Python engineer with advanced machine learning skills";
        let skills = extractor.extract(text);

        assert_eq!(skills.len(), 2);
        assert_eq!(skills.get("Python").unwrap().get(), 5);
        assert_eq!(skills.get("Machine Learning").unwrap().get(), 5);
    }

    #[test]
    fn test_empty_text_yields_empty_map() {
        let ontology = ontology();
        let extractor = SkillExtractor::new(&ontology).unwrap();
        assert!(extractor.extract("").is_empty());
    }

    #[test]
    fn test_empty_ontology_recognizes_nothing() {
        let ontology = SkillOntology::empty();
        let extractor = SkillExtractor::new(&ontology).unwrap();
        let skills = extractor.extract("Senior Python engineer, expert in SQL");
        assert!(skills.is_empty());
    }

    #[test]
    fn test_alias_resolves_to_canonical_name() {
        let ontology = ontology();
        let extractor = SkillExtractor::new(&ontology).unwrap();

        let skills = extractor.extract("Shipped several ML systems");
        assert_eq!(skills.len(), 1);
        assert!(skills.contains("Machine Learning"));
    }

    #[test]
    fn test_level_defaults_to_awareness() {
        let ontology = ontology();
        let extractor = SkillExtractor::new(&ontology).unwrap();

        let skills = extractor.extract("Wrote Rust tooling");
        assert_eq!(skills.get("Rust").unwrap().get(), 1);
    }

    #[test]
    fn test_pattern_scan_adds_dependents_of_trigger_head() {
        let ontology = ontology();
        // "proficient" modifies token 1, whose conjunct (token 3) is SQL.
        // The surrounding text contains neither name verbatim, so only the
        // pattern scan can surface them.
        let tokens = vec![
            token("proficient", PosTag::Adjective, 1, DepLabel::Modifier),
            token("Pythonic", PosTag::Noun, 1, DepLabel::Root),
            token("and", PosTag::Conjunction, 1, DepLabel::Dep),
            token("SQL", PosTag::Noun, 1, DepLabel::Conjunct),
        ];
        let extractor =
            SkillExtractor::with_tagger(&ontology, Box::new(CannedTagger(tokens))).unwrap();

        let skills = extractor.extract("irrelevant");
        assert!(skills.contains("SQL"));
    }

    #[test]
    fn test_pattern_scan_skips_with_head() {
        let ontology = ontology();
        let tokens = vec![
            token("skilled", PosTag::Adjective, 1, DepLabel::Attribute),
            token("with", PosTag::Adposition, 1, DepLabel::Root),
            token("SQL", PosTag::Noun, 1, DepLabel::DirectObject),
        ];
        let extractor =
            SkillExtractor::with_tagger(&ontology, Box::new(CannedTagger(tokens))).unwrap();

        let skills = extractor.extract("irrelevant");
        assert!(skills.is_empty());
    }

    #[test]
    fn test_pattern_scan_candidates_outside_ontology_are_dropped() {
        let ontology = ontology();
        let tokens = vec![
            token("skilled", PosTag::Adjective, 1, DepLabel::Modifier),
            token("juggling", PosTag::Noun, 1, DepLabel::Root),
            token("performer", PosTag::Noun, 1, DepLabel::Attribute),
        ];
        let extractor =
            SkillExtractor::with_tagger(&ontology, Box::new(CannedTagger(tokens))).unwrap();

        let skills = extractor.extract("irrelevant");
        assert!(skills.is_empty());
    }
}
