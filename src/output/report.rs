//! Assembled analysis report types

use crate::advice::payload::LearningPath;
use crate::analysis::classifier::GapAnalysis;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

/// Final output of one analysis: the gap partitions plus whatever advice
/// the generation service produced for the skills needing attention.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub gap: GapAnalysis,

    /// Learning paths keyed by skill; a skill needing attention is absent
    /// here exactly when its advice call soft-failed.
    pub learning_paths: BTreeMap<String, LearningPath>,

    /// Per-skill advice failures. Never fatal to the report.
    pub failures: Vec<AdviceFailure>,

    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdviceFailure {
    pub skill: String,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub processing_time_ms: u64,
    pub advice_requested: usize,
    pub advice_failed: usize,
}

impl ReportMetadata {
    pub fn new(elapsed: Duration, advice_requested: usize, advice_failed: usize) -> Self {
        Self {
            generated_at: Utc::now(),
            processing_time_ms: elapsed.as_millis() as u64,
            advice_requested,
            advice_failed,
        }
    }
}

impl AnalysisReport {
    /// Advice payload for one skill, if its generation call succeeded.
    pub fn advice_for(&self, skill: &str) -> Option<&LearningPath> {
        self.learning_paths.get(skill)
    }
}
