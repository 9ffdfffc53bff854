//! Gap report assembly: attaching generated advice to classified gaps
//!
//! Advice calls are expensive external round trips, so they are issued only
//! for skills that need attention — every missing skill first, then every
//! below-level skill, one at a time. Matching skills get tips on demand
//! only, never eagerly.

use crate::advice::client::{AdviceError, AdviceResult, AdviceService};
use crate::advice::payload::ImprovementTips;
use crate::analysis::classifier::GapAnalysis;
use crate::output::report::{AdviceFailure, AnalysisReport, ReportMetadata};
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use tokio::time::timeout;

pub struct ReportAssembler<S> {
    service: S,
    per_call_timeout: Duration,
    show_progress: bool,
}

impl<S: AdviceService> ReportAssembler<S> {
    pub fn new(service: S, per_call_timeout: Duration) -> Self {
        Self {
            service,
            per_call_timeout,
            show_progress: false,
        }
    }

    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Assemble the final report, requesting advice for every skill that
    /// needs attention. A failed call is recorded against its skill and
    /// never aborts the rest of the assembly.
    pub async fn assemble(&self, gap: GapAnalysis) -> AnalysisReport {
        let started = Instant::now();
        let mut learning_paths = BTreeMap::new();
        let mut failures = Vec::new();

        let total = gap.missing.len() + gap.below_level.len();
        let bar = self.progress_bar(total as u64);

        for entry in gap.needs_attention() {
            bar.set_message(entry.skill.clone());

            let call = self.service.learning_path(
                &entry.skill,
                entry.current_level,
                entry.required_level.get(),
            );
            match timeout(self.per_call_timeout, call).await {
                Ok(Ok(path)) => {
                    learning_paths.insert(entry.skill.clone(), path);
                }
                Ok(Err(e)) => {
                    warn!("Advice generation failed for '{}': {}", entry.skill, e);
                    failures.push(AdviceFailure {
                        skill: entry.skill.clone(),
                        reason: e.to_string(),
                    });
                }
                Err(_) => {
                    warn!("Advice generation timed out for '{}'", entry.skill);
                    failures.push(AdviceFailure {
                        skill: entry.skill.clone(),
                        reason: AdviceError::Timeout.to_string(),
                    });
                }
            }
            bar.inc(1);
        }
        bar.finish_and_clear();

        info!(
            "Assembled report: {} learning paths, {} failures",
            learning_paths.len(),
            failures.len()
        );

        AnalysisReport {
            metadata: ReportMetadata::new(started.elapsed(), total, failures.len()),
            gap,
            learning_paths,
            failures,
        }
    }

    /// On-demand improvement tips for a matching skill.
    pub async fn tips_for(&self, skill: &str, current_level: u8) -> AdviceResult<ImprovementTips> {
        match timeout(
            self.per_call_timeout,
            self.service.improvement_tips(skill, current_level),
        )
        .await
        {
            Ok(result) => result,
            Err(_) => Err(AdviceError::Timeout),
        }
    }

    fn progress_bar(&self, total: u64) -> ProgressBar {
        if !self.show_progress || total == 0 {
            return ProgressBar::hidden();
        }
        let bar = ProgressBar::new(total);
        bar.set_style(
            ProgressStyle::with_template("{spinner} Generating advice [{pos}/{len}] {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        bar
    }
}

/// Assemble a report without contacting the advice service at all.
pub fn assemble_without_advice(gap: GapAnalysis) -> AnalysisReport {
    AnalysisReport {
        metadata: ReportMetadata::new(Duration::ZERO, 0, 0),
        gap,
        learning_paths: BTreeMap::new(),
        failures: Vec::new(),
    }
}
