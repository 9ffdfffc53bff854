//! Report formatters: console, JSON, and Markdown

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::AnalysisReport;
use colored::Colorize;
use std::fmt::Write as _;
use std::path::Path;

pub trait OutputFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String>;
}

/// Console formatter with colors and per-partition sections
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for scripting and API integration
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for sharable reports
pub struct MarkdownFormatter;

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        if !self.use_colors {
            colored::control::set_override(false);
        }
        let mut out = String::new();
        let gap = &report.gap;
        let total = gap.required_count();

        writeln!(out, "\n{}", "Skill Gap Analysis".bold()).ok();
        writeln!(
            out,
            "  Matched: {}/{}   Below level: {}/{}   Missing: {}/{}",
            gap.matching.len().to_string().green(),
            total,
            gap.below_level.len().to_string().yellow(),
            total,
            gap.missing.len().to_string().red(),
            total,
        )
        .ok();

        if !gap.matching.is_empty() {
            writeln!(out, "\n{}", "Matching skills".green().bold()).ok();
            for entry in gap.matching.values() {
                writeln!(
                    out,
                    "  • {} — level {} (required {})",
                    entry.skill, entry.current_level, entry.required_level
                )
                .ok();
            }
        }

        if !gap.below_level.is_empty() {
            writeln!(out, "\n{}", "Needs improvement".yellow().bold()).ok();
            for entry in gap.below_level.values() {
                writeln!(
                    out,
                    "  • {} — level {} of required {} (gap {})",
                    entry.skill,
                    entry.current_level,
                    entry.required_level,
                    entry.gap()
                )
                .ok();
            }
        }

        if !gap.missing.is_empty() {
            writeln!(out, "\n{}", "Missing skills".red().bold()).ok();
            for entry in gap.missing.values() {
                writeln!(
                    out,
                    "  • {} — required level {}",
                    entry.skill, entry.required_level
                )
                .ok();
            }
        }

        if !report.learning_paths.is_empty() {
            writeln!(out, "\n{}", "Learning paths".bold()).ok();
            for (skill, path) in &report.learning_paths {
                writeln!(
                    out,
                    "\n  {} (level {} → {})",
                    skill.bold(),
                    path.current_level,
                    path.target_level
                )
                .ok();
                if self.detailed && !path.current_level_desc.is_empty() {
                    writeln!(out, "    Now: {}", path.current_level_desc).ok();
                }
                if self.detailed && !path.target_level_desc.is_empty() {
                    writeln!(out, "    Goal: {}", path.target_level_desc).ok();
                }
                for (i, milestone) in path.learning_path.iter().enumerate() {
                    writeln!(out, "    {}. {}", i + 1, milestone).ok();
                }
                for resource in &path.resources {
                    writeln!(
                        out,
                        "    - {}: {} ({})",
                        resource.kind, resource.title, resource.url
                    )
                    .ok();
                }
                if !path.time_commitment.is_empty() {
                    writeln!(out, "    Time: {}", path.time_commitment).ok();
                }
                if self.detailed {
                    for project in &path.projects {
                        writeln!(out, "    Project: {}", project).ok();
                    }
                }
            }
        }

        if !report.failures.is_empty() {
            writeln!(out, "\n{}", "Advice not available".dimmed()).ok();
            for failure in &report.failures {
                writeln!(out, "  • {}: {}", failure.skill, failure.reason).ok();
            }
        }

        writeln!(
            out,
            "\nGenerated {} in {}ms",
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            report.metadata.processing_time_ms
        )
        .ok();

        Ok(out)
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(json)
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let mut out = String::new();
        let gap = &report.gap;

        out.push_str("# Skill Gap Analysis\n\n");
        writeln!(
            out,
            "| Matched | Below level | Missing |\n|---|---|---|\n| {} | {} | {} |",
            gap.matching.len(),
            gap.below_level.len(),
            gap.missing.len()
        )
        .ok();

        if !gap.matching.is_empty() {
            out.push_str("\n## Matching Skills\n\n| Skill | Current | Required |\n|---|---|---|\n");
            for entry in gap.matching.values() {
                writeln!(
                    out,
                    "| {} | {} | {} |",
                    entry.skill, entry.current_level, entry.required_level
                )
                .ok();
            }
        }

        if !gap.below_level.is_empty() {
            out.push_str(
                "\n## Needs Improvement\n\n| Skill | Current | Required | Gap |\n|---|---|---|---|\n",
            );
            for entry in gap.below_level.values() {
                writeln!(
                    out,
                    "| {} | {} | {} | {} |",
                    entry.skill,
                    entry.current_level,
                    entry.required_level,
                    entry.gap()
                )
                .ok();
            }
        }

        if !gap.missing.is_empty() {
            out.push_str("\n## Missing Skills\n\n| Skill | Required |\n|---|---|\n");
            for entry in gap.missing.values() {
                writeln!(out, "| {} | {} |", entry.skill, entry.required_level).ok();
            }
        }

        for (skill, path) in &report.learning_paths {
            writeln!(
                out,
                "\n## Learning Path: {} (level {} → {})\n",
                skill, path.current_level, path.target_level
            )
            .ok();
            for milestone in &path.learning_path {
                writeln!(out, "1. {}", milestone).ok();
            }
            if !path.resources.is_empty() {
                out.push_str("\n### Resources\n\n");
                for resource in &path.resources {
                    writeln!(
                        out,
                        "- **{}**: [{}]({})",
                        resource.kind, resource.title, resource.url
                    )
                    .ok();
                }
            }
            if !path.time_commitment.is_empty() {
                writeln!(out, "\nEstimated time commitment: {}", path.time_commitment).ok();
            }
        }

        if !report.failures.is_empty() {
            out.push_str("\n## Advice Not Available\n\n");
            for failure in &report.failures {
                writeln!(out, "- {}: {}", failure.skill, failure.reason).ok();
            }
        }

        writeln!(
            out,
            "\n---\nGenerated {} in {}ms",
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            report.metadata.processing_time_ms
        )
        .ok();

        Ok(out)
    }
}

/// Coordinates formatters and optional save-to-file.
pub struct ReportGenerator;

impl ReportGenerator {
    pub fn format(
        report: &AnalysisReport,
        format: &OutputFormat,
        use_colors: bool,
        detailed: bool,
    ) -> Result<String> {
        match format {
            OutputFormat::Console => {
                ConsoleFormatter::new(use_colors, detailed).format_report(report)
            }
            OutputFormat::Json => JsonFormatter::new(true).format_report(report),
            OutputFormat::Markdown => MarkdownFormatter.format_report(report),
        }
    }

    pub fn save(content: &str, path: &Path) -> Result<()> {
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::classifier::classify;
    use crate::analysis::skills::{SkillLevel, SkillMap};
    use crate::output::report::ReportMetadata;
    use std::collections::BTreeMap;
    use std::time::Duration;

    fn sample_report() -> AnalysisReport {
        let observed: SkillMap = [("Python".to_string(), SkillLevel::new(3))]
            .into_iter()
            .collect();
        let required: SkillMap = [
            ("Python".to_string(), SkillLevel::new(4)),
            ("Rust".to_string(), SkillLevel::new(2)),
        ]
        .into_iter()
        .collect();

        AnalysisReport {
            gap: classify(&observed, &required),
            learning_paths: BTreeMap::new(),
            failures: Vec::new(),
            metadata: ReportMetadata::new(Duration::from_millis(12), 0, 0),
        }
    }

    #[test]
    fn test_console_output_mentions_partitions() {
        let report = sample_report();
        let out = ConsoleFormatter::new(false, false)
            .format_report(&report)
            .unwrap();
        assert!(out.contains("Needs improvement"));
        assert!(out.contains("Missing skills"));
        assert!(out.contains("Python"));
        assert!(out.contains("Rust"));
    }

    #[test]
    fn test_json_output_round_trips() {
        let report = sample_report();
        let out = JsonFormatter::new(false).format_report(&report).unwrap();
        let parsed: AnalysisReport = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed.gap.below_level.len(), 1);
        assert_eq!(parsed.gap.missing.len(), 1);
    }

    #[test]
    fn test_markdown_output_has_tables() {
        let report = sample_report();
        let out = MarkdownFormatter.format_report(&report).unwrap();
        assert!(out.contains("# Skill Gap Analysis"));
        assert!(out.contains("| Python | 3 | 4 | 1 |"));
        assert!(out.contains("## Missing Skills"));
    }
}
