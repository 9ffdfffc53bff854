//! CLI interface for the skill gap analyzer

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "skill-gap-analyzer")]
#[command(about = "Skill gap analysis and upskilling recommendation tool")]
#[command(
    long_about = "Extract skills with proficiency levels from resumes, classify them against a role's requirements, and generate personalized upskilling advice"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a resume against a role's skill requirements
    Analyze {
        /// Path to resume file (PDF, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to required skills JSON ({"Skill": level, ...})
        #[arg(short = 'j', long)]
        requirements: PathBuf,

        /// Skill ontology JSON file (overrides config)
        #[arg(long)]
        ontology: Option<PathBuf>,

        /// Output format: console, json, markdown
        #[arg(short, long, default_value = "console")]
        output: String,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Output detailed advice sections
        #[arg(short, long)]
        detailed: bool,

        /// Skip advice generation (classification only)
        #[arg(long)]
        no_advice: bool,
    },

    /// Extract skills and proficiency levels from a resume
    Extract {
        /// Path to resume file (PDF, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Skill ontology JSON file (overrides config)
        #[arg(long)]
        ontology: Option<PathBuf>,

        /// Output format: console, json, markdown
        #[arg(short, long, default_value = "console")]
        output: String,
    },

    /// Classify a known skill map against role requirements
    Classify {
        /// Path to observed skills JSON ({"Skill": level, ...})
        #[arg(short = 'k', long)]
        skills: PathBuf,

        /// Path to required skills JSON
        #[arg(short = 'j', long)]
        requirements: PathBuf,

        /// Output format: console, json, markdown
        #[arg(short, long, default_value = "console")]
        output: String,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Skip advice generation (classification only)
        #[arg(long)]
        no_advice: bool,
    },

    /// Get next-level improvement tips for a skill you already have
    Tips {
        /// Skill name
        #[arg(short, long)]
        skill: String,

        /// Current proficiency level (1-5)
        #[arg(short, long)]
        level: u8,
    },

    /// Inspect the loaded skill ontology
    Ontology {
        /// Skill ontology JSON file (overrides config)
        #[arg(long)]
        ontology: Option<PathBuf>,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &PathBuf, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}
