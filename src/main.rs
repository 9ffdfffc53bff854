//! Skill gap analyzer: match demonstrated skills against role requirements

mod advice;
mod analysis;
mod cli;
mod config;
mod error;
mod input;
mod output;

use advice::{assemble_without_advice, HttpAdviceClient, ReportAssembler};
use analysis::{classify, SkillExtractor, SkillMap, SkillOntology};
use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use config::{Config, OutputFormat};
use error::{Result, SkillGapError};
use log::{error, info};
use output::{AnalysisReport, ReportGenerator};
use std::path::{Path, PathBuf};
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            requirements,
            ontology,
            output,
            save,
            detailed,
            no_advice,
        } => {
            info!("Starting skill gap analysis");

            cli::validate_file_extension(&resume, &["pdf", "txt", "md"])
                .map_err(|e| SkillGapError::InvalidInput(format!("Resume file: {}", e)))?;
            cli::validate_file_extension(&requirements, &["json"])
                .map_err(|e| SkillGapError::InvalidInput(format!("Requirements file: {}", e)))?;

            let output_format =
                cli::parse_output_format(&output).map_err(SkillGapError::InvalidInput)?;

            println!("📄 Resume: {}", resume.display());
            println!("💼 Requirements: {}", requirements.display());

            println!("\n📂 Extracting text from resume...");
            let text = input::extract_text(&resume).await?;
            println!("   {} characters extracted", text.len());

            let ontology = load_ontology(ontology.as_deref(), &config)?;
            let observed = extract_skills(&text, &ontology)?;
            println!("\n🔎 Observed skills: {}", observed.len());

            let required = load_skill_map(&requirements)?;
            println!("🎯 Required skills: {}", required.len());

            let report = build_report(&observed, &required, &config, no_advice).await?;
            emit_report(&report, &output_format, &config, detailed, save.as_deref())?;
        }

        Commands::Extract {
            resume,
            ontology,
            output,
        } => {
            cli::validate_file_extension(&resume, &["pdf", "txt", "md"])
                .map_err(|e| SkillGapError::InvalidInput(format!("Resume file: {}", e)))?;
            let output_format =
                cli::parse_output_format(&output).map_err(SkillGapError::InvalidInput)?;

            println!("📂 Extracting text from {}...", resume.display());
            let text = input::extract_text(&resume).await?;

            let ontology = load_ontology(ontology.as_deref(), &config)?;
            let skills = extract_skills(&text, &ontology)?;

            match output_format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&skills)?);
                }
                _ => {
                    println!("\n🔎 Observed skills ({}):", skills.len());
                    for (name, level) in skills.iter() {
                        println!("  • {}: level {} ({})", name, level, level.describe());
                    }
                    if skills.is_empty() {
                        println!("  (none recognized)");
                    }
                }
            }
        }

        Commands::Classify {
            skills,
            requirements,
            output,
            save,
            no_advice,
        } => {
            let output_format =
                cli::parse_output_format(&output).map_err(SkillGapError::InvalidInput)?;

            let observed = load_skill_map(&skills)?;
            let required = load_skill_map(&requirements)?;
            println!(
                "🔎 Observed skills: {}   🎯 Required skills: {}",
                observed.len(),
                required.len()
            );

            let report = build_report(&observed, &required, &config, no_advice).await?;
            emit_report(&report, &output_format, &config, false, save.as_deref())?;
        }

        Commands::Tips { skill, level } => {
            let level = analysis::SkillLevel::try_from(level)
                .map_err(SkillGapError::InvalidInput)?;
            if !config.advice_available() {
                return Err(SkillGapError::Configuration(
                    "advice service is not configured; set the endpoint in the config".to_string(),
                ));
            }

            println!("💡 Generating tips for {} (level {})...", skill, level);
            let client = HttpAdviceClient::new(&config.advice)?;
            let assembler = ReportAssembler::new(client, config.advice_timeout());
            let tips = assembler
                .tips_for(&skill, level.get())
                .await
                .map_err(|e| SkillGapError::AdviceService(e.to_string()))?;

            println!(
                "\n{} — level {} → {}",
                tips.skill, tips.current_level, tips.target_level
            );
            for tip in &tips.tips {
                println!("  • {}", tip);
            }
            if tips.tips.is_empty() {
                println!("  (the service returned no tips)");
            }
        }

        Commands::Ontology { ontology } => {
            let ontology = load_ontology(ontology.as_deref(), &config)?;
            if ontology.is_empty() {
                println!("⚠️  Ontology is empty — no skills will be recognized");
                return Ok(());
            }
            println!(
                "📚 Skill ontology: {} skills in {} categories\n",
                ontology.skill_count(),
                ontology.category_count()
            );
            for (category, skills) in ontology.categories() {
                println!("  {} ({} skills)", category, skills.len());
                for name in skills.keys() {
                    println!("    • {}", name);
                }
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration\n");
                println!("Ontology: {}", config.ontology.path.display());
                println!(
                    "Advice endpoint: {}",
                    if config.advice.endpoint.is_empty() {
                        "(not configured)"
                    } else {
                        config.advice.endpoint.as_str()
                    }
                );
                println!("Advice model: {}", config.advice.model);
                println!("Advice timeout: {}s", config.advice.timeout_secs);
                println!("API key env: {}", config.advice.api_key_env);
            }
            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                let default_config = Config::default();
                default_config.save()?;
                println!("✅ Configuration reset successfully!");
            }
        },
    }

    Ok(())
}

fn load_ontology(override_path: Option<&Path>, config: &Config) -> Result<SkillOntology> {
    let path = override_path.unwrap_or_else(|| config.ontology_path());
    SkillOntology::load(path)
}

fn extract_skills(text: &str, ontology: &SkillOntology) -> Result<SkillMap> {
    let extractor = SkillExtractor::new(ontology)?;
    Ok(extractor.extract(text))
}

/// Load a `{"Skill": level}` JSON map; out-of-range levels fail here, at
/// the input boundary, not inside the classifier.
fn load_skill_map(path: &PathBuf) -> Result<SkillMap> {
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| {
        SkillGapError::InvalidInput(format!("Invalid skill map {}: {}", path.display(), e))
    })
}

async fn build_report(
    observed: &SkillMap,
    required: &SkillMap,
    config: &Config,
    no_advice: bool,
) -> Result<AnalysisReport> {
    let gap = classify(observed, required);
    println!(
        "\n📊 Gap: {} matching, {} below level, {} missing",
        gap.matching.len(),
        gap.below_level.len(),
        gap.missing.len()
    );

    if no_advice || !config.advice_available() {
        if !no_advice {
            info!("Advice service not configured, skipping advice generation");
        }
        return Ok(assemble_without_advice(gap));
    }

    println!("💡 Generating upskilling advice...");
    let client = HttpAdviceClient::new(&config.advice)?;
    let assembler = ReportAssembler::new(client, config.advice_timeout()).with_progress(true);
    Ok(assembler.assemble(gap).await)
}

fn emit_report(
    report: &AnalysisReport,
    format: &OutputFormat,
    config: &Config,
    detailed: bool,
    save: Option<&Path>,
) -> Result<()> {
    let rendered = ReportGenerator::format(
        report,
        format,
        config.output.color_output,
        detailed || config.output.detailed,
    )?;
    println!("{}", rendered);

    if let Some(path) = save {
        ReportGenerator::save(&rendered, path)?;
        println!("💾 Saved report to {}", path.display());
    }
    Ok(())
}
