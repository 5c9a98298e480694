//! ats-scorer: resume and job description keyword gap analysis

use ats_scorer::cli::{self, Cli, Commands, ConfigAction, JobInput};
use ats_scorer::config::{Config, OutputFormat};
use ats_scorer::error::{AtsScorerError, Result};
use ats_scorer::input::DocumentLoader;
use ats_scorer::output::formatter::{resolve_save_path, save_report_to_file, ReportGenerator};
use ats_scorer::output::report::{KeywordReport, MatchReport, ReportMetadata, WeaveReport};
use ats_scorer::processing::{KeywordPlan, ScoringEngine, WeavePlan};
use clap::Parser;
use log::{error, info};
use std::path::{Path, PathBuf};
use std::process;

const INPUT_EXTENSIONS: &[&str] = &["pdf", "txt", "text", "md", "markdown"];

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = match Config::load_from(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config, config_path).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, config_path: PathBuf) -> Result<()> {
    match command {
        Commands::Score {
            resume,
            job,
            output,
            save,
            detailed,
        } => {
            info!("Starting ATS match scoring");
            let format = resolve_format(output.as_deref(), &config)?;

            let mut loader = DocumentLoader::new();
            let resume_text = load_resume(&mut loader, &resume).await?;
            let job_text = load_job(&mut loader, &job).await?;

            let engine = ScoringEngine::new(&config)?;
            let breakdown = engine.score(&resume_text, &job_text);
            info!("Match score {} (base {}, model {:.1})", breakdown.score, breakdown.base_score, breakdown.model_score);

            let metadata = ReportMetadata::new(Some(resume.display().to_string()), job.source_label());
            let report = MatchReport::new(breakdown, metadata);
            let use_colors = config.output.color_output && save.is_none();
            let generator = ReportGenerator::with_options(use_colors, detailed || config.output.detailed, true, true);
            let rendered = generator.generate_match(&report, format)?;
            let save_path = save.map(|target| resolve_save_path(&target, format, &resume.to_string_lossy()));
            emit(&rendered, save_path.as_deref())?;
        }

        Commands::Keywords { job, output } => {
            let format = resolve_format(output.as_deref(), &config)?;
            let mut loader = DocumentLoader::new();
            let job_text = load_job(&mut loader, &job).await?;

            let plan = KeywordPlan::from_job(&job_text);
            info!("Extracted {} required and {} preferred keywords", plan.required.len(), plan.preferred.len());

            let report = KeywordReport::new(plan, ReportMetadata::new(None, job.source_label()));
            let generator = ReportGenerator::with_options(config.output.color_output, false, true, true);
            emit(&generator.generate_keywords(&report, format)?, None)?;
        }

        Commands::Weave { resume, job, output } => {
            let format = resolve_format(output.as_deref(), &config)?;
            let mut loader = DocumentLoader::new();
            let resume_text = load_resume(&mut loader, &resume).await?;
            let job_text = load_job(&mut loader, &job).await?;

            let engine = ScoringEngine::new(&config)?;
            let plan = WeavePlan::build(engine.matcher(), &resume_text, &job_text);

            let metadata = ReportMetadata::new(Some(resume.display().to_string()), job.source_label());
            let report = WeaveReport::new(plan, metadata);
            let generator = ReportGenerator::with_options(config.output.color_output, false, true, true);
            emit(&generator.generate_weave(&report, format)?, None)?;
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration\n");
                println!("File: {}", config_path.display());
                println!("\nMatching:");
                println!("  Fuzzy threshold: {:.0}%", config.matching.fuzzy_threshold * 100.0);
                println!("\nScoring:");
                println!("  Model blend: {:.0}% model / {:.0}% keywords",
                    config.scoring.model_blend * 100.0,
                    (1.0 - config.scoring.model_blend) * 100.0
                );
                match &config.scoring.model_path {
                    Some(path) => println!("  Model file: {}", path.display()),
                    None => println!("  Model file: built-in"),
                }
                println!("\nOutput:");
                println!("  Format: {:?}", config.output.format);
                println!("  Detailed: {}", config.output.detailed);
                println!("  Colors: {}", config.output.color_output);
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                Config::default().save_to(&config_path)?;
                println!("✅ Configuration reset successfully!");
            }

            Some(ConfigAction::Path) => {
                println!("{}", config_path.display());
            }
        },
    }

    Ok(())
}

fn resolve_format(requested: Option<&str>, config: &Config) -> Result<OutputFormat> {
    match requested {
        Some(format) => cli::parse_output_format(format).map_err(AtsScorerError::InvalidInput),
        None => Ok(config.output.format),
    }
}

async fn load_resume(loader: &mut DocumentLoader, path: &Path) -> Result<String> {
    cli::validate_file_extension(path, INPUT_EXTENSIONS)
        .map_err(|e| AtsScorerError::InvalidInput(format!("Resume file: {}", e)))?;
    loader.load(path).await
}

async fn load_job(loader: &mut DocumentLoader, job: &JobInput) -> Result<String> {
    if let Some(path) = &job.job {
        cli::validate_file_extension(path, INPUT_EXTENSIONS)
            .map_err(|e| AtsScorerError::InvalidInput(format!("Job description file: {}", e)))?;
    }
    loader.load_job(job.job.as_deref(), job.job_text.as_deref()).await
}

fn emit(rendered: &str, save: Option<&Path>) -> Result<()> {
    match save {
        Some(path) => {
            save_report_to_file(rendered, path)?;
            println!("💾 Report saved to {}", path.display());
        }
        None => println!("{}", rendered),
    }
    Ok(())
}
