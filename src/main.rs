//! Resume parser: extract structured candidate data from resume files

use clap::Parser;
use log::{error, info, warn};
use resume_parser::cli::{self, Cli, Commands, ConfigAction};
use resume_parser::config::OutputFormat;
use resume_parser::input::InputManager;
use resume_parser::output::{save_report_to_file, suggest_filename, ParseReport, ReportGenerator};
use resume_parser::{Config, Result, ResumeParser, ResumeParserError};
use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, cli.config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

async fn run_command(command: Commands, config: Config, config_path: Option<PathBuf>) -> Result<()> {
    match command {
        Commands::Parse {
            files,
            output,
            save,
            detailed,
            no_color,
        } => {
            let format = match output {
                Some(output) => cli::parse_output_format(&output).map_err(ResumeParserError::InvalidInput)?,
                None => config.output.format,
            };

            let mut output_config = config.output.clone();
            output_config.detailed |= detailed;
            output_config.color_output &= !no_color && save.is_none();

            let parser = ResumeParser::from_config(&config.extraction)?;
            let generator = ReportGenerator::from_config(&output_config);
            let mut input_manager = InputManager::from_config(&config.input);

            let mut first_error = None;
            for file in &files {
                let result = parse_file(&parser, &mut input_manager, file).await.and_then(|report| {
                    let rendered = generator.generate_report(&report, format)?;
                    deliver(&rendered, file, save.as_deref(), files.len() > 1, format)
                });

                if let Err(e) = result {
                    error!("{}: {}", file.display(), e);
                    first_error.get_or_insert(e);
                }
            }

            if let Some(e) = first_error {
                return Err(e);
            }
        }

        Commands::Skills => {
            let parser = ResumeParser::from_config(&config.extraction)?;
            let vocabulary = parser.vocabulary();
            println!("Technical skills ({}):", vocabulary.technical().len());
            for term in vocabulary.technical() {
                println!("  • {}", term);
            }
            println!("\nSoft skills ({}):", vocabulary.soft().len());
            for term in vocabulary.soft() {
                println!("  • {}", term);
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                let content = toml::to_string_pretty(&config)
                    .map_err(|e| ResumeParserError::Configuration(format!("Failed to serialize config: {}", e)))?;
                println!("{}", content);
            }

            Some(ConfigAction::Reset) => {
                let path = config_path.unwrap_or_else(Config::config_path);
                Config::default().save_to(&path)?;
                println!("Configuration reset: {}", path.display());
            }

            Some(ConfigAction::Path) => {
                println!("{}", config_path.unwrap_or_else(Config::config_path).display());
            }
        },
    }

    Ok(())
}

async fn parse_file(parser: &ResumeParser, input_manager: &mut InputManager, file: &Path) -> Result<ParseReport> {
    let started = Instant::now();
    let text = input_manager.load_text(file).await?;
    let resume = parser.parse(&text);
    let elapsed_ms = started.elapsed().as_millis() as u64;

    if resume.populated_fields() == 0 {
        warn!("Decoded {} but found no resume fields", file.display());
    } else {
        info!("Parsed {} in {}ms", file.display(), elapsed_ms);
    }

    Ok(ParseReport::new(resume, &file.to_string_lossy(), &text, elapsed_ms))
}

/// Print the rendered report, or write it to `save` (a directory when several files are parsed).
fn deliver(rendered: &str, file: &Path, save: Option<&Path>, many: bool, format: OutputFormat) -> Result<()> {
    match save {
        None => {
            println!("{}", rendered);
            Ok(())
        }
        Some(target) => {
            let path = if many || target.is_dir() {
                target.join(suggest_filename(format, &file.to_string_lossy(), false))
            } else {
                target.to_path_buf()
            };
            save_report_to_file(rendered, &path)?;
            info!("Saved report to {}", path.display());
            Ok(())
        }
    }
}
