use std::io;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};
use mathquiz::{
    Config, ExportFormat, generate_quizzes, generate_quizzes_seeded, load_config, render,
    validate_config,
};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Output format of the generated quizzes
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn to_export_format(&self) -> ExportFormat {
        match self {
            OutputFormat::Text => ExportFormat::Text,
            OutputFormat::Json => ExportFormat::Json,
        }
    }
}

/// Mathquiz - Generate randomized arithmetic quizzes
#[derive(Parser, Debug)]
#[command(name = "mathquiz")]
#[command(about = "Generate randomized arithmetic quizzes from a JSON config")]
#[command(version)]
pub struct CliArgs {
    /// Path to the JSON config file
    pub config: PathBuf,

    /// Output format (default: text)
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Seed for reproducible generation
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub config: Config,
    pub format: ExportFormat,
    pub seed: Option<u64>,
    pub log_level: LogLevel,
}

/// Parse command line arguments, load and validate the quiz config
pub fn parse_args() -> Result<CliConfig> {
    let args = CliArgs::parse();

    // Initialize logging
    init_logging(&args.log_level)?;

    let config = load_config(&args.config)
        .with_context(|| format!("Cannot load config '{}'", args.config.display()))?;
    validate_config(&config).context("Invalid config")?;

    Ok(CliConfig {
        config,
        format: args.format.to_export_format(),
        seed: args.seed,
        log_level: args.log_level,
    })
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let cli = parse_args()?;
    info!("Log level set to {:?}", cli.log_level);

    let started = Instant::now();
    let quizzes = match cli.seed {
        Some(seed) => {
            info!("Generating with seed {}", seed);
            generate_quizzes_seeded(&cli.config, seed)
        }
        None => generate_quizzes(&cli.config),
    };
    info!(
        "Generated {} quizzes in {:.2?}",
        quizzes.len(),
        started.elapsed()
    );

    if quizzes.len() < cli.config.quiz.amount {
        warn!(
            "Only {} of {} requested quizzes could be generated",
            quizzes.len(),
            cli.config.quiz.amount
        );
    }

    let stdout = io::stdout();
    render(cli.format, &quizzes, &mut stdout.lock()).context("Cannot write quizzes")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_args_parsing() {
        let args = CliArgs::try_parse_from([
            "mathquiz",
            "quiz.json",
            "--format",
            "json",
            "--seed",
            "7",
            "--log-level",
            "debug",
        ]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            assert_eq!(args.config, PathBuf::from("quiz.json"));
            assert!(matches!(args.format, OutputFormat::Json));
            assert_eq!(args.seed, Some(7));
            assert!(matches!(args.log_level, LogLevel::Debug));
        }
    }

    #[test]
    fn test_cli_args_defaults() {
        let args = CliArgs::try_parse_from(["mathquiz", "quiz.json"]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            assert!(matches!(args.format, OutputFormat::Text));
            assert_eq!(args.seed, None);
            assert!(matches!(args.log_level, LogLevel::Warn));
        }
    }

    #[test]
    fn test_cli_args_require_config() {
        assert!(CliArgs::try_parse_from(["mathquiz"]).is_err());
        assert!(CliArgs::try_parse_from(["mathquiz", "quiz.json", "--format", "xml"]).is_err());
    }

    #[test]
    fn test_output_format_conversion() {
        assert_eq!(OutputFormat::Text.to_export_format(), ExportFormat::Text);
        assert_eq!(OutputFormat::Json.to_export_format(), ExportFormat::Json);
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            LogLevel::Error.to_log_level_filter(),
            log::LevelFilter::Error
        );
        assert_eq!(LogLevel::Warn.to_log_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Info.to_log_level_filter(), log::LevelFilter::Info);
        assert_eq!(
            LogLevel::Debug.to_log_level_filter(),
            log::LevelFilter::Debug
        );
        assert_eq!(
            LogLevel::Trace.to_log_level_filter(),
            log::LevelFilter::Trace
        );
    }
}
