// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, warn};
use std::io::Write;
use std::path::Path;
use std::process::ExitCode;

use crate::app_config::Config;
use crate::app_controller::Controller;
use crate::errors::LookupError;

mod app_config;
mod app_controller;
mod dictionary_service;
mod errors;
mod language_utils;
mod markup_processor;
mod providers;
mod sentence_aligner;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

fn level_filter_for(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Look up definitions for a word
    #[command(alias = "def")]
    Define {
        /// Word to look up
        #[arg(value_name = "WORD")]
        word: String,

        /// Language code or name (e.g. 'de', 'deu', 'German')
        #[arg(short, long)]
        language: Option<String>,

        /// Print the full JSON response envelope
        #[arg(long)]
        json: bool,
    },

    /// Look up the IPA pronunciation of a word or sentence
    #[command(alias = "ipa")]
    Pronounce {
        /// Word or quoted sentence to transcribe
        #[arg(value_name = "PHRASE")]
        phrase: String,

        /// Language code or name (e.g. 'de', 'deu', 'German')
        #[arg(short, long)]
        language: Option<String>,

        /// Treat the input as a sentence and align per-word transcriptions
        #[arg(short, long)]
        sentence: bool,

        /// Print the full JSON response envelope
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions for wikidict
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// wikidict - Wiktionary dictionary lookup
///
/// Fetches definitions and IPA pronunciations from the Wiktionary REST API
/// and normalizes them into clean text.
#[derive(Parser, Debug)]
#[command(name = "wikidict")]
#[command(version = "1.0.0")]
#[command(about = "Dictionary definitions and IPA pronunciations from Wiktionary")]
#[command(long_about = "wikidict fetches dictionary data from the Wiktionary REST API and reformats
it for the terminal: plain-text definitions with examples, and IPA
transcriptions for words or whole sentences.

EXAMPLES:
    wikidict define hello                       # Definitions, default language
    wikidict define Hund -l de                  # German definitions
    wikidict pronounce Tag -l German            # IPA for one word
    wikidict pronounce 'guten Tag' -l de -s     # Aligned sentence transcription
    wikidict define hello --json                # Full JSON envelope
    wikidict completions bash > wikidict.bash   # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a
    different config file with --config. If the config file doesn't exist, a
    default one will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {:5} {}\x1B[0m",
                color, now, record.level(), record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    if CustomLogger::init(LevelFilter::Info).is_err() {
        eprintln!("Failed to initialize logger");
        return ExitCode::FAILURE;
    }

    let cli = CommandLineOptions::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            log::error!("{:#}", error);
            // Lookup error kinds map to distinct exit codes at this boundary
            let code = error.downcast_ref::<LookupError>()
                .map(app_controller::exit_code_for)
                .unwrap_or(1);
            ExitCode::from(code as u8)
        }
    }
}

async fn run(cli: CommandLineOptions) -> Result<()> {
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(*shell, &mut cmd, "wikidict", &mut std::io::stdout());
        return Ok(());
    }

    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &cli.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter_for(&config_log_level));
    }

    // Load or create configuration
    let config_path = &cli.config_path;
    let mut config = if Path::new(config_path).exists() {
        Config::from_file(config_path)?
    } else {
        warn!("Config file not found at '{}', creating default config.", config_path);

        let config = Config::default();
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;
        std::fs::write(config_path, config_json)
            .with_context(|| format!("Failed to write default config to file: {}", config_path))?;

        config
    };

    if let Some(log_level) = &cli.log_level {
        config.log_level = log_level.clone().into();
    }

    config.validate().context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if cli.log_level.is_none() {
        log::set_max_level(level_filter_for(&config.log_level));
    }

    let controller = Controller::with_config(config)?;

    match cli.command {
        Commands::Define { word, language, json } => {
            controller.run_define(&word, language.as_deref(), json).await
        }
        Commands::Pronounce { phrase, language, sentence, json } => {
            controller.run_pronounce(&phrase, language.as_deref(), sentence, json).await
        }
        Commands::Completions { .. } => unreachable!("handled above"),
    }
}
