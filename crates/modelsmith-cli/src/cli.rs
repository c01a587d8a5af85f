//! Command-line interface for the modelsmith utility
//!
//! Provides a CLI to turn a directory of PlantUML-style diagrams into a
//! JSON domain model.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;

use modelsmith::core::logging::init_logging;
use modelsmith::plugins::Orchestrator;
use modelsmith::source::{read_sources, write_json};
use modelsmith::{ensure_clean, ConversionConfig, Diagnostics};

/// Modelsmith - Convert PlantUML-style diagrams into a JSON domain model
#[derive(Parser)]
#[command(name = "modelsmith")]
#[command(about = "Convert PlantUML-style class and state diagrams into a JSON domain model")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Set log level (trace|debug|info|warn|error)
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Set log format (compact|pretty|json)
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Log level options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the combined domain model document
    Build {
        /// Directory containing the diagram files
        #[arg(short, long, default_value = "diagrams")]
        input: PathBuf,

        /// Output file for the JSON document
        #[arg(short, long, default_value = "output/domain_model.json")]
        output: PathBuf,

        /// JSON file overriding the built-in conversion tables
        #[arg(long)]
        config: Option<PathBuf>,

        /// Fail if any diagnostic is reported
        #[arg(long)]
        strict: bool,
    },

    /// Convert each diagram file into its own JSON file
    Split {
        /// Directory containing the diagram files
        #[arg(short, long, default_value = "diagrams")]
        input: PathBuf,

        /// Directory receiving one `<stem>.json` per diagram
        #[arg(short, long, default_value = "output")]
        output: PathBuf,

        /// JSON file overriding the built-in conversion tables
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Run the pipeline and report diagnostics without writing anything
    Check {
        /// Directory containing the diagram files
        #[arg(short, long, default_value = "diagrams")]
        input: PathBuf,

        /// JSON file overriding the built-in conversion tables
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print diagnostics as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Main CLI application
pub struct ModelsmithApp;

impl ModelsmithApp {
    pub fn new() -> Self {
        Self
    }

    /// Run the application with the given CLI arguments
    pub fn run(&mut self, cli: Cli) -> Result<()> {
        // Environment variables take precedence over flags
        let log_level_str = std::env::var("MODELSMITH_LOG_LEVEL")
            .ok()
            .or_else(|| std::env::var("RUST_LOG").ok())
            .or_else(|| Some(cli.log_level.as_str().to_string()));

        let log_format_str = std::env::var("MODELSMITH_LOG_FORMAT")
            .ok()
            .or_else(|| Some(cli.log_format.as_str().to_string()));

        if let Err(e) = init_logging(log_level_str.as_deref(), log_format_str.as_deref()) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }

        if cli.verbose {
            eprintln!("Modelsmith v{}", env!("CARGO_PKG_VERSION"));
        }

        match cli.command {
            Commands::Build {
                input,
                output,
                config,
                strict,
            } => self.build_command(&input, &output, config.as_deref(), strict, cli.verbose),
            Commands::Split {
                input,
                output,
                config,
            } => self.split_command(&input, &output, config.as_deref(), cli.verbose),
            Commands::Check {
                input,
                config,
                json,
            } => self.check_command(&input, config.as_deref(), json, cli.verbose),
        }
    }

    fn load_config(&self, path: Option<&Path>) -> Result<ConversionConfig> {
        match path {
            Some(path) => {
                info!(path = %path.display(), "Loading conversion config");
                Ok(ConversionConfig::from_json_file(path)?)
            }
            None => Ok(ConversionConfig::default()),
        }
    }

    fn run_pipeline(
        &self,
        input: &Path,
        config: ConversionConfig,
        verbose: bool,
    ) -> Result<(modelsmith::model::Document, Diagnostics)> {
        let sources = read_sources(input, &config)?;
        if verbose {
            eprintln!("Read {} diagram file(s) from {}", sources.len(), input.display());
        }

        let output = Orchestrator::with_config(config).build(&sources)?;
        Ok((output.document, output.diagnostics))
    }

    /// Handle the build command
    fn build_command(
        &self,
        input: &Path,
        output: &Path,
        config: Option<&Path>,
        strict: bool,
        verbose: bool,
    ) -> Result<()> {
        let config = self.load_config(config)?;
        let (document, diagnostics) = self.run_pipeline(input, config, verbose)?;

        if strict {
            ensure_clean(&diagnostics)?;
        }

        write_json(output, &document)?;
        println!("converted {} -> {}", input.display(), output.display());

        if verbose {
            eprintln!(
                "{} classes, {} enumerations, {} statecharts, {} diagnostic(s)",
                document.classes.len(),
                document.enumerations.len(),
                document.statecharts.len(),
                diagnostics.len()
            );
        }
        Ok(())
    }

    /// Handle the split command
    fn split_command(
        &self,
        input: &Path,
        output: &Path,
        config: Option<&Path>,
        verbose: bool,
    ) -> Result<()> {
        let orchestrator = Orchestrator::with_config(self.load_config(config)?);
        let sources = read_sources(input, orchestrator.config())?;

        let mut total = 0;
        for source in &sources {
            let (model, diagnostics) = orchestrator.convert_file(source)?;
            let path = output.join(format!("{}.json", source.stem()));
            write_json(&path, &model)?;
            println!("converted {} -> {}", source.file_name, path.display());
            total += diagnostics.len();
        }

        if verbose {
            eprintln!("{} file(s) converted, {} diagnostic(s)", sources.len(), total);
        }
        Ok(())
    }

    /// Handle the check command
    fn check_command(
        &self,
        input: &Path,
        config: Option<&Path>,
        json: bool,
        verbose: bool,
    ) -> Result<()> {
        let config = self.load_config(config)?;
        let (_, diagnostics) = self.run_pipeline(input, config, verbose)?;

        if json {
            println!("{}", serde_json::to_string_pretty(&diagnostics)?);
        } else {
            for diagnostic in diagnostics.iter() {
                println!("{}", diagnostic);
            }
            println!("{} diagnostic(s)", diagnostics.len());
        }

        ensure_clean(&diagnostics)?;
        Ok(())
    }
}

impl Default for ModelsmithApp {
    fn default() -> Self {
        Self::new()
    }
}
