// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, debug};
use std::io::Write;
use std::path::{Path, PathBuf};

use langlist::app_config::{Config, LogLevel};
use langlist::app_controller::{Controller, OutputFormat};
use langlist::errors::AppError;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Parse a supported-languages response and print the languages
    List(ListArgs),

    /// Generate shell completions for langlist
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct ListArgs {
    /// Response file to read, or '-' for stdin
    #[arg(value_name = "INPUT", default_value = "-")]
    input: PathBuf,

    /// Print the parsed list as JSON
    #[arg(long)]
    json: bool,

    /// Print the indices of skipped entries to stderr
    #[arg(long)]
    report: bool,
}

/// langlist - read translation API supported-languages responses
#[derive(Parser, Debug)]
#[command(name = "langlist")]
#[command(version)]
#[command(about = "Parse translation API supported-languages responses")]
#[command(long_about = "langlist reads a {\"languages\": [...]} response from a translation API
and prints the languages it lists.

EXAMPLES:
    langlist list languages.json               # Print code and name per language
    curl ... | langlist list -                 # Read the response from stdin
    langlist list --json languages.json        # Print the parsed list as JSON
    langlist list --report languages.json      # Also list skipped entries
    langlist completions bash > langlist.bash  # Generate bash completions

CONFIGURATION:
    Configuration is read from langlist.json by default. You can specify a
    different file with --config. Defaults are used when the file is missing.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long = "config", global = true, default_value = "langlist.json")]
    config_path: PathBuf,

    /// Set logging level
    #[arg(short, long, global = true, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Stderr logger with timestamps and colored levels
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger { level }))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "1;31",
            Level::Warn => "1;33",
            Level::Info => "1;32",
            Level::Debug => "1;36",
            Level::Trace => "1;35",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let _ = writeln!(
                std::io::stderr(),
                "\x1B[{}m{} {:<5} {}\x1B[0m",
                Self::color_for_level(record.level()),
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Logger starts permissive; the effective level is applied once the config is loaded
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    match cli.command {
        Commands::Completions { shell } => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "langlist", &mut std::io::stdout());
            Ok(())
        }
        Commands::List(args) => Ok(run_list(&cli.config_path, cli.log_level, args)?),
    }
}

fn run_list(
    config_path: &Path,
    log_level: Option<CliLogLevel>,
    args: ListArgs,
) -> Result<(), AppError> {
    let mut config = Config::load_or_default(config_path)
        .map_err(|e| AppError::Config(format!("{:#}", e)))?;
    if let Some(level) = log_level {
        config.log_level = level.into();
    }
    log::set_max_level(config.log_level.into());
    debug!("Using config: {:?}", config);

    let controller = Controller::with_config(config)?;
    let format = if args.json { OutputFormat::Json } else { OutputFormat::Table };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let report = controller.run(&args.input, format, &mut out)?;

    if args.report {
        eprintln!("dropped entries: {:?}", report.dropped);
    }
    Ok(())
}
