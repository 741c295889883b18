//! This module contains everything needed for parsing the CLI arguments for
//! `loxi`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Struct containing the CLI configuration for `loxi`.
#[derive(Parser, Debug)]
#[command(author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Specify the log level of the interpreter.
    #[arg(value_enum, short, long, default_value_t = LogLevel::default())]
    pub verbosity: LogLevel,
}

impl Cli {
    /// Parse the process arguments, returning `clap`'s own error (message
    /// plus usage) on failure instead of letting it print and exit directly
    /// — the driver's exit-1 usage-error contract covers that case too.
    pub fn init() -> Result<Self, clap::Error> {
        Cli::try_parse()
    }
}

/// Enum for specifying the log level of `loxi`.
#[derive(ValueEnum, Clone, Default, Debug)]
pub enum LogLevel {
    /// The default log level. Only critical errors will be logged.
    #[default]
    #[value(alias("0"))]
    Error,

    /// Also log warnings.
    #[value(alias("1"))]
    Warn,

    /// Also log information about the general state of the interpreter,
    /// e.g., which compatibility fallbacks were taken.
    #[value(alias("2"))]
    Info,

    /// Log everything which happens internally, including the
    /// single-expression parse fallback.
    #[value(alias("3"))]
    Debug,

    /// Log extra information.
    #[value(alias("4"))]
    Trace,
}

impl From<&LogLevel> for log::Level {
    fn from(value: &LogLevel) -> Self {
        match value {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Lex a source file and print its tokens.
    Tokenize(FileArgs),

    /// Parse a source file and print its AST as S-expressions.
    Parse(FileArgs),

    /// Evaluate a single expression (or run a full program) and print its
    /// result.
    Evaluate(FileArgs),

    /// Run a source file as a full program.
    Run(FileArgs),
}

#[derive(Args, Debug, Clone)]
pub struct FileArgs {
    /// The path to the source file.
    #[arg(index = 1)]
    pub file: PathBuf,
}
