//! CLI argument definitions for twat-video.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "twat-video",
    version,
    about = "Render mixed number/text items as formatted text",
    long_about = "Render a sequence of numbers and text as text.\n\n\
                  Numbers are printed with two decimals; text can be upper-cased\n\
                  through the `uppercase` config option. Runs a fixed demo when\n\
                  no subcommand is given."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Prefix log lines with timestamps.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include the module path of each log event.
    #[arg(long = "log-target", global = true)]
    pub log_target: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the built-in demonstration sequence.
    Demo,

    /// Transform items given on the command line or in a JSON file.
    Process(ProcessArgs),

    /// Print the version string.
    Version,
}

#[derive(Args)]
pub struct ProcessArgs {
    /// Items to transform; integer and float literals are treated as numbers.
    #[arg(value_name = "ITEM", allow_negative_numbers = true)]
    pub items: Vec<String>,

    /// Read items from a JSON array file instead of ITEM arguments.
    #[arg(long = "input", value_name = "FILE", conflicts_with = "items")]
    pub input: Option<PathBuf>,

    /// JSON config file with `name`, `value` and `options`.
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override the config name.
    #[arg(long = "name")]
    pub name: Option<String>,

    /// Override the config value.
    #[arg(long = "value", allow_negative_numbers = true)]
    pub value: Option<i64>,

    /// Set the `uppercase` option.
    #[arg(long = "uppercase")]
    pub uppercase: bool,

    /// Set an option flag, e.g. `--option feature_x=true`.
    #[arg(long = "option", value_name = "KEY=BOOL", value_parser = parse_option)]
    pub options: Vec<(String, bool)>,

    /// Log the input size and rendered output at debug level.
    #[arg(long = "debug")]
    pub debug: bool,

    /// How to print the result.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

/// Parse a `KEY=BOOL` option flag.
pub fn parse_option(raw: &str) -> Result<(String, bool), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=BOOL, got `{raw}`"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("option key is empty in `{raw}`"));
    }
    let flag = match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => true,
        "false" | "0" | "no" | "off" => false,
        other => return Err(format!("`{other}` is not a boolean")),
    };
    Ok((key.to_string(), flag))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
    Lines,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
