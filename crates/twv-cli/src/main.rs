//! twat-video CLI.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;
use twv_cli::VERSION;
use twv_cli::logging::{LogConfig, LogFormat, init_logging};

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg, OutputFormatArg};
use crate::commands::{run_demo_command, run_process};
use crate::summary::print_report;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let result = match &cli.command {
        None | Some(Command::Demo) => run_demo_command()
            .and_then(|report| print_report(&report, OutputFormatArg::Table)),
        Some(Command::Process(args)) => {
            run_process(args).and_then(|report| print_report(&report, args.format))
        }
        Some(Command::Version) => {
            println!("twat-video {VERSION}");
            Ok(())
        }
    };
    if let Err(error) = result {
        eprintln!("error: {error:#}");
        std::process::exit(1);
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    } else if debug_requested(cli) && !cli.verbosity.is_present() {
        // Debug runs show their diagnostic lines unless a level was chosen.
        config.level_filter = config.level_filter.max(LevelFilter::DEBUG);
        config.use_env_filter = false;
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config = config
        .with_log_file(cli.log_file.clone())
        .with_timestamps(cli.log_timestamps)
        .with_target(cli.log_target);
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}

/// The demo always processes in debug mode; `process` only with `--debug`.
fn debug_requested(cli: &Cli) -> bool {
    match &cli.command {
        None | Some(Command::Demo) => true,
        Some(Command::Process(args)) => args.debug,
        Some(Command::Version) => false,
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    use tracing_subscriber::fmt::MakeWriter;
    use tracing_subscriber::layer::SubscriberExt;
    use twv_cli::logging::env_filter;
    use twv_cli::run_demo;

    use super::*;

    #[derive(Clone, Default)]
    struct BufferWriter {
        buffer: Arc<Mutex<Vec<u8>>>,
    }

    impl Write for BufferWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buffer.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for BufferWriter {
        type Writer = BufferWriter;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn demo_logs(args: &[&str]) -> String {
        let cli = Cli::try_parse_from(args.iter().copied()).unwrap();
        let mut config = log_config_from_cli(&cli);
        // Keep the runner's RUST_LOG out of the assertions.
        config.use_env_filter = false;
        let writer = BufferWriter::default();
        let subscriber = tracing_subscriber::registry().with(env_filter(&config)).with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer.clone())
                .with_ansi(false)
                .without_time(),
        );
        tracing::subscriber::with_default(subscriber, || {
            run_demo().unwrap();
        });
        String::from_utf8(writer.buffer.lock().unwrap().clone()).unwrap()
    }

    #[test]
    fn debug_flag_lowers_level() {
        let cli = Cli::try_parse_from(["twat-video", "process", "--debug", "a"]).unwrap();
        let config = log_config_from_cli(&cli);
        assert_eq!(config.level_filter, LevelFilter::DEBUG);
        assert!(!config.use_env_filter);
    }

    #[test]
    fn explicit_level_wins_over_debug_flag() {
        let cli = Cli::try_parse_from([
            "twat-video",
            "--log-level",
            "error",
            "process",
            "--debug",
            "a",
        ])
        .unwrap();
        let config = log_config_from_cli(&cli);
        assert_eq!(config.level_filter, LevelFilter::ERROR);
    }

    #[test]
    fn process_without_debug_stays_at_warn() {
        let cli = Cli::try_parse_from(["twat-video", "process", "a"]).unwrap();
        let config = log_config_from_cli(&cli);
        assert_eq!(config.level_filter, LevelFilter::WARN);
        assert!(config.use_env_filter);
        assert_eq!(config.format, LogFormat::Pretty);
    }

    #[test]
    fn demo_runs_at_debug_level() {
        for args in [&["twat-video"][..], &["twat-video", "demo"][..]] {
            let cli = Cli::try_parse_from(args.iter().copied()).unwrap();
            let config = log_config_from_cli(&cli);
            assert_eq!(config.level_filter, LevelFilter::DEBUG);
            assert!(!config.use_env_filter);
        }
    }

    #[test]
    fn default_invocation_logs_demo_result() {
        let logs = demo_logs(&["twat-video"]);
        assert!(logs.contains("Starting twat-video"), "logs: {logs}");
        assert!(logs.contains("received 4 input items"), "logs: {logs}");
        assert!(logs.contains("Processing completed"), "logs: {logs}");
        assert!(logs.contains("twat-video finished"), "logs: {logs}");
    }

    #[test]
    fn quiet_demo_suppresses_info_lines() {
        let logs = demo_logs(&["twat-video", "-q", "demo"]);
        assert!(!logs.contains("Starting twat-video"), "logs: {logs}");
        assert!(!logs.contains("received 4 input items"), "logs: {logs}");
    }

    #[test]
    fn layout_flags_reach_log_config() {
        let cli =
            Cli::try_parse_from(["twat-video", "--log-timestamps", "--log-target", "version"])
                .unwrap();
        let config = log_config_from_cli(&cli);
        assert!(config.with_timestamps);
        assert!(config.with_target);
        assert_eq!(config.level_filter, LevelFilter::WARN);
    }
}
