//! CLI entry point.
//!
//! # Responsibility
//! - Execute one command line against the sample address book.
//! - Print feedback to stdout and failures to stderr with exit code 1.
//!
//! Usage: `carelink_cli [--log-dir <abs dir>] [--log-level <level>] link p/<NRIC> c/<NRIC>`

use carelink_core::{init_logging, parse_command, sample_address_book, LogConfig};
use std::process::ExitCode;

const USAGE: &str =
    "usage: carelink_cli [--log-dir <abs dir>] [--log-level <level>] link p/<NRIC> c/<NRIC>";

#[derive(Debug, PartialEq, Eq)]
struct CliArgs {
    log_dir: Option<String>,
    log_level: Option<String>,
    command_line: String,
}

fn usage_error(message: &str) -> String {
    format!("{message}\n{USAGE}")
}

/// Splits leading flags from the command line. Flags must come first.
fn parse_args(args: impl Iterator<Item = String>) -> Result<CliArgs, String> {
    let mut log_dir = None;
    let mut log_level = None;
    let mut args = args.peekable();

    while let Some(flag) = args.next_if(|arg| arg.starts_with("--")) {
        let value = args
            .next()
            .ok_or_else(|| usage_error(&format!("{flag} requires a value")))?;
        match flag.as_str() {
            "--log-dir" => log_dir = Some(value),
            "--log-level" => log_level = Some(value),
            _ => return Err(usage_error(&format!("unknown flag `{flag}`"))),
        }
    }

    let rest: Vec<String> = args.collect();
    if let Some(flag) = rest.iter().find(|arg| arg.starts_with("--")) {
        return Err(usage_error(&format!(
            "flag `{flag}` must come before the command"
        )));
    }
    if log_level.is_some() && log_dir.is_none() {
        return Err(usage_error("--log-level requires --log-dir"));
    }

    Ok(CliArgs {
        log_dir,
        log_level,
        command_line: rest.join(" "),
    })
}

fn run() -> Result<String, String> {
    let cli = parse_args(std::env::args().skip(1))?;

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let config =
            LogConfig::resolve(cli.log_level.as_deref(), log_dir).map_err(|err| err.to_string())?;
        init_logging(&config).map_err(|err| err.to_string())?;
    }

    if cli.command_line.trim().is_empty() {
        return Ok(format!(
            "carelink_core ping={} version={}",
            carelink_core::ping(),
            carelink_core::core_version()
        ));
    }

    let mut book = sample_address_book().map_err(|err| err.to_string())?;
    let command = parse_command(&cli.command_line).map_err(|err| err.to_string())?;
    let outcome = command
        .execute(&mut book)
        .map_err(|err| err.to_string())?;
    Ok(outcome.feedback)
}

fn main() -> ExitCode {
    let code = match run() {
        Ok(feedback) => {
            println!("{feedback}");
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    };
    // The logger handle lives in a static and is never dropped.
    log::logger().flush();
    code
}

#[cfg(test)]
mod tests {
    use super::{parse_args, CliArgs};

    fn args(values: &[&str]) -> impl Iterator<Item = String> {
        values
            .iter()
            .map(|value| value.to_string())
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn leading_flags_are_split_from_command() {
        let cli = parse_args(args(&[
            "--log-dir",
            "/var/log/carelink",
            "--log-level",
            "warn",
            "link",
            "p/S1234567A",
            "c/S7654321B",
        ]))
        .unwrap();

        assert_eq!(
            cli,
            CliArgs {
                log_dir: Some("/var/log/carelink".to_string()),
                log_level: Some("warn".to_string()),
                command_line: "link p/S1234567A c/S7654321B".to_string(),
            }
        );
    }

    #[test]
    fn log_level_without_log_dir_is_rejected() {
        let err = parse_args(args(&["--log-level", "debug", "link"])).unwrap_err();
        assert!(err.contains("--log-level requires --log-dir"));
        assert!(err.contains("usage: carelink_cli"));
    }

    #[test]
    fn flags_after_command_word_are_rejected() {
        let err = parse_args(args(&[
            "link",
            "p/S1234567A",
            "c/S7654321B",
            "--log-dir",
            "/var/log/carelink",
        ]))
        .unwrap_err();
        assert!(err.contains("must come before the command"));
        assert!(err.contains("usage: carelink_cli"));
    }

    #[test]
    fn unknown_and_valueless_flags_are_rejected() {
        assert!(parse_args(args(&["--verbose", "x"]))
            .unwrap_err()
            .contains("unknown flag `--verbose`"));
        assert!(parse_args(args(&["--log-dir"]))
            .unwrap_err()
            .contains("--log-dir requires a value"));
    }
}
