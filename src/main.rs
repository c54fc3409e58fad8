// SPDX-License-Identifier: MPL-2.0
use iced_compare::app::{self, paths, Flags};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{fmt, EnvFilter};

const USAGE: &str = "\
Usage: iced_compare [OPTIONS] <BEFORE> <AFTER>

Interactive before/after comparison of two images.

Arguments:
  <BEFORE>             Image shown left of the divider
  <AFTER>              Image revealed right of the divider

Options:
  --lang <ID>          UI language (e.g. en-US, fr)
  --config-dir <DIR>   Directory holding settings.toml
                       (overrides ICED_COMPARE_CONFIG_DIR)
  -h, --help           Print this help

Logging is controlled by RUST_LOG (default: info).";

#[derive(Debug)]
enum Command {
    Help,
    Run(Flags),
}

fn parse_args(mut args: pico_args::Arguments) -> Result<Command, String> {
    if args.contains(["-h", "--help"]) {
        return Ok(Command::Help);
    }

    let lang: Option<String> = args.opt_value_from_str("--lang").map_err(|e| e.to_string())?;
    let config_dir: Option<String> = args
        .opt_value_from_str("--config-dir")
        .map_err(|e| e.to_string())?;

    let rest = args.finish();
    if let Some(flag) = rest
        .iter()
        .filter_map(|a| a.to_str())
        .find(|a| a.starts_with('-'))
    {
        return Err(format!("unknown option '{flag}'"));
    }

    let mut positional = rest.into_iter().map(PathBuf::from);
    match (positional.next(), positional.next(), positional.next()) {
        (Some(before), Some(after), None) => Ok(Command::Run(Flags {
            lang,
            config_dir,
            before,
            after,
        })),
        (_, _, Some(_)) => Err("expected exactly two images".to_string()),
        _ => Err("missing <BEFORE> and <AFTER> images".to_string()),
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_target(true).init();
}

fn main() -> ExitCode {
    let flags = match parse_args(pico_args::Arguments::from_env()) {
        Ok(Command::Help) => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Ok(Command::Run(flags)) => flags,
        Err(message) => {
            eprintln!("error: {message}\n\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    init_logging();
    paths::init_cli_overrides(flags.config_dir.clone());

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "application exited with an error");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    fn parse(args: &[&str]) -> Result<Command, String> {
        parse_args(pico_args::Arguments::from_vec(
            args.iter().map(OsString::from).collect(),
        ))
    }

    #[test]
    fn parses_two_images_and_options() {
        let Ok(Command::Run(flags)) = parse(&["--lang", "fr", "--config-dir", "/cfg", "a.png", "b.png"])
        else {
            panic!("expected run command");
        };
        assert_eq!(flags.lang.as_deref(), Some("fr"));
        assert_eq!(flags.config_dir.as_deref(), Some("/cfg"));
        assert_eq!(flags.before, PathBuf::from("a.png"));
        assert_eq!(flags.after, PathBuf::from("b.png"));
    }

    #[test]
    fn help_wins_over_everything() {
        assert!(matches!(parse(&["a.png", "--help"]), Ok(Command::Help)));
    }

    #[test]
    fn unknown_flag_is_rejected() {
        let err = parse(&["--zoom", "a.png", "b.png"]).unwrap_err();
        assert!(err.contains("--zoom"));
    }

    #[test]
    fn wrong_image_count_is_rejected() {
        assert!(parse(&["a.png"]).is_err());
        assert!(parse(&["a.png", "b.png", "c.png"]).is_err());
    }
}
