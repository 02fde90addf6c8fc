//! Command-line interface for text2qti
//! This binary validates plain-text quizzes and converts them into QTI packages for Canvas.
//!
//! Usage:
//!   text2qti convert `<input>` [-o `<output>`] [--validate-only] [--qti-version `<version>`]
//!   text2qti validate `<input>`
//!   text2qti inspect `<input>` [--format summary|json]

mod commands;
mod inspect;

use clap::{Arg, ArgAction, ArgMatches, Command};
use commands::{CliError, ConvertOptions};
use std::path::PathBuf;
use text2qti_config::{Loader, Text2QtiConfig, PROJECT_CONFIG_FILE};
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    Command::new("text2qti")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert markdown quizzes to QTI packages for Canvas")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .value_parser(clap::value_parser!(PathBuf))
                .help("Configuration file layered over the defaults and ./text2qti.toml"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log debug output to stderr"),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a quiz file to a QTI package")
                .arg(input_arg())
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_parser(clap::value_parser!(PathBuf))
                        .help("Output ZIP file path (default: output.zip)"),
                )
                .arg(
                    Arg::new("validate-only")
                        .long("validate-only")
                        .action(ArgAction::SetTrue)
                        .help("Only validate syntax, don't generate QTI"),
                )
                .arg(
                    Arg::new("qti-version")
                        .long("qti-version")
                        .value_parser(["1.2", "2.1"])
                        .help("QTI version to generate"),
                ),
        )
        .subcommand(
            Command::new("validate")
                .about("Validate a quiz file's syntax")
                .arg(input_arg()),
        )
        .subcommand(
            Command::new("inspect")
                .about("Parse a quiz file and print its contents")
                .arg(input_arg())
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .value_parser(["summary", "json"])
                        .default_value("summary")
                        .help("Output format"),
                ),
        )
}

fn input_arg() -> Arg {
    Arg::new("input")
        .help("Path to the quiz file")
        .required(true)
        .value_parser(clap::value_parser!(PathBuf))
        .index(1)
}

fn main() {
    let matches = cli().get_matches();
    init_logging(matches.get_flag("verbose"));

    if let Err(err) = run(&matches) {
        eprintln!("✗ {}", err);
        std::process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<(), CliError> {
    match matches.subcommand() {
        Some(("convert", sub)) => {
            let config = load_config(matches, sub.get_one::<String>("qti-version"))?;
            let options = ConvertOptions {
                input: required_path(sub, "input")?,
                output: sub.get_one::<PathBuf>("output").cloned(),
                validate_only: sub.get_flag("validate-only"),
            };
            commands::convert(&options, &config)
        }
        Some(("validate", sub)) => commands::validate(&required_path(sub, "input")?),
        Some(("inspect", sub)) => {
            let format = sub
                .get_one::<String>("format")
                .map(String::as_str)
                .unwrap_or("summary");
            commands::inspect(&required_path(sub, "input")?, format)
        }
        _ => Err(CliError::Usage("a subcommand is required".to_string())),
    }
}

fn required_path(matches: &ArgMatches, name: &str) -> Result<PathBuf, CliError> {
    matches
        .get_one::<PathBuf>(name)
        .cloned()
        .ok_or_else(|| CliError::Usage(format!("missing <{}>", name)))
}

/// Defaults, then `./text2qti.toml` when present, then `--config`, then command-line flags.
fn load_config(
    matches: &ArgMatches,
    qti_version: Option<&String>,
) -> Result<Text2QtiConfig, CliError> {
    let mut loader = Loader::new().with_optional_file(PROJECT_CONFIG_FILE);
    if let Some(path) = matches.get_one::<PathBuf>("config") {
        tracing::debug!(path = %path.display(), "layering configuration file");
        loader = loader.with_file(path);
    }
    if let Some(version) = qti_version {
        loader = loader.set_override("convert.qti_version", version.as_str())?;
    }
    Ok(loader.build()?)
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
