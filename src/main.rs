//! vocalize main entry point
//!
//! Loads the configuration, builds the converter and hands the terminal to
//! the interactive shell until the user quits.

use log::{debug, error, info};
use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use vocalize::config::Config;
use vocalize::shell::Shell;
use vocalize::{Converter, Result, VocalizeError};

/// Debug log file, created in the working directory
const DEBUG_LOG: &str = "vocalize.log";

const USAGE: &str = "\
Usage: vocalize [OPTIONS]

Options:
  -c, --config <PATH>  Use this config file instead of ~/.vocalize.cfg
  -d, --debug          Write debug logs to vocalize.log
  -h, --help           Print help
  -V, --version        Print version
";

/// Parsed command line
#[derive(Debug, Default)]
struct Args {
    debug: bool,
    config: Option<PathBuf>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args> {
    let mut parsed = Args::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--debug" | "-d" => parsed.debug = true,
            "--config" | "-c" => {
                let path = args
                    .next()
                    .ok_or_else(|| VocalizeError::Config("--config needs a path".into()))?;
                parsed.config = Some(PathBuf::from(path));
            }
            "--help" | "-h" => {
                print!("{}", USAGE);
                process::exit(0);
            }
            "--version" | "-V" => {
                println!("{} {}", vocalize::APP_NAME, vocalize::VERSION);
                process::exit(0);
            }
            other => {
                return Err(VocalizeError::Config(format!(
                    "unknown argument '{}'\n\n{}",
                    other, USAGE
                )))
            }
        }
    }

    Ok(parsed)
}

fn main() {
    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(2);
        }
    };

    init_logging(args.debug);

    if let Err(e) = run(args) {
        error!("Fatal error: {}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Debug output goes to `vocalize.log`; otherwise only errors reach stderr
fn init_logging(debug: bool) {
    let mut builder = env_logger::Builder::new();

    if !debug {
        // RUST_LOG overrides the error-only default
        builder
            .filter_level(log::LevelFilter::Error)
            .parse_default_env()
            .init();
        return;
    }

    // Log lines would tear through the form, so they only go to a file
    match OpenOptions::new().create(true).append(true).open(DEBUG_LOG) {
        Ok(file) => {
            builder
                .filter_level(log::LevelFilter::Debug)
                .target(env_logger::Target::Pipe(Box::new(file)))
                .init();
            info!("vocalize {} started with debug logging", vocalize::VERSION);
        }
        Err(e) => {
            eprintln!("vocalize: cannot write {} ({}), debug log disabled", DEBUG_LOG, e);
            builder.filter_level(log::LevelFilter::Warn).init();
        }
    }
}

fn run(args: Args) -> Result<()> {
    let config = match args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    info!("Config loaded from {:?}", config.path());

    let converter = Converter::from_config(&config)?;
    debug!("Writing outputs to {:?}", converter.output_dir());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(stdin.lock(), stdout.lock(), Arc::new(converter));
    shell.run()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter().map(|s| s.to_string()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn test_parse_no_args() {
        let parsed = parse_args(args(&[])).unwrap();
        assert!(!parsed.debug);
        assert!(parsed.config.is_none());
    }

    #[test]
    fn test_parse_debug_and_config() {
        let parsed = parse_args(args(&["-d", "--config", "/tmp/v.cfg"])).unwrap();
        assert!(parsed.debug);
        assert_eq!(parsed.config, Some(PathBuf::from("/tmp/v.cfg")));
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_args(args(&["--config"])).is_err());
        assert!(parse_args(args(&["--loud"])).is_err());
    }
}
