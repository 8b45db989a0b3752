//! `scs-transpose` - stamp SCD templates from approved domain briefs
//!
//! Run from the project root with no arguments to process the built-in
//! catalogue against `docs/` and `context/project/`.

use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, Command};
use scs_core::{Catalog, Transposer, TransposerConfig};
use std::io::Write;
use std::path::PathBuf;

fn main() -> Result<()> {
    let matches = Command::new("scs-transpose")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate draft SCDs from approved domain briefs")
        .arg(
            Arg::new("root")
                .long("root")
                .value_name("DIR")
                .default_value(".")
                .value_parser(value_parser!(PathBuf))
                .help("Project root containing docs/ and context/project/"),
        )
        .arg(
            Arg::new("catalog")
                .long("catalog")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("YAML domain catalogue replacing the built-in one"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print the run report as JSON after the summary"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .default_value("warn")
                .help("Log level when RUST_LOG is unset (trace, debug, info, warn, error)"),
        )
        .get_matches();

    let log_level = matches
        .get_one::<String>("log-level")
        .map_or("warn", String::as_str);
    init_logging(log_level)?;

    let root = matches
        .get_one::<PathBuf>("root")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("."));
    let mut config = TransposerConfig::for_project(&root);
    if let Some(path) = matches.get_one::<PathBuf>("catalog") {
        let catalog = Catalog::from_yaml_file(path)
            .with_context(|| format!("Failed to load catalogue {}", path.display()))?;
        config = config.with_catalog(catalog);
    }

    let transposer = Transposer::from_config(&config).context("Invalid domain catalogue")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let report = transposer.run(&mut out).context("Transposition aborted")?;

    if matches.get_flag("json") {
        serde_json::to_writer_pretty(&mut out, &report).context("Failed to write report")?;
        writeln!(out)?;
    }

    Ok(())
}

/// Initialize tracing subscriber for logging
fn init_logging(level: &str) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(level))
        .context("Failed to create log filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    Ok(())
}
