//! CLI definition, option resolution, and tracing setup.

use std::path::PathBuf;

use clap::Parser;
use clap::error::ErrorKind;
use color_eyre::eyre::Result;
use ctigroup_shared::{ConvertOptions, load_config, load_config_from};
use tracing::info;

/// Printed to stdout when the arguments are unusable.
const USAGE: &str = "Usage: ctigroup [OPTIONS] <input.tsv> <output.json>";

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// ctigroup — group ticket titles by CTI type/item.
#[derive(Parser, Debug)]
#[command(
    name = "ctigroup",
    version,
    about = "Group tab-delimited CTI ticket titles into bulk-import JSON.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Tab-delimited input; column 0 is `Category/Type/Item,Title`.
    pub input: PathBuf,

    /// Path of the JSON file to write.
    pub output: PathBuf,

    /// Config file (defaults to ~/.ctigroup/ctigroup.toml).
    #[arg(long, env = "CTIGROUP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Category stamped on every record.
    #[arg(long)]
    pub category: Option<String>,

    /// Justification stamped on every record.
    #[arg(long)]
    pub justification: Option<String>,

    /// Item used for paths without a third segment.
    #[arg(long)]
    pub default_item: Option<String>,

    /// Spaces per JSON indentation level.
    #[arg(long)]
    pub indent: Option<usize>,

    /// Log format: text (default) or json.
    #[arg(long, default_value = "text")]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Handle a clap parse failure: help and version print as usual, anything
/// else prints the usage line to stdout and exits with status 1.
pub(crate) fn usage_exit(err: clap::Error) -> ! {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
        _ => {
            println!("{USAGE}");
            eprint!("{}", err.render());
            std::process::exit(1);
        }
    }
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags. Logs go to stderr; stdout carries
/// only the run summary.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "ctigroup=warn",
        1 => "ctigroup=info",
        2 => "ctigroup=debug",
        _ => "ctigroup=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Option resolution
// ---------------------------------------------------------------------------

/// Merge defaults, the config file, and CLI flags (flags win).
fn resolve_options(cli: &Cli) -> Result<ConvertOptions> {
    let config = match &cli.config {
        Some(path) => load_config_from(path)?,
        None => load_config()?,
    };
    Ok(apply_overrides(ConvertOptions::from(&config), cli))
}

fn apply_overrides(mut opts: ConvertOptions, cli: &Cli) -> ConvertOptions {
    if let Some(category) = &cli.category {
        opts.category = category.clone();
    }
    if let Some(justification) = &cli.justification {
        opts.justification = justification.clone();
    }
    if let Some(item) = &cli.default_item {
        opts.default_item = item.clone();
    }
    if let Some(indent) = cli.indent {
        opts.indent = indent;
    }
    opts
}

// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

/// Convert the input file and print the run summary.
pub(crate) fn run(cli: &Cli) -> Result<()> {
    let opts = resolve_options(cli)?;

    info!(
        input = %cli.input.display(),
        output = %cli.output.display(),
        category = %opts.category,
        "converting ticket titles"
    );

    let summary = ctigroup_core::convert(&cli.input, &cli.output, &opts)?;

    println!(
        "Processed {} unique type/item combinations",
        summary.group_count
    );
    println!("Output written to {}", summary.output_path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_positionals_parse() {
        let cli = Cli::try_parse_from(["ctigroup", "in.tsv", "out.json"]).expect("parse");
        assert_eq!(cli.input, PathBuf::from("in.tsv"));
        assert_eq!(cli.output, PathBuf::from("out.json"));
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn wrong_arity_is_rejected() {
        assert!(Cli::try_parse_from(["ctigroup", "in.tsv"]).is_err());
        assert!(Cli::try_parse_from(["ctigroup", "in.tsv", "out.json", "extra"]).is_err());
    }

    #[test]
    fn flags_override_config_values() {
        let cli = Cli::try_parse_from([
            "ctigroup",
            "--category",
            "Site Reliability",
            "--indent",
            "2",
            "in.tsv",
            "out.json",
        ])
        .expect("parse");

        let opts = apply_overrides(ConvertOptions::default(), &cli);
        assert_eq!(opts.category, "Site Reliability");
        assert_eq!(opts.indent, 2);
        assert_eq!(opts.justification, "Initial title additions");
        assert_eq!(opts.default_item, "Other");
    }

    #[test]
    fn explicit_config_file_is_loaded() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("ctigroup.toml");
        std::fs::write(&path, "[record]\ndefault_item = \"General\"\n").expect("write config");

        let cli = Cli::try_parse_from([
            "ctigroup",
            "--config",
            path.to_str().expect("utf-8 path"),
            "in.tsv",
            "out.json",
        ])
        .expect("parse");

        let opts = resolve_options(&cli).expect("resolve");
        assert_eq!(opts.default_item, "General");
        assert_eq!(opts.indent, 4);
    }
}
