use clap::Parser;
use std::path::PathBuf;

mod commands;
mod context;
mod format;
mod logging;

/// image-list - Container image reference discovery
///
/// Lists all images referenced by `image` keys in YAML and JSON files
/// under the given directories.
#[derive(Parser, Debug)]
#[command(name = "image-list")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Directories to search for images in YAML and JSON files
    #[arg(long, value_delimiter = ',', num_args = 1.., default_value = ".")]
    directories: Vec<PathBuf>,

    /// Validate that images are from a known container image host and do not
    /// use the "latest" tag
    #[arg(short = 'v', long)]
    validation: bool,

    /// Output format: pretty, json, yaml
    #[arg(short, long, default_value = "pretty")]
    format: String,

    /// Configuration file (YAML), overrides IMAGE_LIST_CONFIG
    #[arg(long)]
    config: Option<PathBuf>,

    /// Verbose diagnostics on stderr (can be repeated)
    #[arg(long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Output diagnostics in JSON format
    #[arg(long)]
    json_logs: bool,

    /// Control colored output: auto, always, never
    #[arg(long, default_value = "auto")]
    color: String,
}

fn main() {
    let cli = Cli::parse();

    let color = format::ColorChoice::from(cli.color.as_str());
    let verbosity = context::VerbosityLevel::from_count(cli.verbose);
    logging::init(verbosity, cli.json_logs, format::should_color(color));

    tracing::debug!(
        "image-list {} (libimagelist {})",
        env!("CARGO_PKG_VERSION"),
        libimagelist::version()
    );

    let ctx = match context::AppContext::build(cli.config.as_deref(), color) {
        Ok(ctx) => ctx,
        Err(e) => {
            format::error(color, &e.to_string());
            std::process::exit(1);
        }
    };

    commands::scan::handle_scan(
        &ctx,
        &cli.directories,
        cli.validation,
        format::OutputFormat::from(cli.format.as_str()),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["image-list"]).unwrap();
        assert_eq!(cli.directories, vec![PathBuf::from(".")]);
        assert!(!cli.validation);
        assert_eq!(cli.format, "pretty");
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_cli_short_validation_flag() {
        let cli = Cli::try_parse_from(["image-list", "-v"]).unwrap();
        assert!(cli.validation);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_cli_directories_comma_separated_and_repeated() {
        let cli = Cli::try_parse_from([
            "image-list",
            "--directories",
            "charts,examples",
            "--directories",
            "test/k8s",
        ])
        .unwrap();
        assert_eq!(
            cli.directories,
            vec![
                PathBuf::from("charts"),
                PathBuf::from("examples"),
                PathBuf::from("test/k8s"),
            ]
        );
    }

    #[test]
    fn test_cli_verbose_counts() {
        let cli = Cli::try_parse_from(["image-list", "--verbose", "--verbose"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_cli_rejects_unknown_flag() {
        assert!(Cli::try_parse_from(["image-list", "--bogus"]).is_err());
    }
}
