//! xunit-viz CLI - Readable summaries of .NET test results.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{Level, info, warn};
use tracing_subscriber::FmtSubscriber;

use xunit_viz::config::{self, Config};
use xunit_viz::report::{ConsoleReporter, JsonReporter, Reporter};
use xunit_viz::xunit;

const DEFAULT_CONFIG: &str = "xunit-viz.toml";

#[derive(Parser)]
#[command(name = "xunit-viz")]
#[command(about = "Readable summaries of .NET xUnit test results", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = DEFAULT_CONFIG, global = true)]
    config: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the results of one or more xUnit v2+ XML files
    Show {
        /// Test result file in xUnit's v2+ XML format (repeat for multiple files)
        #[arg(long = "log-file", alias = "logFile", required = true)]
        log_files: Vec<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,

        /// Exit with a failure when any assembly has failed tests or errors
        #[arg(long)]
        strict: bool,
    },

    /// Validate configuration file
    Validate,

    /// Initialize a new configuration file
    Init,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Show {
            log_files,
            format,
            strict,
        } => show(&cli.config, &log_files, format, strict, cli.verbose),
        Commands::Validate => validate_config(&cli.config),
        Commands::Init => init_config(&cli.config),
    }
}

/// Load the configuration. A missing file is only an error when the user
/// pointed at it explicitly.
fn load_config(config_path: &Path) -> Result<Config> {
    let config = if config_path == Path::new(DEFAULT_CONFIG) {
        config::load_config_or_default(config_path)?
    } else {
        config::load_config(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    };

    Ok(config)
}

fn show(
    config_path: &Path,
    log_files: &[PathBuf],
    format: Format,
    strict: bool,
    verbose: bool,
) -> Result<()> {
    let config = load_config(config_path)?;

    let mut reporter: Box<dyn Reporter> = match format {
        Format::Text => {
            let mut console = ConsoleReporter::stdout(config.report.clone(), verbose);
            console.write_banner()?;
            Box::new(console)
        }
        Format::Json => Box::new(JsonReporter::stdout()),
    };

    let mut load_failures = 0;
    let mut failing_runs = 0;

    for path in log_files {
        match xunit::load_file(path, &config.naming) {
            Ok(run) => {
                info!("Loaded {}", path.display());
                if run.has_failures() {
                    failing_runs += 1;
                }
                reporter.report(path, &run)?;
            }
            Err(e) => {
                warn!("Failed to load {}: {}", path.display(), e);
                load_failures += 1;
                reporter.report_error(path, &e)?;
            }
        }
    }

    reporter.finish()?;

    if load_failures > 0 || (strict && failing_runs > 0) {
        std::process::exit(1);
    }

    Ok(())
}

fn validate_config(config_path: &Path) -> Result<()> {
    match load_config(config_path) {
        Ok(config) => {
            println!("Configuration is valid!");
            println!();
            println!("Settings:");
            println!("  No split:         {}", config.naming.no_split.join(", "));
            println!("  No transform:     {}", config.naming.no_transform.join(", "));
            println!("  Fast threshold:   {}s", config.report.threshold_fast);
            println!("  Normal threshold: {}s", config.report.threshold_normal);

            Ok(())
        }
        Err(e) => {
            eprintln!("Configuration error: {:#}", e);
            std::process::exit(1);
        }
    }
}

fn init_config(config_path: &Path) -> Result<()> {
    if config_path.exists() {
        eprintln!(
            "{} already exists. Remove it first or edit manually.",
            config_path.display()
        );
        std::process::exit(1);
    }

    let content = format!(
        "# xunit-viz configuration file\n\n{}",
        config::to_toml(&Config::default())?
    );
    std::fs::write(config_path, content)?;

    println!("Created {}", config_path.display());
    println!();
    println!("Edit the configuration as needed, then run:");
    println!("  xunit-viz show --log-file <results.xml>");

    Ok(())
}
