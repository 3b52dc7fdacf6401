//! CLI definition, flag normalization, tracing setup, and the run command.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use color_eyre::eyre::Result;
use drupalarch_core::pipeline::{InventoryResult, ProgressReporter, run_inventory};
use drupalarch_shared::{AppConfig, LogFormat, LoggingConfig, RunConfig};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

/// Exit status after printing usage.
const HELP_EXIT_CODE: i32 = 1;

/// Long flags also accepted with a single leading dash (`-read_dir`).
const SINGLE_DASH_FLAGS: &[&str] = &["read_dir", "write_dir", "help"];

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// drupalarch: inventory a configuration export as CSV reports.
#[derive(Parser, Debug)]
#[command(
    name = "drupalarch",
    version,
    about = "Write CSV reports describing the content types, fields, taxonomies, and views in a configuration export.",
    long_about = None,
    disable_help_flag = true,
)]
pub(crate) struct Cli {
    /// Directory containing config files. Do not include trailing slash. Defaults to current directory.
    #[arg(long = "read_dir", visible_alias = "read-dir", value_name = "PATH")]
    pub read_dir: Option<PathBuf>,

    /// Directory to write CSVs to. Do not include trailing slash. Defaults to current directory.
    #[arg(long = "write_dir", visible_alias = "write-dir", value_name = "PATH")]
    pub write_dir: Option<PathBuf>,

    /// This listing.
    #[arg(short = 'h', long = "help", action = clap::ArgAction::SetTrue)]
    pub help: bool,
}

/// Rewrite Go-style single-dash long flags (`-read_dir`, `-read_dir=x`)
/// into the double-dash form clap parses.
pub(crate) fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .enumerate()
        .map(|(i, arg)| {
            if i == 0 {
                return arg;
            }
            match arg.to_str() {
                Some(s) if is_single_dash_flag(s) => OsString::from(format!("-{s}")),
                _ => arg,
            }
        })
        .collect()
}

fn is_single_dash_flag(arg: &str) -> bool {
    let Some(rest) = arg.strip_prefix('-') else {
        return false;
    };
    if rest.starts_with('-') {
        return false;
    }
    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
    SINGLE_DASH_FLAGS.contains(&name)
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing from the settings file. `RUST_LOG` takes precedence.
pub(crate) fn init_tracing(logging: &LoggingConfig) {
    use tracing_subscriber::{EnvFilter, fmt};

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    match logging.format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_writer(std::io::stderr)
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
// Command
// ---------------------------------------------------------------------------

/// Run the inventory, or print usage and exit non-zero for `-help`.
pub(crate) fn run(cli: Cli, config: &AppConfig) -> Result<()> {
    if cli.help {
        Cli::command().print_help()?;
        println!();
        std::process::exit(HELP_EXIT_CODE);
    }

    let run_config = RunConfig::resolve(config, cli.read_dir, cli.write_dir);

    info!(
        read_dir = %run_config.read_dir.display(),
        write_dir = %run_config.write_dir.display(),
        "inventorying configuration"
    );

    let reporter = CliProgress::new()?;
    let result = run_inventory(&run_config, &reporter)?;

    println!();
    println!("  Inventory written to {}", run_config.write_dir.display());
    println!("  Content types: {}", result.content_types);
    println!("  Fields:        {}", result.fields);
    println!("  Taxonomies:    {}", result.taxonomies);
    println!("  Views:         {}", result.views);
    println!("  Reports:       {}", result.reports.len());
    println!("  Time:          {:.1}s", result.elapsed.as_secs_f64());
    println!();

    Ok(())
}

// ---------------------------------------------------------------------------
// CLI progress reporter
// ---------------------------------------------------------------------------

/// CLI progress reporter using an indicatif spinner on stderr.
struct CliProgress {
    spinner: ProgressBar,
}

impl CliProgress {
    fn new() -> Result<Self> {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")?
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        Ok(Self { spinner })
    }
}

impl ProgressReporter for CliProgress {
    fn phase(&self, name: &str) {
        self.spinner.set_message(name.to_string());
    }

    fn file_extracted(&self, name: &str, current: usize, total: usize) {
        self.spinner
            .set_message(format!("Extracting [{current}/{total}] {name}"));
    }

    fn done(&self, _result: &InventoryResult) {
        self.spinner.finish_and_clear();
    }
}

impl Drop for CliProgress {
    fn drop(&mut self) {
        if !self.spinner.is_finished() {
            self.spinner.finish_and_clear();
        }
    }
}
