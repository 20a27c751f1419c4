//! folio CLI
//!
//! Browse a portfolio page in the terminal, or print it.

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::Datelike;
use clap::{Parser, Subcommand};
use log::info;

use folio::config::{load_config, CliOverrides, Config};
use folio::content;
use folio::error::FolioResult;
use folio::export::{format_portfolio, format_sections, DEFAULT_PRINT_WIDTH};
use folio::logging::init_logging;
use folio::tui::run::run;
use folio::types::OutputFormat;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Browse a portfolio page in the terminal")]
#[command(version)]
struct Cli {
    /// Content file (JSON or TOML). Default: built-in portfolio
    #[arg(long, global = true)]
    content: Option<PathBuf>,

    /// Config file. Default: $FOLIO_CONFIG_PATH or the platform config dir
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level: trace|debug|info|warn|error
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive page (default)
    View {
        /// Terminal widths below this use the mobile layout
        #[arg(long)]
        breakpoint: Option<u16>,

        /// Disable transitions and scroll reveal
        #[arg(long)]
        no_animations: bool,
    },

    /// Print the page to stdout
    Print {
        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,

        /// Layout width in columns
        #[arg(long)]
        width: Option<u16>,
    },

    /// List the navigable sections
    Sections,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: Cli) -> FolioResult<()> {
    let command = cli.command.unwrap_or(Commands::View {
        breakpoint: None,
        no_animations: false,
    });

    let overrides = match &command {
        Commands::View {
            breakpoint,
            no_animations,
        } => CliOverrides {
            mobile_breakpoint: *breakpoint,
            no_animations: *no_animations,
            log_level: cli.log_level.clone(),
        },
        _ => CliOverrides {
            log_level: cli.log_level.clone(),
            ..CliOverrides::default()
        },
    };

    let config = load_config(cli.config.as_deref(), &overrides)?;
    start_logging(&config);

    let portfolio = content::resolve(cli.content.as_deref())?;

    match command {
        Commands::View { .. } => {
            run(portfolio, &config)?;
        }
        Commands::Print { format, width } => {
            let width = width.unwrap_or(DEFAULT_PRINT_WIDTH);
            let year = chrono::Local::now().year();
            let output = format_portfolio(&portfolio, format.into(), width, year)?;
            info!("event=printed width={width} bytes={}", output.len());
            print!("{}", output);
        }
        Commands::Sections => {
            print!("{}", format_sections());
        }
    }

    Ok(())
}

// ============================================================================
// LOGGING
// ============================================================================

/// Start file logging. A logger that fails to start is not fatal.
fn start_logging(config: &Config) {
    if let Err(e) = init_logging(&config.log_level, &config.resolved_log_dir()) {
        eprintln!("Warning: logging disabled: {}", e);
    }
}
