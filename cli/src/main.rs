//! asod CLI - classify values by primitive kind and algebraic operand role.
//!
//! ```text
//! asod classify '0' '{"$bigint": "1"}' '{"isNeutral": true}'
//! echo '""' | asod classify --format json
//! asod kinds
//! ```

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use asod_cli::config::AsodConfig;
use asod_cli::logging::init_tracing;
use asod_cli::render::OutputFormat;
use asod_cli::run_classify;
use asod_types::PrimitiveKind;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "asod")]
#[command(about = "Classify values by primitive kind and algebraic operand role")]
struct Cli {
    /// Report format (overrides the config file)
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,
    /// Config file (defaults to $ASOD_CONFIG or ~/.asod/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify values written in JSON notation (reads stdin lines if none given)
    Classify {
        /// Values in JSON notation
        values: Vec<String>,
    },
    /// List the primitive kinds
    Kinds,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut init_warnings = Vec::new();
    let config = AsodConfig::load_or_warn(cli.config.as_deref(), &mut init_warnings);
    init_tracing(config.as_ref(), init_warnings);

    let format = cli
        .format
        .or_else(|| config.as_ref().and_then(AsodConfig::output_format))
        .unwrap_or_default();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Classify { values } => {
            if values.is_empty() {
                run_classify(io::stdin().lock().lines(), format, &mut out)?;
            } else {
                run_classify(values.into_iter().map(Ok), format, &mut out)?;
            }
        }
        Commands::Kinds => {
            for kind in PrimitiveKind::all() {
                writeln!(out, "{kind}")?;
            }
        }
    }

    out.flush()?;
    Ok(())
}
