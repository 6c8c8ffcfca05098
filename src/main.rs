use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result};
use pay_charge::domain::ports::ChargeExecutorBox;
use pay_charge::infrastructure::in_memory::InMemoryChargeExecutor;
use pay_charge::interfaces::charge_writer::ChargeWriter;
use pay_charge::interfaces::csv::charge_reader::ChargeReader;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// One diagnostic line per request
    Diagnostic,
    /// One JSON object per line
    Json,
}

/// Validates charge requests from a CSV file and dry-runs them.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input charge requests CSV file
    input: PathBuf,

    /// How accepted requests are printed
    #[arg(long, value_enum, default_value_t = OutputFormat::Diagnostic)]
    output: OutputFormat,
}

fn init_tracing() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let executor: ChargeExecutorBox = Box::new(InMemoryChargeExecutor::new());

    let reader = ChargeReader::from_path(&cli.input).into_diagnostic()?;
    for (row, charge) in reader.charges().enumerate() {
        match charge {
            Ok(request) => {
                if let Err(e) = executor.submit(request).await {
                    tracing::error!(row = row + 1, "Error submitting charge request: {}", e);
                }
            }
            Err(e) => {
                tracing::error!(row = row + 1, "Error reading charge request: {}", e);
            }
        }
    }

    let accepted = executor.submitted().await.into_diagnostic()?;
    tracing::info!(accepted = accepted.len(), "dry run finished");

    let stdout = io::stdout();
    let mut writer = ChargeWriter::new(stdout.lock());
    match cli.output {
        OutputFormat::Diagnostic => writer.write_diagnostics(&accepted).into_diagnostic()?,
        OutputFormat::Json => writer.write_json_lines(&accepted).into_diagnostic()?,
    }

    Ok(())
}
