// Thin command-line front end over the library. All metric logic lives in
// src/lib.rs and its modules. Results go to stdout as JSON; logs go to
// stderr (set RUST_LOG=debug to see them).
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::EnvFilter;

use mse_metric::{EvaluationRequest, MeanSquaredError, Metric, Multioutput};

#[derive(Parser)]
#[command(name = "mse-metric", version, about = "Mean squared error / RMSE metric")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the metric descriptor as JSON.
    Info,
    /// Score a JSON request document.
    Compute {
        /// Path to a request: {"predictions": [...], "references": [...], ...}
        request: String,
        /// Report RMSE instead of MSE, overriding the document.
        #[arg(long)]
        rmse: bool,
        /// `raw_values` or `uniform_average`, overriding the document.
        #[arg(long)]
        multioutput: Option<String>,
    },
}

fn run(cli: Cli) -> mse_metric::Result<()> {
    let metric = MeanSquaredError::new();

    match cli.command {
        Command::Info => {
            println!("{}", serde_json::to_string_pretty(&metric.info())?);
        }
        Command::Compute { request, rmse, multioutput } => {
            let mut req = EvaluationRequest::load_json(&request)?;
            if rmse {
                req.squared = Some(false);
            }
            if let Some(name) = multioutput {
                req.multioutput = Some(name.parse::<Multioutput>()?.into());
            }
            let output = metric.evaluate(req)?;
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "mse-metric failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
