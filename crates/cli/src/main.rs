//! Artifact cleaner entry point.
//!
//! This binary is the composition root. Responsibilities:
//!
//! 1. **Load configuration** — read the `INPUT_*` variables into
//!    [`retention::Settings`]. Invalid configuration exits before any network
//!    call.
//! 2. **Wire observability** — install a `tracing-subscriber` layer (text or
//!    JSON, filtered by `RUST_LOG`, default `info`) writing to stdout.
//! 3. **Construct infrastructure** — build the [`github::GithubArtifactClient`]
//!    and inject it into [`retention::ArtifactSweeper`].
//! 4. **Run one sweep** and map the result to the process exit code: `0` on
//!    success (including nothing to delete), `1` on any failure.

use std::process::ExitCode;

use anyhow::Context;
use github::GithubArtifactClient;
use retention::{ArtifactSweeper, LogFormat, Settings, SweepOutcome, SweeperError, Timestamp};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            init_logging(LogFormat::default());
            error!(error = %e, "Invalid configuration");
            return ExitCode::from(e.exit_code());
        }
    };

    init_logging(settings.log_format);

    let result = run(&settings).await;
    match &result {
        Ok(outcome) => info!(deleted = outcome.deleted(), "Artifact cleanup finished"),
        Err(e) => error!(error = %format!("{e:#}"), "Artifact cleanup failed"),
    }
    exit_code_for(&result)
}

/// `0` for any finished sweep, including one with nothing to delete; the
/// error's own code for a [`SweeperError`]; `1` for anything else.
fn exit_code_for(result: &anyhow::Result<SweepOutcome>) -> ExitCode {
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            let code = e
                .downcast_ref::<SweeperError>()
                .map(SweeperError::exit_code)
                .unwrap_or(1);
            ExitCode::from(code)
        }
    }
}

async fn run(settings: &Settings) -> anyhow::Result<SweepOutcome> {
    let client =
        GithubArtifactClient::from_settings(settings).context("Failed to build the HTTP client")?;
    let sweeper = ArtifactSweeper::new(client, settings);
    let outcome = sweeper.run(Timestamp::now()).await?;
    Ok(outcome)
}

fn init_logging(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stdout)
        .with_target(false);

    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}
