use std::io::{self, Write};
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use transport_catalogue::requests::{
    MakeBaseRequest, ProcessRequests, RequestError, make_base, process_requests,
};

const USAGE: &str = "usage: transport-catalogue [make_base|process_requests] < requests.json";

/// Error from a command-line run.
#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error("unknown or missing mode")]
    Usage,

    #[error(transparent)]
    Request(#[from] RequestError),

    #[error("failed to write answers: {0}")]
    Output(#[from] io::Error),
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let mode = std::env::args().nth(1);
    match run(mode.as_deref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(AppError::Usage) => {
            eprintln!("{}", USAGE);
            ExitCode::from(2)
        }
        Err(e) => {
            error!(error = %e, "run failed");
            ExitCode::FAILURE
        }
    }
}

fn run(mode: Option<&str>) -> Result<(), AppError> {
    match mode {
        Some("make_base") => {
            let request: MakeBaseRequest =
                serde_json::from_reader(io::stdin().lock()).map_err(RequestError::from)?;
            let state = make_base(request)?;
            info!(
                stops = state.catalogue.stop_count(),
                routes = state.catalogue.route_count(),
                routing = state.router.is_some(),
                "base built"
            );
            Ok(())
        }
        Some("process_requests") => {
            let request: ProcessRequests =
                serde_json::from_reader(io::stdin().lock()).map_err(RequestError::from)?;
            let responses = process_requests(request)?;

            let mut out = io::stdout().lock();
            serde_json::to_writer_pretty(&mut out, &responses).map_err(RequestError::from)?;
            writeln!(out)?;
            out.flush()?;
            Ok(())
        }
        _ => Err(AppError::Usage),
    }
}
