//! Measures how large a beacon block message is as JSON, and as snappy compressed JSON.
//!
//! The block is fetched twice: once with a plain HTTP request whose JSON is navigated
//! untyped, once through the typed beacon node client. Each path is independent and
//! fail-soft. A failure is logged against its path and never stops the other one.
use tokio_util::sync::CancellationToken;

pub mod config;
pub mod error;
pub mod logger;
pub mod raw;
pub mod size;
pub mod typed;
pub mod utils;

pub use config::ProbeConfig;
pub use error::ProbeError;
pub use logger::{ProbeLog, Source, SourceLogger};
pub use size::SizeMeasurement;

/// Outcome of both paths for one block.
#[derive(Debug)]
pub struct ProbeReport {
    pub raw: Result<SizeMeasurement, ProbeError>,
    pub eth2_client: Result<SizeMeasurement, ProbeError>,
}

/// Runs the raw path, then the typed client path, logging any failure with the
/// handle for its source.
pub async fn run<L, F>(
    config: &ProbeConfig,
    block_id: &str,
    logger: F,
    cancel: &CancellationToken,
) -> ProbeReport
where
    L: ProbeLog,
    F: Fn(Source) -> L,
{
    let raw_log = logger(Source::Raw);
    let raw = raw::measure_raw(config, block_id, &raw_log, cancel).await;
    log_failure(&raw_log, &raw);

    let client_log = logger(Source::Eth2Client);
    let eth2_client = typed::measure_typed(config, block_id, &client_log, cancel).await;
    log_failure(&client_log, &eth2_client);

    ProbeReport { raw, eth2_client }
}

fn log_failure<L: ProbeLog>(log: &L, outcome: &Result<SizeMeasurement, ProbeError>) {
    if let Err(e) = outcome {
        log.error(&e.to_string());
    }
}
