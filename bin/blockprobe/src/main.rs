use anyhow::Result;
use blockprobe_measure::{run, Source, SourceLogger};
use clap::Parser;
use log::debug;
use tokio_util::sync::CancellationToken;

use crate::cli::AppArgs;

mod cli;

/// Measure the size of a beacon block message.
///
/// Fetches the block for the given slot from a beacon node twice:
/// - raw: GET /eth/v1/beacon/blocks/{slot}, `data.message` as untyped JSON.
/// - eth2Client: typed client, fork specific message selected by block version.
///
/// Logs the byte length of each message as JSON, and snappy compressed. A failing
/// path is logged and does not change the exit code.
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = AppArgs::parse();
    let config = args.probe_config();

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_interrupt.cancel();
        }
    });

    let report = run(&config, &args.slot, SourceLogger::new, &cancel).await;
    for (source, outcome) in [
        (Source::Raw, &report.raw),
        (Source::Eth2Client, &report.eth2_client),
    ] {
        if let Ok(measurement) = outcome {
            debug!(target: source.as_str(), "{measurement}");
        }
    }
    Ok(())
}
