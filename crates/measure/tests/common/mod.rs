//! Shared helpers for the measurement integration tests.
//!
//! Each test serves its own mock beacon node on an ephemeral port and points
//! a `ProbeConfig` at it.
#![allow(dead_code)]

use std::{sync::Arc, sync::Mutex, time::Duration};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use blockprobe_measure::{ProbeConfig, ProbeLog};
use log::Level;
use serde_json::{json, Value};
use tokio_util::sync::CancellationToken;

/// The only block id the mock node knows.
pub const SLOT: &str = "100";

/// Signed capella block for slot 100, in canonical Beacon API field order.
pub fn capella_block() -> Value {
    serde_json::from_str(include_str!("../fixtures/capella_block_100.json")).unwrap()
}

/// Response bodies for the two block endpoints.
pub struct MockNode {
    raw_body: Value,
    versioned_body: Value,
    block_delay: Duration,
}

impl MockNode {
    /// Serves `block` at slot 100 on both block endpoints.
    pub fn new(version: &str, block: Value) -> Self {
        MockNode {
            raw_body: json!({ "data": block.clone() }),
            versioned_body: json!({
                "version": version,
                "execution_optimistic": false,
                "finalized": true,
                "data": block,
            }),
            block_delay: Duration::ZERO,
        }
    }

    /// Replaces the body of the unversioned endpoint.
    pub fn with_raw_body(mut self, body: Value) -> Self {
        self.raw_body = body;
        self
    }

    /// Holds every block response back for `delay`.
    pub fn with_block_delay(mut self, delay: Duration) -> Self {
        self.block_delay = delay;
        self
    }

    pub async fn serve(self) -> ProbeConfig {
        let app = Router::new()
            .route(
                "/eth/v1/node/version",
                get(|| async { Json(json!({"data": {"version": "Mock/v1.0.0/linux-x86_64"}})) }),
            )
            .route(
                "/eth/v1/beacon/genesis",
                get(|| async {
                    Json(json!({"data": {
                        "genesis_time": "1606824023",
                        "genesis_validators_root": "0x4b363db94e286120d76eb905340fdd4e54bfe9f06bf33ff6cf5ad27f511bfe95",
                        "genesis_fork_version": "0x00000000"
                    }}))
                }),
            )
            .route("/eth/v1/beacon/blocks/:block_id", get(raw_block))
            .route("/eth/v2/beacon/blocks/:block_id", get(versioned_block))
            .with_state(Arc::new(self));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
        ProbeConfig {
            addr: addr.ip().to_string(),
            port: addr.port(),
            timeout: Duration::from_secs(5),
        }
    }
}

async fn raw_block(
    State(node): State<Arc<MockNode>>,
    Path(block_id): Path<String>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    known_block(&block_id)?;
    tokio::time::sleep(node.block_delay).await;
    Ok(Json(node.raw_body.clone()))
}

async fn versioned_block(
    State(node): State<Arc<MockNode>>,
    Path(block_id): Path<String>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    known_block(&block_id)?;
    tokio::time::sleep(node.block_delay).await;
    Ok(Json(node.versioned_body.clone()))
}

fn known_block(block_id: &str) -> Result<(), (StatusCode, Json<Value>)> {
    if block_id == SLOT {
        return Ok(());
    }
    Err((
        StatusCode::NOT_FOUND,
        Json(json!({"code": 404, "message": format!("NOT_FOUND: beacon block at slot {block_id}")})),
    ))
}

/// Cancels `cancel` after `delay`.
pub fn cancel_after(cancel: &CancellationToken, delay: Duration) {
    let cancel = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        cancel.cancel();
    });
}

/// A config for a port nothing listens on.
pub fn unreachable_config() -> ProbeConfig {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    ProbeConfig {
        addr: "127.0.0.1".to_string(),
        port,
        timeout: Duration::from_secs(5),
    }
}

/// Keeps every record so tests can assert on what a procedure logged.
#[derive(Default)]
pub struct MemoryLog {
    records: Mutex<Vec<(Level, String)>>,
}

impl MemoryLog {
    pub fn messages(&self, level: Level) -> Vec<String> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .filter(|(record_level, _)| *record_level == level)
            .map(|(_, message)| message.clone())
            .collect()
    }
}

impl ProbeLog for MemoryLog {
    fn log(&self, level: Level, message: &str) {
        self.records
            .lock()
            .unwrap()
            .push((level, message.to_string()));
    }
}
