//! Raw path: plain HTTP GET and untyped JSON navigation.
use blockprobe_client::rpc::{get_block, http_client};
use reqwest::{header::ACCEPT, Client};
use serde_json::{Map, Value};
use tokio_util::sync::CancellationToken;
use url::Url;

use crate::{
    config::ProbeConfig,
    error::ProbeError,
    logger::ProbeLog,
    size::{report_sizes, SizeMeasurement},
};

/// Fetches the block over plain HTTP, extracts `data.message` and reports its sizes.
pub async fn measure_raw<L: ProbeLog + ?Sized>(
    config: &ProbeConfig,
    block_id: &str,
    log: &L,
    cancel: &CancellationToken,
) -> Result<SizeMeasurement, ProbeError> {
    let url = get_block(&config.base_url()?, block_id)?;
    let client = http_client(config.timeout)?;
    log.debug(&format!("Requesting {url}"));

    let body = tokio::select! {
        biased;
        _ = cancel.cancelled() => return Err(ProbeError::Cancelled),
        body = fetch_body(&client, url) => body?,
    };
    let message = extract_message(&body)?;
    Ok(report_sizes(log, &message)?)
}

async fn fetch_body(client: &Client, url: Url) -> Result<Vec<u8>, reqwest::Error> {
    let response = client
        .get(url)
        .header(ACCEPT, "application/json")
        .send()
        .await?
        .error_for_status()?;
    Ok(response.bytes().await?.to_vec())
}

/// Re-encodes the `message` of a `{"data": {"message": ...}}` envelope.
///
/// Key order of the message is kept as received.
pub fn extract_message(body: &[u8]) -> Result<Vec<u8>, ProbeError> {
    let envelope: Map<String, Value> = serde_json::from_slice(body).map_err(ProbeError::Decode)?;
    let data = envelope
        .get("data")
        .and_then(Value::as_object)
        .ok_or(ProbeError::MissingField { field: "data" })?;
    let message = data
        .get("message")
        .ok_or(ProbeError::MissingField { field: "message" })?;
    serde_json::to_vec(message).map_err(ProbeError::Encode)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_extract_message() {
        let message = extract_message(br#"{"data":{"message":{"slot":"123"}}}"#).unwrap();
        assert_eq!(message, br#"{"slot":"123"}"#.to_vec());
    }

    #[test]
    fn test_extract_keeps_key_order_and_drops_whitespace() {
        let body = br#"{
            "version": "capella",
            "data": {
                "message": {"slot": "1", "proposer_index": "2", "body": {"graffiti": "0x00"}},
                "signature": "0xab"
            }
        }"#;
        assert_eq!(
            extract_message(body).unwrap(),
            br#"{"slot":"1","proposer_index":"2","body":{"graffiti":"0x00"}}"#.to_vec()
        );
    }

    #[test]
    fn test_missing_message() {
        let result = extract_message(br#"{"data":{}}"#);
        assert!(matches!(result, Err(ProbeError::MissingField { field: "message" })));
    }

    #[test]
    fn test_missing_data() {
        let result = extract_message(br#"{"code":404,"message":"NOT_FOUND: beacon block"}"#);
        assert!(matches!(result, Err(ProbeError::MissingField { field: "data" })));
    }

    #[test]
    fn test_data_not_an_object() {
        let result = extract_message(br#"{"data":[{"message":{}}]}"#);
        assert!(matches!(result, Err(ProbeError::MissingField { field: "data" })));
    }

    #[test]
    fn test_not_json() {
        assert!(matches!(extract_message(b"not json"), Err(ProbeError::Decode(_))));
        // Valid JSON, but not an object envelope.
        assert!(matches!(extract_message(b"[1, 2]"), Err(ProbeError::Decode(_))));
    }

    #[test]
    fn test_null_message_is_kept() {
        assert_eq!(
            extract_message(br#"{"data":{"message":null}}"#).unwrap(),
            b"null".to_vec()
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ProbeError::MissingField { field: "message" }.to_string(),
            "Failed to get message from block data"
        );
        assert_eq!(
            ProbeError::UnsupportedVersionKind("phase0".to_string()).to_string(),
            "Unsupported block version: phase0"
        );
    }
}
