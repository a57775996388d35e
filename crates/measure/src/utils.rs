use thiserror::Error;

#[derive(Debug, Error)]
pub enum UtilsError {
    #[error("Snappy error {0}")]
    Snappy(#[from] snap::Error),
}

/// Performs snappy compression on bytes.
///
/// Uses the raw (block) format without stream framing, so the output length is
/// the payload cost alone.
pub fn compress(bytes: &[u8]) -> Result<Vec<u8>, UtilsError> {
    let mut snap_encoder = snap::raw::Encoder::new();
    Ok(snap_encoder.compress_vec(bytes)?)
}
