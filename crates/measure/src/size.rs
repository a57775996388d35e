//! Sizes of a JSON payload before and after snappy compression.
use std::fmt::Display;

use crate::{
    logger::ProbeLog,
    utils::{compress, UtilsError},
};

/// Byte lengths of one JSON payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SizeMeasurement {
    pub uncompressed: usize,
    pub compressed: usize,
}

impl SizeMeasurement {
    pub fn of(json: &[u8]) -> Result<Self, UtilsError> {
        Ok(SizeMeasurement {
            uncompressed: json.len(),
            compressed: compress(json)?.len(),
        })
    }

    /// Uncompressed bytes per compressed byte.
    pub fn ratio(&self) -> f64 {
        if self.compressed == 0 {
            return 0.0;
        }
        self.uncompressed as f64 / self.compressed as f64
    }
}

impl Display for SizeMeasurement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} bytes, {} bytes compressed ({:.2}x)",
            self.uncompressed,
            self.compressed,
            self.ratio()
        )
    }
}

/// Measures the JSON and logs both sizes.
pub fn report_sizes<L: ProbeLog + ?Sized>(
    log: &L,
    json: &[u8],
) -> Result<SizeMeasurement, UtilsError> {
    let measurement = SizeMeasurement::of(json)?;
    log.info(&format!(
        "Byte length of JSON block data: {}",
        measurement.uncompressed
    ));
    log.info(&format!(
        "Compressed byte length of JSON block data: {}",
        measurement.compressed
    ));
    log.debug(&format!(
        "Compression ratio of JSON block data: {:.3}",
        measurement.ratio()
    ));
    Ok(measurement)
}
