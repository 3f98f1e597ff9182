//! In-memory encoding result.

use crate::format::WaveFormat;
use crate::quantize::Quantized;
use crate::writer::HEADER_SIZE;

/// A fully serialized WAVE file.
#[derive(Debug, Clone)]
pub struct EncodedWave {
    /// Complete file bytes, header included.
    pub bytes: Vec<u8>,
    /// Quantized values, one per input sample.
    pub quantized: Quantized,
    /// Format the file was written with.
    pub format: WaveFormat,
    /// BLAKE3 hash of the data payload only.
    pub pcm_hash: String,
}

impl EncodedWave {
    pub(crate) fn new(bytes: Vec<u8>, quantized: Quantized, format: WaveFormat) -> Self {
        let pcm_hash = blake3::hash(&bytes[HEADER_SIZE..]).to_hex().to_string();
        Self {
            bytes,
            quantized,
            format,
            pcm_hash,
        }
    }

    /// The data payload without the header.
    pub fn pcm_data(&self) -> &[u8] {
        &self.bytes[HEADER_SIZE..]
    }

    /// Number of frames (one per input sample).
    pub fn num_frames(&self) -> usize {
        self.quantized.len()
    }

    /// Duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_frames() as f64 / f64::from(self.format.sample_rate())
    }
}
