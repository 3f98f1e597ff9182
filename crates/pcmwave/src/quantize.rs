//! Sample quantization.
//!
//! Normalized samples are scaled, truncated toward zero and packed into the
//! target width. By default nothing is clamped: a value outside [-1.0, 1.0]
//! keeps only the low bits of its integer, exactly as packing an oversized
//! integer into one or two bytes would.

use serde::{Deserialize, Serialize};

use crate::error::{WaveError, WaveResult};
use crate::format::BitDepth;

/// Scale factor for 8-bit samples.
pub const SCALE_8BIT: f64 = 127.0;
/// Midpoint added to 8-bit samples.
pub const OFFSET_8BIT: u8 = 127;
/// Scale factor for 16-bit samples.
pub const SCALE_16BIT: f64 = 32767.0;

/// How out-of-range samples are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuantizeMode {
    /// Truncate and keep the low bits (wraps around).
    #[default]
    Wrap,
    /// Clamp to [-1.0, 1.0] before truncating.
    Clamp,
}

impl QuantizeMode {
    fn prepare(self, sample: f64) -> f64 {
        match self {
            QuantizeMode::Wrap => sample,
            QuantizeMode::Clamp => sample.clamp(-1.0, 1.0),
        }
    }
}

/// Quantizes one sample to an unsigned 8-bit value.
pub fn quantize_u8(sample: f64, mode: QuantizeMode) -> u8 {
    let scaled = mode.prepare(sample) * SCALE_8BIT;
    // (t + 127) mod 256 == ((t mod 256) + 127) mod 256
    let low = scaled.trunc().rem_euclid(256.0) as u8;
    low.wrapping_add(OFFSET_8BIT)
}

/// Quantizes one sample to a signed 16-bit value.
pub fn quantize_i16(sample: f64, mode: QuantizeMode) -> i16 {
    let scaled = mode.prepare(sample) * SCALE_16BIT;
    scaled.trunc().rem_euclid(65536.0) as u16 as i16
}

/// Quantized sample values, one per input sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Quantized {
    /// 8-bit unsigned values.
    Unsigned8(Vec<u8>),
    /// 16-bit signed values.
    Signed16(Vec<i16>),
}

impl Quantized {
    /// Number of quantized values.
    pub fn len(&self) -> usize {
        match self {
            Quantized::Unsigned8(v) => v.len(),
            Quantized::Signed16(v) => v.len(),
        }
    }

    /// Returns true if there are no values.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bit depth of the values.
    pub fn bit_depth(&self) -> BitDepth {
        match self {
            Quantized::Unsigned8(_) => BitDepth::Eight,
            Quantized::Signed16(_) => BitDepth::Sixteen,
        }
    }

    /// 8-bit values, if this is 8-bit data.
    pub fn as_u8(&self) -> Option<&[u8]> {
        match self {
            Quantized::Unsigned8(v) => Some(v),
            Quantized::Signed16(_) => None,
        }
    }

    /// 16-bit values, if this is 16-bit data.
    pub fn as_i16(&self) -> Option<&[i16]> {
        match self {
            Quantized::Signed16(v) => Some(v),
            Quantized::Unsigned8(_) => None,
        }
    }

    /// Appends the PCM payload to `out`, writing each value once per channel.
    pub fn write_frames(&self, channels: u16, out: &mut Vec<u8>) {
        match self {
            Quantized::Unsigned8(values) => {
                for &value in values {
                    for _ in 0..channels {
                        out.push(value);
                    }
                }
            }
            Quantized::Signed16(values) => {
                for &value in values {
                    let bytes = value.to_le_bytes();
                    for _ in 0..channels {
                        out.extend_from_slice(&bytes);
                    }
                }
            }
        }
    }
}

/// Quantizes a whole buffer without touching it.
///
/// # Errors
/// `NonFiniteSample` for the first NaN or infinite sample.
pub fn quantize(samples: &[f64], depth: BitDepth, mode: QuantizeMode) -> WaveResult<Quantized> {
    if let Some(index) = samples.iter().position(|s| !s.is_finite()) {
        return Err(WaveError::NonFiniteSample { index });
    }

    report_out_of_range(samples, mode);

    Ok(match depth {
        BitDepth::Eight => {
            Quantized::Unsigned8(samples.iter().map(|&s| quantize_u8(s, mode)).collect())
        }
        BitDepth::Sixteen => {
            Quantized::Signed16(samples.iter().map(|&s| quantize_i16(s, mode)).collect())
        }
    })
}

/// Samples outside [-1.0, 1.0] found in a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfRange {
    /// How many samples are out of range.
    pub count: usize,
    /// Index of the first one.
    pub first_index: usize,
}

/// Scans a buffer for samples outside [-1.0, 1.0].
pub fn find_out_of_range(samples: &[f64]) -> Option<OutOfRange> {
    let mut out_of_range = samples
        .iter()
        .enumerate()
        .filter(|(_, s)| !(-1.0..=1.0).contains(*s));

    let (first_index, _) = out_of_range.next()?;
    Some(OutOfRange {
        count: 1 + out_of_range.count(),
        first_index,
    })
}

fn report_out_of_range(samples: &[f64], mode: QuantizeMode) {
    if let Some(found) = find_out_of_range(samples) {
        log::warn!(
            "{} of {} samples outside [-1.0, 1.0] (first at index {}), quantizing with {:?}",
            found.count,
            samples.len(),
            found.first_index,
            mode
        );
    }
}
