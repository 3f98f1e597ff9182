//! WAVE format parameters.

use serde::{Deserialize, Serialize};

use crate::error::{WaveError, WaveResult};

/// Supported PCM bit depths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum BitDepth {
    /// 8-bit unsigned samples, midpoint 127.
    Eight,
    /// 16-bit signed little-endian samples.
    Sixteen,
}

impl BitDepth {
    /// Bits per sample as stored in the header.
    pub fn bits(self) -> u16 {
        match self {
            BitDepth::Eight => 8,
            BitDepth::Sixteen => 16,
        }
    }

    /// Bytes per sample (per channel).
    pub fn bytes(self) -> u16 {
        self.bits() / 8
    }
}

impl TryFrom<u16> for BitDepth {
    type Error = WaveError;

    fn try_from(bits: u16) -> Result<Self, Self::Error> {
        match bits {
            8 => Ok(BitDepth::Eight),
            16 => Ok(BitDepth::Sixteen),
            _ => Err(WaveError::UnsupportedBitDepth { bits }),
        }
    }
}

impl From<BitDepth> for u16 {
    fn from(depth: BitDepth) -> Self {
        depth.bits()
    }
}

/// Validated WAVE format parameters.
///
/// Only the channel/rate/depth triple is stored. Byte rate and block align
/// are always derived from it, so the header can never disagree with itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "FormatFields", into = "FormatFields")]
pub struct WaveFormat {
    num_channels: u16,
    sample_rate: u32,
    bit_depth: BitDepth,
}

impl WaveFormat {
    /// Creates a format from raw header values.
    ///
    /// # Errors
    /// - `UnsupportedBitDepth` unless `bits_per_sample` is 8 or 16
    /// - `InvalidChannelCount` / `InvalidSampleRate` for zero values
    /// - `FormatOverflow` if byte rate or block align exceed their header fields
    pub fn new(num_channels: u16, sample_rate: u32, bits_per_sample: u16) -> WaveResult<Self> {
        let bit_depth = BitDepth::try_from(bits_per_sample)?;
        Self::with_depth(num_channels, sample_rate, bit_depth)
    }

    /// Creates a format from an already validated bit depth.
    pub fn with_depth(num_channels: u16, sample_rate: u32, bit_depth: BitDepth) -> WaveResult<Self> {
        if num_channels == 0 {
            return Err(WaveError::InvalidChannelCount {
                channels: num_channels,
            });
        }
        if sample_rate == 0 {
            return Err(WaveError::InvalidSampleRate { rate: sample_rate });
        }

        let block_align = u64::from(num_channels) * u64::from(bit_depth.bytes());
        let byte_rate = u64::from(sample_rate) * block_align;
        if block_align > u64::from(u16::MAX) || byte_rate > u64::from(u32::MAX) {
            return Err(WaveError::FormatOverflow {
                sample_rate,
                channels: num_channels,
                bytes_per_sample: bit_depth.bytes(),
            });
        }

        Ok(Self {
            num_channels,
            sample_rate,
            bit_depth,
        })
    }

    /// Mono format at the given rate and depth.
    pub fn mono(sample_rate: u32, bit_depth: BitDepth) -> WaveResult<Self> {
        Self::with_depth(1, sample_rate, bit_depth)
    }

    /// Stereo format at the given rate and depth.
    pub fn stereo(sample_rate: u32, bit_depth: BitDepth) -> WaveResult<Self> {
        Self::with_depth(2, sample_rate, bit_depth)
    }

    /// Number of channels.
    pub fn num_channels(&self) -> u16 {
        self.num_channels
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Bit depth.
    pub fn bit_depth(&self) -> BitDepth {
        self.bit_depth
    }

    /// Bits per sample as stored in the header.
    pub fn bits_per_sample(&self) -> u16 {
        self.bit_depth.bits()
    }

    /// Bytes per sample (per channel).
    pub fn bytes_per_sample(&self) -> u16 {
        self.bit_depth.bytes()
    }

    /// Bytes per sample frame (all channels, one time step).
    pub fn block_align(&self) -> u16 {
        self.num_channels * self.bytes_per_sample()
    }

    /// Bytes per second.
    pub fn byte_rate(&self) -> u32 {
        self.sample_rate * u32::from(self.block_align())
    }

    /// Size of the data chunk for `sample_count` samples.
    ///
    /// Each sample occupies a full frame, so the size is
    /// `sample_count * num_channels * bytes_per_sample`.
    pub fn data_size(&self, sample_count: usize) -> WaveResult<u32> {
        let too_large = || WaveError::DataTooLarge { sample_count };
        let size = u64::try_from(sample_count)
            .ok()
            .and_then(|n| n.checked_mul(u64::from(self.block_align())))
            .ok_or_else(too_large)?;

        // ChunkSize = 36 + data_size must also fit
        if size > u64::from(u32::MAX) - 36 {
            return Err(too_large());
        }
        Ok(size as u32)
    }
}

#[derive(Serialize, Deserialize)]
struct FormatFields {
    num_channels: u16,
    sample_rate: u32,
    bits_per_sample: u16,
}

impl TryFrom<FormatFields> for WaveFormat {
    type Error = WaveError;

    fn try_from(fields: FormatFields) -> Result<Self, Self::Error> {
        WaveFormat::new(fields.num_channels, fields.sample_rate, fields.bits_per_sample)
    }
}

impl From<WaveFormat> for FormatFields {
    fn from(format: WaveFormat) -> Self {
        Self {
            num_channels: format.num_channels,
            sample_rate: format.sample_rate,
            bits_per_sample: format.bits_per_sample(),
        }
    }
}
