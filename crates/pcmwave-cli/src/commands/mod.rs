//! CLI command implementations

pub mod encode;
pub mod tone;

mod output;

use anyhow::{Context, Result};
use pcmwave::{QuantizeMode, WaveEncoder, WaveFormat};

/// Channel count used when neither the command line nor the input names one.
pub const DEFAULT_CHANNELS: u16 = 1;
/// Sample rate used when neither the command line nor the input names one.
pub const DEFAULT_SAMPLE_RATE: u32 = 44100;
/// Bit depth used when neither the command line nor the input names one.
pub const DEFAULT_BITS: u16 = 16;

/// Format options shared by every command.
///
/// Unset fields fall back to a format embedded in the input, then to the
/// defaults above.
#[derive(Debug, Clone, Default)]
pub struct FormatOptions {
    pub channels: Option<u16>,
    pub sample_rate: Option<u32>,
    pub bits: Option<u16>,
    pub clamp: bool,
}

impl FormatOptions {
    /// Resolves the final format, layering these options over `base`.
    pub fn resolve(&self, base: Option<&WaveFormat>) -> Result<WaveFormat> {
        let channels = self
            .channels
            .or(base.map(|f| f.num_channels()))
            .unwrap_or(DEFAULT_CHANNELS);
        let sample_rate = self
            .sample_rate
            .or(base.map(|f| f.sample_rate()))
            .unwrap_or(DEFAULT_SAMPLE_RATE);
        let bits = self
            .bits
            .or(base.map(|f| f.bits_per_sample()))
            .unwrap_or(DEFAULT_BITS);

        WaveFormat::new(channels, sample_rate, bits).with_context(|| {
            format!(
                "Invalid format: {} channel(s), {} Hz, {}-bit",
                channels, sample_rate, bits
            )
        })
    }

    /// Builds an empty encoder for the resolved format.
    pub fn encoder(&self, base: Option<&WaveFormat>) -> Result<WaveEncoder> {
        let mode = if self.clamp {
            QuantizeMode::Clamp
        } else {
            QuantizeMode::Wrap
        };
        Ok(WaveEncoder::from_format(self.resolve(base)?).with_quantize_mode(mode))
    }
}
