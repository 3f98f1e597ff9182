//! The sample buffer that serializes itself as a WAVE file.

use std::io::Write;
use std::path::Path;

use crate::error::WaveResult;
use crate::format::WaveFormat;
use crate::quantize::{quantize, QuantizeMode, Quantized};
use crate::result::EncodedWave;
use crate::writer::{encode_to_vec, persist_to_path, write_all_to};

/// PCM sample buffer with fixed format parameters.
///
/// Samples are stored as given. Every serialize call quantizes a fresh copy,
/// so serializing twice yields identical bytes and the buffer is never
/// replaced by its quantized form.
#[derive(Debug, Clone)]
pub struct WaveEncoder {
    format: WaveFormat,
    mode: QuantizeMode,
    samples: Vec<f64>,
}

impl WaveEncoder {
    /// Creates an encoder with no samples.
    ///
    /// # Errors
    /// `UnsupportedBitDepth` unless `bits_per_sample` is 8 or 16, plus the
    /// other format checks of [`WaveFormat::new`].
    pub fn new(num_channels: u16, sample_rate: u32, bits_per_sample: u16) -> WaveResult<Self> {
        let format = WaveFormat::new(num_channels, sample_rate, bits_per_sample)?;
        Ok(Self::from_format(format))
    }

    /// Creates an encoder from a validated format.
    pub fn from_format(format: WaveFormat) -> Self {
        Self {
            format,
            mode: QuantizeMode::default(),
            samples: Vec::new(),
        }
    }

    /// Builder-style quantize mode selection.
    pub fn with_quantize_mode(mut self, mode: QuantizeMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the quantize mode.
    pub fn set_quantize_mode(&mut self, mode: QuantizeMode) {
        self.mode = mode;
    }

    /// Current quantize mode.
    pub fn quantize_mode(&self) -> QuantizeMode {
        self.mode
    }

    /// Format parameters.
    pub fn format(&self) -> &WaveFormat {
        &self.format
    }

    /// Number of channels.
    pub fn num_channels(&self) -> u16 {
        self.format.num_channels()
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.format.sample_rate()
    }

    /// Bits per sample (8 or 16).
    pub fn bits_per_sample(&self) -> u16 {
        self.format.bits_per_sample()
    }

    /// Bytes per second, derived from the format.
    pub fn byte_rate(&self) -> u32 {
        self.format.byte_rate()
    }

    /// Bytes per frame, derived from the format.
    pub fn block_align(&self) -> u16 {
        self.format.block_align()
    }

    /// Replaces the sample buffer. Values are not range-checked here.
    pub fn set_samples(&mut self, samples: impl Into<Vec<f64>>) {
        self.samples = samples.into();
    }

    /// Appends samples to the buffer.
    pub fn extend_samples<I: IntoIterator<Item = f64>>(&mut self, samples: I) {
        self.samples.extend(samples);
    }

    /// Empties the buffer.
    pub fn clear_samples(&mut self) {
        self.samples.clear();
    }

    /// Current samples, in playback order.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Consumes the encoder and returns its samples.
    pub fn into_samples(self) -> Vec<f64> {
        self.samples
    }

    /// Size of the data chunk for the current buffer.
    pub fn data_size(&self) -> WaveResult<u32> {
        self.format.data_size(self.samples.len())
    }

    /// Quantizes the current buffer without serializing it.
    pub fn quantize(&self) -> WaveResult<Quantized> {
        quantize(&self.samples, self.format.bit_depth(), self.mode)
    }

    /// Serializes into memory.
    pub fn encode(&self) -> WaveResult<EncodedWave> {
        let quantized = self.quantize()?;
        let bytes = encode_to_vec(&self.format, &quantized)?;
        log::debug!(
            "encoded {} samples as {} ch / {} Hz / {}-bit ({} bytes)",
            quantized.len(),
            self.format.num_channels(),
            self.format.sample_rate(),
            self.format.bits_per_sample(),
            bytes.len()
        );
        Ok(EncodedWave::new(bytes, quantized, self.format))
    }

    /// Serializes into memory and returns only the file bytes.
    pub fn to_bytes(&self) -> WaveResult<Vec<u8>> {
        self.encode().map(|encoded| encoded.bytes)
    }

    /// Serializes to a writer in a single write.
    ///
    /// Nothing reaches the writer unless the whole file was built.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> WaveResult<Quantized> {
        let encoded = self.encode()?;
        write_all_to(writer, &encoded.bytes)?;
        Ok(encoded.quantized)
    }

    /// Serializes to a file, replacing any existing file at `path`.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> WaveResult<Quantized> {
        self.save_encoded(path).map(|encoded| encoded.quantized)
    }

    /// Like [`save`](Self::save), but returns the full encoding result.
    pub fn save_encoded<P: AsRef<Path>>(&self, path: P) -> WaveResult<EncodedWave> {
        let path = path.as_ref();
        let encoded = self.encode()?;
        persist_to_path(path, &encoded.bytes)?;
        log::debug!("wrote {}", path.display());
        Ok(encoded)
    }
}
