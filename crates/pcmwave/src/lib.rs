//! pcmwave - canonical PCM WAVE writer
//!
//! Turns a buffer of normalized samples in [-1.0, 1.0] into a byte-exact
//! canonical RIFF/WAVE file: a 44-byte header followed by 8-bit unsigned or
//! 16-bit signed little-endian PCM.
//!
//! # Quantization
//!
//! - 8-bit: `trunc(sample * 127.0) + 127`, one unsigned byte
//! - 16-bit: `trunc(sample * 32767.0)`, signed little-endian
//!
//! Out-of-range input is not clamped unless [`QuantizeMode::Clamp`] is
//! selected; it wraps to the low bits of the truncated integer and a warning
//! is logged.
//!
//! # Channels
//!
//! The data chunk holds `samples * channels * bytes_per_sample` bytes. Each
//! sample is one frame and is written to every channel.
//!
//! # Example
//!
//! ```no_run
//! use pcmwave::WaveEncoder;
//!
//! let mut encoder = WaveEncoder::new(1, 8000, 8)?;
//! encoder.set_samples(vec![0.0, 1.0, -1.0]);
//! let written = encoder.save("out.wav")?;
//! assert_eq!(written.as_u8(), Some(&[127u8, 254, 0][..]));
//! # Ok::<(), pcmwave::WaveError>(())
//! ```
//!
//! # Crate Structure
//!
//! - [`WaveEncoder`] - sample buffer and serialize entry points
//! - [`format`] - validated format parameters
//! - [`quantize`] - sample quantization
//! - [`writer`] - header emission and output sinks
//! - [`error`] - error types

pub mod encoder;
pub mod error;
pub mod format;
pub mod quantize;
pub mod result;
pub mod writer;


// Re-export main types at crate root
pub use encoder::WaveEncoder;
pub use error::{WaveError, WaveResult};
pub use format::{BitDepth, WaveFormat};
pub use quantize::{QuantizeMode, Quantized};
pub use result::EncodedWave;
