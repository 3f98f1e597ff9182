//! Error types for WAVE encoding.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for encoder operations.
pub type WaveResult<T> = Result<T, WaveError>;

/// Errors that can occur while configuring or serializing a WAVE file.
#[derive(Debug, Error)]
pub enum WaveError {
    /// Bit depth other than 8 or 16.
    #[error("unsupported bit depth: {bits} (expected 8 or 16)")]
    UnsupportedBitDepth {
        /// The rejected bit depth.
        bits: u16,
    },

    /// Zero channels.
    #[error("invalid channel count: {channels}")]
    InvalidChannelCount {
        /// The rejected channel count.
        channels: u16,
    },

    /// Zero sample rate.
    #[error("invalid sample rate: {rate}")]
    InvalidSampleRate {
        /// The rejected sample rate.
        rate: u32,
    },

    /// Derived byte rate does not fit the 32-bit header field.
    #[error("byte rate overflows u32: {sample_rate} Hz x {channels} channels x {bytes_per_sample} bytes")]
    FormatOverflow {
        /// Sample rate in Hz.
        sample_rate: u32,
        /// Channel count.
        channels: u16,
        /// Bytes per sample.
        bytes_per_sample: u16,
    },

    /// Data chunk size does not fit the 32-bit RIFF size fields.
    #[error("{sample_count} samples exceed the 4 GiB RIFF size limit")]
    DataTooLarge {
        /// Number of samples in the buffer.
        sample_count: usize,
    },

    /// NaN or infinite sample.
    #[error("sample {index} is not finite")]
    NonFiniteSample {
        /// Position of the sample in the buffer.
        index: usize,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Finished temp file could not be moved over the destination.
    #[error("failed to persist {}: {source}", path.display())]
    Persist {
        /// Destination path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

impl WaveError {
    /// Stable error code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            WaveError::UnsupportedBitDepth { .. } => "WAVE_001",
            WaveError::InvalidChannelCount { .. } => "WAVE_002",
            WaveError::InvalidSampleRate { .. } => "WAVE_003",
            WaveError::FormatOverflow { .. } => "WAVE_004",
            WaveError::DataTooLarge { .. } => "WAVE_005",
            WaveError::NonFiniteSample { .. } => "WAVE_006",
            WaveError::Io(_) => "WAVE_007",
            WaveError::Persist { .. } => "WAVE_008",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_bit_depth_message() {
        let err = WaveError::UnsupportedBitDepth { bits: 12 };
        assert!(err.to_string().contains("12"));
        assert_eq!(err.code(), "WAVE_001");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        let err: WaveError = io.into();
        assert!(matches!(err, WaveError::Io(_)));
        assert_eq!(err.code(), "WAVE_007");
    }

    #[test]
    fn test_persist_message_names_path() {
        let err = WaveError::Persist {
            path: PathBuf::from("out/tone.wav"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().contains("tone.wav"));
    }
}
