//! Tone command implementation
//!
//! Renders a sine tone and writes it as a WAVE file.

use std::f64::consts::TAU;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use colored::Colorize;
use pcmwave::WaveFormat;

use super::output::write_and_report;
use super::FormatOptions;

/// Run the tone command
///
/// # Arguments
/// * `frequency` - Tone frequency in Hz
/// * `duration` - Length in seconds
/// * `amplitude` - Peak amplitude (1.0 = full scale)
/// * `output` - Output file path
/// * `format` - Format options
/// * `json` - Print a JSON summary instead of colored text
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(
    frequency: f64,
    duration: f64,
    amplitude: f64,
    output: &str,
    format: &FormatOptions,
    json: bool,
) -> Result<ExitCode> {
    let mut encoder = format.encoder(None)?;

    if !json {
        println!(
            "{} {} Hz for {}s -> {}",
            "Rendering tone:".cyan().bold(),
            frequency,
            duration,
            output
        );
    }

    let samples = render_sine(frequency, duration, amplitude, encoder.format())?;
    encoder.set_samples(samples);

    write_and_report(&encoder, output, json)
}

/// Renders `round(duration * sample_rate)` samples of a sine wave.
///
/// The sample count is checked against `format` before anything is
/// allocated, so a duration too long for one file is an error.
pub fn render_sine(
    frequency: f64,
    duration: f64,
    amplitude: f64,
    format: &WaveFormat,
) -> Result<Vec<f64>> {
    if !frequency.is_finite() || frequency <= 0.0 {
        bail!("Frequency must be a positive number, got {}", frequency);
    }
    if !duration.is_finite() || duration < 0.0 {
        bail!("Duration must be zero or positive, got {}", duration);
    }
    if !amplitude.is_finite() {
        bail!("Amplitude must be finite, got {}", amplitude);
    }
    if amplitude.abs() > 1.0 {
        log::warn!("amplitude {} exceeds full scale", amplitude);
    }

    let rate = f64::from(format.sample_rate());
    let frames = (duration * rate).round();
    // u64::MAX as f64 rounds up to 2^64, so >= rejects everything that would saturate
    if frames >= u64::MAX as f64 {
        bail!("Duration {}s is too long for a single file", duration);
    }
    let count = usize::try_from(frames as u64)
        .with_context(|| format!("Duration {}s is too long for a single file", duration))?;
    format
        .data_size(count)
        .with_context(|| format!("Duration {}s is too long for a single file", duration))?;

    let step = TAU * frequency / rate;

    Ok((0..count)
        .map(|i| amplitude * (step * i as f64).sin())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pcmwave::{BitDepth, WaveError};

    fn mono_8k() -> WaveFormat {
        WaveFormat::mono(8000, BitDepth::Eight).unwrap()
    }

    #[test]
    fn test_render_sine_length() {
        let samples = render_sine(440.0, 0.5, 1.0, &mono_8k()).unwrap();
        assert_eq!(samples.len(), 4000);
        assert_eq!(samples[0], 0.0);
    }

    #[test]
    fn test_render_sine_peak() {
        // 2000 Hz at 8000 Hz: quarter period per sample
        let samples = render_sine(2000.0, 0.001, 0.5, &mono_8k()).unwrap();
        assert_eq!(samples.len(), 8);
        assert!((samples[1] - 0.5).abs() < 1e-12);
        assert!((samples[3] + 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_render_sine_rejects_bad_input() {
        assert!(render_sine(0.0, 1.0, 1.0, &mono_8k()).is_err());
        assert!(render_sine(440.0, -1.0, 1.0, &mono_8k()).is_err());
        assert!(render_sine(440.0, f64::NAN, 1.0, &mono_8k()).is_err());
        assert!(render_sine(440.0, 1.0, f64::INFINITY, &mono_8k()).is_err());
    }

    #[test]
    fn test_render_sine_zero_duration() {
        assert!(render_sine(440.0, 0.0, 1.0, &mono_8k()).unwrap().is_empty());
    }

    #[test]
    fn test_render_sine_rejects_huge_duration() {
        let format = WaveFormat::mono(44100, BitDepth::Sixteen).unwrap();
        let err = render_sine(440.0, 1e30, 0.5, &format).unwrap_err();
        assert!(err.to_string().contains("too long"));

        // Fits in usize but not in the 32-bit data chunk size
        let err = render_sine(440.0, 1e6, 0.5, &format).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<WaveError>(),
            Some(WaveError::DataTooLarge { .. })
        ));
    }

    #[test]
    fn test_run_huge_duration_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("long.wav");

        let result = run(
            440.0,
            1e30,
            0.5,
            path.to_str().unwrap(),
            &FormatOptions::default(),
            true,
        );

        assert!(result.is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_run_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a440.wav");
        let output = path.to_str().unwrap();

        let format = FormatOptions {
            sample_rate: Some(8000),
            bits: Some(8),
            ..Default::default()
        };
        run(440.0, 0.25, 0.8, output, &format, true).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(bytes.len(), 44 + 2000);
    }
}
