//! Encode command implementation
//!
//! Reads normalized samples from a JSON file and writes them as a WAVE file.
//!
//! Accepted input shapes:
//! - a bare array: `[0.0, 0.5, -0.5]`
//! - an object with an optional format:
//!   `{"format": {"num_channels": 1, "sample_rate": 8000, "bits_per_sample": 8}, "samples": [...]}`

use std::fs;
use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;
use pcmwave::WaveFormat;
use serde::Deserialize;

use super::output::write_and_report;
use super::FormatOptions;

/// Parsed sample file.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum SampleFile {
    /// Bare sample array.
    Samples(Vec<f64>),
    /// Samples with an embedded format.
    Document {
        #[serde(default)]
        format: Option<WaveFormat>,
        samples: Vec<f64>,
    },
}

impl SampleFile {
    /// Parses a sample file from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text)
            .context("Expected a JSON array of numbers or an object with \"samples\"")
    }

    /// Embedded format, if any.
    pub fn format(&self) -> Option<&WaveFormat> {
        match self {
            SampleFile::Samples(_) => None,
            SampleFile::Document { format, .. } => format.as_ref(),
        }
    }

    /// Consumes the file and returns its samples.
    pub fn into_samples(self) -> Vec<f64> {
        match self {
            SampleFile::Samples(samples) => samples,
            SampleFile::Document { samples, .. } => samples,
        }
    }
}

/// Run the encode command
///
/// # Arguments
/// * `input` - Path to the JSON sample file
/// * `output` - Output file path
/// * `format` - Format options; unset fields come from the file, then defaults
/// * `json` - Print a JSON summary instead of colored text
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(input: &str, output: &str, format: &FormatOptions, json: bool) -> Result<ExitCode> {
    if !json {
        println!("{} {}", "Encoding:".cyan().bold(), input);
    }

    let text = fs::read_to_string(input)
        .with_context(|| format!("Failed to read sample file: {}", input))?;
    let file = SampleFile::from_json(&text)
        .with_context(|| format!("Failed to parse sample file: {}", input))?;

    let mut encoder = format.encoder(file.format())?;
    let samples = file.into_samples();
    log::info!("loaded {} samples from {}", samples.len(), input);
    encoder.set_samples(samples);

    write_and_report(&encoder, output, json)
}
