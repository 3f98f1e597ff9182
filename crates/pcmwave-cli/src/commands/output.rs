//! Shared write-and-report step for commands that produce a WAVE file.

use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;
use pcmwave::WaveEncoder;
use serde::{Deserialize, Serialize};

/// Machine-readable summary of a written file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WriteSummary {
    pub output: String,
    pub channels: u16,
    pub sample_rate: u32,
    pub bits_per_sample: u16,
    pub quantize_mode: pcmwave::QuantizeMode,
    pub frames: usize,
    pub file_size: usize,
    pub duration_seconds: f64,
    pub pcm_hash: String,
}

/// Encodes, writes `output`, and prints a summary.
pub(crate) fn write_and_report(encoder: &WaveEncoder, output: &str, json: bool) -> Result<ExitCode> {
    let summary = write_file(encoder, output)?;

    if json {
        let text = serde_json::to_string_pretty(&summary).context("Failed to serialize summary")?;
        println!("{}", text);
    } else {
        println!(
            "{} {} ({} ch, {} Hz, {}-bit, {} frames, {:.3}s)",
            "SUCCESS".green().bold(),
            summary.output,
            summary.channels,
            summary.sample_rate,
            summary.bits_per_sample,
            summary.frames,
            summary.duration_seconds
        );
        println!("  {} {}", "PCM hash:".dimmed(), summary.pcm_hash);
    }

    Ok(ExitCode::SUCCESS)
}

pub(crate) fn write_file(encoder: &WaveEncoder, output: &str) -> Result<WriteSummary> {
    let encoded = encoder
        .save_encoded(output)
        .with_context(|| format!("Failed to write to: {}", output))?;

    Ok(WriteSummary {
        output: output.to_string(),
        channels: encoded.format.num_channels(),
        sample_rate: encoded.format.sample_rate(),
        bits_per_sample: encoded.format.bits_per_sample(),
        quantize_mode: encoder.quantize_mode(),
        frames: encoded.num_frames(),
        file_size: encoded.bytes.len(),
        duration_seconds: encoded.duration_seconds(),
        pcm_hash: encoded.pcm_hash,
    })
}
