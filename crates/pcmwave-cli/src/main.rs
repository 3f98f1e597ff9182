//! pcmwave CLI - render normalized samples to canonical WAVE files

use clap::{ArgAction, Args, Parser, Subcommand};
use std::process::ExitCode;

use pcmwave_cli::commands::{self, FormatOptions};

/// pcmwave - canonical PCM WAVE writer
#[derive(Parser)]
#[command(name = "pcmwave")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Format flags shared by all commands
#[derive(Args, Debug)]
struct FormatArgs {
    /// Number of channels [default: 1]
    #[arg(short, long)]
    channels: Option<u16>,

    /// Sample rate in Hz [default: 44100]
    #[arg(short = 'r', long)]
    sample_rate: Option<u32>,

    /// Bits per sample, 8 or 16 [default: 16]
    #[arg(short, long)]
    bits: Option<u16>,

    /// Clamp samples to [-1.0, 1.0] instead of wrapping
    #[arg(long)]
    clamp: bool,

    /// Output a machine-readable JSON summary
    #[arg(long)]
    json: bool,
}

impl FormatArgs {
    fn options(&self) -> FormatOptions {
        FormatOptions {
            channels: self.channels,
            sample_rate: self.sample_rate,
            bits: self.bits,
            clamp: self.clamp,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Render a sine tone
    Tone {
        /// Frequency in Hz
        #[arg(short, long)]
        frequency: f64,

        /// Duration in seconds
        #[arg(short, long)]
        duration: f64,

        /// Peak amplitude
        #[arg(short, long, default_value_t = 0.8)]
        amplitude: f64,

        /// Output WAV path
        #[arg(short, long)]
        output: String,

        #[command(flatten)]
        format: FormatArgs,
    },

    /// Encode samples from a JSON file
    Encode {
        /// JSON sample file
        #[arg(short, long)]
        input: String,

        /// Output WAV path
        #[arg(short, long)]
        output: String,

        #[command(flatten)]
        format: FormatArgs,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Tone {
            frequency,
            duration,
            amplitude,
            output,
            format,
        } => commands::tone::run(
            frequency,
            duration,
            amplitude,
            &output,
            &format.options(),
            format.json,
        ),
        Commands::Encode {
            input,
            output,
            format,
        } => commands::encode::run(&input, &output, &format.options(), format.json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
