/* Command-line front end for the waveform generator.
Collects the waveform parameters, runs one sampling sweep, and saves the
series as CSV (plus an optional WAV bounce with the "bounce" feature).
*/

use std::path::PathBuf;

use anyhow::ensure;
use clap::Parser;

use wavegen::export::write_csv;
use wavegen::gen::{Waveform, WaveformKind};
use wavegen::sampler::Sampler;
use wavegen::utils::init_logger;

#[derive(Parser)]
#[command(name = "wavegen", about = "Sample a periodic waveform and save it as CSV")]
struct Args {
    /// Waveform shape: sine, square, or triangle (or selector 1, 2, or 3)
    #[arg(long)]
    waveform: String,

    /// Frequency in Hz (must be positive)
    #[arg(long)]
    frequency: f32,

    /// Peak amplitude
    #[arg(long, default_value_t = 1.0)]
    amplitude: f32,

    /// Phase offset in radians
    #[arg(long, default_value_t = 0.0)]
    phase: f32,

    /// Length of the run in seconds
    #[arg(long, default_value_t = 1.0)]
    duration: f32,

    /// Samples per second
    #[arg(long, default_value_t = 1000)]
    sample_rate: u32,

    /// Output CSV path
    #[arg(long, default_value = "waveform.csv")]
    output: PathBuf,

    /// Also bounce the values to a mono float WAV at this path
    #[cfg(feature = "bounce")]
    #[arg(long)]
    wav: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    init_logger();

    let args = Args::parse();

    // The core trusts its inputs, so everything is validated here.
    let kind = match args.waveform.parse::<u32>() {
        Ok(selector) => WaveformKind::from_selector(selector)?,
        Err(_) => args.waveform.parse::<WaveformKind>()?,
    };
    ensure!(
        args.frequency > 0.0,
        "frequency must be positive, got {}",
        args.frequency
    );
    ensure!(args.sample_rate > 0, "sample rate must be positive");
    ensure!(
        args.duration >= 0.0,
        "duration must be non-negative, got {}",
        args.duration
    );

    let waveform = Waveform::new(kind, args.frequency, args.amplitude, args.phase);
    let series = Sampler::new(args.duration, args.sample_rate).run(&waveform);

    write_csv(&args.output, &series)?;
    log::info!(
        "waveform saved to {} ({} samples)",
        args.output.display(),
        series.len()
    );

    #[cfg(feature = "bounce")]
    if let Some(wav_path) = &args.wav {
        wavegen::export::write_wav(wav_path, &series, args.sample_rate)?;
        log::info!("wav bounce saved to {}", wav_path.display());
    }

    Ok(())
}
