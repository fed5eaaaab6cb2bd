//! Optional WAV bounce of the value column (mono, 32-bit float samples).

use std::path::Path;

use anyhow::Context;

use crate::sampler::Sample;

/// Write the sample values to `path` as a mono float WAV at `sample_rate`.
///
/// The time column is implied by the WAV sample rate, so only values are
/// stored. Values are written as-is; amplitudes above 1.0 will clip in most
/// players.
pub fn write_wav<P: AsRef<Path>>(
    path: P,
    series: &[Sample],
    sample_rate: u32,
) -> anyhow::Result<()> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };

    let path = path.as_ref();
    let mut writer = hound::WavWriter::create(path, spec)
        .with_context(|| format!("failed to create {}", path.display()))?;
    for sample in series {
        writer.write_sample(sample.value)?;
    }
    writer.finalize()?;

    Ok(())
}
