//! Offline sampling of a waveform into an ordered (time, value) series.

use crate::gen::Waveform;

/// One measurement of a waveform at a discrete instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Seconds from the start of the run.
    pub time: f32,
    /// Waveform value at `time`, in amplitude units.
    pub value: f32,
}

/// An ordered run of samples, earliest first.
pub type SampleSeries = Vec<Sample>;

/// Sweeps a waveform across `[0, duration]` at a fixed sample rate.
///
/// One sweep is one complete series; there is no incremental or resumable
/// sampling. A sample rate of zero is a configuration error the caller must
/// reject before running a sweep.
pub struct Sampler {
    /// Length of the run in seconds.
    pub duration: f32,
    /// Samples per second of signal time.
    pub sample_rate: u32,
}

impl Sampler {
    pub fn new(duration: f32, sample_rate: u32) -> Self {
        Self {
            duration,
            sample_rate,
        }
    }

    /// Seconds between consecutive samples.
    pub fn time_step(&self) -> f32 {
        1.0 / self.sample_rate as f32
    }

    /// Number of samples a run produces: one at t = 0 plus one per whole
    /// step that fits inside the duration.
    pub fn sample_count(&self) -> usize {
        // Product in f64: single precision runs out of integer headroom
        // past 2^24 and can round the product across a whole step.
        (self.duration as f64 * self.sample_rate as f64).floor() as usize + 1
    }

    /// Evaluate `waveform` at each step and collect the series.
    ///
    /// Sample times come from the integer step index (`t = n / rate`) rather
    /// than from accumulating the float step, so the count is exact and the
    /// last time never drifts past the duration.
    pub fn run(&self, waveform: &Waveform) -> SampleSeries {
        let count = self.sample_count();
        let mut series = Vec::with_capacity(count);

        for n in 0..count {
            let time = n as f32 / self.sample_rate as f32;
            series.push(Sample {
                time,
                value: waveform.generate(time),
            });
        }

        series
    }
}
