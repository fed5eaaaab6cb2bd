//! Periodic waveform generators sharing one parameter set.
//!
//! A [`Waveform`] is a shape tag plus frequency/amplitude/phase. Evaluation
//! is a pure function of the supplied time and the current parameters, so
//! there is no internal time state to advance or reset.

use std::str::FromStr;

use anyhow::bail;

/// The shape of a periodic waveform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaveformKind {
    Sine,
    Square,
    Triangle,
}

impl WaveformKind {
    /// Map a numeric menu selector (1: sine, 2: square, 3: triangle) to a kind.
    ///
    /// Any other selector is an error; no shape is silently substituted.
    pub fn from_selector(selector: u32) -> anyhow::Result<Self> {
        match selector {
            1 => Ok(WaveformKind::Sine),
            2 => Ok(WaveformKind::Square),
            3 => Ok(WaveformKind::Triangle),
            other => bail!("invalid waveform kind selector: {}", other),
        }
    }
}

impl FromStr for WaveformKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sine" => Ok(WaveformKind::Sine),
            "square" => Ok(WaveformKind::Square),
            "triangle" => Ok(WaveformKind::Triangle),
            other => bail!("unknown waveform kind: {:?}", other),
        }
    }
}

/// A periodic waveform described by frequency, amplitude, and phase.
///
/// Parameters may be updated in place at any time; updates take effect on
/// the next [`generate`](Waveform::generate) call. The generator performs no
/// range checks of its own: a frequency of zero or below produces degenerate
/// output, and callers are expected to validate before constructing one.
pub struct Waveform {
    pub kind: WaveformKind,
    pub frequency_hz: f32,
    pub amplitude: f32,
    pub phase: f32,
}

impl Waveform {
    pub fn new(kind: WaveformKind, frequency_hz: f32, amplitude: f32, phase: f32) -> Self {
        Self {
            kind,
            frequency_hz,
            amplitude,
            phase,
        }
    }

    /// The sine argument at `time`, shared by all three shapes.
    ///
    /// Computed in f64 so the half-period crossings of an f32 time grid
    /// resolve the same way double-precision math does: at t = 0.5 of a
    /// 1 Hz wave the argument is pi to full double precision and its sine
    /// stays on the non-negative side.
    fn angle(&self, time: f32) -> f64 {
        let two_pi = 2.0 * std::f64::consts::PI;
        two_pi * self.frequency_hz as f64 * time as f64 + self.phase as f64
    }

    /// Evaluate the waveform at `time` seconds.
    pub fn generate(&self, time: f32) -> f32 {
        match self.kind {
            WaveformKind::Sine => self.amplitude * self.angle(time).sin() as f32,
            WaveformKind::Square => {
                // A zero crossing lands on the positive rail.
                if self.angle(time).sin() >= 0.0 {
                    self.amplitude
                } else {
                    -self.amplitude
                }
            }
            WaveformKind::Triangle => {
                // Closed-form triangle via arcsine-of-sine, period 1/frequency.
                (2.0 * self.amplitude as f64 / std::f64::consts::PI
                    * self.angle(time).sin().asin()) as f32
            }
        }
    }

    pub fn set_frequency(&mut self, frequency_hz: f32) {
        self.frequency_hz = frequency_hz;
    }

    pub fn set_amplitude(&mut self, amplitude: f32) {
        self.amplitude = amplitude;
    }

    pub fn set_phase(&mut self, phase: f32) {
        self.phase = phase;
    }
}
