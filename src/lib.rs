//! Offline waveform generation: periodic oscillator shapes, a fixed-rate
//! sampler, and flat-file export of the resulting (time, value) series.

pub mod export;
pub mod gen;
pub mod sampler;
pub mod utils;
