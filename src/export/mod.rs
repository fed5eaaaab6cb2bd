//! Offline persistence for sampled waveform series.

pub mod csv;
#[cfg(feature = "bounce")]
pub mod wav;

pub use self::csv::write_csv;
#[cfg(feature = "bounce")]
pub use self::wav::write_wav;
