//! CSV export: a `Time,Value` header, then one line per sample in series order.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::Context;

use crate::sampler::Sample;

/// Write the series to `path`, replacing any existing file.
pub fn write_csv<P: AsRef<Path>>(path: P, series: &[Sample]) -> anyhow::Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .with_context(|| format!("failed to open {} for writing", path.display()))?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "Time,Value")?;
    for sample in series {
        writeln!(writer, "{},{}", sample.time, sample.value)?;
    }
    writer.flush()?;

    Ok(())
}
