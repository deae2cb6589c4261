//! Output of segmentation records to stdout or a file.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use dinuseg_core::models::SegmentRecord;

///
/// Get the output sink: a buffered writer over stdout or over a newly
/// created file.
///
pub fn get_record_writer(output: Option<&Path>) -> Result<BufWriter<Box<dyn Write>>> {
    let sink: Box<dyn Write> = match output {
        Some(path) => Box::new(
            File::create(path)
                .with_context(|| format!("Failed to create output file: {:?}", path))?,
        ),
        None => Box::new(std::io::stdout()),
    };

    Ok(BufWriter::new(sink))
}

///
/// Write one tab-separated row per record.
///
pub fn write_records<W: Write>(writer: &mut W, records: &[SegmentRecord]) -> Result<()> {
    for record in records {
        writeln!(writer, "{}", record)?;
    }

    Ok(())
}
