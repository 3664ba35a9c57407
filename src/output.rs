//! Output sink: one record per line to a named file

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{SortContext, SortResult};

/// Write `records` to `path`, one per line, `\n`-terminated, truncating any
/// previous contents. An empty collection produces an empty artifact.
pub fn write_records(path: &Path, records: &[String]) -> SortResult<()> {
    let display = path.display().to_string();
    let file = File::create(path).with_path_context(&display)?;
    let mut writer = BufWriter::new(file);
    for record in records {
        writer.write_all(record.as_bytes()).with_path_context(&display)?;
        writer.write_all(b"\n").with_path_context(&display)?;
    }
    writer.flush().with_path_context(&display)?;
    Ok(())
}
