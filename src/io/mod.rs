use std::fs::File;
use std::io::{BufWriter, Read};
use std::path::Path;

use anyhow::{Context, Result, bail};
use flate2::read::GzDecoder;

use crate::schema::v1::PgxReportV1;

pub mod json_writer;
pub mod summary;
pub mod tsv_writer;

pub fn write_json(path: &Path, report: &PgxReportV1) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, report)?;
    Ok(())
}

pub(crate) fn open_maybe_gz(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path)?;
    if path
        .extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
    {
        let decoder = GzDecoder::new(file);
        Ok(Box::new(decoder))
    } else {
        Ok(Box::new(file))
    }
}

pub fn read_text_limited(path: &Path, max_bytes: u64) -> Result<String> {
    let reader =
        open_maybe_gz(path).with_context(|| format!("failed to open {}", path.display()))?;
    let mut buf = Vec::new();
    reader
        .take(max_bytes.saturating_add(1))
        .read_to_end(&mut buf)
        .with_context(|| format!("failed to read {}", path.display()))?;
    if buf.len() as u64 > max_bytes {
        bail!(
            "{} exceeds the input size limit of {} bytes",
            path.display(),
            max_bytes
        );
    }
    String::from_utf8(buf).with_context(|| format!("{} is not valid UTF-8", path.display()))
}
