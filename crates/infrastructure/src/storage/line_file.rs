//! Newline-delimited text files holding one entry per line.
//!
//! Reads always hand back entries in ascending byte-wise order. Bytes that
//! are not valid UTF-8 are decoded lossily (U+FFFD) instead of failing the
//! read. Writes truncate and rewrite the whole file; there is no temp file or
//! rename, so a failed write can leave the file empty or partial.

use listkeeper_domain::DomainError;
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, BufWriter};
use tracing::debug;

pub async fn read_lines(path: &Path) -> Result<Vec<String>, DomainError> {
    let file = File::open(path)
        .await
        .map_err(|e| DomainError::io(path.display(), e))?;

    let mut reader = BufReader::new(file);
    let mut lines = Vec::new();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .await
            .map_err(|e| DomainError::io(path.display(), e))?;
        if read == 0 {
            break;
        }
        lines.push(decode_line(&buf));
    }

    lines.sort();
    debug!(path = %path.display(), entries = lines.len(), "List file read");
    Ok(lines)
}

fn decode_line(raw: &[u8]) -> String {
    let line = raw.strip_suffix(b"\n").unwrap_or(raw);
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    String::from_utf8_lossy(line).into_owned()
}

pub async fn write_lines(path: &Path, entries: &[String]) -> Result<(), DomainError> {
    let file = File::create(path)
        .await
        .map_err(|e| DomainError::io(path.display(), e))?;

    let mut writer = BufWriter::new(file);
    for entry in entries {
        writer
            .write_all(entry.as_bytes())
            .await
            .map_err(|e| DomainError::io(path.display(), e))?;
        writer
            .write_all(b"\n")
            .await
            .map_err(|e| DomainError::io(path.display(), e))?;
    }
    writer
        .flush()
        .await
        .map_err(|e| DomainError::io(path.display(), e))?;

    debug!(path = %path.display(), entries = entries.len(), "List file written");
    Ok(())
}
