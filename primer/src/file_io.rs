//! Line-oriented text files with no schema attached.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::trace;

use crate::error::FileError;

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> FileError + '_ {
    move |source| FileError::Io { path: path.to_path_buf(), source }
}

/// Create or truncate `path`, writing each entry followed by `\n`.
pub fn write_lines<I, S>(path: &Path, lines: I) -> Result<(), FileError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let file = File::create(path).map_err(io_error(path))?;
    let mut out = BufWriter::new(file);
    let mut count = 0usize;
    for line in lines {
        out.write_all(line.as_ref().as_bytes()).map_err(io_error(path))?;
        out.write_all(b"\n").map_err(io_error(path))?;
        count += 1;
    }
    out.flush().map_err(io_error(path))?;
    trace!(path = %path.display(), lines = count, "wrote file");
    Ok(())
}

/// Lines of `path` without their terminators.
pub fn read_lines(path: &Path) -> Result<Vec<String>, FileError> {
    let file = File::open(path).map_err(io_error(path))?;
    let lines = BufReader::new(file)
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .map_err(io_error(path))?;
    trace!(path = %path.display(), lines = lines.len(), "read file");
    Ok(lines)
}
