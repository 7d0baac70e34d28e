//! Input and output selection
//!
//! Input is read to completion before anything is classified. The output sink
//! is opened up front so an unwritable path aborts before any work is done.

use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::SortError;

/// Read every line from `reader`, with line terminators removed.
///
/// Invalid UTF-8 is replaced with U+FFFD rather than failing the run.
pub fn read_lines<R: BufRead>(mut reader: R) -> Result<Vec<String>, SortError> {
    let mut lines = Vec::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).map_err(SortError::Read)? == 0 {
            break;
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }

        let line = String::from_utf8_lossy(&buf);
        if let Cow::Owned(_) = line {
            tracing::warn!(
                "line {} contains invalid UTF-8; lossy conversion applied",
                lines.len() + 1
            );
        }
        lines.push(line.into_owned());
    }

    Ok(lines)
}

/// Read all input lines from `path`, or from stdin when no path is given
pub fn read_input(path: Option<&Path>) -> Result<Vec<String>, SortError> {
    match path {
        Some(path) => {
            let file = File::open(path).map_err(|e| {
                tracing::debug!("open {} failed: {}", path.display(), e);
                SortError::InputNotFound(path.to_path_buf())
            })?;
            let lines = read_lines(BufReader::new(file))?;
            tracing::debug!("read {} lines from {}", lines.len(), path.display());
            Ok(lines)
        }
        None => {
            let lines = read_lines(io::stdin().lock())?;
            tracing::debug!("read {} lines from stdin", lines.len());
            Ok(lines)
        }
    }
}

/// Open the report sink: a created/truncated file, or stdout
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>, SortError> {
    match path {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                tracing::debug!("create {} failed: {}", path.display(), e);
                SortError::OutputNotWritable(path.to_path_buf())
            })?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_lines_strips_terminators() {
        let lines = read_lines(Cursor::new("one\r\ntwo\n\nthree")).unwrap();
        assert_eq!(lines, vec!["one", "two", "", "three"]);
    }

    #[test]
    fn test_read_lines_invalid_utf8_is_lossy() {
        let lines = read_lines(Cursor::new(&b"caf\xe9 ok\r\nok\n\xff"[..])).unwrap();
        assert_eq!(lines, vec!["caf\u{FFFD} ok", "ok", "\u{FFFD}"]);
    }

    #[test]
    fn test_read_lines_keeps_lone_carriage_return() {
        let lines = read_lines(Cursor::new("a\rb\nlast\r")).unwrap();
        assert_eq!(lines, vec!["a\rb", "last\r"]);
    }

    #[test]
    fn test_read_lines_empty() {
        let lines = read_lines(Cursor::new("")).unwrap();
        assert!(lines.is_empty());
    }

    #[test]
    fn test_read_input_from_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("input.txt");
        std::fs::write(&path, "1 2\n3\n").unwrap();

        let lines = read_input(Some(&path)).unwrap();
        assert_eq!(lines, vec!["1 2", "3"]);
    }

    #[test]
    fn test_read_input_missing_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("missing.txt");

        let err = read_input(Some(&path)).unwrap_err();
        assert!(matches!(err, SortError::InputNotFound(p) if p == path));
    }

    #[test]
    fn test_open_output_writes_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("out.txt");

        {
            let mut sink = open_output(Some(&path)).unwrap();
            sink.write_all(b"report\n").unwrap();
            sink.flush().unwrap();
        }

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "report\n");
    }

    #[test]
    fn test_open_output_unwritable() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("no_such_dir").join("out.txt");

        let err = open_output(Some(&path)).err().unwrap();
        assert!(matches!(err, SortError::OutputNotWritable(_)));
    }
}
