//! Errors that end a run before a report is written

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SortError {
    #[error("No sorting type defined!")]
    MissingSortingType,

    #[error("No data type defined!")]
    MissingDataType,

    #[error("No input file defined!")]
    MissingInputFile,

    #[error("No output file defined!")]
    MissingOutputFile,

    #[error("Unknown data type: {0}")]
    UnknownDataType(String),

    #[error("File not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Cannot write to file: {}", .0.display())]
    OutputNotWritable(PathBuf),

    #[error("Failed to read input")]
    Read(#[source] std::io::Error),

    #[error("Failed to write report")]
    Write(#[source] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            SortError::MissingSortingType.to_string(),
            "No sorting type defined!"
        );
        assert_eq!(SortError::MissingDataType.to_string(), "No data type defined!");
        assert_eq!(
            SortError::UnknownDataType("float".to_string()).to_string(),
            "Unknown data type: float"
        );
        assert_eq!(
            SortError::InputNotFound(PathBuf::from("in.txt")).to_string(),
            "File not found: in.txt"
        );
        assert_eq!(
            SortError::OutputNotWritable(PathBuf::from("/no/out.txt")).to_string(),
            "Cannot write to file: /no/out.txt"
        );
    }
}
