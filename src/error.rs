//! Errors raised while loading catalog snapshots and event scripts.
//!
//! Reconciliation and mutation never fail; only the file-facing edges do.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from loading catalog or event-script files
#[derive(Debug, Error)]
pub enum Error {
    /// The file could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        /// File that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The file was read but is not valid JSON for the expected shape
    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        /// File that was being parsed
        path: PathBuf,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// One line of an event script is not a valid event
    #[error("Failed to parse event on line {line} of {}: {source}", path.display())]
    ParseEvent {
        /// Script file
        path: PathBuf,
        /// 1-based line number
        line: usize,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },
}

/// Result alias for catalog and script loading
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_error_mentions_path() {
        let err = Error::Read {
            path: PathBuf::from("/tmp/catalog.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/catalog.json"));
        assert!(msg.contains("missing"));
    }

    #[test]
    fn test_parse_event_error_mentions_line() -> std::result::Result<(), Box<dyn std::error::Error>>
    {
        let source = match serde_json::from_str::<serde_json::Value>("{") {
            Ok(value) => return Err(format!("expected parse failure, got {value}").into()),
            Err(e) => e,
        };
        let err = Error::ParseEvent {
            path: PathBuf::from("script.jsonl"),
            line: 7,
            source,
        };
        assert!(err.to_string().contains("line 7 of script.jsonl"));
        Ok(())
    }
}
