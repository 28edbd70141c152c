//! YAML table file support.
//!
//! Candidate tables are often maintained as data rather than code, e.g. one
//! file per board or product line. This module loads a versioned YAML file
//! into a [`MatchTable`] whose payloads are opaque JSON values; callers
//! deserialize the payload into their own driver-data type at the point of
//! use.
//!
//! ## Example table file
//!
//! ```yaml
//! version: "1"
//! name: "board-x devices"
//! records:
//!   - compatible: "vendor,chip-a"
//!     data:
//!       driver: "chip-a-core"
//!       irq_mode: "edge"
//!   - compatible: "vendor,chip-b"
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use thiserror::Error;

use crate::table::MatchTable;
use crate::types::MatchRecord;

/// Table file format version this build reads.
pub const TABLE_FORMAT_VERSION: &str = "1";

/// Errors produced while loading a table file.
///
/// These are boundary errors of the external collaborator populating the
/// table; they are distinct from a lookup returning no match, which is a
/// normal outcome and never an error.
#[derive(Debug, Error)]
pub enum TableError {
    /// Reading the file failed.
    #[error("failed to read table file: {0}")]
    FileRead(#[from] std::io::Error),

    /// The file is not valid YAML for the expected shape.
    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// The file declares a format version this build does not read.
    #[error("unsupported table format version: {0}")]
    UnsupportedVersion(String),

    /// The file parsed but violates a table invariant.
    #[error("validation error: {0}")]
    Validation(String),
}

/// One record entry as written in a table file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecordSpec {
    /// Compatibility key for exact matching.
    pub compatible: String,
    /// Optional opaque driver-data payload.
    #[serde(default)]
    pub data: Option<JsonValue>,
}

/// Top-level structure of a table file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TableFile {
    /// Table file format version.
    pub version: String,
    /// Optional human-readable table name.
    #[serde(default)]
    pub name: Option<String>,
    /// Records in table order (order is the tie-break for lookups).
    #[serde(default)]
    pub records: Vec<RecordSpec>,
}

impl TableFile {
    /// Load and validate a table file from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TableError> {
        let raw = fs::read_to_string(path)?;
        Self::from_str(&raw)
    }

    /// Parse and validate a table file from a YAML string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(raw: &str) -> Result<Self, TableError> {
        let file: TableFile = serde_yaml::from_str(raw)?;
        file.validate()?;
        Ok(file)
    }

    /// Validate format version and record invariants.
    pub fn validate(&self) -> Result<(), TableError> {
        if self.version != TABLE_FORMAT_VERSION {
            return Err(TableError::UnsupportedVersion(self.version.clone()));
        }
        for (index, record) in self.records.iter().enumerate() {
            if record.compatible.trim().is_empty() {
                return Err(TableError::Validation(format!(
                    "records[{index}].compatible must not be empty"
                )));
            }
        }
        Ok(())
    }

    /// Convert into a match table, preserving file order.
    pub fn into_table(self) -> MatchTable<JsonValue> {
        self.records
            .into_iter()
            .map(|spec| MatchRecord {
                compatible: spec.compatible,
                data: spec.data,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DeviceDescriptor;
    use serde_json::json;

    const BOARD_X: &str = r#"
version: "1"
name: "board-x devices"
records:
  - compatible: "vendor,chip-a"
    data:
      driver: "chip-a-core"
      irq_mode: "edge"
  - compatible: "vendor,chip-b"
"#;

    #[test]
    fn well_formed_file_loads_and_matches() {
        let file = TableFile::from_str(BOARD_X).expect("file should load");
        assert_eq!(file.name.as_deref(), Some("board-x devices"));

        let table = file.into_table();
        assert_eq!(table.len(), 2);

        let dev = DeviceDescriptor::new("uart0", ["vendor,chip-a"]);
        let hit = table.match_device(&dev).expect("should match");
        assert_eq!(
            hit.data().and_then(|d| d.get("driver")),
            Some(&json!("chip-a-core"))
        );
    }

    #[test]
    fn unsupported_version_is_rejected() {
        let raw = r#"
version: "99"
records:
  - compatible: "vendor,chip-a"
"#;
        let err = TableFile::from_str(raw).expect_err("version 99 should be rejected");
        match err {
            TableError::UnsupportedVersion(v) => assert_eq!(v, "99"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_compatible_key_is_a_validation_error() {
        let raw = r#"
version: "1"
records:
  - compatible: ""
"#;
        let err = TableFile::from_str(raw).expect_err("empty key should be rejected");
        match err {
            TableError::Validation(msg) => assert!(msg.contains("records[0]")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn malformed_yaml_is_a_parse_error() {
        let err = TableFile::from_str("version: [not, a, string").expect_err("should fail");
        assert!(matches!(err, TableError::YamlParse(_)));
    }

    #[test]
    fn records_default_to_empty() {
        let file = TableFile::from_str(r#"version: "1""#).expect("file should load");
        assert!(file.records.is_empty());
        assert!(file.into_table().is_empty());
    }
}
