//! Birthday record store
//!
//! The store is a JSON array of `{name, date}` objects, read-only from this
//! program's perspective. The whole sequence is loaded or an error is
//! signaled; there is no partial-success mode.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// One birthday entry. `date` is `MM-DD` or `YYYY-MM-DD` and stays a string
/// here; it is parsed on demand when a record is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthdayRecord {
    pub name: String,
    pub date: String,
}

/// Load the ordered record sequence from `path`.
///
/// A missing file maps to [`Error::StoreNotFound`]; invalid JSON, a missing
/// required field, or an empty `name` map to [`Error::MalformedStore`].
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<BirthdayRecord>> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::StoreNotFound(path.display().to_string())
        } else {
            Error::IoError(e)
        }
    })?;

    let records: Vec<BirthdayRecord> = serde_json::from_str(&content)?;

    if let Some(record) = records.iter().find(|r| r.name.trim().is_empty()) {
        return Err(Error::MalformedStore(format!(
            "record with date {:?} has an empty name",
            record.date
        )));
    }

    Ok(records)
}
