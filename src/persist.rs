use std::fs;
use std::path::Path;

use crate::{AddrGenError, AddressRecord, Result};

/// Writes the records to `path` as one pretty-printed JSON array.
///
/// Parent directories are created as needed. The output is UTF-8 with
/// 2-space indentation; non-ASCII characters are written literally, not
/// escaped. The caller decides what a write failure means for the process.
pub fn save_records(records: &[AddressRecord], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(records)
        .map_err(|err| AddrGenError::Decode(format!("failed to serialize records: {err}")))?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::save_records;
    use crate::AddressRecord;

    fn record(full_name: &str, city: &str) -> AddressRecord {
        serde_json::from_value(json!({
            "status": "ok",
            "address": { "Full_Name": full_name, "City": city }
        }))
        .expect("record must deserialize")
    }

    #[test]
    fn round_trip_preserves_every_field() {
        let dir = tempfile::tempdir().expect("must create tempdir");
        let path = dir.path().join("addresses.json");
        let records = vec![record("Ada Lovelace", "London"), record("Alan Turing", "Wilmslow")];

        save_records(&records, &path).expect("write must succeed");

        let raw = std::fs::read_to_string(&path).expect("file must exist");
        let parsed: Vec<AddressRecord> = serde_json::from_str(&raw).expect("must parse back");
        assert_eq!(parsed, records);
    }

    #[test]
    fn creates_missing_parent_directories() {
        let dir = tempfile::tempdir().expect("must create tempdir");
        let path = dir.path().join("out/nested/addresses.json");

        save_records(&[record("Grace Hopper", "Arlington")], &path)
            .expect("write must succeed");

        assert!(path.is_file());
    }

    #[test]
    fn non_ascii_is_written_literally() {
        let dir = tempfile::tempdir().expect("must create tempdir");
        let path = dir.path().join("jp.json");

        save_records(&[record("山田太郎", "東京")], &path).expect("write must succeed");

        let raw = std::fs::read_to_string(&path).expect("file must exist");
        assert!(raw.contains("山田太郎"));
        assert!(!raw.contains("\\u"));
    }

    #[test]
    fn output_is_a_pretty_array() {
        let dir = tempfile::tempdir().expect("must create tempdir");
        let path = dir.path().join("one.json");

        save_records(&[record("Kit", "Oslo")], &path).expect("write must succeed");

        let raw = std::fs::read_to_string(&path).expect("file must exist");
        assert!(raw.starts_with('['));
        // serde_json pretty output indents with two spaces.
        assert!(raw.contains("\n  {"));
        let parsed: Value = serde_json::from_str(&raw).expect("must parse");
        assert_eq!(parsed.as_array().map(Vec::len), Some(1));
    }

    #[test]
    fn unwritable_destination_surfaces_io_error() {
        let dir = tempfile::tempdir().expect("must create tempdir");
        // The destination's parent is a regular file, so create_dir_all fails.
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"x").expect("must create blocker file");
        let path = blocker.join("addresses.json");

        let err = save_records(&[record("Kit", "Oslo")], &path).expect_err("write must fail");
        assert!(matches!(err, crate::AddrGenError::Io(_)));
    }
}
