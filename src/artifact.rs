//! JSON artifacts passed between the fetch and materialize stages.
//!
//! Output is two-space indented UTF-8 with non-ASCII characters written
//! literally, and keeps record order.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::error::Category;

use crate::error::CorpusError;
use crate::record::Collection;

/// Write any serializable record list as a pretty-printed JSON array.
pub fn write_records<T: Serialize>(path: &Path, records: &[T]) -> Result<(), CorpusError> {
    let file = File::create(path).map_err(CorpusError::fs(path))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, records)?;
    writer.flush().map_err(CorpusError::fs(path))?;
    Ok(())
}

pub fn read_collection(path: &Path) -> Result<Collection, CorpusError> {
    let body = fs::read_to_string(path).map_err(CorpusError::fs(path))?;
    serde_json::from_str(&body).map_err(|source| match source.classify() {
        Category::Data => CorpusError::MalformedRecord {
            path: path.to_path_buf(),
            source,
        },
        _ => CorpusError::MalformedArtifact {
            path: path.to_path_buf(),
            source,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Label, Record, RecordId};

    fn record(id: i64, subject: &str, label: Label) -> Record {
        Record {
            id: RecordId::Number(id),
            subject: subject.to_string(),
            message: "body".to_string(),
            text: format!("{subject} body"),
            label,
            label_text: label.category().to_string(),
            date: "2001-05-14 00:00:00".to_string(),
        }
    }

    #[test]
    fn round_trip_keeps_values_and_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dataset.json");
        let records = vec![
            record(9, "later", Label::Spam),
            record(1, "earlier", Label::Ham),
            record(5, "middle", Label::Ham),
        ];
        write_records(&path, &records).unwrap();
        assert_eq!(read_collection(&path).unwrap(), records);
    }

    #[test]
    fn layout_is_indented_with_literal_unicode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dataset.json");
        write_records(&path, &[record(3, "réunion ☕", Label::Ham)]).unwrap();
        let body = fs::read_to_string(&path).unwrap();
        assert!(body.starts_with("[\n  {\n    \"id\": 3,\n    \"subject\": \"réunion ☕\","));
        assert!(body.contains("\"label\": 0,"));
        let order: Vec<usize> = ["\"id\"", "\"subject\"", "\"message\"", "\"text\"", "\"label\"", "\"label_text\"", "\"date\""]
            .iter()
            .map(|k| body.find(k).unwrap())
            .collect();
        assert!(order.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn missing_label_is_malformed_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dataset.json");
        fs::write(&path, r#"[{"id": 1, "subject": "x", "message": "y"}]"#).unwrap();
        assert!(matches!(
            read_collection(&path),
            Err(CorpusError::MalformedRecord { .. })
        ));
    }

    #[test]
    fn broken_json_is_malformed_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dataset.json");
        fs::write(&path, "[{\"id\": 1,").unwrap();
        assert!(matches!(
            read_collection(&path),
            Err(CorpusError::MalformedArtifact { .. })
        ));
    }
}
