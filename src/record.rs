use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::error::CorpusError;

/// Ordered set of records from one dataset snapshot.
pub type Collection = Vec<Record>;

/// Binary spam label. Serialized as the integer the hub uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum Label {
    Ham,
    Spam,
}

#[derive(Debug, Error)]
#[error("label must be 0 (ham) or 1 (spam), got {0}")]
pub struct InvalidLabel(pub i64);

impl Label {
    pub const ALL: [Label; 2] = [Label::Ham, Label::Spam];

    /// Directory and file-name prefix used for this class.
    pub fn category(self) -> &'static str {
        match self {
            Label::Ham => "ham",
            Label::Spam => "spam",
        }
    }
}

impl TryFrom<i64> for Label {
    type Error = InvalidLabel;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Label::Ham),
            1 => Ok(Label::Spam),
            other => Err(InvalidLabel(other)),
        }
    }
}

impl From<Label> for i64 {
    fn from(label: Label) -> i64 {
        match label {
            Label::Ham => 0,
            Label::Spam => 1,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.category())
    }
}

/// Record identifier. The hub ships integers; hand-built artifacts may use strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{n}"),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        RecordId::Number(value)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        RecordId::Text(value.to_string())
    }
}

/// One labeled email as persisted in the dataset artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub subject: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub message: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub text: String,
    pub label: Label,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub label_text: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub date: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// A row as served by the hub, before normalization.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    #[serde(alias = "id")]
    pub message_id: RecordId,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    pub label: i64,
    #[serde(default)]
    pub label_text: Option<String>,
    #[serde(default)]
    pub date: Option<Value>,
}

impl TryFrom<RawRecord> for Record {
    type Error = CorpusError;

    fn try_from(raw: RawRecord) -> Result<Self, Self::Error> {
        let label = Label::try_from(raw.label).map_err(|err| CorpusError::InvalidRecord {
            id: raw.message_id.to_string(),
            reason: err.to_string(),
        })?;
        Ok(Record {
            id: raw.message_id,
            subject: raw.subject.unwrap_or_default(),
            message: raw.message.unwrap_or_default(),
            text: raw.text.unwrap_or_default(),
            label,
            label_text: raw.label_text.unwrap_or_default(),
            date: date_string(raw.date),
        })
    }
}

fn date_string(value: Option<Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s,
        Some(other) => other.to_string(),
    }
}

/// Normalize hub rows in source order.
pub fn normalize_all(raw: Vec<RawRecord>) -> Result<Collection, CorpusError> {
    raw.into_iter().map(Record::try_from).collect()
}

/// First `limit` records carrying `label`, in collection order.
pub fn samples(records: &[Record], label: Label, limit: usize) -> Vec<&Record> {
    records.iter().filter(|r| r.label == label).take(limit).collect()
}

/// Per-label record counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LabelTally {
    pub ham: usize,
    pub spam: usize,
}

impl LabelTally {
    pub fn from_records(records: &[Record]) -> Self {
        let mut tally = LabelTally::default();
        for record in records {
            tally.add(record.label);
        }
        tally
    }

    pub fn add(&mut self, label: Label) {
        match label {
            Label::Ham => self.ham += 1,
            Label::Spam => self.spam += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.ham + self.spam
    }
}
