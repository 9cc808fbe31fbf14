//! Enron spam/ham corpus tooling.
//!
//! Two batch stages share this crate:
//!   1. fetch: pull the labeled dataset from the Hugging Face hub and write it
//!      (plus small per-label samples) as JSON
//!   2. materialize: turn that JSON into `ham/` and `spam/` directories of
//!      one text file per email

pub mod artifact;
pub mod error;
pub mod fetch;
pub mod materialize;
pub mod record;
pub mod settings;
pub mod source;

pub use error::CorpusError;
pub use fetch::fetch_and_persist;
pub use materialize::{materialize, materialize_records, prepare_training_data, MaterializeReport};
pub use record::{Collection, Label, LabelTally, RawRecord, Record, RecordId};
pub use settings::Settings;
pub use source::{HubSource, RecordSource};
