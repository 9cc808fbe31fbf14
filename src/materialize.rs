use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::artifact;
use crate::error::CorpusError;
use crate::record::{Label, LabelTally, Record};
use crate::settings::Settings;

/// Where the corpus landed and how many records went to each side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterializeReport {
    pub ham_dir: PathBuf,
    pub spam_dir: PathBuf,
    pub ham_count: usize,
    pub spam_count: usize,
    /// Distinct files written more than once in this run (duplicate label + id),
    /// each listed once however many times it was rewritten. Last write wins.
    pub overwritten: Vec<PathBuf>,
}

/// Mbox-like body the trainer reads: subject header, blank line, message.
pub fn render_document(record: &Record) -> String {
    format!(
        "Subject: {}\n\n{}",
        record.subject.trim(),
        record.message.trim()
    )
}

/// `<category>_<id>.txt`. Ids are used as-is, so an id holding a path
/// separator is rejected rather than allowed to escape `ham/` or `spam/`.
pub fn file_name(record: &Record) -> Result<String, CorpusError> {
    let id = record.id.to_string();
    if id.chars().any(std::path::is_separator) {
        return Err(CorpusError::InvalidRecord {
            id,
            reason: "id contains a path separator".to_string(),
        });
    }
    Ok(format!("{}_{}.txt", record.label.category(), id))
}

/// Check the dataset artifact exists, then materialize it into `output_dir`.
pub fn prepare_training_data(settings: &Settings) -> Result<MaterializeReport, CorpusError> {
    if !settings.dataset_path.exists() {
        return Err(CorpusError::MissingInputArtifact(settings.dataset_path.clone()));
    }
    materialize(&settings.dataset_path, &settings.output_dir)
}

pub fn materialize(dataset_path: &Path, output_dir: &Path) -> Result<MaterializeReport, CorpusError> {
    info!("Loading dataset from {}", dataset_path.display());
    let records = artifact::read_collection(dataset_path)?;
    info!("Loaded {} emails", records.len());
    materialize_records(&records, output_dir)
}

pub fn materialize_records(
    records: &[Record],
    output_dir: &Path,
) -> Result<MaterializeReport, CorpusError> {
    let names = records
        .iter()
        .map(file_name)
        .collect::<Result<Vec<_>, _>>()?;

    let ham_dir = output_dir.join(Label::Ham.category());
    let spam_dir = output_dir.join(Label::Spam.category());
    for dir in [&ham_dir, &spam_dir] {
        fs::create_dir_all(dir).map_err(CorpusError::fs(dir))?;
    }

    let mut tally = LabelTally::default();
    let mut written = HashSet::with_capacity(records.len());
    let mut overwritten = Vec::new();

    for (record, name) in records.iter().zip(names) {
        let dir = match record.label {
            Label::Ham => &ham_dir,
            Label::Spam => &spam_dir,
        };
        let path = dir.join(name);
        fs::write(&path, render_document(record)).map_err(CorpusError::fs(&path))?;
        tally.add(record.label);

        if !written.insert(path.clone()) {
            warn!("duplicate id {} overwrote {}", record.id, path.display());
            if !overwritten.contains(&path) {
                overwritten.push(path);
            }
        }
    }

    info!("Created {} ham files in {}", tally.ham, ham_dir.display());
    info!("Created {} spam files in {}", tally.spam, spam_dir.display());

    Ok(MaterializeReport {
        ham_dir,
        spam_dir,
        ham_count: tally.ham,
        spam_count: tally.spam,
        overwritten,
    })
}
