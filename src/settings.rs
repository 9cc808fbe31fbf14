use std::path::PathBuf;

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::CorpusError;

/// Environment variable prefix, e.g. `ENRON_OUTPUT_DIR=corpus`.
pub const ENV_PREFIX: &str = "ENRON";
/// Optional settings file (any format `config` understands) in the working directory.
pub const SETTINGS_FILE: &str = "enron_corpus";

/// Paths and source coordinates shared by both stages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Hub dataset id.
    pub dataset: String,
    /// Hub dataset config name.
    pub dataset_config: String,
    /// Split to download.
    pub split: String,
    /// datasets-server rows endpoint.
    pub rows_endpoint: String,
    /// Rows requested per page (the server caps this at 100).
    pub page_size: usize,
    /// Full collection artifact, written by the fetcher and read by the materializer.
    pub dataset_path: PathBuf,
    pub ham_samples_path: PathBuf,
    pub spam_samples_path: PathBuf,
    /// Records kept per label in the sample artifacts.
    pub sample_size: usize,
    /// Base directory that receives `ham/` and `spam/`.
    pub output_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dataset: "SetFit/enron_spam".to_string(),
            dataset_config: "default".to_string(),
            split: "train".to_string(),
            rows_endpoint: "https://datasets-server.huggingface.co/rows".to_string(),
            page_size: 100,
            dataset_path: PathBuf::from("enron_dataset.json"),
            ham_samples_path: PathBuf::from("ham_samples.json"),
            spam_samples_path: PathBuf::from("spam_samples.json"),
            sample_size: 10,
            output_dir: PathBuf::from("training_data"),
        }
    }
}

impl Settings {
    /// Defaults, then `enron_corpus.*` if present, then `ENRON_*` variables.
    pub fn load() -> Result<Self, CorpusError> {
        let settings = Config::builder()
            .add_source(Config::try_from(&Settings::default())?)
            .add_source(File::with_name(SETTINGS_FILE).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }
}
