use tracing::info;

use crate::artifact;
use crate::error::CorpusError;
use crate::record::{normalize_all, samples, Collection, Label, LabelTally};
use crate::settings::Settings;
use crate::source::RecordSource;

/// Download the split, normalize it, and write the dataset plus per-label samples.
pub fn fetch_and_persist(
    source: &dyn RecordSource,
    settings: &Settings,
) -> Result<Collection, CorpusError> {
    info!("Downloading {}", source.describe());
    let raw = source.fetch_split()?;
    let records = normalize_all(raw)?;

    let tally = LabelTally::from_records(&records);
    info!(
        ham = tally.ham,
        spam = tally.spam,
        total = records.len(),
        "normalized records"
    );

    artifact::write_records(&settings.dataset_path, &records)?;
    info!("Dataset saved to {}", settings.dataset_path.display());

    for (label, path) in [
        (Label::Ham, &settings.ham_samples_path),
        (Label::Spam, &settings.spam_samples_path),
    ] {
        let picked = samples(&records, label, settings.sample_size);
        artifact::write_records(path, &picked)?;
        info!("{} {} samples written to {}", picked.len(), label, path.display());
    }

    Ok(records)
}
