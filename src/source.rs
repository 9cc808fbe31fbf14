use indicatif::{ProgressBar, ProgressStyle};
use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::CorpusError;
use crate::record::RawRecord;
use crate::settings::Settings;

/// Largest page the datasets-server rows endpoint will serve.
pub const MAX_PAGE_SIZE: usize = 100;

/// Anything that can hand over one split of labeled rows, in source order.
pub trait RecordSource {
    /// Human-readable identity used in logs and errors.
    fn describe(&self) -> String;

    fn fetch_split(&self) -> Result<Vec<RawRecord>, CorpusError>;
}

/// One page of the datasets-server `/rows` response.
#[derive(Debug, Deserialize)]
pub struct RowsPage {
    #[serde(default)]
    pub features: Vec<Feature>,
    pub rows: Vec<RowEntry>,
    pub num_rows_total: usize,
}

#[derive(Debug, Deserialize)]
pub struct Feature {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct RowEntry {
    #[serde(default)]
    pub row_idx: usize,
    pub row: RawRecord,
    /// Columns the server shortened to fit the page.
    #[serde(default)]
    pub truncated_cells: Vec<String>,
}

/// Walk the split page by page starting at offset 0, until `num_rows_total`
/// rows are collected or the server returns an empty page.
///
/// A row with shortened cells fails the whole fetch: records must be verbatim.
pub fn page_through<F>(
    dataset: &str,
    pb: &ProgressBar,
    mut fetch_page: F,
) -> Result<Vec<RawRecord>, CorpusError>
where
    F: FnMut(usize) -> Result<RowsPage, CorpusError>,
{
    let mut page = fetch_page(0)?;
    let total = page.num_rows_total;
    let names: Vec<&str> = page.features.iter().map(|f| f.name.as_str()).collect();
    info!(rows = total, features = ?names, "dataset split located");
    pb.set_length(total as u64);

    let mut records = Vec::with_capacity(total);
    loop {
        let fetched = page.rows.len();
        for entry in page.rows {
            if !entry.truncated_cells.is_empty() {
                return Err(CorpusError::SourceUnavailable {
                    dataset: dataset.to_string(),
                    reason: format!(
                        "row {} arrived with truncated cells {:?}",
                        entry.row_idx, entry.truncated_cells
                    ),
                });
            }
            records.push(entry.row);
        }
        pb.inc(fetched as u64);

        if fetched == 0 || records.len() >= total {
            break;
        }
        page = fetch_page(records.len())?;
    }
    Ok(records)
}

/// Hugging Face hub split, read page by page over blocking HTTP.
pub struct HubSource {
    client: Client,
    endpoint: String,
    dataset: String,
    config: String,
    split: String,
    page_size: usize,
}

impl HubSource {
    pub fn new(settings: &Settings) -> Self {
        HubSource {
            client: Client::new(),
            endpoint: settings.rows_endpoint.clone(),
            dataset: settings.dataset.clone(),
            config: settings.dataset_config.clone(),
            split: settings.split.clone(),
            page_size: settings.page_size.clamp(1, MAX_PAGE_SIZE),
        }
    }

    fn unavailable(&self, reason: String) -> CorpusError {
        CorpusError::SourceUnavailable {
            dataset: self.dataset.clone(),
            reason,
        }
    }

    fn fetch_page(&self, offset: usize) -> Result<RowsPage, CorpusError> {
        debug!(offset, length = self.page_size, "requesting rows page");
        self.client
            .get(&self.endpoint)
            .query(&[
                ("dataset", self.dataset.as_str()),
                ("config", self.config.as_str()),
                ("split", self.split.as_str()),
            ])
            .query(&[("offset", offset), ("length", self.page_size)])
            .send()
            .and_then(|resp| resp.error_for_status())
            .map_err(|err| self.unavailable(format!("rows request at offset {offset} failed: {err}")))?
            .json::<RowsPage>()
            .map_err(|err| self.unavailable(format!("rows page at offset {offset} undecodable: {err}")))
    }
}

impl RecordSource for HubSource {
    fn describe(&self) -> String {
        format!("{} ({}/{})", self.dataset, self.config, self.split)
    }

    fn fetch_split(&self) -> Result<Vec<RawRecord>, CorpusError> {
        let pb = ProgressBar::new(0);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40} {pos}/{len} rows ({per_sec}, eta {eta})")
                .map_err(|err| self.unavailable(format!("progress template: {err}")))?
                .progress_chars("=> "),
        );

        let records = page_through(&self.dataset, &pb, |offset| self.fetch_page(offset))?;

        pb.finish_and_clear();
        info!("Fetched {} rows from {}", records.len(), self.describe());
        Ok(records)
    }
}
