use anyhow::Result;
use enron_corpus::{fetch_and_persist, HubSource, LabelTally, Settings};
use tracing::info;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();
    let settings = Settings::load()?;
    info!(settings_loaded = ?settings, msg = "Starting dataset download");

    println!("Enron Spam/Ham Download");
    println!("=======================\n");

    let source = HubSource::new(&settings);
    let emails = fetch_and_persist(&source, &settings)?;
    let tally = LabelTally::from_records(&emails);

    println!("Ham emails:   {}", tally.ham);
    println!("Spam emails:  {}", tally.spam);
    println!("Total emails: {}\n", emails.len());
    println!("Dataset saved to {}", settings.dataset_path.display());
    println!(
        "Sample files created: {}, {}",
        settings.ham_samples_path.display(),
        settings.spam_samples_path.display()
    );
    println!("\nDownload complete: {} emails ready for training", emails.len());
    Ok(())
}
