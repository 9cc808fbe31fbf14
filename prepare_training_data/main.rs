use anyhow::Result;
use enron_corpus::{prepare_training_data, Settings};
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
    info!(settings_loaded = ?settings, msg = "Starting training data preparation");

    println!("Enron Training Data Preparation");
    println!("===============================\n");

    let report = prepare_training_data(&settings)?;

    println!("Training data prepared:");
    println!("Ham directory:  {} ({} files)", report.ham_dir.display(), report.ham_count);
    println!("Spam directory: {} ({} files)", report.spam_dir.display(), report.spam_count);
    if !report.overwritten.is_empty() {
        println!(
            "Warning: {} files were overwritten by records with duplicate ids",
            report.overwritten.len()
        );
    }

    println!("\nNext steps:");
    println!(
        "1. Train ham:  SPAM_CATEGORY=ham SCAN_DIRECTORY={} node classifier.js",
        report.ham_dir.display()
    );
    println!(
        "2. Train spam: SPAM_CATEGORY=spam SCAN_DIRECTORY={} node classifier.js",
        report.spam_dir.display()
    );
    Ok(())
}
