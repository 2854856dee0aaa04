use crate::exceptions::ContribError;
use crate::history::load_conversation;
use crate::models::ContributionOutcome;
use crate::settings::Settings;
use std::path::PathBuf;

pub async fn run(settings: &Settings, path: PathBuf) -> Result<(), ContribError> {
    let record = load_conversation(&path)?;
    let outcome = settings.uploader().contribute_conversation(record).await;
    if outcome == ContributionOutcome::Skipped {
        println!("Nothing to contribute: {} is empty.", path.display());
    }
    Ok(())
}
