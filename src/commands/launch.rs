use crate::console::TerminalUi;
use crate::exceptions::ContribError;
use crate::flow::{FlowOptions, run_consent_flow};
use crate::profile::JsonProfile;
use crate::settings::Settings;

pub async fn run(settings: &Settings, contribute_conversation: bool) -> Result<(), ContribError> {
    let options = FlowOptions::new(
        contribute_conversation,
        settings.cache_path.clone(),
        settings.history_path.clone(),
    );
    let mut ui = TerminalUi::stdio();
    let mut profile = JsonProfile::new(settings.profile_path.clone());
    let uploader = settings.uploader();

    run_consent_flow(&options, &mut ui, &mut profile, &uploader).await?;
    Ok(())
}
