use crate::exceptions::ContribError;
use crate::flow::send_past_conversations;
use crate::settings::Settings;

pub async fn run(settings: &Settings) -> Result<(), ContribError> {
    let uploader = settings.uploader();
    if send_past_conversations(&settings.history_path, &uploader)
        .await?
        .is_none()
    {
        println!(
            "No past conversations found in {}",
            settings.history_path.display()
        );
    }
    Ok(())
}
