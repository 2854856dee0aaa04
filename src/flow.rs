use crate::consent_cache::ConsentCache;
use crate::consts::{
    ASK_CONTRIBUTE_FUTURE, ASK_CONTRIBUTE_PAST, CONTRIBUTE_PROFILE_KEY,
    CONTRIBUTING_CURRENT_MESSAGE, CONTRIBUTING_FUTURE_MESSAGE, CONTRIBUTION_MESSAGE,
};
use crate::exceptions::ContribError;
use crate::history::list_conversations;
use crate::models::{ContributionOutcome, FlowReport};
use crate::uploader::Uploader;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Interactive surface used by the consent flow.
pub trait ConsentUi {
    /// Blocks until the user answers. Anything but `y`/`Y` is a no.
    fn ask_yes_no(&mut self, question: &str) -> Result<bool, ContribError>;

    fn show_message(&mut self, markdown: &str) -> Result<(), ContribError>;
}

/// Single key/value write into the user's profile.
pub trait ProfileWriter {
    fn write_key(&mut self, key: &str, value: serde_json::Value) -> Result<(), ContribError>;
}

#[derive(Debug, Clone)]
pub struct FlowOptions {
    /// The user already opted in with `--contribute_conversation`.
    pub globally_opted_in: bool,
    pub cache_path: PathBuf,
    pub history_path: PathBuf,
    /// How long the announcement stays up before the session continues.
    pub announcement_pause: Duration,
}

impl FlowOptions {
    pub fn new(globally_opted_in: bool, cache_path: PathBuf, history_path: PathBuf) -> Self {
        Self {
            globally_opted_in,
            cache_path,
            history_path,
            announcement_pause: Duration::from_secs(1),
        }
    }
}

/// Runs the launch-time consent flow.
///
/// Each prompt is shown at most once per cache file. A gate is persisted as
/// soon as its question has been acted on, so a later error in the same run
/// never brings an answered question back.
pub async fn run_consent_flow<U, P>(
    options: &FlowOptions,
    ui: &mut U,
    profile: &mut P,
    uploader: &Uploader,
) -> Result<FlowReport, ContribError>
where
    U: ConsentUi + ?Sized,
    P: ProfileWriter + ?Sized,
{
    let mut cache = ConsentCache::load_or_init(&options.cache_path)?;
    let mut report = FlowReport::default();

    if options.globally_opted_in {
        contribute_past_and_future(options, &mut cache, &mut report, ui, profile, uploader)
            .await?;
    } else if !cache.displayed_contribution_message() {
        ui.show_message(CONTRIBUTION_MESSAGE)?;
        report.announced = true;
        if !options.announcement_pause.is_zero() {
            tokio::time::sleep(options.announcement_pause).await;
        }
    }

    cache.mark_displayed_contribution_message();
    cache.save(&options.cache_path)?;
    tracing::debug!(?report, "consent flow finished");

    Ok(report)
}

async fn contribute_past_and_future<U, P>(
    options: &FlowOptions,
    cache: &mut ConsentCache,
    report: &mut FlowReport,
    ui: &mut U,
    profile: &mut P,
    uploader: &Uploader,
) -> Result<(), ContribError>
where
    U: ConsentUi + ?Sized,
    P: ProfileWriter + ?Sized,
{
    if !cache.asked_to_contribute_past() {
        report.asked_past = true;
        if ui.ask_yes_no(ASK_CONTRIBUTE_PAST)? {
            report.past_upload = send_past_conversations(&options.history_path, uploader).await?;
        }
        cache.mark_asked_to_contribute_past();
        cache.save(&options.cache_path)?;
    }

    if !cache.asked_to_contribute_future() {
        report.asked_future = true;
        let wants_future = ui.ask_yes_no(ASK_CONTRIBUTE_FUTURE)?;
        cache.mark_asked_to_contribute_future();
        cache.save(&options.cache_path)?;
        if wants_future {
            profile.write_key(CONTRIBUTE_PROFILE_KEY, serde_json::Value::Bool(true))?;
            ui.show_message(CONTRIBUTING_FUTURE_MESSAGE)?;
            report.future_opt_in = true;
            tracing::info!("future conversations will be contributed");
        }
    }

    ui.show_message(CONTRIBUTING_CURRENT_MESSAGE)?;
    Ok(())
}

/// Uploads everything under the history directory. `None` when there was
/// nothing to send.
pub async fn send_past_conversations(
    history_path: &Path,
    uploader: &Uploader,
) -> Result<Option<ContributionOutcome>, ContribError> {
    let past_conversations = list_conversations(history_path)?;
    if past_conversations.is_empty() {
        return Ok(None);
    }

    println!();
    println!("Sending all previous conversations to OpenInterpreter...");
    let outcome = uploader.contribute(&past_conversations).await;
    println!();
    Ok(Some(outcome))
}
