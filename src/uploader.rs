use crate::consts::{CONTRIBUTE_ENDPOINT, CONTRIBUTE_URL_ENV};
use crate::models::{ContributionOutcome, ContributionPayload, ConversationRecord};
use reqwest::Client as HttpClient;
use serde_json::Value;

/// Sends conversations to the contribution endpoint.
///
/// Every call is a single all-or-nothing POST. Failures are reported to the
/// user and returned as an outcome; they never become errors.
#[derive(Debug)]
pub struct Uploader {
    http: HttpClient,
    endpoint: String,
    version: String,
}

impl Uploader {
    pub fn new(version: impl Into<String>) -> Self {
        Self::with_endpoint(CONTRIBUTE_ENDPOINT, version)
    }

    /// Uses `OI_CONTRIBUTE_URL` when set, otherwise the public endpoint.
    pub fn from_env(version: impl Into<String>) -> Self {
        match std::env::var(CONTRIBUTE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::with_endpoint(url, version),
            _ => Self::new(version),
        }
    }

    pub fn with_endpoint(endpoint: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            http: crate::utils::setup_http_client(),
            endpoint: endpoint.into(),
            version: version.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub async fn contribute_conversation(&self, record: ConversationRecord) -> ContributionOutcome {
        self.contribute(&[record]).await
    }

    /// Uploads `records` as one payload.
    ///
    /// Only the first record is checked for emptiness; an empty list or an
    /// empty leading record sends nothing.
    pub async fn contribute(&self, records: &[ConversationRecord]) -> ContributionOutcome {
        match records.first() {
            None => return ContributionOutcome::Skipped,
            Some(first) if first.is_empty() => return ContributionOutcome::Skipped,
            Some(_) => {}
        }

        let payload = ContributionPayload {
            conversations: records,
            oi_version: &self.version,
        };
        self.send(&payload).await
    }

    /// Untyped variant of [`Uploader::contribute`] for raw JSON.
    ///
    /// # Panics
    ///
    /// Panics if `conversations` is not an array of arrays. That is a caller
    /// bug and is checked before any request is made.
    pub async fn contribute_value(&self, conversations: &Value) -> ContributionOutcome {
        if let Some(items) = conversations.as_array() {
            match items.first() {
                None => return ContributionOutcome::Skipped,
                Some(Value::Array(first)) if first.is_empty() => {
                    return ContributionOutcome::Skipped;
                }
                Some(_) => {}
            }
        }

        assert!(
            is_list_of_lists(conversations),
            "the contribution payload is not a list of lists!"
        );

        let records: Vec<ConversationRecord> = conversations
            .as_array()
            .into_iter()
            .flatten()
            .filter_map(|entry| entry.as_array().cloned())
            .map(ConversationRecord::from)
            .collect();
        self.contribute(&records).await
    }

    async fn send(&self, payload: &ContributionPayload<'_>) -> ContributionOutcome {
        tracing::info!(
            endpoint = %self.endpoint,
            conversations = payload.conversations.len(),
            "contributing conversations"
        );

        let response = match self.http.post(&self.endpoint).json(payload).send().await {
            Ok(response) => response,
            Err(e) => {
                println!("Failed to contribute conversation: {}", e);
                tracing::warn!(error = %e, "contribution request failed");
                return ContributionOutcome::TransportFailed(e.to_string());
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            println!(
                "Failed to contribute conversation: {} {}",
                status.as_u16(),
                body
            );
            tracing::warn!(status = status.as_u16(), "contribution rejected");
            return ContributionOutcome::Rejected {
                status: status.as_u16(),
                body,
            };
        }

        println!("Successfully contributed conversations!");
        ContributionOutcome::Sent
    }
}

pub fn is_list_of_lists(value: &Value) -> bool {
    value
        .as_array()
        .is_some_and(|items| items.iter().all(Value::is_array))
}
