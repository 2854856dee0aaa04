use serde::{Deserialize, Serialize};

// --- Conversations ---

/// One past conversation session: an ordered list of opaque message entries.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversationRecord(pub Vec<serde_json::Value>);

impl ConversationRecord {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<Vec<serde_json::Value>> for ConversationRecord {
    fn from(entries: Vec<serde_json::Value>) -> Self {
        Self(entries)
    }
}

#[derive(Debug, Serialize)]
pub struct ContributionPayload<'a> {
    pub conversations: &'a [ConversationRecord],
    pub oi_version: &'a str,
}

// --- Upload results ---

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContributionOutcome {
    /// Nothing worth sending; no request was made.
    Skipped,
    Sent,
    Rejected { status: u16, body: String },
    TransportFailed(String),
}

impl ContributionOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, ContributionOutcome::Sent)
    }
}

// --- Flow results ---

/// What a single consent flow invocation did.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FlowReport {
    pub announced: bool,
    pub asked_past: bool,
    pub asked_future: bool,
    pub future_opt_in: bool,
    pub past_upload: Option<ContributionOutcome>,
}
