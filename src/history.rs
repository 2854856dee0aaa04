use crate::consts::{CONVERSATION_EXTENSION, CONVERSATIONS_DIR_NAME};
use crate::exceptions::ContribError;
use crate::models::ConversationRecord;
use std::fs;
use std::path::{Path, PathBuf};

pub fn get_conversations_dir() -> Result<PathBuf, ContribError> {
    Ok(crate::utils::get_app_config_dir()?.join(CONVERSATIONS_DIR_NAME))
}

fn is_conversation_path(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext == CONVERSATION_EXTENSION)
}

/// Conversation files in `history_path`, sorted by file name.
///
/// A missing directory yields an empty list.
pub fn conversation_files(history_path: &Path) -> Result<Vec<PathBuf>, ContribError> {
    if !history_path.exists() {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(history_path)? {
        let path = entry?.path();
        if path.is_file() && is_conversation_path(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

pub fn load_conversation(path: &Path) -> Result<ConversationRecord, ContribError> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|source| ContribError::ConversationParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads every past conversation stored under `history_path`.
///
/// The first unreadable or malformed file aborts the whole listing.
pub fn list_conversations(history_path: &Path) -> Result<Vec<ConversationRecord>, ContribError> {
    let files = conversation_files(history_path)?;
    let conversations = files
        .iter()
        .map(|path| load_conversation(path))
        .collect::<Result<Vec<_>, _>>()?;
    tracing::debug!(
        dir = %history_path.display(),
        count = conversations.len(),
        "loaded past conversations"
    );
    Ok(conversations)
}
