pub const APP_DIR_NAME: &str = "open-interpreter";

pub const CONTRIBUTE_CACHE_FILE_NAME: &str = "contribute.json";
pub const CONVERSATIONS_DIR_NAME: &str = "conversations";
pub const DEFAULT_PROFILE_PATH: &str = "profiles/default.json";

pub const CONTRIBUTE_ENDPOINT: &str = "https://api.openinterpreter.com/v0/conversations/contribute/";
pub const CONTRIBUTE_URL_ENV: &str = "OI_CONTRIBUTE_URL";

/// Profile key toggled when the user opts into future contributions.
pub const CONTRIBUTE_PROFILE_KEY: &str = "contribute_conversation";

pub const CONVERSATION_EXTENSION: &str = "json";

// --- User-facing messages (markdown) ---

pub const CONTRIBUTION_MESSAGE: &str = r#"
---
> We're training an open-source language model!

You can help us train it with your past, current, or future conversations by:
1. Closing out of OpenInterpreter,
2. Running `interpreter --contribute_conversation`.
"#;

pub const CONTRIBUTING_CURRENT_MESSAGE: &str = r#"
---
> This conversation will be used to train OpenInterpreter's language model.
"#;

pub const CONTRIBUTING_FUTURE_MESSAGE: &str = r#"
> OpenInterpreter will contribute all your conversations from now on.

To change this, set `contribute_conversation` to `false` in your profile.
"#;

pub const ASK_CONTRIBUTE_PAST: &str = "Would you like to contribute all past conversations?";
pub const ASK_CONTRIBUTE_FUTURE: &str = "Would you like to contribute all future conversations?";
pub const YES_NO_HINT: &str = "(y/n) ";
