use std::fmt::Debug;

#[derive(Clone)]
pub enum CredentialsAction {
    Current,
    Replace(String),
    Clear,
}

// Action payloads are logged at debug level; keep the token out of them.
impl Debug for CredentialsAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CredentialsAction::Current => f.write_str("Current"),
            CredentialsAction::Replace(_) => f.write_str("Replace(<redacted>)"),
            CredentialsAction::Clear => f.write_str("Clear"),
        }
    }
}

/// Results from CredentialsActions - variants match 1:1 with CredentialsAction
#[derive(Clone)]
pub enum CredentialsActionResult {
    Current(Option<String>),
    Replace(()),
    /// Whether a token was present.
    Clear(bool),
}

impl Debug for CredentialsActionResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CredentialsActionResult::Current(token) => f
                .debug_tuple("Current")
                .field(&token.as_ref().map(|_| "<redacted>"))
                .finish(),
            CredentialsActionResult::Replace(()) => f.write_str("Replace"),
            CredentialsActionResult::Clear(had_token) => {
                f.debug_tuple("Clear").field(had_token).finish()
            }
        }
    }
}
