//! Configuration for a single search run
//!
//! This module handles the two configuration inputs a run needs:
//! - the session credential (a forum cookie pair), loadable from a small
//!   TOML file or passed directly
//! - the run options (thread ID, worker cap, excerpt context width)
//!
//! The credential is validated here and then handed to the fetcher at
//! construction; nothing in the crate mutates it after that.

use crate::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// The cookie pair identifying a logged-in forum session
///
/// Obtained by inspecting web requests in a logged-in browser session.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionAuth {
    /// Value of the `bbuserid` cookie
    pub bbuserid: String,

    /// Value of the `bbpassword` cookie
    pub bbpassword: String,
}

impl SessionAuth {
    /// Renders the pair as a `Cookie` request-header value
    pub fn cookie_header(&self) -> String {
        format!("bbuserid={}; bbpassword={}", self.bbuserid, self.bbpassword)
    }
}

/// On-disk shape of the session file
#[derive(Debug, Deserialize)]
struct SessionFile {
    session: SessionAuth,
}

/// Options controlling one search run
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// The thread to search
    pub thread_id: u64,

    /// Maximum number of simultaneous in-flight page fetches
    pub max_workers: usize,

    /// Characters of context kept on each side of a match
    pub context_chars: usize,
}

/// Loads and validates a session credential from a TOML file
///
/// Expected shape:
///
/// ```toml
/// [session]
/// bbuserid = "123456"
/// bbpassword = "0123456789abcdef"
/// ```
pub fn load_session(path: &Path) -> Result<SessionAuth, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let parsed: SessionFile = toml::from_str(&contents)?;
    validate_session(&parsed.session)?;
    Ok(parsed.session)
}

/// Validates a session credential regardless of where it came from
pub fn validate_session(session: &SessionAuth) -> Result<(), ConfigError> {
    if session.bbuserid.is_empty() {
        return Err(ConfigError::Validation(
            "bbuserid cannot be empty".to_string(),
        ));
    }

    if session.bbpassword.is_empty() {
        return Err(ConfigError::Validation(
            "bbpassword cannot be empty".to_string(),
        ));
    }

    // Cookie values ride in a request header, so they must stay in the
    // visible-ASCII range the header grammar allows.
    for (name, value) in [
        ("bbuserid", &session.bbuserid),
        ("bbpassword", &session.bbpassword),
    ] {
        if !value
            .chars()
            .all(|c| c.is_ascii_graphic() && c != ';' && c != ',')
        {
            return Err(ConfigError::Validation(format!(
                "{} contains characters not allowed in a cookie value",
                name
            )));
        }
    }

    Ok(())
}

/// Validates run options before any network activity
pub fn validate_options(options: &SearchOptions) -> Result<(), ConfigError> {
    if options.thread_id < 1 {
        return Err(ConfigError::Validation(format!(
            "thread-id must be >= 1, got {}",
            options.thread_id
        )));
    }

    if options.max_workers < 1 {
        return Err(ConfigError::Validation(format!(
            "max-workers must be >= 1, got {}",
            options.max_workers
        )));
    }

    Ok(())
}
