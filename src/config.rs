//! Process-wide client configuration, resolved once at startup.

use log::warn;
use std::env;
use std::time::Duration;

pub const DEFAULT_SERVER_URL: &str = "https://saytheirnames.dev";

/// Where the API lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    pub server_url: String,
    /// `None` keeps the HTTP stack's default (no explicit timeout).
    pub timeout: Option<Duration>,
}

impl Default for Environment {
    fn default() -> Self {
        Environment {
            server_url: DEFAULT_SERVER_URL.to_string(),
            timeout: None,
        }
    }
}

impl Environment {
    /// Reads `STN_SERVER_URL` and `STN_HTTP_TIMEOUT_SECS`.
    pub fn from_env() -> Self {
        Self::from_vars(
            env::var("STN_SERVER_URL").ok(),
            env::var("STN_HTTP_TIMEOUT_SECS").ok(),
        )
    }

    fn from_vars(server_url: Option<String>, timeout_secs: Option<String>) -> Self {
        let timeout = timeout_secs.and_then(|s| match s.trim().parse::<u64>() {
            Ok(0) => {
                warn!("Ignoring STN_HTTP_TIMEOUT_SECS=0");
                None
            }
            Ok(secs) => Some(Duration::from_secs(secs)),
            Err(e) => {
                warn!("Ignoring STN_HTTP_TIMEOUT_SECS={s:?}: {e}");
                None
            }
        });
        Environment {
            server_url: server_url
                .filter(|u| !u.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string()),
            timeout,
        }
    }
}
