//! # Store Configuration
//!
//! Env-driven settings for the HTTP store, loaded under the `NOTICE_BOARD_`
//! prefix. The base URL and media origin are passed explicitly into the
//! pieces that need them; nothing is read ambiently after startup.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// API base (versioned path included), e.g. "http://127.0.0.1:8000/api/v1".
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Origin that server-relative media paths ("/uploads/...") resolve
    /// against. The backend serves uploads from the host root, not the
    /// versioned API path, so this is configured separately.
    #[serde(default = "default_media_origin")]
    pub media_origin: String,
    /// Sent as `Authorization: Bearer <token>` on every request when set.
    #[serde(default)]
    pub bearer_token: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000/api/v1".to_string()
}

fn default_media_origin() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_timeout_secs() -> u64 {
    20
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            media_origin: default_media_origin(),
            bearer_token: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl StoreConfig {
    /// Reads `NOTICE_BOARD_BASE_URL`, `NOTICE_BOARD_MEDIA_ORIGIN`,
    /// `NOTICE_BOARD_BEARER_TOKEN`, and `NOTICE_BOARD_TIMEOUT_SECS`,
    /// with defaults matching the development backend.
    pub fn from_env() -> anyhow::Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::Environment::with_prefix("NOTICE_BOARD").try_parsing(true))
            .build()?;
        Ok(cfg.try_deserialize()?)
    }
}
