//! Runtime configuration for the share browser

use serde::{Deserialize, Serialize};

/// Default number of cards per page
pub const DEFAULT_PAGE_SIZE: u32 = 17;

/// Session storage key holding the opaque login token
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Which snapshot a favorite keeps when it is (re-)added.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapshotPolicy {
    /// Store exactly the value passed to the toggle call
    #[default]
    KeepToggled,
    /// Prefer the copy from the most recently applied page, and refresh
    /// stored favorites whenever a newer page contains them
    RefreshFromLatest,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the market API, without trailing slash
    pub api_base: String,
    pub default_page_size: u32,
    pub token_key: String,
    #[serde(default)]
    pub snapshot_policy: SnapshotPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: "http://localhost:3000".to_string(),
            default_page_size: DEFAULT_PAGE_SIZE,
            token_key: TOKEN_STORAGE_KEY.to_string(),
            snapshot_policy: SnapshotPolicy::default(),
        }
    }
}

impl AppConfig {
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_snapshot_policy(mut self, policy: SnapshotPolicy) -> Self {
        self.snapshot_policy = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = AppConfig::default();
        assert_eq!(config.default_page_size, 17);
        assert_eq!(config.token_key, "token");
        assert_eq!(config.snapshot_policy, SnapshotPolicy::KeepToggled);
    }

    #[test]
    fn api_base_drops_trailing_slash() {
        let config = AppConfig::default().with_api_base("https://api.example.com/");
        assert_eq!(config.api_base, "https://api.example.com");
    }

    #[test]
    fn policy_defaults_when_missing() {
        let config: AppConfig = serde_json::from_str(
            r#"{"api_base":"http://x","default_page_size":5,"token_key":"t"}"#,
        )
        .unwrap();
        assert_eq!(config.snapshot_policy, SnapshotPolicy::KeepToggled);

        let policy: SnapshotPolicy = serde_json::from_str(r#""refresh_from_latest""#).unwrap();
        assert_eq!(policy, SnapshotPolicy::RefreshFromLatest);
    }
}
