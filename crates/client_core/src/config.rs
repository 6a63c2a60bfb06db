use std::{fs, path::Path, time::Duration};

use serde::Deserialize;
use tracing::warn;
use url::Url;

use crate::ClientError;

pub const DEFAULT_CONFIG_FILE: &str = "rsvp.toml";
pub const PLACEHOLDER_PREFIX: &str = "PASTE_";

/// Process-wide settings, built once at startup and shared read-only.
///
/// `limit` is the hidden cap. Front ends must never render it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub limit: u64,
    pub webhook_url: String,
    pub request_timeout_secs: u64,
    pub follow_handle: String,
    pub age_options: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            limit: 100,
            webhook_url: "PASTE_YOUR_WEB_APP_URL_HERE".into(),
            request_timeout_secs: 15,
            follow_handle: "@reconandreel".into(),
            age_options: ["0-2", "3-5", "6-8", "9-12", "13+"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl Settings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    /// The endpoint, if one has actually been filled in.
    pub fn endpoint(&self) -> Result<Url, ClientError> {
        let raw = self.webhook_url.trim();
        if raw.is_empty() || raw.starts_with(PLACEHOLDER_PREFIX) {
            return Err(ClientError::NotConfigured);
        }

        let url = Url::parse(raw).map_err(|_| ClientError::NotConfigured)?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            _ => Err(ClientError::NotConfigured),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileSettings {
    limit: Option<u64>,
    webhook_url: Option<String>,
    request_timeout_secs: Option<u64>,
    follow_handle: Option<String>,
    age_options: Option<Vec<String>>,
}

impl FileSettings {
    fn apply(self, settings: &mut Settings) {
        if let Some(v) = self.limit {
            settings.limit = v;
        }
        if let Some(v) = self.webhook_url {
            settings.webhook_url = v;
        }
        if let Some(v) = self.request_timeout_secs {
            settings.request_timeout_secs = v;
        }
        if let Some(v) = self.follow_handle {
            settings.follow_handle = v;
        }
        if let Some(v) = self.age_options.filter(|options| !options.is_empty()) {
            settings.age_options = v;
        }
    }
}

pub fn load_settings() -> Settings {
    load_settings_from(DEFAULT_CONFIG_FILE)
}

pub fn load_settings_from(path: impl AsRef<Path>) -> Settings {
    let path = path.as_ref();
    let mut settings = Settings::default();

    match fs::read_to_string(path) {
        Ok(raw) => apply_file_settings(&mut settings, &raw, path),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
        Err(err) => warn!("failed to read config file '{}': {err}", path.display()),
    }

    apply_env_overrides(&mut settings, |key| std::env::var(key).ok());
    settings
}

fn apply_file_settings(settings: &mut Settings, raw: &str, path: &Path) {
    match toml::from_str::<FileSettings>(raw) {
        Ok(file_cfg) => file_cfg.apply(settings),
        Err(err) => warn!(
            "ignoring malformed config file '{}': {err}",
            path.display()
        ),
    }
}

fn apply_env_overrides(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    for key in ["RSVP_LIMIT", "APP__LIMIT"] {
        if let Some(parsed) = lookup(key).and_then(|v| v.trim().parse::<u64>().ok()) {
            settings.limit = parsed;
        }
    }

    for key in ["RSVP_WEBHOOK_URL", "APP__WEBHOOK_URL"] {
        if let Some(v) = lookup(key) {
            settings.webhook_url = v;
        }
    }

    if let Some(parsed) =
        lookup("APP__REQUEST_TIMEOUT_SECS").and_then(|v| v.trim().parse::<u64>().ok())
    {
        settings.request_timeout_secs = parsed;
    }

    if let Some(v) = lookup("APP__FOLLOW_HANDLE") {
        settings.follow_handle = v;
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
