use crate::api::DEFAULT_BASE_URL;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Settings {
    /// Root of the REST API. Resource paths are appended to it.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Per-request timeout in seconds. `0` disables the timeout.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
    /// When enabled the application initialises the logger at debug level.
    /// Defaults to `false` when the field is missing in the settings file.
    #[serde(default)]
    pub debug_logging: bool,
    /// Also write logs to this file when set.
    #[serde(default)]
    pub log_file: Option<String>,
    /// Enable toast notifications in the UI.
    #[serde(default = "default_toasts")]
    pub enable_toasts: bool,
    /// Duration of toast notifications in seconds.
    #[serde(default = "default_toast_duration")]
    pub toast_duration: f32,
    /// Last known window size. If absent, a default size is used.
    #[serde(default)]
    pub window_size: Option<(i32, i32)>,
}

fn default_api_base_url() -> String {
    DEFAULT_BASE_URL.into()
}

fn default_request_timeout() -> u64 {
    30
}

fn default_toasts() -> bool {
    true
}

fn default_toast_duration() -> f32 {
    3.0
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            request_timeout_secs: default_request_timeout(),
            debug_logging: false,
            log_file: None,
            enable_toasts: default_toasts(),
            toast_duration: default_toast_duration(),
            window_size: Some((960, 600)),
        }
    }
}

impl Settings {
    /// A missing or empty file gives the defaults. A file that exists but
    /// cannot be read or parsed is an error.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
            Err(e) => return Err(e).with_context(|| format!("failed to read settings '{path}'")),
        };
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(&content).with_context(|| format!("invalid settings file '{path}'"))
    }

    pub fn save(&self, path: &str) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        match self.request_timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }

    pub fn window_size(&self) -> [f32; 2] {
        let (w, h) = self.window_size.unwrap_or((960, 600));
        [w.max(480) as f32, h.max(320) as f32]
    }
}
