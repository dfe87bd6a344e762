use config::{Config, ConfigError, Environment, File};
use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "https://opendatasus.saude.gov.br/api/3/action";
pub const DEFAULT_QUERY: &str = "mpox";
pub const DEFAULT_USER_AGENT: &str = "MpoxDashboard-Desktop/1.0";
pub const DEFAULT_WINDOW_WIDTH: f64 = 720.0;
pub const DEFAULT_WINDOW_HEIGHT: f64 = 560.0;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiSettings {
    pub base_url: String,
    pub query: String,
    pub user_agent: String,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct WindowSettings {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Settings {
    pub log_level: String,
    pub api: ApiSettings,
    pub window: WindowSettings,
}

static SETTINGS: OnceCell<Settings> = OnceCell::new();

/// Settings shared by the whole process.
///
/// A broken configuration must not keep the dashboard from rendering, so a
/// load failure is logged and the built-in defaults are used instead.
pub fn settings() -> &'static Settings {
    SETTINGS.get_or_init(|| {
        Settings::new().unwrap_or_else(|e| {
            tracing::warn!("Failed to load settings, using defaults: {}", e);
            Settings::default()
        })
    })
}

/// Installs settings loaded at startup. Returns `false` if settings were
/// already resolved.
pub fn install_settings(settings: Settings) -> bool {
    SETTINGS.set(settings).is_ok()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            api: ApiSettings {
                base_url: DEFAULT_API_BASE.to_string(),
                query: DEFAULT_QUERY.to_string(),
                user_agent: DEFAULT_USER_AGENT.to_string(),
                timeout_secs: None,
            },
            window: WindowSettings {
                width: DEFAULT_WINDOW_WIDTH,
                height: DEFAULT_WINDOW_HEIGHT,
            },
        }
    }
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = Config::builder()
            .set_default("log_level", "info")?
            .set_default("api.base_url", DEFAULT_API_BASE)?
            .set_default("api.query", DEFAULT_QUERY)?
            .set_default("api.user_agent", DEFAULT_USER_AGENT)?
            .set_default("window.width", DEFAULT_WINDOW_WIDTH)?
            .set_default("window.height", DEFAULT_WINDOW_HEIGHT)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(Environment::with_prefix("MPOX").separator("__"))
            .build()?;

        let settings: Settings = s.try_deserialize()?;
        validate_settings(&settings)?;
        Ok(settings)
    }

    /// Full URL of the CKAN `package_search` action.
    pub fn search_url(&self) -> String {
        format!("{}/package_search", self.api.base_url.trim_end_matches('/'))
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.api.timeout_secs.map(Duration::from_secs)
    }
}

fn validate_settings(settings: &Settings) -> Result<(), ConfigError> {
    let mut bad = Vec::new();
    if settings.api.base_url.trim().is_empty() {
        bad.push("api.base_url");
    }
    if settings.api.query.trim().is_empty() {
        bad.push("api.query");
    }
    if reqwest::header::HeaderValue::from_str(&settings.api.user_agent).is_err() {
        bad.push("api.user_agent");
    }
    if settings.window.width <= 0.0 {
        bad.push("window.width");
    }
    if settings.window.height <= 0.0 {
        bad.push("window.height");
    }

    if !bad.is_empty() {
        return Err(ConfigError::Message(format!(
            "invalid settings: {}",
            bad.join(", ")
        )));
    }

    Ok(())
}
