use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

/// Runtime configuration, read from the environment at startup.
///
/// | Env var                       | Default                 |
/// |-------------------------------|-------------------------|
/// | `CHEKOK_API_BASE_URL`         | `http://localhost:8080` |
/// | `CHEKOK_PAGE_SIZE`            | `10`                    |
/// | `CHEKOK_HEALTH_POLL_SECS`     | `300`                   |
/// | `CHEKOK_SEARCH_DEBOUNCE_MS`   | `300`                   |
/// | `CHEKOK_REQUEST_TIMEOUT_SECS` | unset (client default)  |
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub page_size: u32,
    pub health_poll_interval: Duration,
    pub search_debounce: Duration,
    pub request_timeout: Option<Duration>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8080".to_string(),
            page_size: 10,
            health_poll_interval: Duration::from_secs(300),
            search_debounce: Duration::from_millis(300),
            request_timeout: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let read = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let api_base_url = read("CHEKOK_API_BASE_URL").unwrap_or(defaults.api_base_url);

        let page_size = match read("CHEKOK_PAGE_SIZE") {
            Some(raw) => raw
                .parse::<u32>()
                .ok()
                .filter(|size| *size > 0)
                .ok_or_else(|| anyhow!("CHEKOK_PAGE_SIZE must be a positive integer: {raw}"))?,
            None => defaults.page_size,
        };

        let health_poll_interval = match read("CHEKOK_HEALTH_POLL_SECS") {
            Some(raw) => Duration::from_secs(
                raw.parse()
                    .with_context(|| format!("CHEKOK_HEALTH_POLL_SECS must be seconds: {raw}"))?,
            ),
            None => defaults.health_poll_interval,
        };

        let search_debounce = match read("CHEKOK_SEARCH_DEBOUNCE_MS") {
            Some(raw) => Duration::from_millis(
                raw.parse()
                    .with_context(|| format!("CHEKOK_SEARCH_DEBOUNCE_MS must be milliseconds: {raw}"))?,
            ),
            None => defaults.search_debounce,
        };

        let request_timeout = match read("CHEKOK_REQUEST_TIMEOUT_SECS") {
            Some(raw) => Some(Duration::from_secs(
                raw.parse()
                    .with_context(|| format!("CHEKOK_REQUEST_TIMEOUT_SECS must be seconds: {raw}"))?,
            )),
            None => None,
        };

        Ok(Self {
            api_base_url,
            page_size,
            health_poll_interval,
            search_debounce,
            request_timeout,
        })
    }
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("kr", "chekok", "chekok-admin")
        .ok_or_else(|| anyhow!("unable to resolve data directory"))
}

pub fn default_session_db_path() -> Result<PathBuf> {
    Ok(project_dirs()?.data_local_dir().join("session.sqlite"))
}

pub fn ensure_webview_data_dir(base_data_dir: &Path) -> Result<PathBuf> {
    let webview_data_dir = base_data_dir.join("webview2");
    std::fs::create_dir_all(&webview_data_dir).with_context(|| {
        format!(
            "failed to create webview dir: {}",
            webview_data_dir.display()
        )
    })?;
    Ok(webview_data_dir)
}

pub fn default_webview_data_dir() -> Result<PathBuf> {
    ensure_webview_data_dir(project_dirs()?.data_local_dir())
}
