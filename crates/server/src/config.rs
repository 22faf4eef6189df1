use std::{collections::HashMap, fs, path::PathBuf};

use serde::Deserialize;
use shared::domain::{AppConfig, Layout};
use tracing::warn;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server_bind: String,
    pub asset_dir: String,
    pub page_title: String,
    pub page_icon: String,
    pub layout: Layout,
}

impl Default for Settings {
    fn default() -> Self {
        let app = AppConfig::default();
        Self {
            server_bind: "127.0.0.1:8501".into(),
            asset_dir: "./assets".into(),
            page_title: app.page_title,
            page_icon: app.page_icon,
            layout: app.layout,
        }
    }
}

impl Settings {
    /// Page metadata handed to the router once at startup.
    pub fn app_config(&self) -> AppConfig {
        AppConfig {
            page_title: self.page_title.clone(),
            page_icon: self.page_icon.clone(),
            layout: self.layout,
            ..AppConfig::default()
        }
    }

    pub fn asset_root(&self) -> PathBuf {
        PathBuf::from(self.asset_dir.trim())
    }
}

pub fn load_settings() -> Settings {
    let file = fs::read_to_string("server.toml").ok();
    load_settings_from(file.as_deref(), |key| std::env::var(key).ok())
}

/// Defaults, then `server.toml` keys, then environment variables.
pub(crate) fn load_settings_from(
    file: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> Settings {
    let mut settings = Settings::default();

    if let Some(raw) = file {
        match toml::from_str::<HashMap<String, String>>(raw) {
            Ok(file_cfg) => {
                if let Some(v) = file_cfg.get("bind_addr") {
                    settings.server_bind = v.clone();
                }
                if let Some(v) = file_cfg.get("asset_dir") {
                    settings.asset_dir = v.clone();
                }
                if let Some(v) = file_cfg.get("page_title") {
                    settings.page_title = v.clone();
                }
                if let Some(v) = file_cfg.get("page_icon") {
                    settings.page_icon = v.clone();
                }
                if let Some(v) = file_cfg.get("layout") {
                    apply_layout(&mut settings, v);
                }
            }
            Err(error) => warn!(%error, "ignoring unreadable server.toml"),
        }
    }

    if let Some(v) = env("SERVER_BIND") {
        settings.server_bind = v;
    }
    if let Some(v) = env("APP__BIND_ADDR") {
        settings.server_bind = v;
    }

    if let Some(v) = env("ASSET_DIR") {
        settings.asset_dir = v;
    }
    if let Some(v) = env("APP__ASSET_DIR") {
        settings.asset_dir = v;
    }

    if let Some(v) = env("APP__PAGE_TITLE") {
        settings.page_title = v;
    }
    if let Some(v) = env("APP__PAGE_ICON") {
        settings.page_icon = v;
    }
    if let Some(v) = env("APP__LAYOUT") {
        apply_layout(&mut settings, &v);
    }

    settings
}

fn apply_layout(settings: &mut Settings, raw: &str) {
    match raw.parse::<Layout>() {
        Ok(layout) => settings.layout = layout,
        Err(error) => warn!(%error, fallback = settings.layout.as_str(), "invalid layout"),
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
