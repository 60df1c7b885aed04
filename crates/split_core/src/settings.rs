use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::Deserialize;
use shared::domain::{Friend, FriendId, Money};

pub const DEFAULT_SETTINGS_FILE: &str = "splitbill.toml";
pub const DEFAULT_AVATAR_BASE_URL: &str = "https://i.pravatar.cc/48";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub avatar_base_url: String,
    pub log_filter: String,
    /// Replaces the built-in roster when present.
    pub friends: Option<Vec<SeedFriend>>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            avatar_base_url: DEFAULT_AVATAR_BASE_URL.into(),
            log_filter: "info".into(),
            friends: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SeedFriend {
    pub id: FriendId,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub balance: Money,
}

impl SeedFriend {
    pub fn into_friend(self, avatar_base_url: &str) -> Friend {
        let image = self
            .image
            .unwrap_or_else(|| format!("{avatar_base_url}?u={}", self.id));
        Friend {
            id: self.id,
            name: self.name,
            image,
            balance: self.balance,
        }
    }
}

/// Loads settings from `path` (or `splitbill.toml` in the working directory
/// when it exists), then applies `APP__*` environment overrides.
pub fn load_settings(path: Option<&Path>) -> anyhow::Result<Settings> {
    load_settings_with_env(path, |name| std::env::var(name).ok())
}

pub fn load_settings_with_env(
    path: Option<&Path>,
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<Settings> {
    let mut settings = match settings_file(path) {
        Some(file) => {
            let raw = fs::read_to_string(&file)
                .with_context(|| format!("failed to read settings file '{}'", file.display()))?;
            toml::from_str::<Settings>(&raw)
                .with_context(|| format!("failed to parse settings file '{}'", file.display()))?
        }
        None => Settings::default(),
    };

    if let Some(v) = non_empty(env("APP__AVATAR_BASE_URL")) {
        settings.avatar_base_url = v;
    }
    if let Some(v) = non_empty(env("APP__LOG_FILTER")) {
        settings.log_filter = v;
    }

    Ok(settings)
}

fn settings_file(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    let fallback = Path::new(DEFAULT_SETTINGS_FILE);
    fallback.exists().then(|| fallback.to_path_buf())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
