// Local storage for the build, the crystal budget, settings and the help flag.
use serde::{Deserialize, Serialize};
use web_sys::Storage;

use crate::build::TapMode;

pub const BUILD_KEY: &str = "stp_build";
pub const OWNED_KEY: &str = "stp_owned";
pub const HELP_SEEN_KEY: &str = "stp_help_seen";
pub const SETTINGS_KEY: &str = "stp_settings";
pub const ALL_KEYS: [&str; 4] = [BUILD_KEY, OWNED_KEY, HELP_SEEN_KEY, SETTINGS_KEY];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub tap_mode: TapMode,
}

impl Settings {
    pub fn from_json(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_else(|e| {
            tracing::warn!("ignoring unreadable settings: {e}");
            Self::default()
        })
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

fn store() -> Option<Storage> {
    let win = web_sys::window()?;
    match win.local_storage() {
        Ok(Some(store)) => Some(store),
        _ => {
            tracing::warn!("local storage unavailable");
            None
        }
    }
}

fn get(key: &str) -> Option<String> {
    store()?.get_item(key).ok().flatten()
}

fn set(key: &str, value: &str) {
    if let Some(store) = store() {
        if store.set_item(key, value).is_err() {
            tracing::warn!(key, "failed to write local storage");
        }
    }
}

fn remove(key: &str) {
    if let Some(store) = store() {
        if store.remove_item(key).is_err() {
            tracing::warn!(key, "failed to clear local storage");
        }
    }
}

pub fn load_build() -> Option<String> {
    get(BUILD_KEY)
}

pub fn save_build(payload: &str) {
    set(BUILD_KEY, payload);
}

/// Drops the build and budget keys; a missing key loads as an empty build.
pub fn clear_build() {
    remove(BUILD_KEY);
    remove(OWNED_KEY);
}

pub fn load_owned() -> Option<String> {
    get(OWNED_KEY)
}

pub fn save_owned(owned: u64) {
    set(OWNED_KEY, &owned.to_string());
}

pub fn load_settings() -> Settings {
    get(SETTINGS_KEY)
        .map(|raw| Settings::from_json(&raw))
        .unwrap_or_default()
}

pub fn save_settings(settings: &Settings) {
    if settings.is_default() {
        remove(SETTINGS_KEY);
    } else {
        set(SETTINGS_KEY, &settings.to_json());
    }
}

pub fn help_seen() -> bool {
    get(HELP_SEEN_KEY).is_some()
}

pub fn mark_help_seen() {
    set(HELP_SEEN_KEY, "1");
}

/// Removes every key this app writes.
pub fn clear_all() {
    for key in ALL_KEYS {
        remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_json_round_trip() {
        let s = Settings { tap_mode: TapMode::Max };
        assert_eq!(Settings::from_json(&s.to_json()), s);
    }

    #[test]
    fn missing_fields_use_defaults() {
        assert_eq!(Settings::from_json("{}"), Settings::default());
    }

    #[test]
    fn unreadable_settings_fall_back() {
        assert_eq!(Settings::from_json("not json"), Settings::default());
    }

    #[test]
    fn wipe_covers_every_key() {
        let mut keys = ALL_KEYS.to_vec();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), 4);
        for key in [BUILD_KEY, OWNED_KEY, HELP_SEEN_KEY, SETTINGS_KEY] {
            assert!(ALL_KEYS.contains(&key));
        }
    }

    #[test]
    fn only_non_default_settings_are_kept() {
        assert!(Settings::default().is_default());
        assert!(!Settings { tap_mode: TapMode::Max }.is_default());
    }
}
