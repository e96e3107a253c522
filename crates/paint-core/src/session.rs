//! Startup rehydration with per-field recovery.
//!
//! Corrupted storage or a hand-edited link never aborts the session: each bad
//! field falls back to its default and the problem is returned as an issue the
//! UI can show as a notice.

use crate::config::Configuration;
use crate::constants::STORAGE_KEY;
use crate::error::{ConfigError, Field};
use crate::persist::{parse_timestamp, Storage};
use crate::share::{from_share_link, has_share_params};
use smallvec::SmallVec;

/// Problems recovered from while restoring; at most one per field in practice.
pub type Issues = SmallVec<[ConfigError; 3]>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RestoreSource {
    ShareLink,
    Saved,
    Default,
}

#[derive(Clone, Debug)]
pub struct Restored {
    pub config: Configuration,
    pub source: RestoreSource,
    pub issues: Issues,
}

impl Restored {
    pub fn defaults() -> Self {
        Self {
            config: Configuration::default(),
            source: RestoreSource::Default,
            issues: Issues::new(),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Lenient counterpart of [`crate::persist::deserialize_json`].
pub fn restore_blob(json: &str) -> Restored {
    let mut restored = Restored {
        source: RestoreSource::Saved,
        ..Restored::defaults()
    };
    let value: serde_json::Value = match serde_json::from_str(json) {
        Ok(v) => v,
        Err(e) => {
            log::warn!("[session] unreadable saved configuration: {}", e);
            restored
                .issues
                .push(ConfigError::MalformedPersistedState(e.to_string()));
            return restored;
        }
    };
    let Some(obj) = value.as_object() else {
        restored.issues.push(ConfigError::MalformedPersistedState(
            "saved configuration is not an object".into(),
        ));
        return restored;
    };

    for field in Field::ALL {
        let raw = match field {
            Field::Finish => obj
                .get("finish")
                .filter(|v| !v.is_null())
                .or_else(|| obj.get("material")),
            _ => obj.get(field.as_str()),
        };
        match raw {
            None => restored.issues.push(ConfigError::MalformedPersistedState(format!(
                "missing {field}"
            ))),
            Some(v) => match v.as_str() {
                Some(s) => restored
                    .config
                    .apply_or_default(field, Some(s), &mut restored.issues),
                None => restored.issues.push(ConfigError::MalformedPersistedState(format!(
                    "{field} is not a string"
                ))),
            },
        }
    }

    restored.config.saved_at = obj
        .get("savedAt")
        .and_then(|v| v.as_str())
        .or_else(|| obj.get("timestamp").and_then(|v| v.as_str()))
        .and_then(|s| parse_timestamp(s).ok());
    restored
}

/// Pick the startup configuration: a share link in `query` wins, then the
/// saved slot in `storage`, then the defaults.
pub fn restore_session(query: &str, storage: &dyn Storage) -> Restored {
    if has_share_params(query) {
        log::info!("[session] restoring from share link");
        return from_share_link(query);
    }
    match storage.get(STORAGE_KEY) {
        Ok(Some(json)) => {
            log::info!("[session] restoring saved configuration");
            restore_blob(&json)
        }
        Ok(None) => Restored::defaults(),
        Err(e) => {
            log::error!("[session] storage unavailable: {}", e);
            let mut restored = Restored::defaults();
            restored.issues.push(e);
            restored
        }
    }
}
