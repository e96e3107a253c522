//! Saved-configuration blob and the key-value slot it lives in.
//!
//! The blob is JSON: `{"color", "finish", "environment", "savedAt"}`. Blobs
//! from the earlier front end used `material` and `timestamp`; both names are
//! still read.

use crate::config::Configuration;
use crate::constants::STORAGE_KEY;
use crate::error::{ConfigError, Field, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use fnv::FnvHashMap;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "WireBlob")]
pub struct PersistedBlob {
    pub color: String,
    pub finish: String,
    pub environment: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<String>,
}

/// Blob as read from storage. Current and legacy names are separate fields so
/// a blob carrying both resolves the same way as [`crate::restore_blob`]: the
/// current name wins.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireBlob {
    color: String,
    #[serde(default)]
    finish: Option<String>,
    #[serde(default)]
    material: Option<String>,
    environment: String,
    #[serde(default)]
    saved_at: Option<String>,
    #[serde(default)]
    timestamp: Option<String>,
}

impl TryFrom<WireBlob> for PersistedBlob {
    type Error = String;

    fn try_from(wire: WireBlob) -> std::result::Result<Self, String> {
        let finish = wire
            .finish
            .or(wire.material)
            .ok_or_else(|| "missing field `finish`".to_string())?;
        Ok(PersistedBlob {
            color: wire.color,
            finish,
            environment: wire.environment,
            saved_at: wire.saved_at.or(wire.timestamp),
        })
    }
}

impl PersistedBlob {
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| ConfigError::Storage(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ConfigError::MalformedPersistedState(e.to_string()))
    }
}

/// Snapshot `config` stamped with the current time.
pub fn serialize(config: &Configuration) -> PersistedBlob {
    serialize_at(config, Utc::now())
}

pub fn serialize_at(config: &Configuration, saved_at: DateTime<Utc>) -> PersistedBlob {
    PersistedBlob {
        color: config.value_of(Field::Color),
        finish: config.value_of(Field::Finish),
        environment: config.value_of(Field::Environment),
        saved_at: Some(saved_at.to_rfc3339_opts(SecondsFormat::Millis, true)),
    }
}

/// Strict inverse of [`serialize`]: any invalid field fails the whole blob.
pub fn deserialize(blob: &PersistedBlob) -> Result<Configuration> {
    let mut config = Configuration::default();
    config.apply(Field::Color, &blob.color)?;
    config.apply(Field::Finish, &blob.finish)?;
    config.apply(Field::Environment, &blob.environment)?;
    config.saved_at = blob.saved_at.as_deref().map(parse_timestamp).transpose()?;
    Ok(config)
}

pub fn deserialize_json(json: &str) -> Result<Configuration> {
    deserialize(&PersistedBlob::from_json(json)?)
}

pub(crate) fn parse_timestamp(s: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| ConfigError::MalformedPersistedState(format!("savedAt {s:?}: {e}")))
}

/// A string key-value store such as the browser's `localStorage`.
pub trait Storage {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// In-process [`Storage`], used on the host and in tests.
#[derive(Default, Debug, Clone)]
pub struct MemoryStorage {
    entries: FnvHashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Write `config` into the configuration slot. The in-memory configuration is
/// never modified, whether or not the write succeeds.
pub fn save(storage: &mut dyn Storage, config: &Configuration) -> Result<PersistedBlob> {
    let blob = serialize(config);
    storage.set(STORAGE_KEY, &blob.to_json()?)?;
    log::info!("[storage] saved configuration at {:?}", blob.saved_at);
    Ok(blob)
}

/// Read the configuration slot strictly. `Ok(None)` when nothing was saved.
pub fn load(storage: &dyn Storage) -> Result<Option<Configuration>> {
    match storage.get(STORAGE_KEY)? {
        Some(json) => deserialize_json(&json).map(Some),
        None => Ok(None),
    }
}

pub fn clear(storage: &mut dyn Storage) -> Result<()> {
    storage.remove(STORAGE_KEY)
}
