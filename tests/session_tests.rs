// Host-side tests for startup rehydration and per-field recovery.

use paint_core::*;

fn saved(json: &str) -> MemoryStorage {
    let mut storage = MemoryStorage::new();
    storage.set("carConfiguration", json).unwrap();
    storage
}

#[test]
fn nothing_to_restore_gives_clean_defaults() {
    let restored = restore_session("", &MemoryStorage::new());
    assert_eq!(restored.source, RestoreSource::Default);
    assert!(restored.is_clean());
    assert_eq!(restored.config, Configuration::default());
}

#[test]
fn share_link_wins_over_saved_blob() {
    let storage = saved(r##"{"color":"#000000","finish":"matte","environment":"city"}"##);
    let restored = restore_session("?env=forest", &storage);
    assert_eq!(restored.source, RestoreSource::ShareLink);
    assert_eq!(restored.config.environment, Environment::Forest);
    assert_eq!(restored.config.finish, Finish::Metallic);
}

#[test]
fn saved_blob_used_when_query_has_no_configuration() {
    let mut storage = MemoryStorage::new();
    let c = Configuration::new(
        HexColor::parse("#64748b").unwrap(),
        Finish::Glossy,
        Environment::Sunset,
    );
    save(&mut storage, &c).unwrap();
    let restored = restore_session("?utm=1", &storage);
    assert_eq!(restored.source, RestoreSource::Saved);
    assert!(restored.is_clean());
    assert_eq!(restored.config, c);
    assert!(restored.config.saved_at.is_some());
}

#[test]
fn corrupted_json_recovers_to_defaults_with_notice() {
    let restored = restore_session("", &saved("{not json"));
    assert_eq!(restored.source, RestoreSource::Saved);
    assert_eq!(restored.config, Configuration::default());
    assert_eq!(restored.issues.len(), 1);
    assert!(matches!(
        restored.issues[0],
        ConfigError::MalformedPersistedState(_)
    ));
}

#[test]
fn non_object_blob_is_malformed() {
    let restored = restore_blob("[1,2,3]");
    assert_eq!(restored.config, Configuration::default());
    assert!(matches!(
        &restored.issues[..],
        [ConfigError::MalformedPersistedState(_)]
    ));
}

#[test]
fn bad_fields_recover_individually() {
    let restored = restore_blob(
        r##"{"color":"#059669","finish":"chrome","environment":7,"savedAt":"garbage"}"##,
    );
    assert_eq!(restored.config.color.to_hex(), "#059669", "good field kept");
    assert_eq!(restored.config.finish, Finish::Metallic);
    assert_eq!(restored.config.environment, Environment::Studio);
    assert!(restored.config.saved_at.is_none());
    assert_eq!(restored.issues.len(), 2);
    assert_eq!(restored.issues[0], ConfigError::invalid(Field::Finish, "chrome"));
    assert!(matches!(
        restored.issues[1],
        ConfigError::MalformedPersistedState(_)
    ));
}

#[test]
fn missing_fields_are_reported_but_defaulted() {
    let restored = restore_blob(r#"{"finish":"matte"}"#);
    assert_eq!(restored.config.finish, Finish::Matte);
    assert_eq!(restored.config.color, Configuration::default().color);
    assert_eq!(restored.issues.len(), 2);
}

#[test]
fn legacy_blob_restores_cleanly() {
    let restored = restore_blob(
        r##"{"color":"#dc2626","material":"glossy","environment":"city","timestamp":"2023-11-05T08:00:00.000Z"}"##,
    );
    assert!(restored.is_clean());
    assert_eq!(restored.config.finish, Finish::Glossy);
    assert!(restored.config.saved_at.is_some());
}

struct BrokenStorage;

impl Storage for BrokenStorage {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Err(ConfigError::Storage("SecurityError".into()))
    }
    fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
        Err(ConfigError::Storage("SecurityError".into()))
    }
    fn remove(&mut self, _key: &str) -> Result<()> {
        Ok(())
    }
}

#[test]
fn unreadable_storage_degrades_to_defaults() {
    let restored = restore_session("", &BrokenStorage);
    assert_eq!(restored.source, RestoreSource::Default);
    assert_eq!(restored.config, Configuration::default());
    assert!(matches!(&restored.issues[..], [ConfigError::Storage(_)]));
}

#[test]
fn empty_share_params_do_not_hide_the_saved_blob() {
    let storage = saved(r##"{"color":"#059669","finish":"matte","environment":"forest"}"##);
    for query in ["?color=", "?finish=&env=", "?material"] {
        let restored = restore_session(query, &storage);
        assert_eq!(restored.source, RestoreSource::Saved, "{query}");
        assert!(restored.is_clean(), "{query}");
        assert_eq!(restored.config.finish, Finish::Matte);
    }
}
