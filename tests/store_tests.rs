// Host-side tests for the observable configuration store.

use paint_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;

fn recording_store() -> (ConfigStore, Rc<RefCell<Vec<Configuration>>>) {
    let mut store = ConfigStore::default();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    store.subscribe(move |c| sink.borrow_mut().push(c.clone()));
    (store, seen)
}

#[test]
fn starts_with_documented_defaults() {
    let store = ConfigStore::default();
    let c = store.config();
    assert_eq!(c.color.to_hex(), "#dc2626");
    assert_eq!(c.finish, Finish::Metallic);
    assert_eq!(c.environment, Environment::Studio);
    assert!(c.saved_at.is_none());
}

#[test]
fn update_accepts_valid_values_for_each_field() {
    let mut store = ConfigStore::default();
    store.update(Field::Color, "#2563EB").unwrap();
    store.update(Field::Finish, "matte").unwrap();
    store.update(Field::Environment, "sunset").unwrap();
    let c = store.config();
    assert_eq!(c.color.to_hex(), "#2563eb");
    assert_eq!(c.finish, Finish::Matte);
    assert_eq!(c.environment, Environment::Sunset);
}

#[test]
fn update_rejects_unknown_finish_and_leaves_state_unchanged() {
    let (mut store, seen) = recording_store();
    let before = store.snapshot();
    let err = store.update(Field::Finish, "chrome").unwrap_err();
    assert_eq!(err, ConfigError::invalid(Field::Finish, "chrome"));
    assert_eq!(store.config(), &before);
    assert!(seen.borrow().is_empty(), "rejected updates must not notify");
}

#[test]
fn update_rejects_bad_color_and_environment() {
    let mut store = ConfigStore::default();
    assert!(store.update(Field::Color, "blue").is_err());
    assert!(store.update(Field::Color, "#12345").is_err());
    assert!(store.update(Field::Environment, "moon").is_err());
    assert_eq!(store.config(), &Configuration::default());
}

#[test]
fn reset_restores_defaults_from_any_state() {
    let mut store = ConfigStore::default();
    store.update(Field::Color, "#000000").unwrap();
    store.set_finish(Finish::Glossy);
    store.set_environment(Environment::Forest);
    store.reset();
    assert_eq!(store.config(), &Configuration::default());
    store.reset();
    assert_eq!(store.config(), &Configuration::default());
}

#[test]
fn randomize_draws_from_catalogs_and_keeps_environment() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut store = ConfigStore::default();
    store.set_environment(Environment::City);
    let mut colors = std::collections::HashSet::new();
    let mut finishes = std::collections::HashSet::new();
    for _ in 0..200 {
        store.randomize_with(&mut rng);
        let c = store.config();
        assert!(color_option(c.color).is_some(), "{} not in catalog", c.color);
        assert!(Finish::ALL.contains(&c.finish));
        assert_eq!(c.environment, Environment::City);
        colors.insert(c.color);
        finishes.insert(c.finish);
    }
    assert_eq!(colors.len(), COLOR_CATALOG.len(), "every catalog color should come up");
    assert_eq!(finishes.len(), 3);
}

#[test]
fn randomize_with_thread_rng_keeps_invariants() {
    let mut store = ConfigStore::default();
    store.set_environment(Environment::Forest);
    store.randomize();
    assert!(color_option(store.config().color).is_some());
    assert_eq!(store.config().environment, Environment::Forest);
}

#[test]
fn listeners_see_each_change_once() {
    let (mut store, seen) = recording_store();
    store.set_finish(Finish::Matte);
    store.set_finish(Finish::Matte); // no-op
    store.update(Field::Color, "#059669").unwrap();
    store.reset();
    let seen = seen.borrow();
    assert_eq!(seen.len(), 3);
    assert_eq!(seen[0].finish, Finish::Matte);
    assert_eq!(seen[1].color.to_hex(), "#059669");
    assert_eq!(seen[2], Configuration::default());
}

#[test]
fn unsubscribe_stops_notifications() {
    let mut store = ConfigStore::default();
    let count = Rc::new(RefCell::new(0));
    let c = count.clone();
    let id = store.subscribe(move |_| *c.borrow_mut() += 1);
    store.set_environment(Environment::Sunset);
    assert!(store.unsubscribe(id));
    assert!(!store.unsubscribe(id));
    store.set_environment(Environment::City);
    assert_eq!(*count.borrow(), 1);
    assert_eq!(store.listener_count(), 0);
}

struct RecordingRenderer(Rc<RefCell<Vec<RenderSnapshot>>>);

impl Renderer for RecordingRenderer {
    fn render(&mut self, snapshot: &RenderSnapshot) {
        self.0.borrow_mut().push(*snapshot);
    }
}

#[test]
fn attached_renderer_gets_initial_and_updated_snapshots() {
    let frames = Rc::new(RefCell::new(Vec::new()));
    let mut store = ConfigStore::default();
    store.attach_renderer(RecordingRenderer(frames.clone()));
    store.set_environment(Environment::Sunset);

    let frames = frames.borrow();
    assert_eq!(frames.len(), 2);
    assert_eq!(frames[0].environment_preset, "studio");
    assert_eq!(frames[1].environment_preset, "sunset");
    assert_eq!(frames[1].material, store.material());
}

#[test]
fn end_to_end_blue_glossy_share() {
    let mut store = ConfigStore::default();
    store.update(Field::Color, "#2563eb").unwrap();
    store.update(Field::Finish, "glossy").unwrap();

    let p = store.material();
    assert_eq!(p.base_color.to_hex(), "#2563eb");
    assert!((p.reflectivity - 0.30).abs() < 1e-6);
    assert!((p.surface_smoothness - 1.00).abs() < 1e-6);
    assert!((p.environment_reflection_strength - 2.0).abs() < 1e-6);

    let link = to_share_link(&store.snapshot(), "https://paint.example");
    assert!(
        link.contains("color=%232563eb&finish=glossy&env=studio"),
        "unexpected link {link}"
    );
}
