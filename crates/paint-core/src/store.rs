//! Observable holder for the session's [`Configuration`].
//!
//! The store is owned by a single UI session. Listeners are called
//! synchronously after every change that alters the configuration; rejected
//! updates and no-op assignments do not notify.

use crate::catalog::{Environment, Finish, COLOR_CATALOG};
use crate::color::HexColor;
use crate::config::Configuration;
use crate::error::{Field, Result};
use crate::material::{derive_material_parameters, MaterialParameters};
use crate::scene::{RenderSnapshot, Renderer};
use rand::prelude::*;

type Listener = Box<dyn FnMut(&Configuration)>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub struct ConfigStore {
    config: Configuration,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new(Configuration::default())
    }
}

impl ConfigStore {
    pub fn new(config: Configuration) -> Self {
        Self {
            config,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Immutable copy for saving or sharing.
    pub fn snapshot(&self) -> Configuration {
        self.config.clone()
    }

    pub fn material(&self) -> MaterialParameters {
        derive_material_parameters(self.config.color, self.config.finish)
    }

    pub fn render_snapshot(&self) -> RenderSnapshot {
        RenderSnapshot::from_config(&self.config)
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&Configuration) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Render the current configuration now and again after every change.
    pub fn attach_renderer<R: Renderer + 'static>(&mut self, mut renderer: R) -> SubscriptionId {
        renderer.render(&self.render_snapshot());
        self.subscribe(move |config| renderer.render(&RenderSnapshot::from_config(config)))
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Set one field from its string form.
    ///
    /// Finish and environment must name a catalog entry; color must be
    /// `#rrggbb`. A rejected value leaves the configuration unchanged.
    pub fn update(&mut self, field: Field, value: &str) -> Result<()> {
        let mut next = self.config.clone();
        if let Err(e) = next.apply(field, value) {
            log::warn!("[config] rejected update: {}", e);
            return Err(e);
        }
        self.replace(next);
        Ok(())
    }

    pub fn set_color(&mut self, color: HexColor) {
        self.replace(Configuration {
            color,
            ..self.config.clone()
        });
    }

    pub fn set_finish(&mut self, finish: Finish) {
        self.replace(Configuration {
            finish,
            ..self.config.clone()
        });
    }

    pub fn set_environment(&mut self, environment: Environment) {
        self.replace(Configuration {
            environment,
            ..self.config.clone()
        });
    }

    /// Restore the documented defaults.
    pub fn reset(&mut self) {
        self.replace(Configuration::default());
    }

    pub fn randomize(&mut self) {
        self.randomize_with(&mut thread_rng());
    }

    /// Pick a catalog color and a finish at random. The environment is left
    /// as it is.
    pub fn randomize_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut next = self.config.clone();
        if let Some(option) = COLOR_CATALOG.choose(rng) {
            next.color = option.value;
        }
        if let Some(finish) = Finish::ALL.choose(rng) {
            next.finish = *finish;
        }
        self.replace(next);
    }

    /// Swap in a whole configuration, e.g. one restored at startup.
    pub fn replace(&mut self, next: Configuration) {
        if next == self.config {
            return;
        }
        log::info!(
            "[config] color={} finish={} environment={}",
            next.color,
            next.finish,
            next.environment
        );
        self.config = next;
        self.notify();
    }

    fn notify(&mut self) {
        let config = &self.config;
        for (_, listener) in self.listeners.iter_mut() {
            listener(config);
        }
    }
}
