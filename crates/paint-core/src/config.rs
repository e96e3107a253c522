use crate::catalog::{Environment, Finish};
use crate::color::HexColor;
use crate::constants::{DEFAULT_COLOR, DEFAULT_ENVIRONMENT, DEFAULT_FINISH};
use crate::error::{Field, Result};
use crate::session::Issues;
use chrono::{DateTime, Utc};

/// The user's current selection.
///
/// Every field is validated on the way in, so a `Configuration` is always
/// renderable. `saved_at` is metadata from persistence and does not take part
/// in equality.
#[derive(Clone, Debug)]
pub struct Configuration {
    pub color: HexColor,
    pub finish: Finish,
    pub environment: Environment,
    pub saved_at: Option<DateTime<Utc>>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR,
            finish: DEFAULT_FINISH,
            environment: DEFAULT_ENVIRONMENT,
            saved_at: None,
        }
    }
}

impl PartialEq for Configuration {
    fn eq(&self, other: &Self) -> bool {
        self.color == other.color
            && self.finish == other.finish
            && self.environment == other.environment
    }
}

impl Eq for Configuration {}

impl Configuration {
    pub fn new(color: HexColor, finish: Finish, environment: Environment) -> Self {
        Self {
            color,
            finish,
            environment,
            saved_at: None,
        }
    }

    /// Set a single field from its string form. On error `self` is untouched.
    pub fn apply(&mut self, field: Field, value: &str) -> Result<()> {
        match field {
            Field::Color => self.color = HexColor::parse(value)?,
            Field::Finish => self.finish = value.parse()?,
            Field::Environment => self.environment = value.parse()?,
        }
        Ok(())
    }

    /// String form of a field, as used in persisted blobs and share links.
    pub fn value_of(&self, field: Field) -> String {
        match field {
            Field::Color => self.color.to_hex(),
            Field::Finish => self.finish.id().to_string(),
            Field::Environment => self.environment.id().to_string(),
        }
    }

    /// Resolve one field from optional external input, keeping the default
    /// when the input is absent and recording an issue when it is invalid.
    pub(crate) fn apply_or_default(
        &mut self,
        field: Field,
        value: Option<&str>,
        issues: &mut Issues,
    ) {
        let Some(value) = value else {
            return;
        };
        if let Err(e) = self.apply(field, value) {
            log::warn!("[config] {}; keeping default {}", e, self.value_of(field));
            issues.push(e);
        }
    }
}
