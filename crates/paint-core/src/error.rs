use std::fmt;
use thiserror::Error;

/// The three user-selectable fields of a [`Configuration`](crate::Configuration).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Color,
    Finish,
    Environment,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Color, Field::Finish, Field::Environment];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Color => "color",
            Field::Finish => "finish",
            Field::Environment => "environment",
        }
    }

    pub fn from_name(name: &str) -> Option<Field> {
        match name {
            "color" => Some(Field::Color),
            "finish" | "material" => Some(Field::Finish),
            "environment" | "env" => Some(Field::Environment),
            _ => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A value outside a closed option set, or a color that is not `#rrggbb`.
    #[error("invalid {field} option: {value:?}")]
    InvalidOption { field: Field, value: String },

    /// Saved or shared data that does not have the expected structure.
    #[error("malformed persisted state: {0}")]
    MalformedPersistedState(String),

    /// The key-value store refused a read or write.
    #[error("storage error: {0}")]
    Storage(String),
}

impl ConfigError {
    pub fn invalid(field: Field, value: impl Into<String>) -> Self {
        ConfigError::InvalidOption {
            field,
            value: value.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;
