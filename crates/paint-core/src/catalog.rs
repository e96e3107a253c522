//! Static option tables shown by the presentation layer.
//!
//! Finishes and environments are closed enums; their string identifiers are
//! used for persistence, share links and (for environments) the renderer's
//! lighting preset. Nothing outside these tables is ever handed on.

use crate::color::HexColor;
use crate::error::{ConfigError, Field, Result};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorOption {
    pub name: &'static str,
    pub value: HexColor,
}

pub const COLOR_CATALOG: [ColorOption; 8] = [
    ColorOption {
        name: "Arctic White",
        value: HexColor::from_rgb(0xff, 0xff, 0xff),
    },
    ColorOption {
        name: "Midnight Black",
        value: HexColor::from_rgb(0x00, 0x00, 0x00),
    },
    ColorOption {
        name: "Racing Red",
        value: HexColor::from_rgb(0xdc, 0x26, 0x26),
    },
    ColorOption {
        name: "Electric Blue",
        value: HexColor::from_rgb(0x25, 0x63, 0xeb),
    },
    ColorOption {
        name: "Forest Green",
        value: HexColor::from_rgb(0x05, 0x96, 0x69),
    },
    ColorOption {
        name: "Sunset Orange",
        value: HexColor::from_rgb(0xea, 0x58, 0x0c),
    },
    ColorOption {
        name: "Royal Purple",
        value: HexColor::from_rgb(0x7c, 0x3a, 0xed),
    },
    ColorOption {
        name: "Chrome Silver",
        value: HexColor::from_rgb(0x64, 0x74, 0x8b),
    },
];

/// Catalog entry for a color, if it is one of the named swatches.
pub fn color_option(color: HexColor) -> Option<&'static ColorOption> {
    COLOR_CATALOG.iter().find(|c| c.value == color)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Finish {
    Metallic,
    Matte,
    Glossy,
}

impl Finish {
    pub const ALL: [Finish; 3] = [Finish::Metallic, Finish::Matte, Finish::Glossy];

    pub fn id(self) -> &'static str {
        match self {
            Finish::Metallic => "metallic",
            Finish::Matte => "matte",
            Finish::Glossy => "glossy",
        }
    }

    pub fn from_id(id: &str) -> Option<Finish> {
        Finish::ALL.into_iter().find(|f| f.id() == id)
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Finish::Metallic => "Metallic",
            Finish::Matte => "Matte",
            Finish::Glossy => "Glossy",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Finish::Metallic => "Premium metallic finish with deep shine",
            Finish::Matte => "Sophisticated non-reflective surface",
            Finish::Glossy => "High-gloss mirror-like finish",
        }
    }
}

impl fmt::Display for Finish {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Finish {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        Finish::from_id(s).ok_or_else(|| ConfigError::invalid(Field::Finish, s))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Environment {
    Studio,
    City,
    Sunset,
    Forest,
}

impl Environment {
    pub const ALL: [Environment; 4] = [
        Environment::Studio,
        Environment::City,
        Environment::Sunset,
        Environment::Forest,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Environment::Studio => "studio",
            Environment::City => "city",
            Environment::Sunset => "sunset",
            Environment::Forest => "forest",
        }
    }

    pub fn from_id(id: &str) -> Option<Environment> {
        Environment::ALL.into_iter().find(|e| e.id() == id)
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Environment::Studio => "Studio",
            Environment::City => "Urban",
            Environment::Sunset => "Sunset",
            Environment::Forest => "Nature",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Environment::Studio => "Professional photography lighting",
            Environment::City => "Modern city environment",
            Environment::Sunset => "Golden hour lighting",
            Environment::Forest => "Natural outdoor setting",
        }
    }

    /// Lighting preset name understood by the external renderer.
    pub fn renderer_preset(self) -> &'static str {
        match self {
            Environment::Studio => "studio",
            Environment::City => "city",
            Environment::Sunset => "sunset",
            Environment::Forest => "forest",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        Environment::from_id(s).ok_or_else(|| ConfigError::invalid(Field::Environment, s))
    }
}
