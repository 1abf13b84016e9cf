//! Formatting options.
//!
//! Options come from a broader options map in which the list settings live
//! under `plugin.lists`, while consecutive numbering is the global `number`
//! switch:
//!
//! ```toml
//! number = true
//!
//! [plugin.lists]
//! bullet = "*"
//! ordered_marker = ")"
//! ```

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Bullet used when none is configured.
pub const DEFAULT_BULLET: Bullet = Bullet::Dash;

/// Every accepted bullet, in CLI order.
pub const VALID_BULLETS: [&str; 3] = ["-", "*", "+"];

/// Ordered-list suffix used when none is configured.
pub const DEFAULT_ORDERED_MARKER: OrderedMarker = OrderedMarker::Period;

/// Every accepted ordered-list suffix, in CLI order.
pub const VALID_ORDERED_MARKERS: [&str; 2] = [".", ")"];

/// Marker character for bullet list items.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Deserialize)]
pub enum Bullet {
    #[default]
    #[serde(rename = "-")]
    Dash,
    #[serde(rename = "*")]
    Star,
    #[serde(rename = "+")]
    Plus,
}

impl Bullet {
    pub fn as_str(self) -> &'static str {
        match self {
            Bullet::Dash => "-",
            Bullet::Star => "*",
            Bullet::Plus => "+",
        }
    }

    /// The bullet used for every other list in a run of adjacent bullet
    /// lists: `*` next to `-`, and `-` next to anything else.
    pub fn alternate(self) -> Bullet {
        match self {
            Bullet::Dash => Bullet::Star,
            Bullet::Star | Bullet::Plus => Bullet::Dash,
        }
    }
}

impl FromStr for Bullet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "-" => Ok(Bullet::Dash),
            "*" => Ok(Bullet::Star),
            "+" => Ok(Bullet::Plus),
            other => Err(Error::InvalidBullet(other.to_string())),
        }
    }
}

impl fmt::Display for Bullet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Delimiter written after the number of an ordered list item.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Deserialize)]
pub enum OrderedMarker {
    #[default]
    #[serde(rename = ".")]
    Period,
    #[serde(rename = ")")]
    Paren,
}

impl OrderedMarker {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderedMarker::Period => ".",
            OrderedMarker::Paren => ")",
        }
    }

    pub fn alternate(self) -> OrderedMarker {
        match self {
            OrderedMarker::Period => OrderedMarker::Paren,
            OrderedMarker::Paren => OrderedMarker::Period,
        }
    }
}

impl FromStr for OrderedMarker {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "." => Ok(OrderedMarker::Period),
            ")" => Ok(OrderedMarker::Paren),
            other => Err(Error::InvalidOrderedMarker(other.to_string())),
        }
    }
}

impl fmt::Display for OrderedMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved settings for one render.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Config {
    /// Primary bullet marker.
    pub bullet: Bullet,
    /// Primary ordered-list suffix.
    pub ordered_marker: OrderedMarker,
    /// Number ordered items consecutively instead of repeating `1`.
    pub number: bool,
}

impl Config {
    /// Load settings from a TOML options map. Missing keys keep their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let options: OptionsRaw = toml::from_str(s)?;
        Ok(options.into())
    }

    pub fn with_bullet(mut self, bullet: Bullet) -> Self {
        self.bullet = bullet;
        self
    }

    pub fn with_ordered_marker(mut self, ordered_marker: OrderedMarker) -> Self {
        self.ordered_marker = ordered_marker;
        self
    }

    pub fn with_number(mut self, number: bool) -> Self {
        self.number = number;
        self
    }
}

/// Options map as parsed from TOML. Unknown keys belong to other consumers
/// of the same map and are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OptionsRaw {
    number: bool,
    plugin: PluginOptionsRaw,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PluginOptionsRaw {
    lists: ListsOptionsRaw,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ListsOptionsRaw {
    bullet: Bullet,
    ordered_marker: OrderedMarker,
}

impl From<OptionsRaw> for Config {
    fn from(raw: OptionsRaw) -> Self {
        Config {
            bullet: raw.plugin.lists.bullet,
            ordered_marker: raw.plugin.lists.ordered_marker,
            number: raw.number,
        }
    }
}
