//! Dotted key paths and slot resolution
//!
//! A key string such as `db.host` splits on `.` into a [`KeyPath`]. Resolving
//! a path against an [`IniObject`] yields a [`Target`]: the map that holds the
//! value plus the key inside it.
//!
//! # Resolution rules
//!
//! - One segment `k` addresses the top-level entry `k`.
//! - Two or more segments `[s, rest..]` address key `rest.join(".")` inside
//!   section `s` when `s` exists as a section. Only one level of sectioning is
//!   honored, so `a.b.c` under `[a]` is the key `b.c`.
//! - Otherwise the whole dotted string is one literal top-level key. Sections
//!   are never created.
//!
//! # Examples
//!
//! ```
//! use ini_content::{IniObject, KeyPath};
//!
//! let mut object = IniObject::parse("[db]\nhost=localhost\n").unwrap();
//!
//! object.set(&KeyPath::parse("db.host"), "remote").unwrap();
//! object.set(&KeyPath::parse("cache.ttl"), "60").unwrap();
//!
//! assert_eq!(object.render().unwrap(), "cache.ttl=60\n\n[db]\nhost=remote\n");
//! ```

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::object::{Entry, IniObject};

/// Ordered key segments addressing one value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyPath(Vec<String>);

impl KeyPath {
    /// Split a dotted key string into segments.
    ///
    /// Every `.` separates a segment, so empty segments are kept and an empty
    /// string gives one empty segment.
    pub fn parse(key: &str) -> Self {
        Self(key.split('.').map(str::to_string).collect())
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("."))
    }
}

impl FromStr for KeyPath {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for KeyPath {
    fn from(key: &str) -> Self {
        Self::parse(key)
    }
}

impl From<Vec<String>> for KeyPath {
    fn from(segments: Vec<String>) -> Self {
        Self(segments)
    }
}

impl<const N: usize> From<[&str; N]> for KeyPath {
    fn from(segments: [&str; N]) -> Self {
        segments.into_iter().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for KeyPath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Turn a dotted key string into a path.
pub fn parse_key(key: &str) -> KeyPath {
    KeyPath::parse(key)
}

/// The slot a path resolves to.
#[derive(Debug)]
pub enum Target<'a> {
    /// A top-level entry of the object.
    Top {
        entries: &'a mut IndexMap<String, Entry>,
        key: String,
    },
    /// A key inside the existing section `section`.
    Section {
        entries: &'a mut IndexMap<String, Entry>,
        section: String,
        key: String,
    },
}

impl Target<'_> {
    pub fn key(&self) -> &str {
        match self {
            Self::Top { key, .. } | Self::Section { key, .. } => key,
        }
    }

    /// Current value of the slot.
    pub fn get(&self) -> Option<Entry> {
        match self {
            Self::Top { entries, key } => entries.get(key).cloned(),
            Self::Section {
                entries,
                section,
                key,
            } => entries
                .get(section)
                .and_then(Entry::as_section)
                .and_then(|pairs| pairs.get(key))
                .cloned()
                .map(Entry::Scalar),
        }
    }

    /// Overwrite the slot. At the top level this replaces a section wholesale.
    pub fn set(self, value: String) {
        match self {
            Self::Top { entries, key } => {
                entries.insert(key, Entry::Scalar(value));
            }
            Self::Section {
                entries,
                section,
                key,
            } => {
                if let Some(Entry::Section(pairs)) = entries.get_mut(&section) {
                    pairs.insert(key, value);
                }
            }
        }
    }
}

/// Resolve `path` against `object`.
///
/// A section that is resolved into has its blank key removed first.
///
/// # Errors
///
/// Returns [`Error::InvalidPath`] for a path with no segments, and for a path
/// into an existing section whose key inside it is empty (`a.` under `[a]`).
/// Sections never hold a blank key.
pub fn resolve<'a>(object: &'a mut IniObject, path: &KeyPath) -> Result<Target<'a>> {
    let (first, rest) = path
        .segments()
        .split_first()
        .ok_or_else(|| Error::invalid_path("", "a key path needs at least one segment"))?;

    if rest.is_empty() {
        return Ok(Target::Top {
            entries: object.entries_mut(),
            key: first.clone(),
        });
    }

    if object.section(first).is_none() {
        return Ok(Target::Top {
            entries: object.entries_mut(),
            key: path.to_string(),
        });
    }

    let key = rest.join(".");
    if key.is_empty() {
        return Err(Error::invalid_path(
            path.to_string(),
            format!("empty key in section [{first}]"),
        ));
    }

    object.remove_blank_keys(first);
    Ok(Target::Section {
        entries: object.entries_mut(),
        section: first.clone(),
        key,
    })
}
