//! In-memory configuration object
//!
//! An INI document parses into an [`IniObject`]: an insertion-ordered map from
//! top-level names to [`Entry`] values. An entry is either a scalar string or
//! a section holding string values. Only one level of sectioning exists.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::codec::{self, RenderOptions};
use crate::error::Result;
use crate::path::{KeyPath, resolve};

/// Key/value pairs under one `[section]` header.
pub type Section = IndexMap<String, String>;

/// A top-level value in a configuration object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Entry {
    /// A `key=value` line outside of any section.
    Scalar(String),
    /// A `[section]` and the pairs below it.
    Section(Section),
}

impl Entry {
    /// Returns the string value if this is a scalar.
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Self::Scalar(value) => Some(value),
            Self::Section(_) => None,
        }
    }

    /// Returns the section map if this is a section.
    pub fn as_section(&self) -> Option<&Section> {
        match self {
            Self::Section(section) => Some(section),
            Self::Scalar(_) => None,
        }
    }

    pub fn is_section(&self) -> bool {
        matches!(self, Self::Section(_))
    }
}

impl From<String> for Entry {
    fn from(value: String) -> Self {
        Self::Scalar(value)
    }
}

impl From<&str> for Entry {
    fn from(value: &str) -> Self {
        Self::Scalar(value.to_string())
    }
}

impl From<Section> for Entry {
    fn from(section: Section) -> Self {
        Self::Section(section)
    }
}

/// A parsed INI document.
///
/// Serializes to JSON as a plain object: scalars become strings and sections
/// become objects of strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IniObject {
    entries: IndexMap<String, Entry>,
}

impl IniObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse INI text.
    ///
    /// # Examples
    ///
    /// ```
    /// use ini_content::IniObject;
    ///
    /// let object = IniObject::parse("[db]\nhost=localhost\n").unwrap();
    /// let db = object.section("db").unwrap();
    /// assert_eq!(db.get("host").map(String::as_str), Some("localhost"));
    /// ```
    pub fn parse(source: &str) -> Result<Self> {
        codec::parse(source)
    }

    /// Render back to INI text with default options.
    pub fn render(&self) -> Result<String> {
        codec::render(self, &RenderOptions::default())
    }

    /// Render back to INI text.
    pub fn render_with(&self, options: &RenderOptions) -> Result<String> {
        codec::render(self, options)
    }

    /// Look up the value addressed by `path`.
    ///
    /// Takes `&mut self` because touching a section strips its blank key
    /// (see [`resolve`]).
    pub fn get(&mut self, path: &KeyPath) -> Result<Option<Entry>> {
        Ok(resolve(self, path)?.get())
    }

    /// Assign `value` to the slot addressed by `path`.
    ///
    /// Never creates sections: a dotted path whose first segment is not an
    /// existing section is stored as one literal top-level key.
    pub fn set(&mut self, path: &KeyPath, value: impl Into<String>) -> Result<()> {
        resolve(self, path)?.set(value.into());
        Ok(())
    }

    /// Top-level entry by name.
    pub fn entry(&self, name: &str) -> Option<&Entry> {
        self.entries.get(name)
    }

    /// Section by name, if `name` exists and is a section.
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.entries.get(name).and_then(Entry::as_section)
    }

    pub fn section_mut(&mut self, name: &str) -> Option<&mut Section> {
        match self.entries.get_mut(name) {
            Some(Entry::Section(section)) => Some(section),
            _ => None,
        }
    }

    /// Insert a top-level entry, returning the one it replaced.
    pub fn insert(&mut self, name: impl Into<String>, entry: impl Into<Entry>) -> Option<Entry> {
        self.entries.insert(name.into(), entry.into())
    }

    /// Drop the empty-string key from section `name`.
    ///
    /// Permissive parsing turns a line like `=value` into a blank key; such
    /// entries are never addressable and are removed before access.
    pub fn remove_blank_keys(&mut self, name: &str) {
        if let Some(section) = self.section_mut(name) {
            section.shift_remove("");
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Entry)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn entries_mut(&mut self) -> &mut IndexMap<String, Entry> {
        &mut self.entries
    }
}
