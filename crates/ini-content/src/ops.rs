//! Text-in, text-out operations
//!
//! Each call parses its input afresh; the caller's text is never modified.

use crate::edit::{EditBatch, Setting, apply_edits};
use crate::error::Result;
use crate::object::{Entry, IniObject};
use crate::path::KeyPath;

/// Read the value at `key` from INI text.
///
/// Returns `None` when nothing is stored there. A single-segment key naming a
/// section yields the whole section.
///
/// # Examples
///
/// ```
/// use ini_content::{Entry, get_item};
///
/// let value = get_item("[db]\nhost=localhost\n", "db.host").unwrap();
/// assert_eq!(value, Some(Entry::from("localhost")));
/// ```
pub fn get_item(ini: &str, key: &str) -> Result<Option<Entry>> {
    let mut object = IniObject::parse(ini)?;
    object.get(&KeyPath::parse(key))
}

/// Write `value` at `key` and return the re-rendered INI text.
///
/// # Examples
///
/// ```
/// use ini_content::set_item;
///
/// let ini = set_item("[db]\nhost=localhost\n", "db.host", "remote").unwrap();
/// assert_eq!(ini, "[db]\nhost=remote\n");
/// ```
pub fn set_item(ini: &str, key: &str, value: &str) -> Result<String> {
    let mut object = IniObject::parse(ini)?;
    object.set(&KeyPath::parse(key), value)?;
    object.render()
}

/// Apply a batch of settings to INI text and return the re-rendered text.
pub fn edit_string(ini: &str, settings: &[Setting]) -> Result<String> {
    let mut object = IniObject::parse(ini)?;
    apply_edits(&mut object, settings)?;
    object.render()
}

/// Like [`edit_string`], with the batch given as JSON text.
///
/// `settings` is a JSON array of `{"path": [...], "value": "..."}` objects.
pub fn set_batch(ini: &str, settings: &str) -> Result<String> {
    let batch: EditBatch = serde_json::from_str(settings)?;
    edit_string(ini, &batch)
}
