//! Settings and batch edits

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::object::IniObject;
use crate::path::KeyPath;

/// One assignment: write `value` at `path`.
///
/// Serializes as `{"path": ["db", "host"], "value": "localhost"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Setting {
    pub path: KeyPath,
    pub value: String,
}

impl Setting {
    pub fn new(path: impl Into<KeyPath>, value: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            value: value.into(),
        }
    }
}

/// Settings applied in order against one object.
pub type EditBatch = Vec<Setting>;

/// Build a single setting.
pub fn make_setting(path: impl Into<KeyPath>, value: impl Into<String>) -> Setting {
    Setting::new(path, value)
}

/// Build an edit batch from `(path, value)` pairs, keeping their order.
///
/// # Examples
///
/// ```
/// use ini_content::{KeyPath, make_settings};
///
/// let batch = make_settings([("db.host", "remote"), ("db.port", "5433")]);
/// assert_eq!(batch.len(), 2);
/// assert_eq!(batch[0].path, KeyPath::parse("db.host"));
/// ```
pub fn make_settings<I, P, V>(pairs: I) -> EditBatch
where
    I: IntoIterator<Item = (P, V)>,
    P: Into<KeyPath>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(path, value)| Setting::new(path, value))
        .collect()
}

/// Apply `settings` to `object` in order. Later settings for the same path
/// override earlier ones.
///
/// Edits land on a copy that replaces `object` only once every setting has
/// resolved, so a rejected batch leaves `object` untouched.
///
/// # Errors
///
/// Returns [`Error::InvalidPath`](crate::Error::InvalidPath) for an empty
/// path or an empty key inside an existing section.
pub fn apply_edits(object: &mut IniObject, settings: &[Setting]) -> Result<()> {
    debug!(snapshot = %snapshot(object), "previous ini object");

    let mut edited = object.clone();
    for setting in settings {
        edited.set(&setting.path, setting.value.as_str())?;
    }
    *object = edited;

    debug!(snapshot = %snapshot(object), count = settings.len(), "edited ini object");
    Ok(())
}

/// JSON form of `object` for diagnostics.
fn snapshot(object: &IniObject) -> String {
    serde_json::to_string(object).unwrap_or_else(|e| format!("<unserializable: {e}>"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::object::Entry;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_make_setting_from_segments() {
        let setting = make_setting(["db", "host"], "remote");
        assert_eq!(setting.path, KeyPath::parse("db.host"));
        assert_eq!(setting.value, "remote");
    }

    #[test]
    fn test_setting_json_shape() {
        let setting = make_setting("db.host", "remote");
        let json = serde_json::to_string(&setting).unwrap();
        assert_eq!(json, r#"{"path":["db","host"],"value":"remote"}"#);
    }

    #[test]
    fn test_apply_edits_in_order() {
        let mut object = IniObject::parse("[db]\nhost=a\n").unwrap();
        let batch = make_settings([("db.host", "b"), ("db.host", "c")]);

        apply_edits(&mut object, &batch).unwrap();

        let db = object.section("db").unwrap();
        assert_eq!(db.get("host").map(String::as_str), Some("c"));
    }

    #[test]
    fn test_snapshot_is_json() {
        let object = IniObject::parse("name=demo\n[db]\nhost=h\n").unwrap();
        assert_eq!(snapshot(&object), r#"{"name":"demo","db":{"host":"h"}}"#);
    }

    #[test]
    fn test_apply_edits_rolls_back_on_empty_section_key() {
        let mut object = IniObject::parse("[a]\n=stray\nk=1\n").unwrap();
        let before = object.clone();
        let batch = make_settings([("a.k", "2"), ("top", "x"), ("a.", "y")]);

        let result = apply_edits(&mut object, &batch);

        assert!(matches!(result, Err(Error::InvalidPath { .. })));
        assert_eq!(object, before);
    }

    #[test]
    fn test_apply_edits_rejects_empty_path_without_writing() {
        let mut object = IniObject::parse("a=1\n").unwrap();
        let batch = vec![
            make_setting("a", "2"),
            make_setting(KeyPath::default(), "x"),
        ];

        let result = apply_edits(&mut object, &batch);

        assert!(matches!(result, Err(Error::InvalidPath { .. })));
        assert_eq!(object.entry("a"), Some(&Entry::from("1")));
    }

    #[test]
    fn test_apply_empty_batch_is_noop() {
        let mut object = IniObject::parse("a=1\n").unwrap();
        let before = object.clone();
        apply_edits(&mut object, &[]).unwrap();
        assert_eq!(object, before);
    }
}
