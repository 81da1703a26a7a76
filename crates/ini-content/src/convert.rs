//! Conversion between INI text and its JSON object form

use crate::codec::RenderOptions;
use crate::error::Result;
use crate::object::IniObject;

/// Parse INI text and encode it as a compact JSON object.
///
/// # Examples
///
/// ```
/// use ini_content::to_json_text;
///
/// let json = to_json_text("name=demo\n[db]\nhost=localhost\n").unwrap();
/// assert_eq!(json, r#"{"name":"demo","db":{"host":"localhost"}}"#);
/// ```
pub fn to_json_text(ini: &str) -> Result<String> {
    let object = IniObject::parse(ini)?;
    Ok(serde_json::to_string(&object)?)
}

/// Same as [`to_json_text`] but indented.
pub fn to_json_text_pretty(ini: &str) -> Result<String> {
    let object = IniObject::parse(ini)?;
    Ok(serde_json::to_string_pretty(&object)?)
}

/// Decode a JSON object and render it as INI text.
///
/// Values must be strings or objects of strings; anything else is rejected
/// as malformed.
pub fn from_json_text(json: &str) -> Result<String> {
    from_json_text_with(json, &RenderOptions::default())
}

/// [`from_json_text`] with explicit render options.
pub fn from_json_text_with(json: &str, options: &RenderOptions) -> Result<String> {
    let object: IniObject = serde_json::from_str(json)?;
    object.render_with(options)
}
