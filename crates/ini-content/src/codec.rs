//! INI text parsing and rendering
//!
//! The dialect is deliberately permissive, mirroring common INI readers:
//!
//! - Blank lines and lines starting with `;` or `#` are skipped.
//! - `[name]` opens a section; repeated headers merge into one section.
//!   `[a.b]` is a section literally named `a.b`.
//! - `key=value` splits on the first `=`. A line holding only `=value`
//!   produces an empty-string key. A line without `=` is a bare key with
//!   the value `true`.
//! - Double-quoted keys and values are JSON string literals, single-quoted
//!   values are taken verbatim, and unquoted values stop at `;` or `#`.
//! - A leading byte-order mark is ignored.

use crate::error::{Error, Result};
use crate::object::{Entry, IniObject, Section};

const FORMAT: &str = "INI";

/// Options for rendering a configuration object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Write `key = value` instead of `key=value`.
    pub whitespace: bool,
}

impl RenderOptions {
    fn separator(&self) -> &'static str {
        if self.whitespace { " = " } else { "=" }
    }
}

/// Parse INI text into a configuration object.
pub fn parse(source: &str) -> Result<IniObject> {
    let mut object = IniObject::new();
    let mut current: Option<String> = None;
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);

    for (index, raw) in source.lines().enumerate() {
        let line_no = index + 1;
        let line = raw.trim();

        if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
            continue;
        }

        if let Some(header) = line.strip_prefix('[') {
            let name = parse_header(header, line_no)?;
            match object.entry(&name) {
                Some(Entry::Scalar(_)) => {
                    return Err(Error::parse(
                        FORMAT,
                        line_no,
                        format!("section [{name}] conflicts with a top-level key"),
                    ));
                }
                Some(Entry::Section(_)) => {}
                None => {
                    object.insert(name.clone(), Section::new());
                }
            }
            current = Some(name);
            continue;
        }

        let (key, value) = parse_pair(line, line_no)?;
        match &current {
            Some(name) => {
                if let Some(section) = object.section_mut(name) {
                    section.insert(key, value);
                }
            }
            None => {
                object.insert(key, value);
            }
        }
    }

    Ok(object)
}

/// Render a configuration object as INI text.
///
/// Top-level scalars come first, then every section under its header.
pub fn render(object: &IniObject, options: &RenderOptions) -> Result<String> {
    let mut out = String::new();

    for (key, entry) in object.iter() {
        if let Entry::Scalar(value) = entry {
            push_pair(&mut out, key, value, options)?;
        }
    }

    for (name, entry) in object.iter() {
        let Entry::Section(section) = entry else {
            continue;
        };
        check_section_name(name)?;
        if !out.is_empty() {
            out.push('\n');
        }
        out.push('[');
        out.push_str(name);
        out.push_str("]\n");
        for (key, value) in section {
            push_pair(&mut out, key, value, options)?;
        }
    }

    Ok(out)
}

fn parse_header(header: &str, line_no: usize) -> Result<String> {
    let Some((name, trailing)) = header.split_once(']') else {
        return Err(Error::parse(FORMAT, line_no, "unterminated section header"));
    };

    let trailing = trailing.trim_start();
    if !trailing.is_empty() && !trailing.starts_with(';') && !trailing.starts_with('#') {
        return Err(Error::parse(
            FORMAT,
            line_no,
            format!("unexpected text after section header: {trailing}"),
        ));
    }

    let name = name.trim();
    if name.is_empty() {
        return Err(Error::parse(FORMAT, line_no, "empty section name"));
    }
    if name.contains(['\n', '\r']) {
        return Err(Error::parse(
            FORMAT,
            line_no,
            format!("line break in section name {name:?}"),
        ));
    }

    Ok(name.to_string())
}

fn parse_pair(line: &str, line_no: usize) -> Result<(String, String)> {
    if line.starts_with('"') {
        let (key, rest) = split_quoted(line, line_no)?;
        let rest = rest.trim_start();
        if rest.is_empty() {
            return Ok((key, "true".to_string()));
        }
        let Some(value) = rest.strip_prefix('=') else {
            return Err(Error::parse(FORMAT, line_no, "expected '=' after quoted key"));
        };
        return Ok((key, parse_value(value, line_no)?));
    }

    match line.split_once('=') {
        Some((key, value)) => Ok((key.trim().to_string(), parse_value(value, line_no)?)),
        None => Ok((line.to_string(), "true".to_string())),
    }
}

fn parse_value(raw: &str, line_no: usize) -> Result<String> {
    let raw = raw.trim();

    let (value, rest) = if raw.starts_with('"') {
        split_quoted(raw, line_no)?
    } else if let Some(inner) = raw.strip_prefix('\'') {
        match inner.split_once('\'') {
            Some((value, rest)) => (value.to_string(), rest),
            None => return Ok(strip_comment(raw).to_string()),
        }
    } else {
        return Ok(strip_comment(raw).to_string());
    };

    let rest = rest.trim_start();
    if !rest.is_empty() && !rest.starts_with(';') && !rest.starts_with('#') {
        return Err(Error::parse(
            FORMAT,
            line_no,
            format!("unexpected text after quoted value: {rest}"),
        ));
    }
    Ok(value)
}

fn strip_comment(raw: &str) -> &str {
    match raw.find([';', '#']) {
        Some(pos) => raw[..pos].trim_end(),
        None => raw,
    }
}

/// Split a leading JSON string literal off `s`, returning the decoded string
/// and the remainder after the closing quote.
fn split_quoted(s: &str, line_no: usize) -> Result<(String, &str)> {
    let mut escaped = false;
    let mut end = None;

    for (pos, ch) in s.char_indices().skip(1) {
        match ch {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            '"' => {
                end = Some(pos);
                break;
            }
            _ => {}
        }
    }

    let Some(end) = end else {
        return Err(Error::parse(FORMAT, line_no, "unterminated quoted string"));
    };

    let decoded = serde_json::from_str::<String>(&s[..=end])
        .map_err(|e| Error::parse(FORMAT, line_no, e.to_string()))?;
    Ok((decoded, &s[end + 1..]))
}

fn push_pair(out: &mut String, key: &str, value: &str, options: &RenderOptions) -> Result<()> {
    out.push_str(&escape_key(key)?);
    out.push_str(options.separator());
    out.push_str(&escape_value(value)?);
    out.push('\n');
    Ok(())
}

fn check_section_name(name: &str) -> Result<()> {
    if name.is_empty() || name.trim() != name || name.contains([']', '\n', '\r']) {
        return Err(Error::render(format!("invalid section name {name:?}")));
    }
    Ok(())
}

fn escape_key(key: &str) -> Result<String> {
    let needs_quotes = key.trim() != key
        || key.contains(['=', '\n', '\r'])
        || key.starts_with(['[', ';', '#', '"', '\'']);
    quote_if(key, needs_quotes)
}

fn escape_value(value: &str) -> Result<String> {
    let needs_quotes = value.trim() != value
        || value.contains([';', '#', '\n', '\r'])
        || value.starts_with(['"', '\'']);
    quote_if(value, needs_quotes)
}

fn quote_if(text: &str, needs_quotes: bool) -> Result<String> {
    if needs_quotes {
        Ok(serde_json::to_string(text)?)
    } else {
        Ok(text.to_string())
    }
}
