//! Command implementations for ini-cli
//!
//! Each command returns the text to print; `main` owns stdout.

use std::fs;
use std::path::Path;

use ini_content::{
    Entry, IniObject, KeyPath, RenderOptions, Setting, edit_file_with, from_json_text_with,
    make_setting, read_object, to_json_text, to_json_text_pretty,
};

use crate::error::{CliError, Result};

/// Look up `key` in `file`. Sections print as `key=value` lines.
pub fn run_get(file: &Path, key: &str, options: &RenderOptions) -> Result<String> {
    let mut object = read_object(file)?;
    match object.get(&KeyPath::parse(key))? {
        Some(Entry::Scalar(value)) => Ok(format!("{value}\n")),
        Some(Entry::Section(section)) => {
            let mut pairs = IniObject::new();
            for (name, value) in section {
                pairs.insert(name, value);
            }
            Ok(pairs.render_with(options)?)
        }
        None => Err(CliError::user(format!("Key not found: {key}"))),
    }
}

/// Set a single value, writing to `output` or back to `file`.
pub fn run_set(
    file: &Path,
    key: &str,
    value: &str,
    output: Option<&Path>,
    options: &RenderOptions,
) -> Result<()> {
    let settings = [make_setting(key, value)];
    edit_file_with(file, output.unwrap_or(file), &settings, options)?;
    Ok(())
}

/// Apply `key=value` assignments in order.
pub fn run_edit(
    file: &Path,
    assignments: &[String],
    output: Option<&Path>,
    options: &RenderOptions,
) -> Result<()> {
    let settings = assignments
        .iter()
        .map(|assignment| parse_assignment(assignment))
        .collect::<Result<Vec<_>>>()?;
    edit_file_with(file, output.unwrap_or(file), &settings, options)?;
    Ok(())
}

/// Render `file` as a JSON object.
pub fn run_to_json(file: &Path, pretty: bool) -> Result<String> {
    let ini = read_text(file)?;
    let json = if pretty {
        to_json_text_pretty(&ini)?
    } else {
        to_json_text(&ini)?
    };
    Ok(json + "\n")
}

/// Render a JSON object file as INI.
pub fn run_from_json(file: &Path, options: &RenderOptions) -> Result<String> {
    let json = read_text(file)?;
    Ok(from_json_text_with(&json, options)?)
}

fn read_text(file: &Path) -> Result<String> {
    Ok(fs::read_to_string(file).map_err(|e| ini_content::Error::io(file, e))?)
}

fn parse_assignment(assignment: &str) -> Result<Setting> {
    let Some((key, value)) = assignment.split_once('=') else {
        return Err(CliError::user(format!(
            "Invalid assignment '{assignment}': expected KEY=VALUE"
        )));
    };
    Ok(make_setting(key, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_assignment_splits_on_first_equals() {
        let setting = parse_assignment("db.url=a=b").unwrap();
        assert_eq!(setting.path, KeyPath::parse("db.url"));
        assert_eq!(setting.value, "a=b");
    }

    #[test]
    fn test_parse_assignment_requires_equals() {
        assert!(matches!(
            parse_assignment("db.host"),
            Err(CliError::User { .. })
        ));
    }

    #[test]
    fn test_run_get_section_lists_pairs() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("app.ini");
        fs::write(&file, "[db]\nhost=h\nport=1\n").unwrap();

        let out = run_get(&file, "db", &RenderOptions::default()).unwrap();
        assert_eq!(out, "host=h\nport=1\n");
    }

    #[test]
    fn test_run_to_json_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let result = run_to_json(&dir.path().join("missing.ini"), false);
        assert!(matches!(
            result,
            Err(CliError::Content(ini_content::Error::Io { .. }))
        ));
    }

    #[test]
    fn test_run_from_json_honors_whitespace() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("app.json");
        fs::write(&file, r#"{"db":{"host":"h"}}"#).unwrap();

        let out = run_from_json(&file, &RenderOptions { whitespace: true }).unwrap();
        assert_eq!(out, "[db]\nhost = h\n");
    }

    #[test]
    fn test_run_get_missing_key() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("app.ini");
        fs::write(&file, "a=1\n").unwrap();

        let result = run_get(&file, "b", &RenderOptions::default());
        assert!(matches!(result, Err(CliError::User { .. })));
    }
}
