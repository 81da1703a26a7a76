//! File-level editing
//!
//! Reads are full reads and writes are full overwrites. There is no locking
//! and no temp-file rename: concurrent edits of the same destination race and
//! the last writer wins.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::codec::RenderOptions;
use crate::edit::{Setting, apply_edits};
use crate::error::{Error, Result};
use crate::object::IniObject;

/// Read and parse an INI file.
pub fn read_object(path: impl AsRef<Path>) -> Result<IniObject> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    debug!(path = %path.display(), bytes = source.len(), "read ini file");
    IniObject::parse(&source)
}

/// Render `object` and write it to `path`, creating or replacing the file.
///
/// Rendering happens before the file is opened, so a render failure leaves
/// any existing file untouched.
pub fn write_object(
    path: impl AsRef<Path>,
    object: &IniObject,
    options: &RenderOptions,
) -> Result<()> {
    let path = path.as_ref();
    let text = object.render_with(options)?;
    fs::write(path, &text).map_err(|e| Error::io(path, e))?;
    debug!(path = %path.display(), bytes = text.len(), "wrote ini file");
    Ok(())
}

/// Apply `settings` to the INI file at `from` and write the result to `to`.
///
/// `from` and `to` may be the same file. Nothing is written unless reading,
/// parsing, and every edit succeed.
pub fn edit_file(from: impl AsRef<Path>, to: impl AsRef<Path>, settings: &[Setting]) -> Result<()> {
    edit_file_with(from, to, settings, &RenderOptions::default())
}

/// [`edit_file`] with explicit render options.
pub fn edit_file_with(
    from: impl AsRef<Path>,
    to: impl AsRef<Path>,
    settings: &[Setting],
    options: &RenderOptions,
) -> Result<()> {
    let mut object = read_object(from)?;
    apply_edits(&mut object, settings)?;
    write_object(to, &object, options)
}
