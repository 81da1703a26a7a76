//! Dotted-path reading and editing of INI configuration text
//!
//! Parses INI into an [`IniObject`], resolves dotted keys like `db.host`
//! against it, applies single or batched edits, and renders the result back
//! to INI text or to a JSON object.

pub mod codec;
pub mod convert;
pub mod edit;
pub mod error;
pub mod io;
pub mod object;
pub mod ops;
pub mod path;

pub use codec::RenderOptions;
pub use convert::{from_json_text, from_json_text_with, to_json_text, to_json_text_pretty};
pub use edit::{EditBatch, Setting, apply_edits, make_setting, make_settings};
pub use error::{Error, Result};
pub use io::{edit_file, edit_file_with, read_object, write_object};
pub use object::{Entry, IniObject, Section};
pub use ops::{edit_string, get_item, set_batch, set_item};
pub use path::{KeyPath, Target, parse_key, resolve};
