//! JSON persistence for the options record.
//!
//! Loading never fails: an absent file yields compiled-in defaults (written
//! back so the next session finds a file to edit), a malformed one yields
//! defaults without touching the broken file. Saving reports errors so the
//! caller can log them, but no caller treats them as fatal.

use std::{fs, io, path::Path};

use tracing::{debug, warn};

use crate::{error::StoreError, options::Options};

/// Loads options from `path`, falling back to defaults on any failure.
pub fn load_options(path: &Path) -> Options {
    match fs::read_to_string(path) {
        Ok(text) => match serde_json::from_str::<Options>(&text) {
            Ok(options) => options.normalized(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "options file malformed, using defaults");
                Options::default()
            }
        },
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no options file, writing defaults");
            let options = Options::default();
            if let Err(e) = save_options(&options, path, true) {
                warn!(path = %path.display(), error = %e, "could not write default options");
            }
            options
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "options file unreadable, using defaults");
            Options::default()
        }
    }
}

/// Writes `options` to `path` as pretty-printed JSON.
///
/// Refuses to replace an existing file unless `overwrite` is set. Parent
/// directories are created as needed.
pub fn save_options(options: &Options, path: &Path, overwrite: bool) -> Result<(), StoreError> {
    if !overwrite && path.exists() {
        return Err(StoreError::AlreadyExists {
            path: path.display().to_string(),
        });
    }
    let json =
        serde_json::to_string_pretty(options).map_err(|e| StoreError::Encode(e.to_string()))?;
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| StoreError::Io(e.to_string()))?;
    }
    fs::write(path, json).map_err(|e| StoreError::Io(e.to_string()))
}
