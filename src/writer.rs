//! Reading, splicing and writing the target file.

use std::fs;
use std::io::{self, Write};
use std::ops::Range;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::MigrateError;

pub fn read_file(path: &Path) -> Result<String, MigrateError> {
    fs::read_to_string(path).map_err(|source| MigrateError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// `original` with the bytes in `span` replaced by `replacement`.
///
/// Everything outside `span` is copied byte for byte.
pub fn splice(original: &str, span: Range<usize>, replacement: &str) -> String {
    let mut out = String::with_capacity(original.len() - span.len() + replacement.len());
    out.push_str(&original[..span.start]);
    out.push_str(replacement);
    out.push_str(&original[span.end..]);
    out
}

/// Overwrite `path` with `contents`.
///
/// With `atomic` set the contents go to a temporary file in the same
/// directory, which is then renamed over the target; readers see either the
/// old file or the new one. A symlinked target is resolved first so the
/// link itself stays in place. Otherwise the target is truncated and
/// rewritten.
pub fn write_file(path: &Path, contents: &str, atomic: bool) -> Result<(), MigrateError> {
    let write_err = |source| MigrateError::Write {
        path: path.to_path_buf(),
        source,
    };

    if !atomic {
        return fs::write(path, contents).map_err(write_err);
    }

    let resolved = match fs::canonicalize(path) {
        Ok(resolved) => resolved,
        Err(e) if e.kind() == io::ErrorKind::NotFound => path.to_path_buf(),
        Err(e) => return Err(write_err(e)),
    };
    let path = resolved.as_path();

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(contents.as_bytes()).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;

    if let Ok(metadata) = fs::metadata(path) {
        fs::set_permissions(tmp.path(), metadata.permissions()).map_err(write_err)?;
    }

    tmp.persist(path).map_err(|e| write_err(e.error))?;
    Ok(())
}
