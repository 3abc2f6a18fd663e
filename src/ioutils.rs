use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::{Error, Result};

fn read_error(path: &Path, e: std::io::Error) -> Error {
    Error::ReadError { path: path.display().to_string(), e }
}

fn write_error(path: &Path, e: std::io::Error) -> Error {
    Error::WriteError { path: path.display().to_string(), e }
}

/// Directory a sibling temp file for `path` should live in.
fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

pub fn create_dir_all<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    std::fs::create_dir_all(dest_path).map_err(|e| write_error(dest_path, e))
}

/// Copies the template verbatim to `dest_path`, creating parent directories.
///
/// The copy gets the template's permissions.
pub fn copy_file<P: AsRef<Path>, Q: AsRef<Path>>(source_path: P, dest_path: Q) -> Result<()> {
    let source_path = source_path.as_ref();
    let dest_path = dest_path.as_ref();

    let content = std::fs::read(source_path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => Error::TemplateNotFound {
            template_path: source_path.display().to_string(),
        },
        _ => read_error(source_path, e),
    })?;
    let permissions =
        std::fs::metadata(source_path).map_err(|e| read_error(source_path, e))?.permissions();

    create_dir_all(parent_dir(dest_path))?;
    std::fs::write(dest_path, content).map_err(|e| write_error(dest_path, e))?;
    std::fs::set_permissions(dest_path, permissions).map_err(|e| write_error(dest_path, e))
}

/// Reads the raw bytes of a file.
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    let path = path.as_ref();
    std::fs::read(path).map_err(|e| read_error(path, e))
}

/// Replaces the whole content of `dest_path`.
///
/// The content goes to a temp file next to the destination which is then
/// renamed over it, so the destination either keeps its old content or gets
/// the complete new one. An existing destination keeps its permissions, and a
/// symlinked destination is written through to its target.
pub fn write_file<P: AsRef<Path>>(content: &[u8], dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    let target: PathBuf =
        std::fs::canonicalize(dest_path).unwrap_or_else(|_| dest_path.to_path_buf());

    let mut tmp =
        NamedTempFile::new_in(parent_dir(&target)).map_err(|e| write_error(dest_path, e))?;
    tmp.write_all(content).map_err(|e| write_error(dest_path, e))?;
    tmp.flush().map_err(|e| write_error(dest_path, e))?;

    if let Ok(metadata) = std::fs::metadata(&target) {
        tmp.as_file()
            .set_permissions(metadata.permissions())
            .map_err(|e| write_error(dest_path, e))?;
    }

    tmp.persist(&target).map_err(|e| write_error(dest_path, e.error))?;
    Ok(())
}
