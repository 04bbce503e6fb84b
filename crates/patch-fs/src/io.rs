//! Atomic I/O operations with file locking

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tempfile::NamedTempFile;

use crate::{Checksum, Error, NormalizedPath, Result};

/// Write content atomically to a file with locking.
///
/// Uses write-to-temp-then-rename so a failed write never leaves the target
/// truncated. An existing target is resolved through symlinks first and keeps
/// its permissions. The temp file is removed on every failure path.
pub fn write_atomic(path: &NormalizedPath, content: &[u8]) -> Result<()> {
    let target = resolve_target(&path.to_native())?;
    let permissions = match fs::metadata(&target) {
        Ok(meta) => Some(meta.permissions()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
        Err(e) => return Err(Error::io(&target, e)),
    };

    // Same directory as the target so the rename stays on one filesystem
    let dir = match target.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
            parent.to_path_buf()
        }
        None => PathBuf::from("."),
    };

    let mut temp = NamedTempFile::new_in(&dir).map_err(|e| Error::io(&dir, e))?;

    temp.as_file()
        .lock_exclusive()
        .map_err(|_| Error::LockFailed {
            path: target.clone(),
        })?;

    temp.write_all(content)
        .map_err(|e| Error::io(temp.path(), e))?;
    if let Some(permissions) = permissions {
        temp.as_file()
            .set_permissions(permissions)
            .map_err(|e| Error::io(temp.path(), e))?;
    }
    temp.as_file()
        .sync_all()
        .map_err(|e| Error::io(temp.path(), e))?;

    temp.as_file().unlock().map_err(|_| Error::LockFailed {
        path: target.clone(),
    })?;

    temp.persist(&target)
        .map_err(|e| Error::io(&target, e.error))?;

    tracing::debug!(
        path = %path,
        target = %target.display(),
        bytes = content.len(),
        "wrote file atomically"
    );
    Ok(())
}

/// Follow symlinks on an existing target so the link itself survives.
fn resolve_target(native: &Path) -> Result<PathBuf> {
    match fs::symlink_metadata(native) {
        Ok(meta) if meta.file_type().is_symlink() => {
            fs::canonicalize(native).map_err(|e| Error::io(native, e))
        }
        _ => Ok(native.to_path_buf()),
    }
}

/// Read a file as UTF-8 text.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    fs::read_to_string(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// Write text content to a file atomically.
pub fn write_text(path: &NormalizedPath, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}

/// Write `content` only if the file still hashes to `expected`.
///
/// Fails with [`Error::ModifiedSinceRead`] when another process changed the
/// file after it was read.
pub fn write_if_unchanged(
    path: &NormalizedPath,
    expected: &Checksum,
    content: &str,
) -> Result<()> {
    let native_path = path.to_native();
    let current = fs::read(&native_path).map_err(|e| Error::io(&native_path, e))?;
    let actual = Checksum::of_bytes(&current);
    if &actual != expected {
        return Err(Error::ModifiedSinceRead {
            path: native_path,
            expected: expected.to_string(),
            actual: actual.to_string(),
        });
    }
    write_text(path, content)
}

/// A text file read once, remembering the checksum of what was read.
#[derive(Debug, Clone)]
pub struct TextFile {
    path: NormalizedPath,
    content: String,
    checksum: Checksum,
}

impl TextFile {
    /// Read and UTF-8 decode the file at `path`.
    pub fn read(path: impl Into<NormalizedPath>) -> Result<Self> {
        let path = path.into();
        let content = read_text(&path)?;
        let checksum = Checksum::of_str(&content);
        tracing::debug!(path = %path, %checksum, "read target file");
        Ok(Self {
            path,
            content,
            checksum,
        })
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn checksum(&self) -> &Checksum {
        &self.checksum
    }

    /// Replace the file's content, refusing if it changed on disk since
    /// [`TextFile::read`].
    pub fn write_back(&self, content: &str) -> Result<()> {
        write_if_unchanged(&self.path, &self.checksum, content)
    }
}
