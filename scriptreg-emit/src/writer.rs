//! Atomic file writer.
//!
//! Write protocol: normalise line endings to LF, write to
//! `<path>.scriptreg.tmp`, then rename onto the final path (atomic on
//! POSIX). A failed rename removes the tmp file and propagates the error;
//! nothing half-written is left behind under the final name.

use std::path::{Path, PathBuf};

use crate::error::{io_err, EmitError};

/// Outcome of an individual file write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    /// File was written.
    Written { path: PathBuf },
    /// Dry-run mode: the file *would* have been written.
    WouldWrite { path: PathBuf },
}

impl WriteOutcome {
    pub fn path(&self) -> &Path {
        match self {
            WriteOutcome::Written { path } | WriteOutcome::WouldWrite { path } => path,
        }
    }
}

/// Atomically write `content` to `path`, creating parent directories.
pub fn write_file(path: &Path, content: &str, dry_run: bool) -> Result<WriteOutcome, EmitError> {
    let normalized = content.replace("\r\n", "\n");

    if dry_run {
        log::info!("[dry-run] would write: {}", path.display());
        return Ok(WriteOutcome::WouldWrite {
            path: path.to_path_buf(),
        });
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
    }

    let tmp = PathBuf::from(format!("{}.scriptreg.tmp", path.display()));
    std::fs::write(&tmp, normalized.as_bytes()).map_err(|e| io_err(&tmp, e))?;

    if let Err(e) = std::fs::rename(&tmp, path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(io_err(path, e));
    }

    log::info!("wrote: {}", path.display());
    Ok(WriteOutcome::Written {
        path: path.to_path_buf(),
    })
}

/// Mark a helper script executable (mode `0755`). No-op off unix.
#[cfg(unix)]
pub fn make_executable(path: &Path) -> Result<(), EmitError> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))
        .map_err(|e| io_err(path, e))
}

#[cfg(not(unix))]
pub fn make_executable(_path: &Path) -> Result<(), EmitError> {
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
