//! Output directory bootstrap and file lifecycle.
//!
//! A finished download is written to `<name>.part`, synced, then renamed onto
//! its final name, so a file at the final path always holds a complete body.
//! The existence of that file is the only completion record.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Temporary file suffix used before the rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Path for the temp file: appends `.part` to the final path (e.g. `a.pdf` → `a.pdf.part`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// True if `path` exists and is a regular file (symlinks followed).
pub fn is_existing_file(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_file()).unwrap_or(false)
}

/// Makes sure `dir` exists as a directory.
///
/// Creates it with a single non-recursive `mkdir` using `mode` (Unix only) when
/// it is missing. Returns `Ok(true)` if it was created, `Ok(false)` if it was
/// already there.
pub fn ensure_output_dir(dir: &Path, mode: u32) -> Result<bool> {
    if fs::metadata(dir).map(|m| m.is_dir()).unwrap_or(false) {
        return Ok(false);
    }
    let mut builder = fs::DirBuilder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(mode);
    }
    #[cfg(not(unix))]
    let _ = mode;
    builder
        .create(dir)
        .with_context(|| format!("failed to create output directory {}", dir.display()))?;
    Ok(true)
}

/// Writes `data` to `final_path` through a `.part` temp file and a rename.
///
/// On any failure the temp file is removed and nothing appears at `final_path`.
pub fn write_file_atomic(final_path: &Path, data: &[u8]) -> io::Result<()> {
    let tp = temp_path(final_path);
    let result = write_and_rename(&tp, final_path, data);
    if result.is_err() {
        let _ = fs::remove_file(&tp);
    }
    result
}

fn write_and_rename(temp_path: &Path, final_path: &Path, data: &[u8]) -> io::Result<()> {
    let mut file = File::options()
        .write(true)
        .create(true)
        .truncate(true)
        .open(temp_path)?;
    file.write_all(data)?;
    file.sync_all()?;
    drop(file);
    fs::rename(temp_path, final_path)
}
