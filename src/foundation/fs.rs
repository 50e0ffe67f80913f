use std::io::Write as _;
use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::{StudioError, StudioResult};

/// Create `dir` and any missing parents. Succeeds when it already exists.
pub fn ensure_dir(dir: &Path) -> StudioResult<()> {
    if dir.as_os_str().is_empty() {
        return Ok(());
    }
    std::fs::create_dir_all(dir).map_err(|source| StudioError::DirectoryCreationFailed {
        path: dir.to_path_buf(),
        source,
    })?;
    if !dir.is_dir() {
        return Err(StudioError::DirectoryCreationFailed {
            path: dir.to_path_buf(),
            source: std::io::Error::other("path exists but is not a directory"),
        });
    }
    Ok(())
}

/// Ensure the parent directory of `path` exists.
pub fn ensure_parent_dir(path: &Path) -> StudioResult<()> {
    match path.parent() {
        Some(parent) => ensure_dir(parent),
        None => Ok(()),
    }
}

/// Write `contents` to `path` in one piece.
///
/// The bytes land in a uniquely named temp file in the same directory, which is then renamed
/// over `path`. Readers see either the previous file or the complete new one; concurrent writers
/// are last-writer-wins.
pub fn write_whole(path: &Path, contents: impl AsRef<[u8]>) -> StudioResult<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("create temp file in '{}'", dir.display()))?;
    tmp.write_all(contents.as_ref())
        .with_context(|| format!("write '{}'", tmp.path().display()))?;
    tmp.persist(path)
        .with_context(|| format!("move '{}' into place", path.display()))?;
    Ok(())
}

/// Read the whole file at `path` as raw bytes.
///
/// Only I/O failures are reported here; decoding is left to the caller.
pub fn read_whole(path: &Path) -> StudioResult<Vec<u8>> {
    std::fs::read(path)
        .with_context(|| format!("read '{}'", path.display()))
        .map_err(StudioError::from)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/fs.rs"]
mod tests;
