//! Capability-based file access shared by file-backed adapters.

use std::ffi::OsStr;
use std::io;
use std::path::Path;

use cap_std::{ambient_authority, fs::Dir};

/// Open the directory containing `path` and return it with the file name.
///
/// Adapters then touch only that one entry through the returned [`Dir`].
pub(crate) fn open_parent(path: &Path) -> io::Result<(Dir, &OsStr)> {
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "path must name a file"))?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(|error| {
        io::Error::new(
            error.kind(),
            format!("open directory '{}': {error}", parent.display()),
        )
    })?;
    Ok((dir, file_name))
}
