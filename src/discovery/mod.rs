//! Enumerates the immediate children of the target directory.
use crate::errors::{target_error, Result};
use log::{debug, trace};
use std::ffi::OsString;
use std::path::Path;
use walkdir::WalkDir;

/// Lists the names of the entries directly inside `target`.
///
/// The walk is limited to depth 1, so neither `target` itself nor `.`/`..`
/// appear, and nothing is recursed into. Names come back sorted by file name,
/// which gives a stable enumeration order for a fixed directory state. Names
/// are returned as the OS reports them, without UTF-8 conversion.
///
/// # Errors
/// Returns a target error if the directory cannot be read.
///
/// # Examples
///
/// ```
/// use dirls::discovery::enumerate;
/// use std::ffi::OsString;
/// use std::fs;
/// use tempfile::tempdir;
///
/// let temp = tempdir().unwrap();
/// fs::write(temp.path().join("b.txt"), "").unwrap();
/// fs::write(temp.path().join(".hidden"), "").unwrap();
/// fs::create_dir(temp.path().join("a")).unwrap();
///
/// let names = enumerate(temp.path()).unwrap();
/// assert_eq!(names, [".hidden", "a", "b.txt"].map(OsString::from));
/// ```
pub fn enumerate(target: &Path) -> Result<Vec<OsString>> {
    let walker = WalkDir::new(target)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .sort_by_file_name();

    let mut names = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(target).to_path_buf();
            target_error(e.into(), path)
        })?;
        let name = entry.file_name().to_os_string();
        trace!("Enumerated entry: {:?}", name);
        names.push(name);
    }

    debug!("Enumerated {} entries in {}", names.len(), target.display());
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_enumerate_empty_dir() -> anyhow::Result<()> {
        let temp = tempdir()?;
        assert!(enumerate(temp.path())?.is_empty());
        Ok(())
    }

    #[test]
    fn test_enumerate_does_not_recurse() -> anyhow::Result<()> {
        let temp = tempdir()?;
        fs::create_dir(temp.path().join("sub"))?;
        fs::write(temp.path().join("sub").join("inner.txt"), "x")?;
        fs::write(temp.path().join("top.txt"), "x")?;

        let names = enumerate(temp.path())?;
        assert_eq!(names, ["sub", "top.txt"].map(OsString::from));
        Ok(())
    }

    #[test]
    fn test_enumerate_missing_dir_is_target_error() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let result = enumerate(&temp.path().join("nope"));
        assert!(matches!(result, Err(Error::Target { .. })));
        Ok(())
    }

    #[test]
    #[cfg(unix)]
    fn test_enumerate_lists_broken_symlink_name() -> anyhow::Result<()> {
        use std::os::unix::fs::symlink;
        let temp = tempdir()?;
        symlink(temp.path().join("missing"), temp.path().join("dangling"))?;
        assert_eq!(enumerate(temp.path())?, [OsString::from("dangling")]);
        Ok(())
    }

    #[test]
    #[cfg(target_os = "linux")]
    fn test_enumerate_keeps_non_utf8_names() -> anyhow::Result<()> {
        use std::os::unix::ffi::OsStrExt;
        let temp = tempdir()?;
        let raw = std::ffi::OsStr::from_bytes(b"bad\xffname");
        fs::write(temp.path().join(raw), "x")?;
        assert_eq!(enumerate(temp.path())?, [raw.to_os_string()]);
        Ok(())
    }
}
