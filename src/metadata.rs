//! The per-entry metadata query.
//!
//! Stages never call `std::fs` directly; they go through a [`MetadataSource`]
//! so the pipeline can run against a fixed snapshot in tests.

use crate::core_types::FileKind;
use crate::errors::{metadata_error, Result};
use chrono::{DateTime, Local};
use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::Path;
use tracing::instrument;

/// The metadata fields the listing can display or sort by.
#[derive(Debug, Clone, PartialEq)]
pub struct FileStat {
    /// `None` for anything other than a regular file or directory.
    pub kind: Option<FileKind>,
    pub hardlinks: u64,
    pub owner_id: u32,
    pub group_id: u32,
    pub size: u64,
    pub modified: DateTime<Local>,
    pub inode: u64,
}

/// A source of per-entry metadata.
pub trait MetadataSource {
    /// Queries metadata for `path`, following symlinks.
    fn stat(&self, path: &Path) -> io::Result<FileStat>;
}

/// Reads metadata from the real filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsMetadata;

impl MetadataSource for FsMetadata {
    #[instrument(level = "trace", skip(self))]
    fn stat(&self, path: &Path) -> io::Result<FileStat> {
        let metadata = fs::metadata(path)?;
        let kind = if metadata.is_dir() {
            Some(FileKind::Directory)
        } else if metadata.is_file() {
            Some(FileKind::File)
        } else {
            None
        };
        let modified = DateTime::<Local>::from(metadata.modified()?);
        let (hardlinks, owner_id, group_id, inode) = unix_fields(&metadata);

        Ok(FileStat {
            kind,
            hardlinks,
            owner_id,
            group_id,
            size: metadata.len(),
            modified,
            inode,
        })
    }
}

/// Stats `name` inside `target`, turning failures into metadata errors.
pub(crate) fn stat_entry(
    source: &dyn MetadataSource,
    target: &Path,
    name: &OsStr,
) -> Result<FileStat> {
    let path = target.join(name);
    source.stat(&path).map_err(|e| metadata_error(e, &path))
}

#[cfg(unix)]
fn unix_fields(metadata: &fs::Metadata) -> (u64, u32, u32, u64) {
    use std::os::unix::fs::MetadataExt;
    (metadata.nlink(), metadata.uid(), metadata.gid(), metadata.ino())
}

// Link counts, ids and inodes are not exposed through std elsewhere.
#[cfg(not(unix))]
fn unix_fields(_metadata: &fs::Metadata) -> (u64, u32, u32, u64) {
    (1, 0, 0, 0)
}
