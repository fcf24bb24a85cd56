//! Defines core data structures used throughout the listing pipeline.
//!
//! An [`Entry`] is created once per directory item and moved through every
//! stage. Its [`Attributes`] start empty and are filled in only for the options
//! that need them, so `None` always means "not requested" rather than zero.

use chrono::{DateTime, Local};
use std::ffi::{OsStr, OsString};

/// The kind of filesystem object an entry refers to.
///
/// Only regular files and directories are classified; anything else (fifos,
/// sockets, devices) leaves the `file_type` attribute unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// A regular file, rendered as `f`.
    File,
    /// A directory, rendered as `d`.
    Directory,
}

impl FileKind {
    /// The single-letter code shown in the long listing.
    pub fn as_str(&self) -> &'static str {
        match self {
            FileKind::File => "f",
            FileKind::Directory => "d",
        }
    }
}

/// Typed per-entry metadata and display fields.
///
/// # Examples
///
/// ```
/// use dirls::core_types::Attributes;
///
/// let attrs = Attributes::default();
/// assert!(attrs.byte_size.is_none());
/// assert!(attrs.output.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes {
    /// `f` or `d`; unset for other kinds.
    pub file_type: Option<FileKind>,
    /// Hard link count.
    pub hardlinks: Option<u64>,
    /// Numeric owner id.
    pub owner_id: Option<u32>,
    /// Numeric group id.
    pub group_id: Option<u32>,
    /// Size in bytes. Stays numeric so sorting never sees a display string.
    pub byte_size: Option<u64>,
    /// Human-readable size, derived from `byte_size` under `-h`.
    pub byte_size_display: Option<String>,
    /// Last modification time.
    pub modified: Option<DateTime<Local>>,
    /// Inode number.
    pub inode: Option<u64>,
    /// The rendered line for this entry, set by the formatter.
    pub output: Option<String>,
}

/// Closed set of attribute names, used for column-driven access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    FileType,
    Hardlinks,
    OwnerId,
    GroupId,
    ByteSize,
    ByteSizeDisplay,
    Modified,
    Inode,
}

/// A single attribute value, tagged by its type.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    Text(String),
    Integer(u64),
    Timestamp(DateTime<Local>),
}

/// One directory item plus the attributes gathered for it.
///
/// The name is fixed at construction; only the attributes change as the entry
/// moves through the pipeline. The raw file name is kept for metadata queries,
/// since names that are not valid UTF-8 only survive display lossily.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    file_name: OsString,
    name: String,
    /// Attributes populated by the sort, enrichment and formatting stages.
    pub attributes: Attributes,
}

impl Entry {
    /// Wraps a raw directory entry name.
    ///
    /// # Examples
    ///
    /// ```
    /// use dirls::core_types::Entry;
    /// use std::ffi::OsStr;
    ///
    /// let entry = Entry::new("a.txt");
    /// assert_eq!(entry.name(), "a.txt");
    /// assert_eq!(entry.file_name(), OsStr::new("a.txt"));
    /// ```
    pub fn new(file_name: impl Into<OsString>) -> Self {
        let file_name = file_name.into();
        Self {
            name: file_name.to_string_lossy().into_owned(),
            file_name,
            attributes: Attributes::default(),
        }
    }

    /// The entry's display name, relative to the listed directory.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The name exactly as the directory reported it.
    pub fn file_name(&self) -> &OsStr {
        &self.file_name
    }

    /// Whether the name marks the entry as hidden (leading `.`).
    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }

    /// Whether the entry is known to be a directory.
    ///
    /// Returns `false` when the file type has not been fetched.
    pub fn is_dir(&self) -> bool {
        self.attributes.file_type == Some(FileKind::Directory)
    }

    /// Reads one attribute as a tagged value, or `None` if it was never set.
    ///
    /// # Examples
    ///
    /// ```
    /// use dirls::core_types::{AttributeKind, AttributeValue, Entry};
    ///
    /// let mut entry = Entry::new("a.txt");
    /// assert_eq!(entry.attribute(AttributeKind::ByteSize), None);
    ///
    /// entry.attributes.byte_size = Some(42);
    /// assert_eq!(
    ///     entry.attribute(AttributeKind::ByteSize),
    ///     Some(AttributeValue::Integer(42))
    /// );
    /// ```
    pub fn attribute(&self, kind: AttributeKind) -> Option<AttributeValue> {
        let attrs = &self.attributes;
        match kind {
            AttributeKind::FileType => attrs
                .file_type
                .map(|k| AttributeValue::Text(k.as_str().to_string())),
            AttributeKind::Hardlinks => attrs.hardlinks.map(AttributeValue::Integer),
            AttributeKind::OwnerId => attrs.owner_id.map(|v| AttributeValue::Integer(v as u64)),
            AttributeKind::GroupId => attrs.group_id.map(|v| AttributeValue::Integer(v as u64)),
            AttributeKind::ByteSize => attrs.byte_size.map(AttributeValue::Integer),
            AttributeKind::ByteSizeDisplay => {
                attrs.byte_size_display.clone().map(AttributeValue::Text)
            }
            AttributeKind::Modified => attrs.modified.map(AttributeValue::Timestamp),
            AttributeKind::Inode => attrs.inode.map(AttributeValue::Integer),
        }
    }
}
