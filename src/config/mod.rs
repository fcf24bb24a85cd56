//! Defines the core `Config` struct and related types for application configuration.
//!
//! Flags are validated into an [`OptionSet`] first, then folded into a single
//! typed [`Config`] that every pipeline stage receives at construction. Stages
//! never look at raw flag tokens.

use std::path::PathBuf;

pub use builder::ConfigBuilder;
pub use options::{ListingFlag, OptionSet};
mod builder;
mod options;
pub mod path_resolve;

/// The primary sort key. `-S` wins over `-t` when both are given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Keep enumeration order.
    #[default]
    None,
    /// Largest first.
    Size,
    /// Newest first.
    Time,
}

/// How rendered entries are joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// All entries on one line, separated by a space.
    #[default]
    SingleLine,
    /// One entry per line, each newline-terminated.
    OnePerLine,
}

/// Fully resolved settings for one listing run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Absolute path of the directory to list.
    pub target: PathBuf,
    /// Include entries whose names start with `.` (`-a`).
    pub show_hidden: bool,
    /// Long listing columns (`-l`).
    pub long_format: bool,
    /// Derive a human-readable size (`-h`).
    pub human_readable: bool,
    /// Show inode numbers (`-i`).
    pub show_inode: bool,
    /// Primary ordering (`-S`, `-t`).
    pub sort: SortKey,
    /// Reverse after sorting (`-r`).
    pub reverse: bool,
    /// Line layout (`-1`, implied by `-l`).
    pub layout: Layout,
    /// Highlight directory names. Decided by the caller, not by a flag.
    pub highlight_dirs: bool,
}

impl Config {
    /// Creates a default `Config` for testing purposes.
    ///
    /// This function is hidden from public documentation and is intended for
    /// use in tests and doc tests only.
    #[doc(hidden)]
    pub fn new_for_test() -> Self {
        Self {
            target: PathBuf::from("."),
            show_hidden: false,
            long_format: false,
            human_readable: false,
            show_inode: false,
            sort: SortKey::None,
            reverse: false,
            layout: Layout::SingleLine,
            highlight_dirs: false,
        }
    }

    /// Whether the file type must be fetched for each entry.
    pub fn needs_file_type(&self) -> bool {
        self.long_format || self.highlight_dirs
    }
}
