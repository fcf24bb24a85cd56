//! `dirls` is a library and command-line tool for listing the contents of a
//! directory, in the spirit of `ls`.
//!
//! A listing is produced by a fixed pipeline of independent stages, each
//! configured from a single [`Config`]:
//! 1.  **Filter**: drop hidden entries unless `-a` was given.
//! 2.  **Sort**: order by size (`-S`) or modification time (`-t`), then reverse (`-r`).
//! 3.  **Enrich**: fetch the metadata needed by `-l`, `-h` and `-i`.
//! 4.  **Format**: build each entry's display line.
//! 5.  **Output**: join the lines, one per line (`-1`, `-l`) or space-separated.
//!
//! # Example: Library Usage
//!
//! ```
//! use dirls::{list, ConfigBuilder};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().unwrap();
//! fs::write(temp_dir.path().join("a.txt"), "hello").unwrap();
//! fs::write(temp_dir.path().join(".hidden"), "").unwrap();
//! fs::create_dir(temp_dir.path().join("bdir")).unwrap();
//!
//! let config = ConfigBuilder::new()
//!     .target(temp_dir.path().to_str().unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(list(&config).unwrap(), "a.txt bdir");
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod core_types;
pub mod discovery;
pub mod errors;
pub mod filtering;
pub mod metadata;
pub mod output;
pub mod pipeline;
pub mod prelude;
pub mod processing;
pub mod sorting;

// Re-export key public types for easier use as a library
pub use config::{Config, ConfigBuilder, OptionSet};
pub use core_types::{Attributes, Entry};
pub use metadata::{FsMetadata, MetadataSource};
pub use pipeline::{Pipeline, Stage};

use crate::errors::Result;
use std::ffi::OsString;
use std::io::Write;

/// Lists `config.target` on the real filesystem and returns the rendered text.
///
/// # Errors
/// Returns a target error if the directory cannot be enumerated and a
/// metadata error if any surviving entry cannot be stat'ed.
pub fn list(config: &Config) -> Result<String> {
    let names = discovery::enumerate(&config.target)?;
    list_with(config, &FsMetadata, names)
}

/// Runs the pipeline on an explicit name snapshot and metadata source.
///
/// Names are resolved against `config.target` when metadata is needed.
pub fn list_with<I, S>(config: &Config, source: &dyn MetadataSource, names: I) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    Pipeline::new(config, source).run(names)
}

/// Lists `config.target` and writes the result to `writer`.
///
/// Nothing is written unless the whole listing succeeded.
pub fn run(config: &Config, writer: &mut dyn Write) -> Result<()> {
    let listing = list(config)?;
    output::writer::write_listing(writer, &listing)
}
