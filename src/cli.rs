// src/cli.rs

use crate::config::{ListingFlag, OptionSet};
use crate::errors::Result;
use clap::Parser;
use std::ffi::OsStr;

/// List the contents of a directory.
///
/// dirls prints the entries of a directory, one line or one entry per line,
/// optionally with long-format metadata, inode numbers and human-readable
/// sizes, sorted by size or modification time.
///
/// Only the eight single-letter flags below are accepted; `-h` means
/// human-readable sizes, so there is no short help flag.
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
#[command(args_override_self = true)]
pub struct Cli {
    /// Directory to list. Defaults to the current directory.
    #[arg(value_name = "PATH")]
    pub path: Option<String>,

    // --- Filtering ---
    /// Do not hide entries whose names start with '.'.
    #[arg(short = 'a', action = clap::ArgAction::SetTrue)]
    pub all: bool,

    // --- Attributes ---
    /// Long listing: type, links, owner, group, size, modification time.
    #[arg(short = 'l', action = clap::ArgAction::SetTrue)]
    pub long: bool,

    /// Print sizes as 1.5k / 2.5G instead of bytes.
    #[arg(short = 'h', action = clap::ArgAction::SetTrue)]
    pub human_readable: bool,

    /// Print the inode number of each entry.
    #[arg(short = 'i', action = clap::ArgAction::SetTrue)]
    pub inode: bool,

    // --- Ordering ---
    /// Sort by size, largest first.
    #[arg(short = 'S', action = clap::ArgAction::SetTrue)]
    pub sort_size: bool,

    /// Sort by modification time, newest first.
    #[arg(short = 't', action = clap::ArgAction::SetTrue)]
    pub sort_time: bool,

    /// Reverse the order.
    #[arg(short = 'r', action = clap::ArgAction::SetTrue)]
    pub reverse: bool,

    // --- Output ---
    /// One entry per line.
    #[arg(short = '1', action = clap::ArgAction::SetTrue)]
    pub one_per_line: bool,
}

impl Cli {
    /// The flags that were given, as a validated set.
    pub fn option_set(&self) -> OptionSet {
        [
            (self.all, ListingFlag::All),
            (self.long, ListingFlag::Long),
            (self.one_per_line, ListingFlag::OnePerLine),
            (self.reverse, ListingFlag::Reverse),
            (self.sort_time, ListingFlag::SortByTime),
            (self.sort_size, ListingFlag::SortBySize),
            (self.human_readable, ListingFlag::HumanReadable),
            (self.inode, ListingFlag::Inode),
        ]
        .into_iter()
        .filter_map(|(on, flag)| on.then_some(flag))
        .collect()
    }
}

/// Checks raw arguments (without the program name) against the flag whitelist.
///
/// Runs before clap: `--` and `-` are invalid options here, not an
/// end-of-options marker or a path.
pub fn validate_args<I, S>(args: I) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let tokens: Vec<String> = args
        .into_iter()
        .map(|arg| arg.as_ref().to_string_lossy().into_owned())
        .collect();
    OptionSet::from_args(tokens).map(|_| ())
}
