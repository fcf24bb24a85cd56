// src/config/options.rs

//! Token-level option parsing and validation.
//!
//! Arguments are split into flags (tokens starting with `-`) and at most one
//! target path. Every flag is checked against [`KNOWN_OPTIONS`] before anything
//! touches the filesystem.

use crate::constants::KNOWN_OPTIONS;
use crate::errors::{Error, Result};
use std::collections::BTreeSet;
use std::fmt;

/// One recognized command-line flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ListingFlag {
    /// `-a`: include entries whose name starts with `.`.
    All,
    /// `-l`: long listing.
    Long,
    /// `-1`: one entry per line.
    OnePerLine,
    /// `-r`: reverse the final order.
    Reverse,
    /// `-t`: newest first.
    SortByTime,
    /// `-S`: largest first.
    SortBySize,
    /// `-h`: human-readable sizes.
    HumanReadable,
    /// `-i`: show inode numbers.
    Inode,
}

impl ListingFlag {
    /// Every flag, in the same order as [`KNOWN_OPTIONS`].
    pub const ALL: [ListingFlag; 8] = [
        ListingFlag::All,
        ListingFlag::Long,
        ListingFlag::OnePerLine,
        ListingFlag::Reverse,
        ListingFlag::SortByTime,
        ListingFlag::SortBySize,
        ListingFlag::HumanReadable,
        ListingFlag::Inode,
    ];

    /// Looks up a single-letter flag such as `-S`.
    pub fn from_token(token: &str) -> Option<Self> {
        KNOWN_OPTIONS
            .iter()
            .position(|known| *known == token)
            .map(|i| Self::ALL[i])
    }

    /// The flag as typed on the command line.
    pub fn as_token(&self) -> &'static str {
        KNOWN_OPTIONS[*self as usize]
    }
}

impl fmt::Display for ListingFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

/// A validated, order-independent set of flags.
///
/// # Examples
///
/// ```
/// use dirls::config::{ListingFlag, OptionSet};
///
/// let set = OptionSet::from_tokens(["-l", "-a", "-l"]).unwrap();
/// assert!(set.contains(ListingFlag::Long));
/// assert!(set.contains(ListingFlag::All));
/// assert_eq!(set.len(), 2);
///
/// let err = OptionSet::from_tokens(["-Z"]).unwrap_err();
/// assert!(err.to_string().contains("-Z"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionSet {
    flags: BTreeSet<ListingFlag>,
}

impl OptionSet {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates a sequence of flag tokens.
    ///
    /// A clustered token like `-lh` is expanded letter by letter; the first
    /// unknown letter is reported in its single-flag form.
    pub fn from_tokens<I, S>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        for token in tokens {
            for flag in expand_token(token.as_ref())? {
                set.insert(flag);
            }
        }
        Ok(set)
    }

    /// Partitions raw arguments into options and an optional target path.
    ///
    /// The first token not starting with `-` is the target; a second one is
    /// rejected. All flags are validated even if they come after the target.
    ///
    /// # Examples
    ///
    /// ```
    /// use dirls::config::{ListingFlag, OptionSet};
    ///
    /// let (set, target) = OptionSet::from_args(["-1", "some/dir", "-r"]).unwrap();
    /// assert_eq!(target.as_deref(), Some("some/dir"));
    /// assert!(set.contains(ListingFlag::Reverse));
    /// ```
    pub fn from_args<I, S>(args: I) -> Result<(Self, Option<String>)>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        let mut target: Option<String> = None;
        for arg in args {
            let arg = arg.as_ref();
            if arg.starts_with('-') {
                for flag in expand_token(arg)? {
                    set.insert(flag);
                }
            } else if target.is_none() {
                target = Some(arg.to_string());
            } else {
                return Err(Error::UnexpectedArgument {
                    argument: arg.to_string(),
                });
            }
        }
        log::debug!("Parsed options {:?}, target {:?}", set, target);
        Ok((set, target))
    }

    /// Adds a flag. Returns `false` if it was already present.
    pub fn insert(&mut self, flag: ListingFlag) -> bool {
        self.flags.insert(flag)
    }

    pub fn contains(&self, flag: ListingFlag) -> bool {
        self.flags.contains(&flag)
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = ListingFlag> + '_ {
        self.flags.iter().copied()
    }
}

impl FromIterator<ListingFlag> for OptionSet {
    fn from_iter<T: IntoIterator<Item = ListingFlag>>(iter: T) -> Self {
        Self {
            flags: iter.into_iter().collect(),
        }
    }
}

/// Expands one dash-prefixed token into the flags it names.
fn expand_token(token: &str) -> Result<Vec<ListingFlag>> {
    if let Some(flag) = ListingFlag::from_token(token) {
        return Ok(vec![flag]);
    }
    let usage = || Error::Usage {
        option: token.to_string(),
    };
    let letters = token.strip_prefix('-').ok_or_else(usage)?;
    // "-", "--" and long options are never valid.
    if letters.is_empty() || letters.starts_with('-') {
        return Err(usage());
    }
    letters
        .chars()
        .map(|c| {
            let single = format!("-{}", c);
            ListingFlag::from_token(&single).ok_or(Error::Usage { option: single })
        })
        .collect()
}
