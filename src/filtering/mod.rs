// src/filtering/mod.rs

//! Hidden-entry filtering.
//!
//! The filter only ever selects: it never creates, reorders or modifies
//! entries, so running it twice gives the same result as running it once.

use crate::config::Config;
use crate::core_types::Entry;
use crate::errors::Result;
use crate::pipeline::Stage;
use log::trace;

/// Checks whether an entry survives the hidden-file filter.
///
/// # Examples
/// ```
/// use dirls::core_types::Entry;
/// use dirls::filtering::is_visible;
///
/// assert!(is_visible(&Entry::new("a.txt"), false));
/// assert!(!is_visible(&Entry::new(".env"), false));
/// assert!(is_visible(&Entry::new(".env"), true));
/// ```
#[inline]
pub fn is_visible(entry: &Entry, show_hidden: bool) -> bool {
    show_hidden || !entry.is_hidden()
}

/// Drops entries whose names start with `.` unless `-a` was given.
#[derive(Debug, Clone, Copy)]
pub struct FilterStage {
    show_hidden: bool,
}

impl FilterStage {
    pub fn new(config: &Config) -> Self {
        Self {
            show_hidden: config.show_hidden,
        }
    }
}

impl Stage for FilterStage {
    fn apply(&self, entries: Vec<Entry>) -> Result<Vec<Entry>> {
        if self.show_hidden {
            return Ok(entries);
        }
        Ok(entries
            .into_iter()
            .filter(|entry| {
                let keep = is_visible(entry, false);
                if !keep {
                    trace!("Hiding entry: {}", entry.name());
                }
                keep
            })
            .collect())
    }

    fn name(&self) -> &'static str {
        "FilterStage"
    }
}
