//! Size and modification-time ordering.
//!
//! At most one key applies: `-S` wins over `-t`. Sorting is stable, so entries
//! with equal keys keep their enumeration order. `-r` is applied afterwards and
//! reverses the whole sequence, whether or not a key was used.

use crate::config::{Config, SortKey};
use crate::core_types::Entry;
use crate::errors::Result;
use crate::metadata::{stat_entry, MetadataSource};
use crate::pipeline::Stage;
use log::debug;
use std::path::PathBuf;

/// Reorders entries by size or time, then optionally reverses.
pub struct SortStage<'a> {
    key: SortKey,
    reverse: bool,
    target: PathBuf,
    source: &'a dyn MetadataSource,
}

impl<'a> SortStage<'a> {
    pub fn new(config: &Config, source: &'a dyn MetadataSource) -> Self {
        Self {
            key: config.sort,
            reverse: config.reverse,
            target: config.target.clone(),
            source,
        }
    }

    /// Fills in whatever the sort key needs and is not already present.
    fn ensure_key(&self, entry: &mut Entry) -> Result<()> {
        let attrs = &entry.attributes;
        let missing = match self.key {
            SortKey::Size => attrs.byte_size.is_none(),
            SortKey::Time => attrs.modified.is_none(),
            SortKey::None => false,
        };
        if !missing {
            return Ok(());
        }
        let stat = stat_entry(self.source, &self.target, entry.file_name())?;
        match self.key {
            SortKey::Size => entry.attributes.byte_size = Some(stat.size),
            SortKey::Time => entry.attributes.modified = Some(stat.modified),
            SortKey::None => {}
        }
        Ok(())
    }
}

impl Stage for SortStage<'_> {
    fn apply(&self, mut entries: Vec<Entry>) -> Result<Vec<Entry>> {
        for entry in entries.iter_mut() {
            self.ensure_key(entry)?;
        }

        // `sort_by` is stable; comparing b to a gives descending order.
        match self.key {
            SortKey::Size => entries.sort_by(|a, b| {
                b.attributes.byte_size.cmp(&a.attributes.byte_size)
            }),
            SortKey::Time => entries.sort_by(|a, b| {
                b.attributes.modified.cmp(&a.attributes.modified)
            }),
            SortKey::None => {}
        }

        if self.reverse {
            entries.reverse();
        }
        debug!(
            "Sorted {} entries by {:?} (reverse: {})",
            entries.len(),
            self.key,
            self.reverse
        );
        Ok(entries)
    }

    fn name(&self) -> &'static str {
        "SortStage"
    }
}
