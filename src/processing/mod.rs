//! Handles the attribute enrichment stage of the `dirls` pipeline.
//!
//! Each surviving entry is stat'ed at most once, and only if one of the active
//! options needs a field that is not already present (the sort stage may have
//! filled in the size or time). A failed query aborts the whole run.

use crate::config::Config;
use crate::core_types::Entry;
use crate::errors::Result;
use crate::metadata::{stat_entry, FileStat, MetadataSource};
use crate::pipeline::Stage;
use log::debug;
use std::path::PathBuf;

mod human;

pub use human::humanize_size;

/// Populates entry attributes from filesystem metadata.
pub struct AttributeEnricher<'a> {
    long_format: bool,
    human_readable: bool,
    show_inode: bool,
    file_type: bool,
    target: PathBuf,
    source: &'a dyn MetadataSource,
}

impl<'a> AttributeEnricher<'a> {
    pub fn new(config: &Config, source: &'a dyn MetadataSource) -> Self {
        Self {
            long_format: config.long_format,
            human_readable: config.human_readable,
            show_inode: config.show_inode,
            file_type: config.needs_file_type(),
            target: config.target.clone(),
            source,
        }
    }

    /// Whether any requested attribute is still missing on `entry`.
    fn needs_stat(&self, entry: &Entry) -> bool {
        let attrs = &entry.attributes;
        self.long_format
            || (self.human_readable && attrs.byte_size.is_none())
            || (self.show_inode && attrs.inode.is_none())
            || (self.file_type && attrs.file_type.is_none())
    }

    fn enrich(&self, entry: &mut Entry) -> Result<()> {
        if self.needs_stat(entry) {
            let stat = stat_entry(self.source, &self.target, entry.file_name())?;
            self.apply_stat(entry, stat);
        }
        if self.human_readable {
            entry.attributes.byte_size_display = entry.attributes.byte_size.map(humanize_size);
        }
        Ok(())
    }

    fn apply_stat(&self, entry: &mut Entry, stat: FileStat) {
        let attrs = &mut entry.attributes;
        if self.long_format {
            attrs.file_type = stat.kind;
            attrs.hardlinks = Some(stat.hardlinks);
            attrs.owner_id = Some(stat.owner_id);
            attrs.group_id = Some(stat.group_id);
            attrs.byte_size = Some(stat.size);
            attrs.modified = Some(stat.modified);
        }
        if self.file_type {
            attrs.file_type = stat.kind;
        }
        if self.human_readable && attrs.byte_size.is_none() {
            attrs.byte_size = Some(stat.size);
        }
        if self.show_inode {
            attrs.inode = Some(stat.inode);
        }
    }
}

impl Stage for AttributeEnricher<'_> {
    fn apply(&self, mut entries: Vec<Entry>) -> Result<Vec<Entry>> {
        for entry in entries.iter_mut() {
            self.enrich(entry)?;
        }
        debug!("Enriched {} entries", entries.len());
        Ok(entries)
    }

    fn name(&self) -> &'static str {
        "AttributeEnricher"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::{Attributes, FileKind};
    use crate::errors::Error;
    use crate::metadata::test_support::StaticMetadata;

    fn source() -> StaticMetadata {
        StaticMetadata::new()
            .file("a.txt", 1_500, 300)
            .file("huge.bin", 2_500_000, 100)
            .dir("bdir", 500, 200)
    }

    fn enrich(config: &Config, source: &StaticMetadata, entries: Vec<Entry>) -> Result<Vec<Entry>> {
        AttributeEnricher::new(config, source).apply(entries)
    }

    #[test]
    fn test_no_options_leaves_attributes_empty() -> anyhow::Result<()> {
        let config = Config::new_for_test();
        let source = source();
        let out = enrich(&config, &source, vec![Entry::new("a.txt")])?;
        assert_eq!(out[0].attributes, Attributes::default());
        assert_eq!(source.calls.get(), 0);
        Ok(())
    }

    #[test]
    fn test_long_format_fields() -> anyhow::Result<()> {
        let mut config = Config::new_for_test();
        config.long_format = true;
        let source = source();
        let out = enrich(&config, &source, vec![Entry::new("a.txt"), Entry::new("bdir")])?;

        let file = &out[0].attributes;
        assert_eq!(file.file_type, Some(FileKind::File));
        assert_eq!(file.hardlinks, Some(1));
        assert_eq!(file.owner_id, Some(1000));
        assert_eq!(file.group_id, Some(100));
        assert_eq!(file.byte_size, Some(1_500));
        assert!(file.modified.is_some());
        assert!(file.inode.is_none());
        assert!(file.byte_size_display.is_none());

        assert_eq!(out[1].attributes.file_type, Some(FileKind::Directory));
        assert_eq!(source.calls.get(), 2);
        Ok(())
    }

    #[test]
    fn test_human_readable_keeps_numeric_size() -> anyhow::Result<()> {
        let mut config = Config::new_for_test();
        config.human_readable = true;
        let source = source();
        let out = enrich(
            &config,
            &source,
            vec![Entry::new("huge.bin"), Entry::new("a.txt"), Entry::new("bdir")],
        )?;
        assert_eq!(out[0].attributes.byte_size, Some(2_500_000));
        assert_eq!(out[0].attributes.byte_size_display.as_deref(), Some("2.5G"));
        assert_eq!(out[1].attributes.byte_size_display.as_deref(), Some("1.5k"));
        assert_eq!(out[2].attributes.byte_size_display.as_deref(), Some("500"));
        // -h alone does not pull in the long-format fields.
        assert!(out[0].attributes.file_type.is_none());
        Ok(())
    }

    #[test]
    fn test_human_readable_reuses_sorted_size() -> anyhow::Result<()> {
        let mut config = Config::new_for_test();
        config.human_readable = true;
        let source = source();
        let mut entry = Entry::new("a.txt");
        entry.attributes.byte_size = Some(1_500);
        let out = enrich(&config, &source, vec![entry])?;
        assert_eq!(out[0].attributes.byte_size_display.as_deref(), Some("1.5k"));
        assert_eq!(source.calls.get(), 0);
        Ok(())
    }

    #[test]
    fn test_inode() -> anyhow::Result<()> {
        let mut config = Config::new_for_test();
        config.show_inode = true;
        let source = source();
        let out = enrich(&config, &source, vec![Entry::new("bdir")])?;
        assert_eq!(out[0].attributes.inode, Some(4_500));
        assert!(out[0].attributes.byte_size.is_none());
        Ok(())
    }

    #[test]
    fn test_long_human_inode_single_stat_per_entry() -> anyhow::Result<()> {
        let mut config = Config::new_for_test();
        config.long_format = true;
        config.human_readable = true;
        config.show_inode = true;
        let source = source();
        let out = enrich(&config, &source, vec![Entry::new("huge.bin"), Entry::new("a.txt")])?;
        assert_eq!(source.calls.get(), 2);
        assert_eq!(out[0].attributes.byte_size_display.as_deref(), Some("2.5G"));
        assert!(out[1].attributes.inode.is_some());
        Ok(())
    }

    #[test]
    fn test_highlight_fetches_file_type_only() -> anyhow::Result<()> {
        let mut config = Config::new_for_test();
        config.highlight_dirs = true;
        let source = source();
        let out = enrich(&config, &source, vec![Entry::new("bdir")])?;
        assert!(out[0].is_dir());
        assert!(out[0].attributes.hardlinks.is_none());
        Ok(())
    }

    #[test]
    fn test_vanished_entry_is_fatal() {
        let mut config = Config::new_for_test();
        config.show_inode = true;
        let source = source();
        let result = enrich(&config, &source, vec![Entry::new("a.txt"), Entry::new("gone")]);
        assert!(matches!(result, Err(Error::Metadata { .. })));
    }
}
