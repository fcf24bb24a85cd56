// src/output/formatter.rs

//! Builds the rendered line for each entry.

use crate::config::Config;
use crate::constants::{SIZE_COLUMN_WIDTH, TIME_FORMAT};
use crate::core_types::{AttributeKind, AttributeValue, Entry};
use crate::errors::Result;
use crate::pipeline::Stage;
use colored::Colorize;

/// Long-listing columns between the inode and the size.
const LONG_PREFIX_COLUMNS: [AttributeKind; 4] = [
    AttributeKind::FileType,
    AttributeKind::Hardlinks,
    AttributeKind::OwnerId,
    AttributeKind::GroupId,
];

/// Renders an attribute value as a display token.
///
/// # Examples
/// ```
/// use dirls::core_types::AttributeValue;
/// use dirls::output::formatter::render_value;
///
/// assert_eq!(render_value(&AttributeValue::Integer(3)), "3");
/// assert_eq!(render_value(&AttributeValue::Text("d".into())), "d");
/// ```
pub fn render_value(value: &AttributeValue) -> String {
    match value {
        AttributeValue::Text(s) => s.clone(),
        AttributeValue::Integer(n) => n.to_string(),
        AttributeValue::Timestamp(t) => t.format(TIME_FORMAT).to_string(),
    }
}

/// Sets each entry's `output` attribute from its populated attributes.
///
/// Column order: inode (`-i`); then under `-l` type, links, owner, group,
/// size right-justified to six characters, modification time; then the name.
/// Attributes that were never populated contribute no token.
#[derive(Debug, Clone, Copy)]
pub struct Formatter {
    long_format: bool,
    human_readable: bool,
    show_inode: bool,
    highlight_dirs: bool,
}

impl Formatter {
    pub fn new(config: &Config) -> Self {
        Self {
            long_format: config.long_format,
            human_readable: config.human_readable,
            show_inode: config.show_inode,
            highlight_dirs: config.highlight_dirs,
        }
    }

    /// Builds the display tokens for one entry, in column order.
    pub fn tokens(&self, entry: &Entry) -> Vec<String> {
        let mut columns = Vec::new();
        if self.show_inode {
            columns.push(AttributeKind::Inode);
        }
        if self.long_format {
            columns.extend(LONG_PREFIX_COLUMNS);
        }
        let mut tokens: Vec<String> = columns
            .into_iter()
            .filter_map(|kind| entry.attribute(kind))
            .map(|value| render_value(&value))
            .collect();

        if self.long_format {
            let size_kind = if self.human_readable {
                AttributeKind::ByteSizeDisplay
            } else {
                AttributeKind::ByteSize
            };
            if let Some(size) = entry.attribute(size_kind) {
                tokens.push(format!(
                    "{:>width$}",
                    render_value(&size),
                    width = SIZE_COLUMN_WIDTH
                ));
            }
            if let Some(modified) = entry.attribute(AttributeKind::Modified) {
                tokens.push(render_value(&modified));
            }
        }

        tokens.push(self.display_name(entry));
        tokens
    }

    fn display_name(&self, entry: &Entry) -> String {
        if self.highlight_dirs && entry.is_dir() {
            entry.name().on_blue().to_string()
        } else {
            entry.name().to_string()
        }
    }
}

impl Stage for Formatter {
    fn apply(&self, mut entries: Vec<Entry>) -> Result<Vec<Entry>> {
        for entry in entries.iter_mut() {
            let line = self.tokens(entry).join(" ");
            entry.attributes.output = Some(line);
        }
        Ok(entries)
    }

    fn name(&self) -> &'static str {
        "Formatter"
    }
}
