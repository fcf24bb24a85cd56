// src/output/mod.rs

use crate::config::{Config, Layout};
use crate::constants::ENTRY_SEPARATOR;
use crate::core_types::Entry;
use log::debug;

pub mod formatter;
pub mod writer; // Prints the finished listing

/// Joins the rendered entries into the final text block.
///
/// This stage does no I/O; see [`writer::write_listing`] for printing.
#[derive(Debug, Clone, Copy)]
pub struct OutputStage {
    layout: Layout,
}

impl OutputStage {
    pub fn new(config: &Config) -> Self {
        Self {
            layout: config.layout,
        }
    }

    /// One newline-terminated line per entry, or everything on one line
    /// separated by single spaces.
    pub fn render(&self, entries: &[Entry]) -> String {
        let outputs = entries.iter().map(rendered);
        let text: String = match self.layout {
            Layout::OnePerLine => outputs.map(|line| format!("{}\n", line)).collect(),
            Layout::SingleLine => outputs.collect::<Vec<_>>().join(ENTRY_SEPARATOR),
        };
        debug!("Rendered {} entries ({:?})", entries.len(), self.layout);
        text
    }
}

/// The formatter's output for an entry, falling back to the bare name.
fn rendered(entry: &Entry) -> &str {
    entry
        .attributes
        .output
        .as_deref()
        .unwrap_or_else(|| entry.name())
}
