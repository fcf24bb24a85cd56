//! The fixed-order listing pipeline.
//!
//! Filter → Sort → Enrich → Format → Output. The order is not configurable;
//! which work each stage does is decided by the [`Config`] it was built from.

use crate::config::Config;
use crate::core_types::Entry;
use crate::errors::Result;
use crate::filtering::FilterStage;
use crate::metadata::MetadataSource;
use crate::output::formatter::Formatter;
use crate::output::OutputStage;
use crate::processing::AttributeEnricher;
use crate::sorting::SortStage;
use log::debug;
use std::ffi::OsString;
use std::fmt;

/// A transformation over the whole entry sequence.
///
/// Stages take ownership of the entries and hand them back, so each one can be
/// exercised on its own with a plain `Vec<Entry>`.
pub trait Stage {
    /// Applies the stage.
    fn apply(&self, entries: Vec<Entry>) -> Result<Vec<Entry>>;
    /// Returns a descriptive name for the stage.
    fn name(&self) -> &'static str;
}

impl fmt::Debug for dyn Stage + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Stage").field(&self.name()).finish()
    }
}

/// Runs the listing stages in order and renders the result.
#[derive(Debug)]
pub struct Pipeline<'a> {
    stages: Vec<Box<dyn Stage + 'a>>,
    output: OutputStage,
}

impl<'a> Pipeline<'a> {
    /// Builds the pipeline for `config`, querying metadata through `source`.
    pub fn new(config: &'a Config, source: &'a dyn MetadataSource) -> Self {
        let stages: Vec<Box<dyn Stage + 'a>> = vec![
            Box::new(FilterStage::new(config)),
            Box::new(SortStage::new(config, source)),
            Box::new(AttributeEnricher::new(config, source)),
            Box::new(Formatter::new(config)),
        ];
        Self {
            stages,
            output: OutputStage::new(config),
        }
    }

    /// Names of the entry stages, in execution order.
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    /// Wraps `names` as entries, runs every stage and joins the output.
    pub fn run<I, S>(&self, names: I) -> Result<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let mut entries: Vec<Entry> = names.into_iter().map(Entry::new).collect();
        debug!("Running stages {:?} over {} entries", self.stage_names(), entries.len());
        let mut filtered_len: Option<usize> = None;

        for stage in &self.stages {
            let before = entries.len();
            entries = stage.apply(entries)?;
            debug!(
                "Stage {} done: {} -> {} entries",
                stage.name(),
                before,
                entries.len()
            );
            // Only the filter may change the count, and only downwards.
            if let Some(len) = filtered_len {
                debug_assert_eq!(entries.len(), len, "{} changed the entry count", stage.name());
            } else {
                debug_assert!(entries.len() <= before);
                filtered_len = Some(entries.len());
            }
        }

        Ok(self.output.render(&entries))
    }
}
