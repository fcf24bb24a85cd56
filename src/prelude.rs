//! The `dirls` prelude for convenient library usage.
//!
//! # Example
//!
//! ```
//! use dirls::prelude::*;
//! # fn main() -> Result<()> {
//!
//! let (options, target) = OptionSet::from_args(["-1", "-a", "."])?;
//! let mut builder = ConfigBuilder::from_options(&options);
//! if let Some(target) = target {
//!     builder = builder.target(target);
//! }
//! let config = builder.build()?;
//! let listing = list(&config)?;
//! # let _ = listing;
//!
//! # Ok(())
//! # }
//! ```

pub use crate::config::{Config, ConfigBuilder, Layout, ListingFlag, OptionSet, SortKey};
pub use crate::core_types::{AttributeKind, AttributeValue, Attributes, Entry, FileKind};
pub use crate::errors::{Error, Result};
pub use crate::filtering::FilterStage;
pub use crate::metadata::{FileStat, FsMetadata, MetadataSource};
pub use crate::output::formatter::Formatter;
pub use crate::output::OutputStage;
pub use crate::pipeline::{Pipeline, Stage};
pub use crate::processing::{humanize_size, AttributeEnricher};
pub use crate::sorting::SortStage;
pub use crate::{list, list_with, run};
