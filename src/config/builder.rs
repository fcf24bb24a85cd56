// src/config/builder.rs

use super::{path_resolve::resolve_target, Config, Layout, ListingFlag, OptionSet, SortKey};
use crate::cli::Cli;
use crate::errors::Result;

/// Builder for [`Config`].
///
/// Unset options fall back to the plain `ls` defaults: hidden entries skipped,
/// enumeration order, single-line output, current directory.
///
/// # Examples
///
/// ```
/// use dirls::config::{ConfigBuilder, Layout, SortKey};
///
/// let config = ConfigBuilder::new()
///     .target(".")
///     .sort_by_size(true)
///     .reverse(true)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.sort, SortKey::Size);
/// assert!(config.reverse);
/// assert_eq!(config.layout, Layout::SingleLine);
/// ```
#[derive(Debug, Default, Clone)]
pub struct ConfigBuilder {
    target: Option<String>,
    show_hidden: Option<bool>,
    long_format: Option<bool>,
    one_per_line: Option<bool>,
    reverse: Option<bool>,
    sort_by_time: Option<bool>,
    sort_by_size: Option<bool>,
    human_readable: Option<bool>,
    show_inode: Option<bool>,
    highlight_dirs: Option<bool>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a builder from a validated flag set.
    pub fn from_options(options: &OptionSet) -> Self {
        Self {
            show_hidden: Some(options.contains(ListingFlag::All)),
            long_format: Some(options.contains(ListingFlag::Long)),
            one_per_line: Some(options.contains(ListingFlag::OnePerLine)),
            reverse: Some(options.contains(ListingFlag::Reverse)),
            sort_by_time: Some(options.contains(ListingFlag::SortByTime)),
            sort_by_size: Some(options.contains(ListingFlag::SortBySize)),
            human_readable: Some(options.contains(ListingFlag::HumanReadable)),
            show_inode: Some(options.contains(ListingFlag::Inode)),
            ..Self::default()
        }
    }

    /// Seeds a builder from parsed command-line arguments.
    pub fn from_cli(cli: Cli) -> Self {
        let options = cli.option_set();
        let mut builder = Self::from_options(&options);
        builder.target = cli.path;
        builder
    }

    /// Directory to list. Defaults to the current directory.
    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn show_hidden(mut self, value: bool) -> Self {
        self.show_hidden = Some(value);
        self
    }

    pub fn long_format(mut self, value: bool) -> Self {
        self.long_format = Some(value);
        self
    }

    pub fn one_per_line(mut self, value: bool) -> Self {
        self.one_per_line = Some(value);
        self
    }

    pub fn reverse(mut self, value: bool) -> Self {
        self.reverse = Some(value);
        self
    }

    pub fn sort_by_time(mut self, value: bool) -> Self {
        self.sort_by_time = Some(value);
        self
    }

    pub fn sort_by_size(mut self, value: bool) -> Self {
        self.sort_by_size = Some(value);
        self
    }

    pub fn human_readable(mut self, value: bool) -> Self {
        self.human_readable = Some(value);
        self
    }

    pub fn show_inode(mut self, value: bool) -> Self {
        self.show_inode = Some(value);
        self
    }

    /// Background-highlight directory names. Off unless set.
    pub fn highlight_dirs(mut self, value: bool) -> Self {
        self.highlight_dirs = Some(value);
        self
    }

    /// Resolves the target and produces the final [`Config`].
    ///
    /// # Errors
    /// Fails if the target does not exist or is not a directory.
    pub fn build(self) -> Result<Config> {
        let target = resolve_target(self.target.as_deref())?;
        let long_format = self.long_format.unwrap_or(false);

        let sort = if self.sort_by_size.unwrap_or(false) {
            SortKey::Size
        } else if self.sort_by_time.unwrap_or(false) {
            SortKey::Time
        } else {
            SortKey::None
        };

        let layout = if long_format || self.one_per_line.unwrap_or(false) {
            Layout::OnePerLine
        } else {
            Layout::SingleLine
        };

        let config = Config {
            target,
            show_hidden: self.show_hidden.unwrap_or(false),
            long_format,
            human_readable: self.human_readable.unwrap_or(false),
            show_inode: self.show_inode.unwrap_or(false),
            sort,
            reverse: self.reverse.unwrap_or(false),
            layout,
            highlight_dirs: self.highlight_dirs.unwrap_or(false),
        };
        log::debug!("Built config: {:?}", config);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use clap::Parser;

    #[test]
    fn test_defaults() -> anyhow::Result<()> {
        let config = ConfigBuilder::new().build()?;
        assert!(config.target.is_absolute());
        assert!(!config.show_hidden);
        assert!(!config.long_format);
        assert_eq!(config.sort, SortKey::None);
        assert_eq!(config.layout, Layout::SingleLine);
        assert!(!config.highlight_dirs);
        Ok(())
    }

    #[test]
    fn test_size_sort_takes_precedence_over_time() -> anyhow::Result<()> {
        let config = ConfigBuilder::new()
            .sort_by_time(true)
            .sort_by_size(true)
            .build()?;
        assert_eq!(config.sort, SortKey::Size);

        let config = ConfigBuilder::new().sort_by_time(true).build()?;
        assert_eq!(config.sort, SortKey::Time);
        Ok(())
    }

    #[test]
    fn test_long_format_implies_one_per_line() -> anyhow::Result<()> {
        let config = ConfigBuilder::new().long_format(true).build()?;
        assert_eq!(config.layout, Layout::OnePerLine);

        let config = ConfigBuilder::new().one_per_line(true).build()?;
        assert_eq!(config.layout, Layout::OnePerLine);
        assert!(!config.long_format);
        Ok(())
    }

    #[test]
    fn test_from_options() -> anyhow::Result<()> {
        let options = OptionSet::from_tokens(["-a", "-i", "-h", "-r"])?;
        let config = ConfigBuilder::from_options(&options).build()?;
        assert!(config.show_hidden);
        assert!(config.show_inode);
        assert!(config.human_readable);
        assert!(config.reverse);
        assert!(!config.long_format);
        Ok(())
    }

    #[test]
    fn test_from_cli() -> anyhow::Result<()> {
        let cli = Cli::parse_from(["dirls", "-l", "-S", "."]);
        let config = ConfigBuilder::from_cli(cli).build()?;
        assert!(config.long_format);
        assert_eq!(config.sort, SortKey::Size);
        Ok(())
    }

    #[test]
    fn test_missing_target_fails_build() {
        let result = ConfigBuilder::new()
            .target("definitely/not/here/dirls")
            .build();
        assert!(matches!(result, Err(Error::Target { .. })));
    }
}
