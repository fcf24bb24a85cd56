// src/constants.rs

/// Flags accepted on the command line, in documentation order.
pub const KNOWN_OPTIONS: [&str; 8] = ["-a", "-l", "-1", "-r", "-t", "-S", "-h", "-i"];

/// Width the size column is right-justified to in the long listing.
pub const SIZE_COLUMN_WIDTH: usize = 6;

/// Sizes strictly above this many bytes get the `k` suffix under `-h`.
pub const KILO_THRESHOLD: u64 = 1_000;

/// Sizes strictly above this many bytes get the `G` suffix under `-h`.
pub const GIGA_THRESHOLD: u64 = 1_000_000;

/// `chrono` format string for the modification time column.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Separator between entries when not listing one per line.
pub const ENTRY_SEPARATOR: &str = " ";
