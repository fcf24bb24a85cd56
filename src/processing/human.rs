// src/processing/human.rs

use crate::constants::{GIGA_THRESHOLD, KILO_THRESHOLD};

/// Renders a byte count the way `-h` shows it.
///
/// Above one million bytes the value is divided by 10^6 and suffixed `G`;
/// above one thousand it is divided by 10^3 and suffixed `k`. Both are rounded
/// to two decimals and keep at least one decimal digit. Smaller values are
/// printed as plain integers.
///
/// # Examples
/// ```
/// use dirls::processing::humanize_size;
///
/// assert_eq!(humanize_size(2_500_000), "2.5G");
/// assert_eq!(humanize_size(1_500), "1.5k");
/// assert_eq!(humanize_size(500), "500");
/// ```
pub fn humanize_size(bytes: u64) -> String {
    if bytes > GIGA_THRESHOLD {
        format!("{}G", scaled(bytes, GIGA_THRESHOLD))
    } else if bytes > KILO_THRESHOLD {
        format!("{}k", scaled(bytes, KILO_THRESHOLD))
    } else {
        bytes.to_string()
    }
}

/// `bytes / unit` rounded half-up to two decimals, trailing zeros trimmed
/// down to one decimal digit.
fn scaled(bytes: u64, unit: u64) -> String {
    let unit = unit as u128;
    let hundredths = (bytes as u128 * 100 + unit / 2) / unit;
    let (whole, frac) = (hundredths / 100, hundredths % 100);
    if frac == 0 {
        format!("{}.0", whole)
    } else if frac % 10 == 0 {
        format!("{}.{}", whole, frac / 10)
    } else {
        format!("{}.{:02}", whole, frac)
    }
}
