// src/output/writer.rs

//! Prints a finished listing.

use crate::errors::Result;
use std::io::Write;

/// Writes `listing` followed by a final newline if it does not already end
/// with one. An empty listing writes nothing.
///
/// # Examples
/// ```
/// use dirls::output::writer::write_listing;
///
/// let mut buf = Vec::new();
/// write_listing(&mut buf, "a.txt bdir").unwrap();
/// assert_eq!(buf, b"a.txt bdir\n");
/// ```
pub fn write_listing(writer: &mut dyn Write, listing: &str) -> Result<()> {
    if listing.is_empty() {
        return Ok(());
    }
    writer.write_all(listing.as_bytes())?;
    if !listing.ends_with('\n') {
        writeln!(writer)?;
    }
    writer.flush()?; // Ensure the listing is out before the process exits
    Ok(())
}
