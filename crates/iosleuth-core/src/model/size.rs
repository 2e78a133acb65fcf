/// Byte-count formatting for reports.
///
/// All accounting is done in `u64` bytes. Floating point only appears at
/// the display boundary.
use std::fmt;

const KB: f64 = 1024.0;
const MB: f64 = KB * 1024.0;
const GB: f64 = MB * 1024.0;

/// A byte count that displays in the largest sensible binary unit.
///
/// Counts at or below one unit boundary stay in the smaller unit, so
/// exactly 1024 bytes prints as `1024 B`, matching how the category table
/// has always been read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteSize(pub u64);

impl fmt::Display for ByteSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = self.0 as f64;
        if b > GB {
            write!(f, "{:.2} GB", b / GB)
        } else if b > MB {
            write!(f, "{:.1} MB", b / MB)
        } else if b > KB {
            write!(f, "{:.1} KB", b / KB)
        } else {
            write!(f, "{} B", self.0)
        }
    }
}

/// Bytes per day expressed in GiB, the unit regressions are tracked in.
pub fn gib(bytes: f64) -> f64 {
    bytes / GB
}

/// Render an integer with `,` thousands separators.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let lead = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - lead) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_counts_print_in_bytes() {
        assert_eq!(ByteSize(0).to_string(), "0 B");
        assert_eq!(ByteSize(1024).to_string(), "1024 B");
    }

    #[test]
    fn kilobytes_and_megabytes() {
        assert_eq!(ByteSize(1536).to_string(), "1.5 KB");
        assert_eq!(ByteSize(3 * 1024 * 1024 + 1).to_string(), "3.0 MB");
    }

    #[test]
    fn gigabytes_use_two_decimals() {
        assert_eq!(ByteSize(5 * 1024 * 1024 * 1024 + 1).to_string(), "5.00 GB");
    }

    #[test]
    fn gib_conversion() {
        assert_eq!(gib(1_073_741_824.0), 1.0);
    }

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(12_345), "12,345");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }
}
