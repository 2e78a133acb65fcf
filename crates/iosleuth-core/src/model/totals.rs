//! Cumulative read/write byte counters for one path.
use serde::Serialize;
use std::ops::AddAssign;

/// Bytes read and written for a single file over the traced session.
///
/// All counters are `u64` bytes; the largest traces seen in practice stay
/// many orders of magnitude below overflow.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FileTotals {
    pub read: u64,
    pub written: u64,
}

impl FileTotals {
    pub fn new(read: u64, written: u64) -> Self {
        Self { read, written }
    }

    /// Accumulate one observed I/O.
    #[inline]
    pub fn add(&mut self, read: u64, written: u64) {
        self.read += read;
        self.written += written;
    }

    /// Remove previously accumulated bytes, clamping at zero.
    #[inline]
    pub fn subtract(&mut self, other: FileTotals) {
        self.read = self.read.saturating_sub(other.read);
        self.written = self.written.saturating_sub(other.written);
    }

    /// `true` if neither counter has moved.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.read == 0 && self.written == 0
    }
}

impl AddAssign for FileTotals {
    fn add_assign(&mut self, rhs: Self) {
        self.add(rhs.read, rhs.written);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_accumulates_both_counters() {
        let mut t = FileTotals::default();
        t.add(10, 0);
        t.add(0, 20);
        t.add(5, 5);
        assert_eq!(t, FileTotals::new(15, 25));
    }

    #[test]
    fn add_assign_merges_field_wise() {
        let mut a = FileTotals::new(1, 2);
        a += FileTotals::new(10, 20);
        assert_eq!(a, FileTotals::new(11, 22));
    }

    /// Retracting more than was recorded must clamp, never wrap.
    #[test]
    fn subtract_saturates() {
        let mut t = FileTotals::new(100, 50);
        t.subtract(FileTotals::new(40, 80));
        assert_eq!(t, FileTotals::new(60, 0));
    }

    #[test]
    fn default_is_zero() {
        assert!(FileTotals::default().is_zero());
        assert!(!FileTotals::new(0, 1).is_zero());
    }
}
