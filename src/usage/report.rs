//! Human-readable allocation report

use std::fmt;

use super::counting::live_bytes;

const UNIT: u64 = 1024;

/// Byte count split into base-1024 digits
///
/// Each field is the digit at its position, so `gb` wraps at 1024 like the
/// others and counts of 1 TiB and above are not represented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UsageBreakdown {
    pub gb: u64,
    pub mb: u64,
    pub kb: u64,
    pub bytes: u64,
}

impl UsageBreakdown {
    pub fn from_bytes(total: u64) -> Self {
        let mut digits = [0u64; 4];
        let mut rest = total;
        for digit in digits.iter_mut() {
            *digit = rest % UNIT;
            rest /= UNIT;
        }

        Self {
            gb: digits[3],
            mb: digits[2],
            kb: digits[1],
            bytes: digits[0],
        }
    }

    /// Reassemble the byte count
    pub fn total(&self) -> u64 {
        ((self.gb * UNIT + self.mb) * UNIT + self.kb) * UNIT + self.bytes
    }
}

impl fmt::Display for UsageBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} GB, {} MB, {} KB, {} Byte",
            self.gb, self.mb, self.kb, self.bytes
        )
    }
}

/// Current live allocation, e.g. `"0 GB, 3 MB, 112 KB, 17 Byte"`
///
/// Reads the counters kept by [`super::CountingAllocator`]; reports zero when
/// it is not the global allocator.
pub fn allocated() -> String {
    UsageBreakdown::from_bytes(live_bytes()).to_string()
}
