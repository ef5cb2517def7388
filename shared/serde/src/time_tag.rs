use std::fmt;

/// 64-bit OSC time tag: seconds since 1900-01-01 in the high 32 bits and a
/// binary fraction of a second in the low 32 bits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct OscTime {
    pub seconds: u32,
    pub fraction: u32,
}

impl OscTime {
    /// The special "immediately" tag (all zeroes except the least significant bit)
    pub const IMMEDIATELY: OscTime = OscTime {
        seconds: 0,
        fraction: 1,
    };

    pub fn new(seconds: u32, fraction: u32) -> Self {
        Self { seconds, fraction }
    }

    pub fn from_bits(bits: u64) -> Self {
        Self {
            seconds: (bits >> 32) as u32,
            fraction: bits as u32,
        }
    }

    pub fn to_bits(self) -> u64 {
        (u64::from(self.seconds) << 32) | u64::from(self.fraction)
    }

    pub fn is_immediately(&self) -> bool {
        *self == Self::IMMEDIATELY
    }
}

impl fmt::Display for OscTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:08x}", self.seconds, self.fraction)
    }
}
