use thiserror::Error;

/// Errors that can occur while reading OSC data from a byte buffer
///
/// Every variant describes a buffer that is truncated or malformed. Callers on
/// the receive path treat any of them as "drop the datagram".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SerdeErr {
    /// Fewer bytes remain than the value being read requires
    #[error("Buffer truncated: needed {needed} bytes at offset {offset} but only {remaining} remain")]
    Truncated {
        offset: usize,
        needed: usize,
        remaining: usize,
    },

    /// An OSC string ran to the end of the buffer without a null terminator
    #[error("OSC string starting at offset {offset} has no null terminator")]
    MissingStringTerminator { offset: usize },

    /// An OSC string is not valid UTF-8
    #[error("OSC string starting at offset {offset} is not valid UTF-8")]
    InvalidString { offset: usize },

    /// Message address does not start with '/' (and is not "#bundle")
    #[error("Invalid OSC address {address:?}. Addresses must start with '/'")]
    InvalidAddress { address: String },

    /// The type tag string is missing or does not start with ','
    #[error("Invalid OSC type tag string {tags:?}. Type tags must start with ','")]
    InvalidTypeTags { tags: String },

    /// A type tag character this codec does not understand
    #[error("Unsupported OSC type tag '{tag}'")]
    UnsupportedTypeTag { tag: char },

    /// A char argument does not hold a valid unicode scalar value
    #[error("OSC char argument {value:#x} is not a valid character")]
    InvalidChar { value: u32 },

    /// A bundle element length prefix is negative, unaligned or exceeds the bundle
    #[error("Invalid bundle element size {size} at offset {offset} ({remaining} bytes remain in bundle)")]
    InvalidElementSize {
        offset: usize,
        size: i32,
        remaining: usize,
    },

    /// A blob argument length prefix is negative
    #[error("Invalid OSC blob length {length} at offset {offset}")]
    InvalidBlobLength { offset: usize, length: i32 },

    /// The requested read range is outside the buffer
    #[error("Invalid read range {start}..{end} for buffer of {len} bytes")]
    InvalidRange { start: usize, end: usize, len: usize },

    /// Bundles nested deeper than the decoder accepts
    #[error("OSC bundle nesting exceeds the limit of {limit} levels")]
    BundleTooDeep { limit: usize },

    /// Bytes were left over after a complete packet was read
    #[error("{count} trailing bytes after OSC message")]
    TrailingBytes { count: usize },
}
