//! # Tuio Serde
//! Binary pack/unpack of OSC 1.0 arguments, messages and (nested) bundles.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

mod bundle;
mod byte_reader;
mod byte_writer;
mod error;
mod message;
mod packet;
mod serde;
mod time_tag;
mod types;

pub use bundle::{OscBundle, BUNDLE_TAG};
pub use byte_reader::ByteReader;
pub use byte_writer::{ByteCounter, ByteWrite, ByteWriter};
pub use error::SerdeErr;
pub use message::OscMessage;
pub use packet::{OscPacket, MAX_BUNDLE_DEPTH};
pub use serde::Serde;
pub use time_tag::OscTime;
pub use types::OscType;

/// Number of null bytes needed to align `len` to a multiple of 4
pub fn padding_for(len: usize) -> usize {
    (4 - len % 4) % 4
}

/// `len` rounded up to a multiple of 4
pub fn padded_len(len: usize) -> usize {
    len + padding_for(len)
}
