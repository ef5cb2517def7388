use log::trace;

use crate::{
    bundle::{OscBundle, BUNDLE_TAG},
    byte_reader::ByteReader,
    byte_writer::{ByteWrite, ByteWriter},
    error::SerdeErr,
    message::OscMessage,
    OscTime, Serde,
};

/// Bundles nested deeper than this are rejected as malformed
pub const MAX_BUNDLE_DEPTH: usize = 32;

/// One OSC packet, the unit carried by a single datagram
#[derive(Debug, Clone, PartialEq)]
pub enum OscPacket {
    Message(OscMessage),
    Bundle(OscBundle),
}

impl OscPacket {
    pub fn is_bundle(&self) -> bool {
        matches!(self, Self::Bundle(_))
    }

    pub fn as_message(&self) -> Option<&OscMessage> {
        match self {
            Self::Message(message) => Some(message),
            Self::Bundle(_) => None,
        }
    }

    pub fn as_bundle(&self) -> Option<&OscBundle> {
        match self {
            Self::Bundle(bundle) => Some(bundle),
            Self::Message(_) => None,
        }
    }

    /// Every message carried by this packet, in wire order
    pub fn into_messages(self) -> Vec<OscMessage> {
        match self {
            Self::Message(message) => vec![message],
            Self::Bundle(bundle) => bundle.into_messages(),
        }
    }

    pub fn ser(&self, writer: &mut dyn ByteWrite) {
        match self {
            Self::Message(message) => message.ser(writer),
            Self::Bundle(bundle) => bundle.ser(writer),
        }
    }

    pub fn byte_length(&self) -> usize {
        match self {
            Self::Message(message) => message.byte_length(),
            Self::Bundle(bundle) => bundle.byte_length(),
        }
    }

    pub fn pack(&self) -> Vec<u8> {
        let mut writer = ByteWriter::new();
        match self {
            Self::Message(message) => message.ser(&mut writer),
            Self::Bundle(bundle) => bundle.pack_into(&mut writer),
        }
        writer.to_bytes()
    }

    /// Parses a whole buffer as one packet
    pub fn try_unpack(bytes: &[u8]) -> Result<Self, SerdeErr> {
        Self::try_unpack_range(bytes, 0, bytes.len())
    }

    /// Parses `bytes[start..end]` as one packet
    pub fn try_unpack_range(bytes: &[u8], start: usize, end: usize) -> Result<Self, SerdeErr> {
        let mut reader = ByteReader::with_range(bytes, start, end)?;
        Self::de(&mut reader, 0)
    }

    /// Parses `bytes[start..end]` as one packet, returning `None` for
    /// truncated or malformed input
    pub fn unpack(bytes: &[u8], start: usize, end: usize) -> Option<Self> {
        match Self::try_unpack_range(bytes, start, end) {
            Ok(packet) => Some(packet),
            Err(error) => {
                trace!("Dropping undecodable OSC packet: {}", error);
                None
            }
        }
    }

    fn de(reader: &mut ByteReader, depth: usize) -> Result<Self, SerdeErr> {
        let address = reader.read_osc_str()?;
        if address == BUNDLE_TAG {
            if depth >= MAX_BUNDLE_DEPTH {
                return Err(SerdeErr::BundleTooDeep {
                    limit: MAX_BUNDLE_DEPTH,
                });
            }
            let time = OscTime::de(reader)?;
            let mut elements = Vec::new();
            while !reader.is_empty() {
                let offset = reader.position();
                let size = reader.read_i32()?;
                if size < 0 || size as usize > reader.remaining() {
                    return Err(SerdeErr::InvalidElementSize {
                        offset,
                        size,
                        remaining: reader.remaining(),
                    });
                }
                let mut element_reader = reader.sub_reader(size as usize)?;
                elements.push(Self::de(&mut element_reader, depth + 1)?);
            }
            Ok(Self::Bundle(OscBundle::new(time, elements)))
        } else {
            let address = address.to_owned();
            OscMessage::de_body(&address, reader).map(Self::Message)
        }
    }
}

impl From<OscMessage> for OscPacket {
    fn from(message: OscMessage) -> Self {
        Self::Message(message)
    }
}

impl From<OscBundle> for OscPacket {
    fn from(bundle: OscBundle) -> Self {
        Self::Bundle(bundle)
    }
}
