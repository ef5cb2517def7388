use std::fmt;

use crate::{
    byte_reader::ByteReader,
    byte_writer::{ByteCounter, ByteWrite, ByteWriter},
    error::SerdeErr,
    types::OscType,
};

/// An OSC message: an address pattern and an ordered list of typed arguments
#[derive(Debug, Clone, PartialEq)]
pub struct OscMessage {
    address: String,
    args: Vec<OscType>,
}

impl OscMessage {
    pub fn new(address: impl Into<String>, args: Vec<OscType>) -> Self {
        Self {
            address: address.into(),
            args,
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn args(&self) -> &[OscType] {
        &self.args
    }

    pub fn arg(&self, index: usize) -> Option<&OscType> {
        self.args.get(index)
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    pub fn push_arg(&mut self, arg: impl Into<OscType>) {
        self.args.push(arg.into());
    }

    pub fn into_args(self) -> Vec<OscType> {
        self.args
    }

    /// The type tag string, including the leading ','
    pub fn type_tags(&self) -> String {
        let mut tags = String::with_capacity(self.args.len() + 1);
        tags.push(',');
        tags.extend(self.args.iter().map(OscType::type_tag));
        tags
    }

    pub fn ser(&self, writer: &mut dyn ByteWrite) {
        writer.write_osc_str(&self.address);
        writer.write_osc_str(&self.type_tags());
        for arg in &self.args {
            arg.ser(writer);
        }
    }

    pub fn byte_length(&self) -> usize {
        let mut counter = ByteCounter::new();
        self.ser(&mut counter);
        counter.count()
    }

    /// Packs the message into a standalone buffer
    pub fn pack(&self) -> Vec<u8> {
        let mut writer = ByteWriter::new();
        self.ser(&mut writer);
        writer.to_bytes()
    }

    /// Reads the type tags and arguments following an already-read address.
    /// The reader must be bounded to exactly this message.
    pub(crate) fn de_body(address: &str, reader: &mut ByteReader) -> Result<Self, SerdeErr> {
        if !address.starts_with('/') {
            return Err(SerdeErr::InvalidAddress {
                address: address.to_owned(),
            });
        }

        if reader.is_empty() {
            return Err(SerdeErr::InvalidTypeTags {
                tags: String::new(),
            });
        }

        let tags = reader.read_osc_str()?;
        let Some(tags) = tags.strip_prefix(',') else {
            return Err(SerdeErr::InvalidTypeTags {
                tags: tags.to_owned(),
            });
        };

        let mut args = Vec::with_capacity(tags.len());
        for tag in tags.chars() {
            args.push(OscType::de(tag, reader)?);
        }

        if !reader.is_empty() {
            return Err(SerdeErr::TrailingBytes {
                count: reader.remaining(),
            });
        }

        Ok(Self::new(address, args))
    }
}

impl fmt::Display for OscMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.address, self.type_tags())?;
        for arg in &self.args {
            match arg {
                OscType::Int(value) => write!(f, " {}", value)?,
                OscType::Float(value) => write!(f, " {}", value)?,
                OscType::Double(value) => write!(f, " {}", value)?,
                OscType::Long(value) => write!(f, " {}", value)?,
                OscType::String(value) => write!(f, " {:?}", value)?,
                OscType::Char(value) => write!(f, " {:?}", value)?,
                OscType::Time(value) => write!(f, " {}", value)?,
                OscType::Blob(value) => write!(f, " <{} bytes>", value.len())?,
                other => write!(f, " {}", other.type_tag())?,
            }
        }
        Ok(())
    }
}
