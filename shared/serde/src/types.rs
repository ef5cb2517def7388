use crate::{byte_reader::ByteReader, byte_writer::ByteWrite, error::SerdeErr, OscTime, Serde};

/// A single typed OSC argument
#[derive(Debug, Clone, PartialEq)]
pub enum OscType {
    Int(i32),
    Float(f32),
    Double(f64),
    Long(i64),
    String(String),
    Char(char),
    Time(OscTime),
    Blob(Vec<u8>),
    True,
    False,
    Nil,
    Inf,
}

impl OscType {
    /// The character this argument contributes to the type tag string
    pub fn type_tag(&self) -> char {
        match self {
            Self::Int(_) => 'i',
            Self::Float(_) => 'f',
            Self::Double(_) => 'd',
            Self::Long(_) => 'h',
            Self::String(_) => 's',
            Self::Char(_) => 'c',
            Self::Time(_) => 't',
            Self::Blob(_) => 'b',
            Self::True => 'T',
            Self::False => 'F',
            Self::Nil => 'N',
            Self::Inf => 'I',
        }
    }

    pub(crate) fn ser(&self, writer: &mut dyn ByteWrite) {
        match self {
            Self::Int(value) => value.ser(writer),
            Self::Float(value) => value.ser(writer),
            Self::Double(value) => value.ser(writer),
            Self::Long(value) => value.ser(writer),
            Self::String(value) => value.ser(writer),
            Self::Char(value) => value.ser(writer),
            Self::Time(value) => value.ser(writer),
            Self::Blob(value) => value.ser(writer),
            Self::True | Self::False | Self::Nil | Self::Inf => {}
        }
    }

    pub(crate) fn de(tag: char, reader: &mut ByteReader) -> Result<Self, SerdeErr> {
        let value = match tag {
            'i' => Self::Int(i32::de(reader)?),
            'f' => Self::Float(f32::de(reader)?),
            'd' => Self::Double(f64::de(reader)?),
            'h' => Self::Long(i64::de(reader)?),
            's' | 'S' => Self::String(String::de(reader)?),
            'c' => Self::Char(char::de(reader)?),
            't' => Self::Time(OscTime::de(reader)?),
            'b' => Self::Blob(Vec::<u8>::de(reader)?),
            'T' => Self::True,
            'F' => Self::False,
            'N' => Self::Nil,
            'I' => Self::Inf,
            tag => return Err(SerdeErr::UnsupportedTypeTag { tag }),
        };
        Ok(value)
    }

    pub fn int(&self) -> Option<i32> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn float(&self) -> Option<f32> {
        match self {
            Self::Float(value) => Some(*value),
            _ => None,
        }
    }

    pub fn double(&self) -> Option<f64> {
        match self {
            Self::Double(value) => Some(*value),
            _ => None,
        }
    }

    pub fn long(&self) -> Option<i64> {
        match self {
            Self::Long(value) => Some(*value),
            _ => None,
        }
    }

    pub fn string(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn char(&self) -> Option<char> {
        match self {
            Self::Char(value) => Some(*value),
            _ => None,
        }
    }

    pub fn time(&self) -> Option<OscTime> {
        match self {
            Self::Time(value) => Some(*value),
            _ => None,
        }
    }

    pub fn blob(&self) -> Option<&[u8]> {
        match self {
            Self::Blob(value) => Some(value),
            _ => None,
        }
    }
}

impl From<i32> for OscType {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

impl From<f32> for OscType {
    fn from(value: f32) -> Self {
        Self::Float(value)
    }
}

impl From<f64> for OscType {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

impl From<i64> for OscType {
    fn from(value: i64) -> Self {
        Self::Long(value)
    }
}

impl From<&str> for OscType {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for OscType {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<char> for OscType {
    fn from(value: char) -> Self {
        Self::Char(value)
    }
}

impl From<OscTime> for OscType {
    fn from(value: OscTime) -> Self {
        Self::Time(value)
    }
}

impl From<bool> for OscType {
    fn from(value: bool) -> Self {
        if value {
            Self::True
        } else {
            Self::False
        }
    }
}
