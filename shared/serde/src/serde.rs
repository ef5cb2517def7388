use crate::{byte_reader::ByteReader, byte_writer::ByteWrite, error::SerdeErr, OscTime};

/// A type that can be serialized into and deserialized from the OSC binary form
pub trait Serde: Sized {
    /// Writes the value in its big-endian OSC representation
    fn ser(&self, writer: &mut dyn ByteWrite);

    /// Parses the value from the reader's current position
    fn de(reader: &mut ByteReader) -> Result<Self, SerdeErr>;

    /// Number of bytes `ser` writes
    fn byte_length(&self) -> usize;
}

impl Serde for i32 {
    fn ser(&self, writer: &mut dyn ByteWrite) {
        writer.write_i32(*self);
    }

    fn de(reader: &mut ByteReader) -> Result<Self, SerdeErr> {
        reader.read_i32()
    }

    fn byte_length(&self) -> usize {
        4
    }
}

impl Serde for f32 {
    fn ser(&self, writer: &mut dyn ByteWrite) {
        writer.write_u32(self.to_bits());
    }

    fn de(reader: &mut ByteReader) -> Result<Self, SerdeErr> {
        Ok(f32::from_bits(reader.read_u32()?))
    }

    fn byte_length(&self) -> usize {
        4
    }
}

impl Serde for f64 {
    fn ser(&self, writer: &mut dyn ByteWrite) {
        writer.write_u64(self.to_bits());
    }

    fn de(reader: &mut ByteReader) -> Result<Self, SerdeErr> {
        Ok(f64::from_bits(reader.read_u64()?))
    }

    fn byte_length(&self) -> usize {
        8
    }
}

impl Serde for i64 {
    fn ser(&self, writer: &mut dyn ByteWrite) {
        writer.write_u64(*self as u64);
    }

    fn de(reader: &mut ByteReader) -> Result<Self, SerdeErr> {
        Ok(reader.read_u64()? as i64)
    }

    fn byte_length(&self) -> usize {
        8
    }
}

impl Serde for String {
    fn ser(&self, writer: &mut dyn ByteWrite) {
        writer.write_osc_str(self);
    }

    fn de(reader: &mut ByteReader) -> Result<Self, SerdeErr> {
        reader.read_osc_str().map(str::to_owned)
    }

    fn byte_length(&self) -> usize {
        crate::padded_len(self.len() + 1)
    }
}

// chars travel as a 32-bit word; senders only ever use the low byte but any
// unicode scalar value survives the trip
impl Serde for char {
    fn ser(&self, writer: &mut dyn ByteWrite) {
        writer.write_u32(u32::from(*self));
    }

    fn de(reader: &mut ByteReader) -> Result<Self, SerdeErr> {
        let value = reader.read_u32()?;
        char::from_u32(value).ok_or(SerdeErr::InvalidChar { value })
    }

    fn byte_length(&self) -> usize {
        4
    }
}

impl Serde for OscTime {
    fn ser(&self, writer: &mut dyn ByteWrite) {
        writer.write_u32(self.seconds);
        writer.write_u32(self.fraction);
    }

    fn de(reader: &mut ByteReader) -> Result<Self, SerdeErr> {
        let seconds = reader.read_u32()?;
        let fraction = reader.read_u32()?;
        Ok(OscTime { seconds, fraction })
    }

    fn byte_length(&self) -> usize {
        8
    }
}

// blobs: int32 size, bytes, zero padding
impl Serde for Vec<u8> {
    fn ser(&self, writer: &mut dyn ByteWrite) {
        writer.write_i32(self.len() as i32);
        writer.write_bytes(self);
        writer.write_padding(self.len());
    }

    fn de(reader: &mut ByteReader) -> Result<Self, SerdeErr> {
        let offset = reader.position();
        let length = reader.read_i32()?;
        if length < 0 {
            return Err(SerdeErr::InvalidBlobLength { offset, length });
        }
        let length = length as usize;
        let data = reader.read_slice(length)?.to_vec();
        reader.skip_padding(length)?;
        Ok(data)
    }

    fn byte_length(&self) -> usize {
        4 + crate::padded_len(self.len())
    }
}
