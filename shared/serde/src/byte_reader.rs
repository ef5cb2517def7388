use crate::error::SerdeErr;

/// Reads big-endian OSC data from a window of a borrowed byte buffer
pub struct ByteReader<'b> {
    buffer: &'b [u8],
    position: usize,
    end: usize,
}

impl<'b> ByteReader<'b> {
    pub fn new(buffer: &'b [u8]) -> Self {
        Self {
            buffer,
            position: 0,
            end: buffer.len(),
        }
    }

    /// Creates a reader restricted to `buffer[start..end]`
    pub fn with_range(buffer: &'b [u8], start: usize, end: usize) -> Result<Self, SerdeErr> {
        if start > end || end > buffer.len() {
            return Err(SerdeErr::InvalidRange {
                start,
                end,
                len: buffer.len(),
            });
        }
        Ok(Self {
            buffer,
            position: start,
            end,
        })
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn remaining(&self) -> usize {
        self.end - self.position
    }

    pub fn is_empty(&self) -> bool {
        self.position >= self.end
    }

    /// Returns a reader over the next `len` bytes and advances past them
    pub fn sub_reader(&mut self, len: usize) -> Result<ByteReader<'b>, SerdeErr> {
        let start = self.position;
        self.read_slice(len)?;
        Ok(ByteReader {
            buffer: self.buffer,
            position: start,
            end: start + len,
        })
    }

    pub fn read_slice(&mut self, len: usize) -> Result<&'b [u8], SerdeErr> {
        if len > self.remaining() {
            return Err(SerdeErr::Truncated {
                offset: self.position,
                needed: len,
                remaining: self.remaining(),
            });
        }
        let buffer: &'b [u8] = self.buffer;
        let slice = &buffer[self.position..self.position + len];
        self.position += len;
        Ok(slice)
    }

    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], SerdeErr> {
        let mut output = [0u8; N];
        output.copy_from_slice(self.read_slice(N)?);
        Ok(output)
    }

    pub fn read_u32(&mut self) -> Result<u32, SerdeErr> {
        Ok(u32::from_be_bytes(self.read_array()?))
    }

    pub fn read_i32(&mut self) -> Result<i32, SerdeErr> {
        Ok(i32::from_be_bytes(self.read_array()?))
    }

    pub fn read_u64(&mut self) -> Result<u64, SerdeErr> {
        Ok(u64::from_be_bytes(self.read_array()?))
    }

    /// Skips the null padding that aligns OSC data to 4 bytes
    pub fn skip_padding(&mut self, data_len: usize) -> Result<(), SerdeErr> {
        let padding = crate::padding_for(data_len);
        self.read_slice(padding).map(|_| ())
    }

    /// Reads a null-terminated, 4-byte padded OSC string
    pub fn read_osc_str(&mut self) -> Result<&'b str, SerdeErr> {
        let start = self.position;
        let buffer: &'b [u8] = self.buffer;
        let window = &buffer[start..self.end];
        let Some(len) = window.iter().position(|byte| *byte == 0) else {
            return Err(SerdeErr::MissingStringTerminator { offset: start });
        };
        let text = std::str::from_utf8(&window[..len])
            .map_err(|_| SerdeErr::InvalidString { offset: start })?;

        // the terminator counts towards the padded length
        let padded = crate::padded_len(len + 1);
        if padded > window.len() {
            return Err(SerdeErr::Truncated {
                offset: start,
                needed: padded,
                remaining: window.len(),
            });
        }
        self.position += padded;
        Ok(text)
    }
}
