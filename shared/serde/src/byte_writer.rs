/// Sink for big-endian OSC data
pub trait ByteWrite {
    fn write_bytes(&mut self, bytes: &[u8]);

    fn write_u32(&mut self, value: u32) {
        self.write_bytes(&value.to_be_bytes());
    }

    fn write_i32(&mut self, value: i32) {
        self.write_bytes(&value.to_be_bytes());
    }

    fn write_u64(&mut self, value: u64) {
        self.write_bytes(&value.to_be_bytes());
    }

    /// Writes zero bytes until `data_len` is aligned to 4
    fn write_padding(&mut self, data_len: usize) {
        const ZEROES: [u8; 4] = [0; 4];
        self.write_bytes(&ZEROES[..crate::padding_for(data_len)]);
    }

    /// Writes `text` followed by at least one null, padded to a multiple of 4
    fn write_osc_str(&mut self, text: &str) {
        self.write_bytes(text.as_bytes());
        let terminated = text.len() + 1;
        self.write_bytes(&[0]);
        self.write_padding(terminated);
    }
}

/// Growable byte buffer that OSC packets are packed into
pub struct ByteWriter {
    buffer: Vec<u8>,
}

impl Default for ByteWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ByteWriter {
    pub fn new() -> Self {
        Self {
            buffer: Vec::with_capacity(256),
        }
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Overwrites four bytes already written at `offset` (used for bundle
    /// element length prefixes, which are only known after the element)
    pub fn patch_i32(&mut self, offset: usize, value: i32) {
        self.buffer[offset..offset + 4].copy_from_slice(&value.to_be_bytes());
    }

    pub fn to_bytes(self) -> Vec<u8> {
        self.buffer
    }
}

impl ByteWrite for ByteWriter {
    fn write_bytes(&mut self, bytes: &[u8]) {
        self.buffer.extend_from_slice(bytes);
    }
}

/// Counts bytes without storing them
#[derive(Default)]
pub struct ByteCounter {
    count: usize,
}

impl ByteCounter {
    pub fn new() -> Self {
        Self { count: 0 }
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

impl ByteWrite for ByteCounter {
    fn write_bytes(&mut self, bytes: &[u8]) {
        self.count += bytes.len();
    }
}
