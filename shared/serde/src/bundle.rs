use crate::{
    byte_writer::{ByteWrite, ByteWriter},
    message::OscMessage,
    packet::OscPacket,
    padded_len, OscTime, Serde,
};

pub const BUNDLE_TAG: &str = "#bundle";

/// An OSC bundle: a time tag and an ordered list of messages and nested bundles
#[derive(Debug, Clone, PartialEq)]
pub struct OscBundle {
    time: OscTime,
    elements: Vec<OscPacket>,
}

impl OscBundle {
    pub fn new(time: OscTime, elements: Vec<OscPacket>) -> Self {
        Self { time, elements }
    }

    pub fn time(&self) -> OscTime {
        self.time
    }

    pub fn elements(&self) -> &[OscPacket] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn push(&mut self, element: impl Into<OscPacket>) {
        self.elements.push(element.into());
    }

    pub fn into_elements(self) -> Vec<OscPacket> {
        self.elements
    }

    /// All messages in this bundle and its nested bundles, depth first, in
    /// the order they appear on the wire
    pub fn messages(&self) -> Vec<&OscMessage> {
        let mut output = Vec::new();
        collect_messages(&self.elements, &mut output);
        output
    }

    pub fn into_messages(self) -> Vec<OscMessage> {
        let mut output = Vec::new();
        for element in self.elements {
            match element {
                OscPacket::Message(message) => output.push(message),
                OscPacket::Bundle(bundle) => output.extend(bundle.into_messages()),
            }
        }
        output
    }

    pub fn ser(&self, writer: &mut dyn ByteWrite) {
        writer.write_osc_str(BUNDLE_TAG);
        self.time.ser(writer);
        for element in &self.elements {
            writer.write_i32(element.byte_length() as i32);
            element.ser(writer);
        }
    }

    /// Summed from the element tree, without serializing it
    pub fn byte_length(&self) -> usize {
        let header = padded_len(BUNDLE_TAG.len() + 1) + self.time.byte_length();
        self.elements
            .iter()
            .map(|element| 4 + element.byte_length())
            .fold(header, |total, element| total + element)
    }

    /// Writes the bundle in one pass, back-filling each element's size
    /// prefix once the element has been written
    pub fn pack_into(&self, writer: &mut ByteWriter) {
        writer.write_osc_str(BUNDLE_TAG);
        self.time.ser(writer);
        for element in &self.elements {
            let offset = writer.len();
            writer.write_i32(0);
            match element {
                OscPacket::Message(message) => message.ser(writer),
                OscPacket::Bundle(bundle) => bundle.pack_into(writer),
            }
            let size = writer.len() - offset - 4;
            writer.patch_i32(offset, size as i32);
        }
    }

    pub fn pack(&self) -> Vec<u8> {
        let mut writer = ByteWriter::new();
        self.pack_into(&mut writer);
        writer.to_bytes()
    }
}

fn collect_messages<'a>(elements: &'a [OscPacket], output: &mut Vec<&'a OscMessage>) {
    for element in elements {
        match element {
            OscPacket::Message(message) => output.push(message),
            OscPacket::Bundle(bundle) => collect_messages(&bundle.elements, output),
        }
    }
}
