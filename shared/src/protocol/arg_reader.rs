use tuio_serde::{OscMessage, OscTime, OscType};

use crate::protocol::error::ProtocolViolation;

/// Walks a message's arguments in order, checking each one's type
pub struct ArgReader<'m> {
    message: &'m OscMessage,
    index: usize,
}

impl<'m> ArgReader<'m> {
    pub fn new(message: &'m OscMessage) -> Self {
        Self { message, index: 0 }
    }

    /// Starts reading at argument `index` (e.g. past a TUIO 1.1 command)
    pub fn starting_at(message: &'m OscMessage, index: usize) -> Self {
        Self { message, index }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn remaining(&self) -> usize {
        self.message.len().saturating_sub(self.index)
    }

    fn next(&mut self, field: &'static str) -> Result<&'m OscType, ProtocolViolation> {
        let message: &'m OscMessage = self.message;
        let arg = message
            .arg(self.index)
            .ok_or_else(|| ProtocolViolation::MissingArgument {
                address: message.address().to_owned(),
                index: self.index,
                field,
            })?;
        self.index += 1;
        Ok(arg)
    }

    fn wrong_type(&self, field: &'static str, expected: char, found: &OscType) -> ProtocolViolation {
        ProtocolViolation::WrongArgumentType {
            address: self.message.address().to_owned(),
            index: self.index - 1,
            field,
            expected,
            found: found.type_tag(),
        }
    }

    pub fn int(&mut self, field: &'static str) -> Result<i32, ProtocolViolation> {
        let arg = self.next(field)?;
        arg.int().ok_or_else(|| self.wrong_type(field, 'i', arg))
    }

    /// Ids travel as int32 and are reinterpreted bit-for-bit as unsigned
    pub fn id(&mut self, field: &'static str) -> Result<u32, ProtocolViolation> {
        self.int(field).map(|value| value as u32)
    }

    pub fn float(&mut self, field: &'static str) -> Result<f32, ProtocolViolation> {
        let arg = self.next(field)?;
        arg.float().ok_or_else(|| self.wrong_type(field, 'f', arg))
    }

    pub fn string(&mut self, field: &'static str) -> Result<&'m str, ProtocolViolation> {
        let arg = self.next(field)?;
        arg.string().ok_or_else(|| self.wrong_type(field, 's', arg))
    }

    pub fn time(&mut self, field: &'static str) -> Result<OscTime, ProtocolViolation> {
        let arg = self.next(field)?;
        arg.time().ok_or_else(|| self.wrong_type(field, 't', arg))
    }

    /// Reads every remaining argument as an id
    pub fn ids(&mut self, field: &'static str) -> Result<Vec<u32>, ProtocolViolation> {
        let mut ids = Vec::with_capacity(self.remaining());
        while self.remaining() > 0 {
            ids.push(self.id(field)?);
        }
        Ok(ids)
    }
}

/// Checks that a record has either just its required fields or its required
/// fields plus the full trailing group of kinematic fields. Returns whether
/// the kinematic group is present.
pub fn check_layout(
    message: &OscMessage,
    skip: usize,
    required: usize,
    kinematic: usize,
    expected: &'static str,
) -> Result<bool, ProtocolViolation> {
    let count = message.len().saturating_sub(skip);
    if count == required {
        Ok(false)
    } else if count == required + kinematic {
        Ok(true)
    } else {
        Err(ProtocolViolation::ArgumentCount {
            address: message.address().to_owned(),
            count,
            expected,
        })
    }
}

pub fn check_address(message: &OscMessage, expected: &'static str) -> Result<(), ProtocolViolation> {
    if message.address() == expected {
        Ok(())
    } else {
        Err(ProtocolViolation::UnexpectedAddress {
            expected,
            found: message.address().to_owned(),
        })
    }
}
