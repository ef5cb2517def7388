use tuio_serde::OscMessage;

use crate::types::SessionId;

pub mod arg_reader;
pub mod error;
pub mod tuio11;
pub mod tuio20;

use error::ProtocolViolation;

/// A per-session TUIO record that is read from and written to one OSC message
pub trait TuioRecord: Sized {
    /// The address the record travels on
    const ADDRESS: &'static str;

    fn read(message: &OscMessage) -> Result<Self, ProtocolViolation>;
    fn to_message(&self) -> OscMessage;
    fn session_id(&self) -> SessionId;
}
