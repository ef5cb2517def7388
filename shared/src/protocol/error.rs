use thiserror::Error;

/// A TUIO message whose arguments do not match the layout its address and
/// command require
///
/// The offending record is dropped; the rest of the frame is still applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolViolation {
    /// The message has no leading command string (TUIO 1.1 profiles)
    #[error("{address}: missing command string as first argument")]
    MissingCommand { address: String },

    /// The leading command string is not the one this record requires
    #[error("{address}: expected command {expected:?}, got {found:?}")]
    UnexpectedCommand {
        address: String,
        expected: &'static str,
        found: String,
    },

    /// A required argument is absent
    #[error("{address}: missing argument {index} ({field})")]
    MissingArgument {
        address: String,
        index: usize,
        field: &'static str,
    },

    /// An argument has the wrong OSC type
    #[error("{address}: argument {index} ({field}) should have type '{expected}' but has '{found}'")]
    WrongArgumentType {
        address: String,
        index: usize,
        field: &'static str,
        expected: char,
        found: char,
    },

    /// The argument count matches none of the layouts for this record
    #[error("{address}: {count} arguments, expected {expected}")]
    ArgumentCount {
        address: String,
        count: usize,
        expected: &'static str,
    },

    /// The record was read from a message with a different address
    #[error("Expected a {expected} message, got {found}")]
    UnexpectedAddress {
        expected: &'static str,
        found: String,
    },
}
