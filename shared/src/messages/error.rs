use thiserror::Error;

use tuio_serde::SerdeErr;

/// Errors that can occur while feeding buffers into a message queue
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessageQueueError {
    /// The buffer does not hold one well-formed OSC packet
    #[error("Dropped undecodable buffer of {len} bytes: {source}")]
    UndecodableBuffer {
        len: usize,
        #[source]
        source: SerdeErr,
    },
}
