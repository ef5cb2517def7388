use thiserror::Error;

use tuio_shared::{MessageQueueError, ProtocolViolation};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TuioClientError {
    #[error(transparent)]
    MessageQueue(#[from] MessageQueueError),
    #[error(transparent)]
    Protocol(#[from] ProtocolViolation),
}
