use thiserror::Error;

use tuio_shared::SessionId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TuioServerError {
    #[error("{address}: no live session {session_id}")]
    UnknownSession {
        address: &'static str,
        session_id: SessionId,
    },
    #[error("{address}: session {session_id} is already live")]
    SessionInUse {
        address: &'static str,
        session_id: SessionId,
    },
}
