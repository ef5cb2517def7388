//! # Tuio Shared
//! Common functionality shared between tuio-server & tuio-client crates:
//! time values and clocks, the message queue, entity path history and
//! kinematics, and the typed TUIO 1.1 / 2.0 record codecs.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

pub use tuio_serde::{
    OscBundle, OscMessage, OscPacket, OscTime, OscType, Serde, SerdeErr, BUNDLE_TAG,
    MAX_BUNDLE_DEPTH,
};

mod constants;
mod instance_id_pool;
mod messages;
mod protocol;
mod time;
mod types;
mod world;

pub use constants::{
    MAX_PATH_LENGTH, TUIO11_ALIVE, TUIO11_BLOB_ADDRESS, TUIO11_CURSOR_ADDRESS, TUIO11_FSEQ,
    TUIO11_MAX_FRAME_GAP, TUIO11_OBJECT_ADDRESS, TUIO11_REDUNDANT_FRAME_TIMEOUT_MS, TUIO11_SET,
    TUIO11_SOURCE, TUIO20_ALIVE_ADDRESS, TUIO20_BOUNDS_ADDRESS, TUIO20_FRAME_ADDRESS,
    TUIO20_POINTER_ADDRESS, TUIO20_STALE_SOURCE_TIMEOUT_MS, TUIO20_SYMBOL_ADDRESS,
    TUIO20_TOKEN_ADDRESS,
};
pub use instance_id_pool::{InstanceIdError, InstanceIdPool};
pub use messages::{
    error::MessageQueueError,
    message_queue::{MessageHandler, MessageQueue},
};
pub use protocol::{
    arg_reader::ArgReader,
    error::ProtocolViolation,
    tuio11::{BlobSet, CursorSet, ObjectSet, Tuio11Command},
    tuio20::{
        pack_dimension, unpack_dimension, AliveRecord, BoundsRecord, FrameRecord, PointerRecord,
        SymbolRecord, TokenRecord,
    },
    TuioRecord,
};
pub use time::{
    clock::{Clock, ManualClock, SystemClock},
    error::TimeError,
    time_value::{TimeValue, MICROS_PER_SECOND, NTP_UNIX_OFFSET_SECONDS},
};
pub use types::{FrameId, InstanceId, SessionId, SymbolId};
pub use world::{
    kinematics::{angle_delta_turns, elapsed_seconds, Motion, Rate},
    path::Path,
    point::Point,
    state::{ObjectState, TuioState},
};
