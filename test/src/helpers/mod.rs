pub mod assertions;
pub mod frame_builder;
pub mod recording_listener;
pub mod test_clients;

pub use frame_builder::{Tuio11FrameBuilder, Tuio20FrameBuilder};
pub use recording_listener::{
    EventLog, RecordingTuio11Listener, RecordingTuio20Listener, Tuio11Event, Tuio20Event,
};
pub use test_clients::{init_logging, start_time, tuio11_client, tuio20_client};
