use std::sync::Arc;

use tuio_client::{ClientConfig, Tuio11Client, Tuio20Client};
use tuio_shared::{ManualClock, TimeValue};

use super::recording_listener::{
    EventLog, RecordingTuio11Listener, RecordingTuio20Listener, Tuio11Event, Tuio20Event,
};

/// Wall-clock start used by every test client
pub fn start_time() -> TimeValue {
    TimeValue::new(1_700_000_000, 0)
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A TUIO 1.1 client on a manual clock with one recording listener
pub fn tuio11_client(config: ClientConfig) -> (Tuio11Client, ManualClock, EventLog<Tuio11Event>) {
    init_logging();
    let clock = ManualClock::new(start_time());
    let client = Tuio11Client::with_clock(config, Arc::new(clock.clone()));
    let (listener, log) = RecordingTuio11Listener::new();
    client.add_listener(listener);
    (client, clock, log)
}

/// A TUIO 2.0 client on a manual clock with one recording listener
pub fn tuio20_client(config: ClientConfig) -> (Tuio20Client, ManualClock, EventLog<Tuio20Event>) {
    init_logging();
    let clock = ManualClock::new(start_time());
    let client = Tuio20Client::with_clock(config, Arc::new(clock.clone()));
    let (listener, log) = RecordingTuio20Listener::new();
    client.add_listener(listener);
    (client, clock, log)
}
