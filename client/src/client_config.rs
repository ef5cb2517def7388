use std::default::Default;

use tuio_shared::{
    MAX_PATH_LENGTH, TUIO11_MAX_FRAME_GAP, TUIO11_REDUNDANT_FRAME_TIMEOUT_MS,
    TUIO20_STALE_SOURCE_TIMEOUT_MS,
};

/// Contains Config properties which will be used by a Client
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Dispatch every buffer as soon as it has been decoded. When false,
    /// messages wait in the queue until `process_messages` is called.
    pub auto_process: bool,
    /// Frame ordering tolerances for the TUIO 1.1 profiles
    pub tuio11: Tuio11Config,
    /// Frame ordering tolerances for TUIO 2.0
    pub tuio20: Tuio20Config,
    /// Number of position samples kept per entity
    pub max_path_length: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            auto_process: true,
            tuio11: Tuio11Config::default(),
            tuio20: Tuio20Config::default(),
            max_path_length: MAX_PATH_LENGTH,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Tuio11Config {
    /// A frame id more than this far behind the current one is accepted as
    /// a sender restart
    pub max_frame_gap: u32,
    /// A redundant (frame id 0) bundle is applied only when no newer frame
    /// arrived for this many milliseconds
    pub redundant_frame_timeout_ms: f64,
}

impl Default for Tuio11Config {
    fn default() -> Self {
        Self {
            max_frame_gap: TUIO11_MAX_FRAME_GAP,
            redundant_frame_timeout_ms: TUIO11_REDUNDANT_FRAME_TIMEOUT_MS,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Tuio20Config {
    /// An out-of-order frame is applied anyway once its time tag is this
    /// many milliseconds past the last committed frame
    pub stale_source_timeout_ms: f64,
}

impl Default for Tuio20Config {
    fn default() -> Self {
        Self {
            stale_source_timeout_ms: TUIO20_STALE_SOURCE_TIMEOUT_MS,
        }
    }
}
