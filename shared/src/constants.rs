// TUIO 1.1 profile addresses
pub const TUIO11_CURSOR_ADDRESS: &str = "/tuio/2Dcur";
pub const TUIO11_OBJECT_ADDRESS: &str = "/tuio/2Dobj";
pub const TUIO11_BLOB_ADDRESS: &str = "/tuio/2Dblb";

// TUIO 1.1 commands (first argument of every profile message)
pub const TUIO11_SET: &str = "set";
pub const TUIO11_ALIVE: &str = "alive";
pub const TUIO11_FSEQ: &str = "fseq";
pub const TUIO11_SOURCE: &str = "source";

// TUIO 2.0 addresses
pub const TUIO20_FRAME_ADDRESS: &str = "/tuio2/frm";
pub const TUIO20_ALIVE_ADDRESS: &str = "/tuio2/alv";
pub const TUIO20_TOKEN_ADDRESS: &str = "/tuio2/tok";
pub const TUIO20_POINTER_ADDRESS: &str = "/tuio2/ptr";
pub const TUIO20_BOUNDS_ADDRESS: &str = "/tuio2/bnd";
pub const TUIO20_SYMBOL_ADDRESS: &str = "/tuio2/sym";

/// Longest position history kept per entity; older samples are evicted
pub const MAX_PATH_LENGTH: usize = 128;

/// TUIO 1.1: a frame id this far behind the current one is taken as a
/// sender restart rather than a late bundle
pub const TUIO11_MAX_FRAME_GAP: u32 = 100;

/// TUIO 1.1: a redundant (frame id 0) bundle is applied only if the
/// profile has not committed a new frame for this long
pub const TUIO11_REDUNDANT_FRAME_TIMEOUT_MS: f64 = 100.0;

/// TUIO 2.0: an out-of-order frame is still applied if its time tag is this
/// far past the last committed frame's
pub const TUIO20_STALE_SOURCE_TIMEOUT_MS: f64 = 1000.0;
