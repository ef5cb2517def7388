use std::default::Default;

/// Contains Config properties which will be used by a Server
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Announced as `source` (TUIO 1.1) or in every `/tuio2/frm` (TUIO 2.0),
    /// e.g. `"tracker@192.168.0.4"`
    pub source_name: Option<String>,
    /// Sensor width and height, sent with every TUIO 2.0 frame
    pub dimension: (u16, u16),
    /// Send every live record in every frame instead of only the ones that
    /// changed since the previous frame
    pub full_update: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            source_name: None,
            dimension: (640, 480),
            full_update: false,
        }
    }
}
