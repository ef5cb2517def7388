/// Motion state of a TUIO 1.1 entity or a TUIO 2.0 component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TuioState {
    Added,
    Accelerating,
    Decelerating,
    Stopped,
    Rotating,
    Removed,
}

impl TuioState {
    pub fn is_alive(self) -> bool {
        self != Self::Removed
    }

    /// TUIO 1.1 object/blob precedence: rotation only counts for an entity
    /// that was not already stopped
    pub fn classify_tuio11(previous: TuioState, motion_accel: f32, rotation_accel: f32) -> Self {
        if motion_accel > 0.0 {
            Self::Accelerating
        } else if motion_accel < 0.0 {
            Self::Decelerating
        } else if previous != Self::Stopped && rotation_accel != 0.0 {
            Self::Rotating
        } else {
            Self::Stopped
        }
    }

    /// TUIO 2.0 component precedence: rotation is checked after the
    /// acceleration branches regardless of the previous state
    pub fn classify_tuio20(motion_accel: f32, rotation_accel: f32) -> Self {
        if motion_accel > 0.0 {
            Self::Accelerating
        } else if motion_accel < 0.0 {
            Self::Decelerating
        } else if rotation_accel != 0.0 {
            Self::Rotating
        } else {
            Self::Stopped
        }
    }
}

/// Lifecycle of a TUIO 2.0 object, independent of its components' motion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectState {
    Added,
    Idle,
    Removed,
}
