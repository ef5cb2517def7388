//! Single-sample derivative estimation shared by every entity type.
//!
//! Senders may transmit explicit velocities and accelerations, or leave them
//! at zero. A zero velocity paired with a changed position is not trusted:
//! the velocity is derived from the displacement since the previous sample
//! instead. Anything else is taken verbatim.

use std::f32::consts::TAU;

use crate::{world::path::Path, TimeValue};

/// Seconds between the newest sample in `path` and `time`, or zero when
/// there is no previous sample
pub fn elapsed_seconds(path: &Path, time: TimeValue) -> f32 {
    path.last()
        .map(|last| time.seconds_since(&last.start_time()))
        .unwrap_or(0.0)
}

/// Shortest signed angular distance from `from` to `to`, in turns
/// (`-0.5..=0.5`), both angles in radians
pub fn angle_delta_turns(from: f32, to: f32) -> f32 {
    let delta = (to - from) / TAU;
    if delta > 0.5 {
        delta - 1.0
    } else if delta < -0.5 {
        delta + 1.0
    } else {
        delta
    }
}

/// Planar velocity, its magnitude, and the acceleration of that magnitude
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Motion {
    pub x_speed: f32,
    pub y_speed: f32,
    pub motion_speed: f32,
    pub motion_accel: f32,
}

impl Motion {
    pub fn explicit(x_speed: f32, y_speed: f32, motion_accel: f32) -> Self {
        Self {
            x_speed,
            y_speed,
            motion_speed: x_speed.hypot(y_speed),
            motion_accel,
        }
    }

    /// Motion after moving from `from` to `to` over `dt` seconds, given the
    /// values the sender transmitted
    pub fn next(&self, dt: f32, from: (f32, f32), to: (f32, f32), explicit: Motion) -> Motion {
        let moved_x = to.0 != from.0 && explicit.x_speed == 0.0;
        let moved_y = to.1 != from.1 && explicit.y_speed == 0.0;
        if !(moved_x || moved_y) {
            return explicit;
        }
        if dt <= 0.0 {
            return *self;
        }

        let x_speed = (to.0 - from.0) / dt;
        let y_speed = (to.1 - from.1) / dt;
        let motion_speed = x_speed.hypot(y_speed);
        Motion {
            x_speed,
            y_speed,
            motion_speed,
            motion_accel: (motion_speed - self.motion_speed) / dt,
        }
    }
}

/// A scalar rate of change and its acceleration (rotation, pressure)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rate {
    pub speed: f32,
    pub accel: f32,
}

impl Rate {
    pub fn explicit(speed: f32, accel: f32) -> Self {
        Self { speed, accel }
    }

    /// Rate after a scalar moved from `from` to `to` over `dt` seconds
    pub fn next_linear(&self, dt: f32, from: f32, to: f32, explicit: Rate) -> Rate {
        self.next_with(dt, from, to, explicit, to - from)
    }

    /// Rate after an angle (radians) moved from `from` to `to` over `dt`
    /// seconds; derived speeds are in turns per second along the shortest arc
    pub fn next_angular(&self, dt: f32, from: f32, to: f32, explicit: Rate) -> Rate {
        self.next_with(dt, from, to, explicit, angle_delta_turns(from, to))
    }

    fn next_with(&self, dt: f32, from: f32, to: f32, explicit: Rate, delta: f32) -> Rate {
        if to == from || explicit.speed != 0.0 {
            return explicit;
        }
        if dt <= 0.0 {
            return *self;
        }
        let speed = delta / dt;
        Rate {
            speed,
            accel: (speed - self.speed) / dt,
        }
    }
}
