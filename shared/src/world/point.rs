use std::f32::consts::PI;

use crate::TimeValue;

/// One position sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    start_time: TimeValue,
    x: f32,
    y: f32,
}

impl Point {
    pub fn new(start_time: TimeValue, x: f32, y: f32) -> Self {
        Self { start_time, x, y }
    }

    pub fn start_time(&self) -> TimeValue {
        self.start_time
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn distance(&self, x: f32, y: f32) -> f32 {
        (x - self.x).hypot(y - self.y)
    }

    pub fn distance_to(&self, other: &Point) -> f32 {
        self.distance(other.x, other.y)
    }

    /// Direction from this point to `(x, y)` in radians, in `0..2π`, with y
    /// pointing down as on screen
    pub fn angle_to(&self, x: f32, y: f32) -> f32 {
        let angle = (self.y - y).atan2(x - self.x);
        if angle < 0.0 {
            angle + 2.0 * PI
        } else {
            angle
        }
    }

    pub fn angle_degrees_to(&self, x: f32, y: f32) -> f32 {
        self.angle_to(x, y).to_degrees()
    }
}
