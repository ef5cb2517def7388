use std::ops::Deref;

use tuio_shared::{BoundsRecord, Motion, Rate, TimeValue};

use crate::tuio20::{
    component::Component,
    tuio_component::TuioComponent,
    tuio_object::TuioObject,
};

/// The oriented bounding ellipse of an untagged shape (`/tuio2/bnd`)
#[derive(Debug, Clone, PartialEq)]
pub struct TuioBounds {
    component: Component,
    width: f32,
    height: f32,
    area: f32,
}

impl TuioBounds {
    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn area(&self) -> f32 {
        self.area
    }

    pub fn component(&self) -> &Component {
        &self.component
    }
}

impl Deref for TuioBounds {
    type Target = Component;

    fn deref(&self) -> &Component {
        &self.component
    }
}

fn pose(record: &BoundsRecord) -> (f32, f32, f32) {
    (record.x, record.y, record.angle)
}

fn explicit_motion(record: &BoundsRecord) -> Motion {
    Motion::explicit(record.x_velocity, record.y_velocity, record.motion_accel)
}

fn explicit_rotation(record: &BoundsRecord) -> Rate {
    Rate::explicit(record.angular_velocity, record.rotation_accel)
}

impl TuioComponent for TuioBounds {
    type Record = BoundsRecord;

    fn create(time: TimeValue, record: &BoundsRecord, max_path_length: usize) -> Self {
        Self {
            component: Component::new(
                time,
                record.session_id,
                pose(record),
                explicit_motion(record),
                explicit_rotation(record),
                max_path_length,
            ),
            width: record.width,
            height: record.height,
            area: record.area,
        }
    }

    fn differs(&self, record: &BoundsRecord) -> bool {
        self.width != record.width
            || self.height != record.height
            || self.area != record.area
            || self.component.differs(
                pose(record),
                &explicit_motion(record),
                &explicit_rotation(record),
            )
    }

    fn update(&mut self, time: TimeValue, record: &BoundsRecord) {
        let dt = self.component.elapsed(time);
        self.width = record.width;
        self.height = record.height;
        self.area = record.area;
        self.component.update(
            time,
            dt,
            pose(record),
            explicit_motion(record),
            explicit_rotation(record),
        );
    }

    fn remove(&mut self, time: TimeValue) {
        self.component.remove(time);
    }

    fn slot(object: &mut TuioObject) -> &mut Option<Self> {
        &mut object.bounds
    }
}
