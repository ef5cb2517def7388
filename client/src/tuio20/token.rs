use std::ops::Deref;

use tuio_shared::{Motion, Rate, TimeValue, TokenRecord};

use crate::tuio20::{
    component::Component,
    tuio_component::TuioComponent,
    tuio_object::TuioObject,
};

/// A tagged physical object (`/tuio2/tok`)
#[derive(Debug, Clone, PartialEq)]
pub struct TuioToken {
    component: Component,
    type_user_id: u32,
    component_id: u32,
}

impl TuioToken {
    /// Type id in the high 16 bits, user id in the low 16 bits
    pub fn type_user_id(&self) -> u32 {
        self.type_user_id
    }

    pub fn type_id(&self) -> u16 {
        (self.type_user_id >> 16) as u16
    }

    pub fn user_id(&self) -> u16 {
        (self.type_user_id & 0xFFFF) as u16
    }

    /// Marker id of the token
    pub fn component_id(&self) -> u32 {
        self.component_id
    }

    pub fn component(&self) -> &Component {
        &self.component
    }
}

impl Deref for TuioToken {
    type Target = Component;

    fn deref(&self) -> &Component {
        &self.component
    }
}

fn pose(record: &TokenRecord) -> (f32, f32, f32) {
    (record.x, record.y, record.angle)
}

fn explicit_motion(record: &TokenRecord) -> Motion {
    Motion::explicit(record.x_velocity, record.y_velocity, record.motion_accel)
}

fn explicit_rotation(record: &TokenRecord) -> Rate {
    Rate::explicit(record.angular_velocity, record.rotation_accel)
}

impl TuioComponent for TuioToken {
    type Record = TokenRecord;

    fn create(time: TimeValue, record: &TokenRecord, max_path_length: usize) -> Self {
        Self {
            component: Component::new(
                time,
                record.session_id,
                pose(record),
                explicit_motion(record),
                explicit_rotation(record),
                max_path_length,
            ),
            type_user_id: record.type_user_id,
            component_id: record.component_id,
        }
    }

    fn differs(&self, record: &TokenRecord) -> bool {
        self.type_user_id != record.type_user_id
            || self.component_id != record.component_id
            || self.component.differs(
                pose(record),
                &explicit_motion(record),
                &explicit_rotation(record),
            )
    }

    fn update(&mut self, time: TimeValue, record: &TokenRecord) {
        let dt = self.component.elapsed(time);
        self.type_user_id = record.type_user_id;
        self.component_id = record.component_id;
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
        &mut object.token
    }
}
