use std::ops::Deref;

use tuio_shared::{Motion, PointerRecord, Rate, TimeValue};

use crate::tuio20::{
    component::Component,
    tuio_component::TuioComponent,
    tuio_object::TuioObject,
};

/// A touch or pen contact (`/tuio2/ptr`)
#[derive(Debug, Clone, PartialEq)]
pub struct TuioPointer {
    component: Component,
    type_user_id: u32,
    component_id: u32,
    shear: f32,
    radius: f32,
    pressure: f32,
    pressure_rate: Rate,
}

impl TuioPointer {
    pub fn type_user_id(&self) -> u32 {
        self.type_user_id
    }

    pub fn type_id(&self) -> u16 {
        (self.type_user_id >> 16) as u16
    }

    pub fn user_id(&self) -> u16 {
        (self.type_user_id & 0xFFFF) as u16
    }

    pub fn component_id(&self) -> u32 {
        self.component_id
    }

    pub fn shear(&self) -> f32 {
        self.shear
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn pressure(&self) -> f32 {
        self.pressure
    }

    pub fn pressure_velocity(&self) -> f32 {
        self.pressure_rate.speed
    }

    pub fn pressure_accel(&self) -> f32 {
        self.pressure_rate.accel
    }

    pub fn component(&self) -> &Component {
        &self.component
    }
}

impl Deref for TuioPointer {
    type Target = Component;

    fn deref(&self) -> &Component {
        &self.component
    }
}

fn pose(record: &PointerRecord) -> (f32, f32, f32) {
    (record.x, record.y, record.angle)
}

fn explicit_motion(record: &PointerRecord) -> Motion {
    Motion::explicit(record.x_velocity, record.y_velocity, record.motion_accel)
}

fn explicit_pressure(record: &PointerRecord) -> Rate {
    Rate::explicit(record.pressure_velocity, record.pressure_accel)
}

impl TuioComponent for TuioPointer {
    type Record = PointerRecord;

    fn create(time: TimeValue, record: &PointerRecord, max_path_length: usize) -> Self {
        Self {
            component: Component::new(
                time,
                record.session_id,
                pose(record),
                explicit_motion(record),
                Rate::default(),
                max_path_length,
            ),
            type_user_id: record.type_user_id,
            component_id: record.component_id,
            shear: record.shear,
            radius: record.radius,
            pressure: record.pressure,
            pressure_rate: explicit_pressure(record),
        }
    }

    // Pointers carry no angular kinematics; the component's rotation is
    // only ever derived from angle changes.
    fn differs(&self, record: &PointerRecord) -> bool {
        let rotation = Rate::explicit(self.angular_velocity(), self.rotation_accel());
        self.type_user_id != record.type_user_id
            || self.component_id != record.component_id
            || self.shear != record.shear
            || self.radius != record.radius
            || self.pressure != record.pressure
            || self.pressure_rate != explicit_pressure(record)
            || self
                .component
                .differs(pose(record), &explicit_motion(record), &rotation)
    }

    fn update(&mut self, time: TimeValue, record: &PointerRecord) {
        let dt = self.component.elapsed(time);
        self.pressure_rate =
            self.pressure_rate
                .next_linear(dt, self.pressure, record.pressure, explicit_pressure(record));
        self.type_user_id = record.type_user_id;
        self.component_id = record.component_id;
        self.shear = record.shear;
        self.radius = record.radius;
        self.pressure = record.pressure;
        self.component.update(
            time,
            dt,
            pose(record),
            explicit_motion(record),
            Rate::default(),
        );
    }

    fn remove(&mut self, time: TimeValue) {
        self.component.remove(time);
    }

    fn slot(object: &mut TuioObject) -> &mut Option<Self> {
        &mut object.pointer
    }
}
