use std::ops::Deref;

use tuio_shared::{InstanceIdPool, Motion, ObjectSet, Rate, SymbolId, TimeValue};

use crate::tuio11::{container::Container, entity::Tuio11Entity, listener::Tuio11Listener};

/// A tagged physical object from the `/tuio/2Dobj` profile
#[derive(Debug, Clone, PartialEq)]
pub struct Tuio11Object {
    container: Container,
    symbol_id: SymbolId,
    angle: f32,
    rotation: Rate,
}

impl Tuio11Object {
    /// Fiducial marker id
    pub fn symbol_id(&self) -> SymbolId {
        self.symbol_id
    }

    /// Radians
    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn angle_degrees(&self) -> f32 {
        self.angle.to_degrees()
    }

    pub fn rotation_speed(&self) -> f32 {
        self.rotation.speed
    }

    pub fn rotation_accel(&self) -> f32 {
        self.rotation.accel
    }

    pub fn container(&self) -> &Container {
        &self.container
    }
}

impl Deref for Tuio11Object {
    type Target = Container;

    fn deref(&self) -> &Container {
        &self.container
    }
}

fn explicit_motion(record: &ObjectSet) -> Motion {
    Motion::explicit(record.x_speed, record.y_speed, record.motion_accel)
}

fn explicit_rotation(record: &ObjectSet) -> Rate {
    Rate::explicit(record.rotation_speed, record.rotation_accel)
}

impl Tuio11Entity for Tuio11Object {
    type Record = ObjectSet;

    fn create(
        time: TimeValue,
        record: &ObjectSet,
        _ids: &mut InstanceIdPool,
        max_path_length: usize,
    ) -> Self {
        Self {
            container: Container::new(
                time,
                record.session_id,
                record.x,
                record.y,
                explicit_motion(record),
                max_path_length,
            ),
            symbol_id: record.symbol_id,
            angle: record.angle,
            rotation: explicit_rotation(record),
        }
    }

    fn differs(&self, record: &ObjectSet) -> bool {
        self.container
            .differs(record.x, record.y, &explicit_motion(record))
            || self.symbol_id != record.symbol_id
            || self.angle != record.angle
            || self.rotation != explicit_rotation(record)
    }

    fn update(&mut self, time: TimeValue, record: &ObjectSet) {
        let dt = self.container.elapsed(time);
        self.rotation = self
            .rotation
            .next_angular(dt, self.angle, record.angle, explicit_rotation(record));
        self.angle = record.angle;
        self.symbol_id = record.symbol_id;
        self.container.move_to(
            time,
            dt,
            record.x,
            record.y,
            explicit_motion(record),
            self.rotation.accel,
        );
    }

    fn remove(&mut self, time: TimeValue, _ids: &mut InstanceIdPool) {
        self.container.remove(time);
    }

    fn notify_add(&self, listener: &mut dyn Tuio11Listener) {
        listener.add_tuio_object(self);
    }

    fn notify_update(&self, listener: &mut dyn Tuio11Listener) {
        listener.update_tuio_object(self);
    }

    fn notify_remove(&self, listener: &mut dyn Tuio11Listener) {
        listener.remove_tuio_object(self);
    }
}
