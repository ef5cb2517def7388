use std::ops::Deref;

use log::warn;

use tuio_shared::{BlobSet, InstanceId, InstanceIdPool, Motion, Rate, TimeValue};

use crate::tuio11::{container::Container, entity::Tuio11Entity, listener::Tuio11Listener};

/// An untagged shape from the `/tuio/2Dblb` profile, described by its
/// oriented bounding ellipse
#[derive(Debug, Clone, PartialEq)]
pub struct Tuio11Blob {
    container: Container,
    blob_id: InstanceId,
    angle: f32,
    width: f32,
    height: f32,
    area: f32,
    rotation: Rate,
}

impl Tuio11Blob {
    /// Small id, unique among live blobs and reused after removal
    pub fn blob_id(&self) -> InstanceId {
        self.blob_id
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn angle_degrees(&self) -> f32 {
        self.angle.to_degrees()
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn area(&self) -> f32 {
        self.area
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

impl Deref for Tuio11Blob {
    type Target = Container;

    fn deref(&self) -> &Container {
        &self.container
    }
}

fn explicit_motion(record: &BlobSet) -> Motion {
    Motion::explicit(record.x_speed, record.y_speed, record.motion_accel)
}

fn explicit_rotation(record: &BlobSet) -> Rate {
    Rate::explicit(record.rotation_speed, record.rotation_accel)
}

impl Tuio11Entity for Tuio11Blob {
    type Record = BlobSet;

    fn create(
        time: TimeValue,
        record: &BlobSet,
        ids: &mut InstanceIdPool,
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
            blob_id: ids.acquire(),
            angle: record.angle,
            width: record.width,
            height: record.height,
            area: record.area,
            rotation: explicit_rotation(record),
        }
    }

    fn differs(&self, record: &BlobSet) -> bool {
        self.container
            .differs(record.x, record.y, &explicit_motion(record))
            || self.angle != record.angle
            || self.width != record.width
            || self.height != record.height
            || self.area != record.area
            || self.rotation != explicit_rotation(record)
    }

    fn update(&mut self, time: TimeValue, record: &BlobSet) {
        let dt = self.container.elapsed(time);
        self.rotation = self
            .rotation
            .next_angular(dt, self.angle, record.angle, explicit_rotation(record));
        self.angle = record.angle;
        self.width = record.width;
        self.height = record.height;
        self.area = record.area;
        self.container.move_to(
            time,
            dt,
            record.x,
            record.y,
            explicit_motion(record),
            self.rotation.accel,
        );
    }

    fn remove(&mut self, time: TimeValue, ids: &mut InstanceIdPool) {
        self.container.remove(time);
        if let Err(error) = ids.try_release(self.blob_id) {
            warn!("Blob {}: {}", self.session_id(), error);
        }
    }

    fn notify_add(&self, listener: &mut dyn Tuio11Listener) {
        listener.add_tuio_blob(self);
    }

    fn notify_update(&self, listener: &mut dyn Tuio11Listener) {
        listener.update_tuio_blob(self);
    }

    fn notify_remove(&self, listener: &mut dyn Tuio11Listener) {
        listener.remove_tuio_blob(self);
    }
}
