use std::ops::Deref;

use log::warn;

use tuio_shared::{CursorSet, InstanceId, InstanceIdPool, Motion, TimeValue};

use crate::tuio11::{container::Container, entity::Tuio11Entity, listener::Tuio11Listener};

/// A touch point from the `/tuio/2Dcur` profile
#[derive(Debug, Clone, PartialEq)]
pub struct Tuio11Cursor {
    container: Container,
    cursor_id: InstanceId,
}

impl Tuio11Cursor {
    /// Small id, unique among live cursors and reused after removal
    pub fn cursor_id(&self) -> InstanceId {
        self.cursor_id
    }

    pub fn container(&self) -> &Container {
        &self.container
    }
}

impl Deref for Tuio11Cursor {
    type Target = Container;

    fn deref(&self) -> &Container {
        &self.container
    }
}

fn explicit_motion(record: &CursorSet) -> Motion {
    Motion::explicit(record.x_speed, record.y_speed, record.motion_accel)
}

impl Tuio11Entity for Tuio11Cursor {
    type Record = CursorSet;

    fn create(
        time: TimeValue,
        record: &CursorSet,
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
            cursor_id: ids.acquire(),
        }
    }

    fn differs(&self, record: &CursorSet) -> bool {
        self.container
            .differs(record.x, record.y, &explicit_motion(record))
    }

    fn update(&mut self, time: TimeValue, record: &CursorSet) {
        let dt = self.container.elapsed(time);
        self.container
            .move_to(time, dt, record.x, record.y, explicit_motion(record), 0.0);
    }

    fn remove(&mut self, time: TimeValue, ids: &mut InstanceIdPool) {
        self.container.remove(time);
        if let Err(error) = ids.try_release(self.cursor_id) {
            warn!("Cursor {}: {}", self.session_id(), error);
        }
    }

    fn notify_add(&self, listener: &mut dyn Tuio11Listener) {
        listener.add_tuio_cursor(self);
    }

    fn notify_update(&self, listener: &mut dyn Tuio11Listener) {
        listener.update_tuio_cursor(self);
    }

    fn notify_remove(&self, listener: &mut dyn Tuio11Listener) {
        listener.remove_tuio_cursor(self);
    }
}
