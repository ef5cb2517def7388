use tuio_shared::{InstanceIdPool, TimeValue, TuioRecord};

use crate::tuio11::listener::Tuio11Listener;

/// A TUIO 1.1 profile entity: built from, compared against, and updated by
/// the `set` record of its profile
pub(crate) trait Tuio11Entity: Clone + Send + 'static {
    type Record: TuioRecord + Send + 'static;

    /// Builds a new entity, taking an instance id from `ids` if the profile
    /// recycles them
    fn create(
        time: TimeValue,
        record: &Self::Record,
        ids: &mut InstanceIdPool,
        max_path_length: usize,
    ) -> Self;

    fn differs(&self, record: &Self::Record) -> bool;

    fn update(&mut self, time: TimeValue, record: &Self::Record);

    /// Transitions to Removed, giving any instance id back to `ids`
    fn remove(&mut self, time: TimeValue, ids: &mut InstanceIdPool);

    fn notify_add(&self, listener: &mut dyn Tuio11Listener);
    fn notify_update(&self, listener: &mut dyn Tuio11Listener);
    fn notify_remove(&self, listener: &mut dyn Tuio11Listener);
}
