use tuio_shared::TimeValue;

use crate::tuio20::tuio_object::TuioObject;

/// Receives TUIO 2.0 object events
///
/// For each committed frame the client delivers every `tuio_add`, then
/// every `tuio_update`, then every `tuio_remove`, then one `tuio_refresh`.
/// An object gaining a component it did not have counts as added; an
/// object is never both added and updated in the same frame. Listeners are
/// called in registration order, after the live index has been unlocked.
pub trait Tuio20Listener {
    fn tuio_add(&mut self, _object: &TuioObject) {}
    fn tuio_update(&mut self, _object: &TuioObject) {}
    fn tuio_remove(&mut self, _object: &TuioObject) {}
    fn tuio_refresh(&mut self, _time: TimeValue) {}
}
