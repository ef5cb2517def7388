use tuio_shared::TimeValue;

use crate::tuio11::{blob::Tuio11Blob, cursor::Tuio11Cursor, object::Tuio11Object};

/// Receives TUIO 1.1 entity events
///
/// Every method defaults to doing nothing, so a listener only implements
/// what it cares about. Events are delivered synchronously, in listener
/// registration order, after the profile's state has been updated. A
/// listener must not register or remove listeners on the client that is
/// calling it.
pub trait Tuio11Listener {
    fn add_tuio_cursor(&mut self, _cursor: &Tuio11Cursor) {}
    fn update_tuio_cursor(&mut self, _cursor: &Tuio11Cursor) {}
    fn remove_tuio_cursor(&mut self, _cursor: &Tuio11Cursor) {}

    fn add_tuio_object(&mut self, _object: &Tuio11Object) {}
    fn update_tuio_object(&mut self, _object: &Tuio11Object) {}
    fn remove_tuio_object(&mut self, _object: &Tuio11Object) {}

    fn add_tuio_blob(&mut self, _blob: &Tuio11Blob) {}
    fn update_tuio_blob(&mut self, _blob: &Tuio11Blob) {}
    fn remove_tuio_blob(&mut self, _blob: &Tuio11Blob) {}

    /// Once per committed frame of each profile
    fn refresh(&mut self, _time: TimeValue) {}
}
