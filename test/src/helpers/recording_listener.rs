use std::sync::{Arc, Mutex};

use tuio_client::{
    Tuio11Blob, Tuio11Cursor, Tuio11Listener, Tuio11Object, Tuio20Listener, TuioObject,
};
use tuio_shared::{InstanceId, SessionId, SymbolId, TimeValue};

/// One TUIO 1.1 listener callback, reduced to the ids involved
#[derive(Debug, Clone, PartialEq)]
pub enum Tuio11Event {
    AddCursor { session_id: SessionId, cursor_id: InstanceId },
    UpdateCursor { session_id: SessionId, x: f32, y: f32 },
    RemoveCursor { session_id: SessionId, cursor_id: InstanceId },
    AddObject { session_id: SessionId, symbol_id: SymbolId },
    UpdateObject { session_id: SessionId },
    RemoveObject { session_id: SessionId },
    AddBlob { session_id: SessionId, blob_id: InstanceId },
    UpdateBlob { session_id: SessionId },
    RemoveBlob { session_id: SessionId, blob_id: InstanceId },
    Refresh(TimeValue),
}

/// One TUIO 2.0 listener callback
#[derive(Debug, Clone, PartialEq)]
pub enum Tuio20Event {
    Add(SessionId),
    Update(SessionId),
    Remove(SessionId),
    Refresh(TimeValue),
}

/// Shared handle on the events a recording listener has captured
#[derive(Clone)]
pub struct EventLog<E> {
    events: Arc<Mutex<Vec<E>>>,
}

impl<E: Clone> EventLog<E> {
    fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn push(&self, event: E) {
        self.events.lock().unwrap().push(event);
    }

    /// Returns and clears everything recorded so far
    pub fn take(&self) -> Vec<E> {
        std::mem::take(&mut *self.events.lock().unwrap())
    }

    pub fn len(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub struct RecordingTuio11Listener {
    log: EventLog<Tuio11Event>,
}

impl RecordingTuio11Listener {
    pub fn new() -> (Self, EventLog<Tuio11Event>) {
        let log = EventLog::new();
        (Self { log: log.clone() }, log)
    }
}

impl Tuio11Listener for RecordingTuio11Listener {
    fn add_tuio_cursor(&mut self, cursor: &Tuio11Cursor) {
        self.log.push(Tuio11Event::AddCursor {
            session_id: cursor.session_id(),
            cursor_id: cursor.cursor_id(),
        });
    }

    fn update_tuio_cursor(&mut self, cursor: &Tuio11Cursor) {
        self.log.push(Tuio11Event::UpdateCursor {
            session_id: cursor.session_id(),
            x: cursor.x(),
            y: cursor.y(),
        });
    }

    fn remove_tuio_cursor(&mut self, cursor: &Tuio11Cursor) {
        self.log.push(Tuio11Event::RemoveCursor {
            session_id: cursor.session_id(),
            cursor_id: cursor.cursor_id(),
        });
    }

    fn add_tuio_object(&mut self, object: &Tuio11Object) {
        self.log.push(Tuio11Event::AddObject {
            session_id: object.session_id(),
            symbol_id: object.symbol_id(),
        });
    }

    fn update_tuio_object(&mut self, object: &Tuio11Object) {
        self.log.push(Tuio11Event::UpdateObject {
            session_id: object.session_id(),
        });
    }

    fn remove_tuio_object(&mut self, object: &Tuio11Object) {
        self.log.push(Tuio11Event::RemoveObject {
            session_id: object.session_id(),
        });
    }

    fn add_tuio_blob(&mut self, blob: &Tuio11Blob) {
        self.log.push(Tuio11Event::AddBlob {
            session_id: blob.session_id(),
            blob_id: blob.blob_id(),
        });
    }

    fn update_tuio_blob(&mut self, blob: &Tuio11Blob) {
        self.log.push(Tuio11Event::UpdateBlob {
            session_id: blob.session_id(),
        });
    }

    fn remove_tuio_blob(&mut self, blob: &Tuio11Blob) {
        self.log.push(Tuio11Event::RemoveBlob {
            session_id: blob.session_id(),
            blob_id: blob.blob_id(),
        });
    }

    fn refresh(&mut self, time: TimeValue) {
        self.log.push(Tuio11Event::Refresh(time));
    }
}

pub struct RecordingTuio20Listener {
    log: EventLog<Tuio20Event>,
}

impl RecordingTuio20Listener {
    pub fn new() -> (Self, EventLog<Tuio20Event>) {
        let log = EventLog::new();
        (Self { log: log.clone() }, log)
    }
}

impl Tuio20Listener for RecordingTuio20Listener {
    fn tuio_add(&mut self, object: &TuioObject) {
        self.log.push(Tuio20Event::Add(object.session_id()));
    }

    fn tuio_update(&mut self, object: &TuioObject) {
        self.log.push(Tuio20Event::Update(object.session_id()));
    }

    fn tuio_remove(&mut self, object: &TuioObject) {
        self.log.push(Tuio20Event::Remove(object.session_id()));
    }

    fn tuio_refresh(&mut self, time: TimeValue) {
        self.log.push(Tuio20Event::Refresh(time));
    }
}
