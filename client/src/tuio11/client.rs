use std::sync::{Arc, Mutex};

use log::warn;

use tuio_shared::{
    Clock, FrameId, MessageQueue, OscMessage, ProtocolViolation, SessionId, SystemClock,
    TimeValue, TUIO11_BLOB_ADDRESS, TUIO11_CURSOR_ADDRESS, TUIO11_OBJECT_ADDRESS,
};

use crate::{
    client_config::ClientConfig,
    error::TuioClientError,
    sync::lock,
    tuio11::{
        blob::Tuio11Blob,
        cursor::Tuio11Cursor,
        entity::Tuio11Entity,
        listener::Tuio11Listener,
        object::Tuio11Object,
        profile::{Profile, ProfileEvent},
    },
};

/// Receives TUIO 1.1 bundles and tracks the cursors, objects and blobs they
/// describe
///
/// The three profiles are independent: each has its own frame sequence,
/// alive set and live entities.
pub struct Tuio11Client {
    queue: MessageQueue,
    engine: Arc<Tuio11Engine>,
}

struct Tuio11Engine {
    clock: Arc<dyn Clock>,
    cursors: Mutex<Profile<Tuio11Cursor>>,
    objects: Mutex<Profile<Tuio11Object>>,
    blobs: Mutex<Profile<Tuio11Blob>>,
    listeners: Mutex<Vec<Box<dyn Tuio11Listener + Send>>>,
}

impl Tuio11Client {
    pub fn new(config: ClientConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Uses `clock` for every frame-staleness decision
    pub fn with_clock(config: ClientConfig, clock: Arc<dyn Clock>) -> Self {
        let now = clock.now();
        let engine = Arc::new(Tuio11Engine {
            cursors: Mutex::new(Profile::new(
                config.tuio11.clone(),
                config.max_path_length,
                now,
            )),
            objects: Mutex::new(Profile::new(
                config.tuio11.clone(),
                config.max_path_length,
                now,
            )),
            blobs: Mutex::new(Profile::new(config.tuio11, config.max_path_length, now)),
            clock,
            listeners: Mutex::new(Vec::new()),
        });

        let queue = MessageQueue::new(config.auto_process);
        for address in [
            TUIO11_CURSOR_ADDRESS,
            TUIO11_OBJECT_ADDRESS,
            TUIO11_BLOB_ADDRESS,
        ] {
            let engine = engine.clone();
            queue.add_listener(
                address,
                Box::new(move |message: &OscMessage| {
                    if let Err(violation) = engine.apply(message) {
                        warn!("Dropping record: {}", violation);
                    }
                }),
            );
        }

        Self { queue, engine }
    }

    // Input

    /// Decodes one OSC packet and queues its messages; with auto-process
    /// they are applied right away. A malformed buffer is logged and dropped.
    pub fn on_buffer(&self, bytes: &[u8]) {
        self.queue.on_buffer(bytes);
    }

    pub fn try_on_buffer(&self, bytes: &[u8]) -> Result<usize, TuioClientError> {
        Ok(self.queue.try_on_buffer(bytes)?)
    }

    /// Applies every queued message. Returns how many there were.
    pub fn process_messages(&self) -> usize {
        self.queue.process_messages()
    }

    /// Applies one decoded message immediately, bypassing the queue.
    /// Messages for other addresses are ignored.
    pub fn try_apply(&self, message: &OscMessage) -> Result<(), TuioClientError> {
        Ok(self.engine.apply(message)?)
    }

    // Listeners

    pub fn add_listener(&self, listener: impl Tuio11Listener + Send + 'static) {
        lock(&self.engine.listeners).push(Box::new(listener));
    }

    pub fn remove_all_listeners(&self) {
        lock(&self.engine.listeners).clear();
    }

    // Entities

    pub fn get_tuio_cursors(&self) -> Vec<Tuio11Cursor> {
        lock(&self.engine.cursors).entities().cloned().collect()
    }

    pub fn get_tuio_objects(&self) -> Vec<Tuio11Object> {
        lock(&self.engine.objects).entities().cloned().collect()
    }

    pub fn get_tuio_blobs(&self) -> Vec<Tuio11Blob> {
        lock(&self.engine.blobs).entities().cloned().collect()
    }

    pub fn get_cursor(&self, session_id: SessionId) -> Option<Tuio11Cursor> {
        lock(&self.engine.cursors).get(session_id).cloned()
    }

    pub fn get_object(&self, session_id: SessionId) -> Option<Tuio11Object> {
        lock(&self.engine.objects).get(session_id).cloned()
    }

    pub fn get_blob(&self, session_id: SessionId) -> Option<Tuio11Blob> {
        lock(&self.engine.blobs).get(session_id).cloned()
    }

    // Frames

    pub fn cursor_frame(&self) -> (FrameId, TimeValue) {
        let profile = lock(&self.engine.cursors);
        (profile.current_frame(), profile.current_time())
    }

    pub fn object_frame(&self) -> (FrameId, TimeValue) {
        let profile = lock(&self.engine.objects);
        (profile.current_frame(), profile.current_time())
    }

    pub fn blob_frame(&self) -> (FrameId, TimeValue) {
        let profile = lock(&self.engine.blobs);
        (profile.current_frame(), profile.current_time())
    }

    /// Source announced on any profile, cursors first
    pub fn source(&self) -> Option<String> {
        [
            lock(&self.engine.cursors).source().map(str::to_owned),
            lock(&self.engine.objects).source().map(str::to_owned),
            lock(&self.engine.blobs).source().map(str::to_owned),
        ]
        .into_iter()
        .flatten()
        .next()
    }
}

impl Tuio11Engine {
    fn apply(&self, message: &OscMessage) -> Result<(), ProtocolViolation> {
        match message.address() {
            TUIO11_CURSOR_ADDRESS => self.apply_to(&self.cursors, message),
            TUIO11_OBJECT_ADDRESS => self.apply_to(&self.objects, message),
            TUIO11_BLOB_ADDRESS => self.apply_to(&self.blobs, message),
            _ => Ok(()),
        }
    }

    fn apply_to<T: Tuio11Entity>(
        &self,
        profile: &Mutex<Profile<T>>,
        message: &OscMessage,
    ) -> Result<(), ProtocolViolation> {
        let now = self.clock.now();
        // The profile lock is released before any listener runs.
        let events = lock(profile).handle(message, now)?;
        if events.is_empty() {
            return Ok(());
        }

        let mut listeners = lock(&self.listeners);
        for event in &events {
            for listener in listeners.iter_mut() {
                let listener: &mut dyn Tuio11Listener = listener.as_mut();
                match event {
                    ProfileEvent::Added(entity) => entity.notify_add(listener),
                    ProfileEvent::Updated(entity) => entity.notify_update(listener),
                    ProfileEvent::Removed(entity) => entity.notify_remove(listener),
                    ProfileEvent::Refresh(time) => listener.refresh(*time),
                }
            }
        }
        Ok(())
    }
}
