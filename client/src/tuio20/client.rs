use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex, RwLock},
};

use log::warn;

use tuio_shared::{
    Clock, FrameId, MessageQueue, OscMessage, ProtocolViolation, SessionId, SystemClock,
    TimeValue, TUIO20_ALIVE_ADDRESS, TUIO20_BOUNDS_ADDRESS, TUIO20_FRAME_ADDRESS,
    TUIO20_POINTER_ADDRESS, TUIO20_SYMBOL_ADDRESS, TUIO20_TOKEN_ADDRESS,
};

use crate::{
    client_config::ClientConfig,
    error::TuioClientError,
    sync::{lock, read},
    tuio20::{
        bounds::TuioBounds, engine::FrameState, listener::Tuio20Listener, pointer::TuioPointer,
        symbol::TuioSymbol, token::TuioToken, tuio_object::TuioObject,
    },
};

const ADDRESSES: [&str; 6] = [
    TUIO20_FRAME_ADDRESS,
    TUIO20_TOKEN_ADDRESS,
    TUIO20_POINTER_ADDRESS,
    TUIO20_BOUNDS_ADDRESS,
    TUIO20_SYMBOL_ADDRESS,
    TUIO20_ALIVE_ADDRESS,
];

/// Receives TUIO 2.0 bundles and tracks the objects they describe
///
/// The live objects sit behind their own lock, separate from the frame
/// being assembled, so the accessors here can be called from any thread
/// while frames are processed.
pub struct Tuio20Client {
    queue: MessageQueue,
    engine: Arc<Tuio20Engine>,
}

struct Tuio20Engine {
    clock: Arc<dyn Clock>,
    frame: Mutex<FrameState>,
    objects: RwLock<BTreeMap<SessionId, TuioObject>>,
    listeners: Mutex<Vec<Box<dyn Tuio20Listener + Send>>>,
}

impl Tuio20Client {
    pub fn new(config: ClientConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Uses `clock` for frames whose time tag is "immediately"
    pub fn with_clock(config: ClientConfig, clock: Arc<dyn Clock>) -> Self {
        let now = clock.now();
        let engine = Arc::new(Tuio20Engine {
            frame: Mutex::new(FrameState::new(config.tuio20, config.max_path_length, now)),
            clock,
            objects: RwLock::new(BTreeMap::new()),
            listeners: Mutex::new(Vec::new()),
        });

        let queue = MessageQueue::new(config.auto_process);
        for address in ADDRESSES {
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

    pub fn add_listener(&self, listener: impl Tuio20Listener + Send + 'static) {
        lock(&self.engine.listeners).push(Box::new(listener));
    }

    pub fn remove_all_listeners(&self) {
        lock(&self.engine.listeners).clear();
    }

    // Objects

    pub fn get_tuio_objects(&self) -> Vec<TuioObject> {
        read(&self.engine.objects).values().cloned().collect()
    }

    pub fn get_tuio_object(&self, session_id: SessionId) -> Option<TuioObject> {
        read(&self.engine.objects).get(&session_id).cloned()
    }

    pub fn get_tuio_tokens(&self) -> Vec<TuioToken> {
        self.collect(|object| object.token())
    }

    pub fn get_tuio_pointers(&self) -> Vec<TuioPointer> {
        self.collect(|object| object.pointer())
    }

    pub fn get_tuio_bounds(&self) -> Vec<TuioBounds> {
        self.collect(|object| object.bounds())
    }

    pub fn get_tuio_symbols(&self) -> Vec<TuioSymbol> {
        self.collect(|object| object.symbol())
    }

    fn collect<C: Clone>(&self, component: impl Fn(&TuioObject) -> Option<&C>) -> Vec<C> {
        read(&self.engine.objects)
            .values()
            .filter_map(|object| component(object).cloned())
            .collect()
    }

    // Frames

    /// Id and time of the last committed frame
    pub fn frame(&self) -> (FrameId, TimeValue) {
        let frame = lock(&self.engine.frame);
        (frame.committed_frame(), frame.committed_time())
    }

    /// Source announced by the latest `/tuio2/frm` that carried one
    pub fn source(&self) -> Option<String> {
        lock(&self.engine.frame).source().map(str::to_owned)
    }

    /// Sensor dimension announced by the sender, `(0, 0)` until known
    pub fn dimension(&self) -> (u16, u16) {
        lock(&self.engine.frame).dimension()
    }
}

impl Tuio20Engine {
    fn apply(&self, message: &OscMessage) -> Result<(), ProtocolViolation> {
        let now = self.clock.now();
        // Both the frame lock and the index lock are released before any
        // listener runs.
        let events = lock(&self.frame).handle(message, now, &self.objects)?;
        let Some(events) = events else {
            return Ok(());
        };

        let mut listeners = lock(&self.listeners);
        for object in &events.added {
            for listener in listeners.iter_mut() {
                listener.tuio_add(object);
            }
        }
        for object in &events.updated {
            for listener in listeners.iter_mut() {
                listener.tuio_update(object);
            }
        }
        for object in &events.removed {
            for listener in listeners.iter_mut() {
                listener.tuio_remove(object);
            }
        }
        if let Some(time) = events.refresh {
            for listener in listeners.iter_mut() {
                listener.tuio_refresh(time);
            }
        }
        Ok(())
    }
}
