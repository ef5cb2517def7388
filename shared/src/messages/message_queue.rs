use std::{
    collections::{HashMap, VecDeque},
    sync::{Mutex, MutexGuard, PoisonError},
};

use log::{trace, warn};

use tuio_serde::{OscMessage, OscPacket};

use crate::messages::error::MessageQueueError;

/// Callback invoked with every dispatched message for one address
pub type MessageHandler = Box<dyn FnMut(&OscMessage) + Send>;

/// Decodes incoming buffers into messages, queues them, and dispatches them
/// by address to the handlers registered for that address
///
/// Enqueueing may happen on a network thread while draining happens on
/// another. Handlers run synchronously, in registration order, while the
/// drain lock is held: a handler must not block, and must not call back into
/// the same queue.
pub struct MessageQueue {
    auto_process: bool,
    queue: Mutex<VecDeque<OscMessage>>,
    handlers: Mutex<HashMap<String, Vec<MessageHandler>>>,
}

impl MessageQueue {
    /// With `auto_process`, every buffer is dispatched as soon as it has been
    /// enqueued; otherwise messages wait for `process_messages`
    pub fn new(auto_process: bool) -> Self {
        Self {
            auto_process,
            queue: Mutex::new(VecDeque::new()),
            handlers: Mutex::new(HashMap::new()),
        }
    }

    pub fn auto_process(&self) -> bool {
        self.auto_process
    }

    /// Registers `handler` for `address`. Several handlers may share an address.
    pub fn add_listener(&self, address: impl Into<String>, handler: MessageHandler) {
        lock(&self.handlers)
            .entry(address.into())
            .or_default()
            .push(handler);
    }

    /// Removes every handler registered for `address`, returning whether any were
    pub fn remove_listener(&self, address: &str) -> bool {
        lock(&self.handlers).remove(address).is_some()
    }

    pub fn has_listener(&self, address: &str) -> bool {
        lock(&self.handlers).contains_key(address)
    }

    /// Decodes one OSC packet from `bytes` and enqueues its messages in wire
    /// order, returning how many were enqueued
    pub fn try_on_buffer(&self, bytes: &[u8]) -> Result<usize, MessageQueueError> {
        let packet =
            OscPacket::try_unpack(bytes).map_err(|source| MessageQueueError::UndecodableBuffer {
                len: bytes.len(),
                source,
            })?;

        let messages = packet.into_messages();
        let count = messages.len();
        {
            let mut queue = lock(&self.queue);
            queue.extend(messages);
        }

        if self.auto_process {
            self.process_messages();
        }
        Ok(count)
    }

    /// Like `try_on_buffer`, but a malformed buffer is logged and dropped
    pub fn on_buffer(&self, bytes: &[u8]) {
        if let Err(error) = self.try_on_buffer(bytes) {
            warn!("{}", error);
        }
    }

    /// Enqueues one already-decoded message
    pub fn enqueue(&self, message: OscMessage) {
        lock(&self.queue).push_back(message);
        if self.auto_process {
            self.process_messages();
        }
    }

    pub fn pending(&self) -> usize {
        lock(&self.queue).len()
    }

    /// Drains the queue, delivering each message to the handlers for its
    /// address. Returns the number of messages drained.
    pub fn process_messages(&self) -> usize {
        let mut queue = lock(&self.queue);
        let mut handlers = lock(&self.handlers);

        let mut drained = 0;
        while let Some(message) = queue.pop_front() {
            drained += 1;
            let Some(list) = handlers.get_mut(message.address()) else {
                trace!("No handler for {}", message.address());
                continue;
            };
            for handler in list.iter_mut() {
                handler(&message);
            }
        }
        drained
    }
}

// A handler that panicked leaves the queue usable; the stream goes on.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| {
        warn!("Recovering message queue lock poisoned by a panicking handler");
        PoisonError::into_inner(poisoned)
    })
}
