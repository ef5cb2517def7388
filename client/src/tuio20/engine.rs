use std::{
    collections::{BTreeMap, HashSet},
    sync::RwLock,
};

use log::{debug, trace};

use tuio_shared::{
    AliveRecord, BoundsRecord, FrameId, FrameRecord, OscMessage, PointerRecord,
    ProtocolViolation, SessionId, SymbolRecord, TimeValue, TokenRecord, TuioRecord,
    TUIO20_ALIVE_ADDRESS, TUIO20_BOUNDS_ADDRESS, TUIO20_FRAME_ADDRESS, TUIO20_POINTER_ADDRESS,
    TUIO20_SYMBOL_ADDRESS, TUIO20_TOKEN_ADDRESS,
};

use crate::{
    client_config::Tuio20Config,
    sync::write,
    tuio20::{
        bounds::TuioBounds,
        pointer::TuioPointer,
        symbol::TuioSymbol,
        token::TuioToken,
        tuio_component::{apply_record, ComponentChange},
        tuio_object::TuioObject,
    },
};

/// A component record buffered until its frame's `/tuio2/alv` arrives
#[derive(Debug, Clone)]
pub(crate) enum ComponentRecord {
    Token(TokenRecord),
    Pointer(PointerRecord),
    Bounds(BoundsRecord),
    Symbol(SymbolRecord),
}

impl ComponentRecord {
    fn session_id(&self) -> SessionId {
        match self {
            Self::Token(record) => record.session_id,
            Self::Pointer(record) => record.session_id,
            Self::Bounds(record) => record.session_id,
            Self::Symbol(record) => record.session_id,
        }
    }

    fn apply(&self, object: &mut TuioObject, time: TimeValue, max_path_length: usize) -> ComponentChange {
        match self {
            Self::Token(record) => apply_record::<TuioToken>(object, time, record, max_path_length),
            Self::Pointer(record) => {
                apply_record::<TuioPointer>(object, time, record, max_path_length)
            }
            Self::Bounds(record) => {
                apply_record::<TuioBounds>(object, time, record, max_path_length)
            }
            Self::Symbol(record) => {
                apply_record::<TuioSymbol>(object, time, record, max_path_length)
            }
        }
    }
}

/// The events of one committed frame, in delivery order
#[derive(Debug, Default)]
pub(crate) struct FrameEvents {
    pub added: Vec<TuioObject>,
    pub updated: Vec<TuioObject>,
    pub removed: Vec<TuioObject>,
    pub refresh: Option<TimeValue>,
}

/// Frame buffering state for TUIO 2.0
///
/// `/tuio2/frm` opens a frame, component messages accumulate while that
/// frame is pending, and `/tuio2/alv` closes it. The live objects are kept
/// elsewhere so they can be read while a frame is being assembled.
pub(crate) struct FrameState {
    config: Tuio20Config,
    max_path_length: usize,
    bundle_frame: FrameId,
    pending: Option<(FrameId, TimeValue)>,
    committed_frame: FrameId,
    committed_time: TimeValue,
    source: Option<String>,
    dimension: (u16, u16),
    buffer: Vec<ComponentRecord>,
}

impl FrameState {
    pub fn new(config: Tuio20Config, max_path_length: usize, now: TimeValue) -> Self {
        Self {
            config,
            max_path_length,
            bundle_frame: 0,
            pending: None,
            committed_frame: 0,
            committed_time: now,
            source: None,
            dimension: (0, 0),
            buffer: Vec::new(),
        }
    }

    pub fn committed_frame(&self) -> FrameId {
        self.committed_frame
    }

    pub fn committed_time(&self) -> TimeValue {
        self.committed_time
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn dimension(&self) -> (u16, u16) {
        self.dimension
    }

    /// Handles one message. Only `/tuio2/alv` can produce events, and only
    /// it takes the write lock on `objects`.
    pub fn handle(
        &mut self,
        message: &OscMessage,
        now: TimeValue,
        objects: &RwLock<BTreeMap<SessionId, TuioObject>>,
    ) -> Result<Option<FrameEvents>, ProtocolViolation> {
        match message.address() {
            TUIO20_FRAME_ADDRESS => {
                self.open_frame(FrameRecord::read(message)?, now);
            }
            TUIO20_TOKEN_ADDRESS => {
                self.buffer_record(ComponentRecord::Token(TokenRecord::read(message)?))
            }
            TUIO20_POINTER_ADDRESS => {
                self.buffer_record(ComponentRecord::Pointer(PointerRecord::read(message)?))
            }
            TUIO20_BOUNDS_ADDRESS => {
                self.buffer_record(ComponentRecord::Bounds(BoundsRecord::read(message)?))
            }
            TUIO20_SYMBOL_ADDRESS => {
                self.buffer_record(ComponentRecord::Symbol(SymbolRecord::read(message)?))
            }
            TUIO20_ALIVE_ADDRESS => {
                let alive = AliveRecord::read(message)?;
                return Ok(self.close_frame(alive, objects));
            }
            _ => {}
        }
        Ok(None)
    }

    /// A frame is opened only if its id is newer than the last one seen, or
    /// is the redundant-frame id 0. Opening discards anything buffered for
    /// an earlier frame that never got its `/tuio2/alv`.
    fn open_frame(&mut self, frame: FrameRecord, now: TimeValue) {
        let last_seen = self.bundle_frame;
        self.bundle_frame = frame.frame_id;
        if frame.frame_id <= last_seen && frame.frame_id != 0 {
            debug!(
                "Ignoring frame {} (last seen frame {})",
                frame.frame_id, last_seen
            );
            return;
        }

        let time = if frame.time.is_immediately() {
            now
        } else {
            TimeValue::from_osc_time(frame.time)
        };
        self.buffer.clear();
        self.pending = Some((frame.frame_id, time));
        if !frame.source.is_empty() {
            self.source = Some(frame.source);
        }
        if frame.dimension != (0, 0) {
            self.dimension = frame.dimension;
        }
    }

    fn is_pending(&self) -> bool {
        matches!(self.pending, Some((frame_id, _)) if frame_id == self.bundle_frame)
    }

    fn buffer_record(&mut self, record: ComponentRecord) {
        if self.is_pending() {
            self.buffer.push(record);
        }
    }

    fn close_frame(
        &mut self,
        alive: AliveRecord,
        objects: &RwLock<BTreeMap<SessionId, TuioObject>>,
    ) -> Option<FrameEvents> {
        if !self.is_pending() {
            return None;
        }
        let (frame_id, time) = self.pending.take()?;
        let buffer = std::mem::take(&mut self.buffer);

        let elapsed = (time - self.committed_time).total_milliseconds();
        let valid = frame_id >= self.committed_frame
            || frame_id == 0
            || elapsed >= self.config.stale_source_timeout_ms;
        if !valid {
            debug!(
                "Dropping stale frame {} (committed frame {})",
                frame_id, self.committed_frame
            );
            return None;
        }

        if frame_id != 0 {
            self.committed_frame = frame_id;
        }
        self.committed_time = time;

        let mut live = write(objects);
        Some(commit(
            &mut live,
            alive.session_ids(),
            &buffer,
            time,
            self.max_path_length,
        ))
    }
}

fn commit(
    objects: &mut BTreeMap<SessionId, TuioObject>,
    alive_ids: &[SessionId],
    buffer: &[ComponentRecord],
    time: TimeValue,
    max_path_length: usize,
) -> FrameEvents {
    let alive: HashSet<SessionId> = alive_ids.iter().copied().collect();

    for object in objects.values_mut() {
        object.set_idle();
    }

    let mut added_ids: Vec<SessionId> = Vec::new();
    for session_id in alive_ids {
        if !objects.contains_key(session_id) && !added_ids.contains(session_id) {
            objects.insert(*session_id, TuioObject::new(time, *session_id));
            added_ids.push(*session_id);
        }
    }

    let removed_ids: Vec<SessionId> = objects
        .keys()
        .filter(|session_id| !alive.contains(session_id))
        .copied()
        .collect();
    let mut removed = Vec::with_capacity(removed_ids.len());
    for session_id in removed_ids {
        if let Some(mut object) = objects.remove(&session_id) {
            object.remove(time);
            removed.push(object);
        }
    }

    let mut updated_ids: Vec<SessionId> = Vec::new();
    for record in buffer {
        let session_id = record.session_id();
        let Some(object) = objects.get_mut(&session_id) else {
            continue;
        };
        match record.apply(object, time, max_path_length) {
            ComponentChange::Added => {
                object.touch(time);
                if !added_ids.contains(&session_id) {
                    added_ids.push(session_id);
                }
            }
            ComponentChange::Updated => {
                object.touch(time);
                if !updated_ids.contains(&session_id) {
                    updated_ids.push(session_id);
                }
            }
            ComponentChange::Unchanged => {}
        }
    }
    updated_ids.retain(|session_id| !added_ids.contains(session_id));

    let snapshot = |ids: &[SessionId]| -> Vec<TuioObject> {
        ids.iter()
            .filter_map(|session_id| objects.get(session_id).cloned())
            .collect()
    };
    let events = FrameEvents {
        added: snapshot(&added_ids),
        updated: snapshot(&updated_ids),
        removed,
        refresh: Some(time),
    };
    trace!(
        "Committed frame at {} ({} added, {} updated, {} removed)",
        time,
        events.added.len(),
        events.updated.len(),
        events.removed.len()
    );
    events
}
