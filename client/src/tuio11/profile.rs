use std::collections::{BTreeMap, HashSet};

use log::{debug, trace};

use tuio_shared::{
    FrameId, InstanceIdPool, OscMessage, ProtocolViolation, SessionId, TimeValue,
    Tuio11Command, TuioRecord,
};

use crate::{client_config::Tuio11Config, tuio11::entity::Tuio11Entity};

pub(crate) enum ProfileEvent<T> {
    Added(T),
    Updated(T),
    Removed(T),
    Refresh(TimeValue),
}

/// Frame buffering and diffing for one TUIO 1.1 profile
///
/// `set` and `alive` messages accumulate until `fseq` closes the frame. The
/// frame is then either committed against the live entities or, if it is
/// stale, thrown away. Either way the buffers start empty for the next one.
pub(crate) struct Profile<T: Tuio11Entity> {
    config: Tuio11Config,
    max_path_length: usize,
    current_frame: FrameId,
    current_time: TimeValue,
    source: Option<String>,
    set_buffer: Vec<T::Record>,
    alive: Option<Vec<SessionId>>,
    entities: BTreeMap<SessionId, T>,
    ids: InstanceIdPool,
}

impl<T: Tuio11Entity> Profile<T> {
    pub fn new(config: Tuio11Config, max_path_length: usize, now: TimeValue) -> Self {
        Self {
            config,
            max_path_length,
            current_frame: 0,
            current_time: now,
            source: None,
            set_buffer: Vec::new(),
            alive: None,
            entities: BTreeMap::new(),
            ids: InstanceIdPool::new(),
        }
    }

    pub fn current_frame(&self) -> FrameId {
        self.current_frame
    }

    pub fn current_time(&self) -> TimeValue {
        self.current_time
    }

    /// Last `source` announced by the sender
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn entities(&self) -> impl Iterator<Item = &T> {
        self.entities.values()
    }

    pub fn get(&self, session_id: SessionId) -> Option<&T> {
        self.entities.get(&session_id)
    }

    #[cfg(test)]
    pub fn free_ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.ids.free_ids()
    }

    /// Applies one profile message. A malformed `set` record is rejected
    /// without touching the rest of the frame.
    pub fn handle(
        &mut self,
        message: &OscMessage,
        now: TimeValue,
    ) -> Result<Vec<ProfileEvent<T>>, ProtocolViolation> {
        match Tuio11Command::read(message)? {
            Tuio11Command::Set => {
                self.set_buffer.push(T::Record::read(message)?);
            }
            Tuio11Command::Alive(session_ids) => {
                self.alive = Some(session_ids);
            }
            Tuio11Command::Fseq(frame_id) => {
                let events = if self.accept_frame(frame_id, now) {
                    self.commit()
                } else {
                    debug!(
                        "{}: dropping stale frame {} (current frame {})",
                        T::Record::ADDRESS,
                        frame_id,
                        self.current_frame
                    );
                    Vec::new()
                };
                self.set_buffer.clear();
                self.alive = None;
                return Ok(events);
            }
            Tuio11Command::Source(source) => {
                self.source = Some(source);
            }
            Tuio11Command::Unknown(command) => {
                debug!("{}: ignoring unknown command {:?}", T::Record::ADDRESS, command);
            }
        }
        Ok(Vec::new())
    }

    /// Decides whether the frame closed by `fseq frame_id` is applied
    ///
    /// Frame 0 marks a redundant bundle, which only counts once no newer
    /// frame has been seen for the configured timeout. Otherwise a frame
    /// is accepted if it is not older than the current one, or so much
    /// older that the sender must have restarted.
    pub fn accept_frame(&mut self, frame_id: FrameId, now: TimeValue) -> bool {
        if frame_id == 0 {
            let elapsed = (now - self.current_time).total_milliseconds();
            if elapsed > self.config.redundant_frame_timeout_ms {
                self.current_time = now;
                return true;
            }
            return false;
        }

        let restarted = self.current_frame.saturating_sub(frame_id) > self.config.max_frame_gap;
        if frame_id < self.current_frame && !restarted {
            return false;
        }
        if frame_id > self.current_frame {
            self.current_time = now;
        }
        self.current_frame = frame_id;
        true
    }

    fn commit(&mut self) -> Vec<ProfileEvent<T>> {
        let Some(alive) = self.alive.take() else {
            return Vec::new();
        };
        let time = self.current_time;
        let alive: HashSet<SessionId> = alive.into_iter().collect();

        let mut events = Vec::new();

        let removed_ids: Vec<SessionId> = self
            .entities
            .keys()
            .filter(|session_id| !alive.contains(session_id))
            .copied()
            .collect();
        for session_id in removed_ids {
            if let Some(mut entity) = self.entities.remove(&session_id) {
                entity.remove(time, &mut self.ids);
                events.push(ProfileEvent::Removed(entity));
            }
        }

        let mut added = 0;
        let mut updated = 0;
        for record in std::mem::take(&mut self.set_buffer) {
            let session_id = record.session_id();
            if !alive.contains(&session_id) {
                continue;
            }
            match self.entities.get_mut(&session_id) {
                Some(entity) => {
                    if entity.differs(&record) {
                        entity.update(time, &record);
                        events.push(ProfileEvent::Updated(entity.clone()));
                        updated += 1;
                    }
                }
                None => {
                    let entity = T::create(time, &record, &mut self.ids, self.max_path_length);
                    self.entities.insert(session_id, entity.clone());
                    events.push(ProfileEvent::Added(entity));
                    added += 1;
                }
            }
        }

        trace!(
            "{}: committed frame {} ({} added, {} updated, {} removed)",
            T::Record::ADDRESS,
            self.current_frame,
            added,
            updated,
            events.len() - added - updated
        );
        events.push(ProfileEvent::Refresh(time));
        events
    }
}
