use std::collections::{BTreeMap, BTreeSet};

use log::trace;

use tuio_shared::{
    BlobSet, CursorSet, FrameId, ObjectSet, OscBundle, OscTime, SessionId, SymbolId,
    Tuio11Command, TuioRecord,
};

use crate::{error::TuioServerError, server_config::ServerConfig};

/// Live records of one TUIO 1.1 profile and what changed since the last frame
struct SenderProfile<R> {
    records: BTreeMap<SessionId, R>,
    changed: BTreeSet<SessionId>,
    alive_changed: bool,
}

impl<R: TuioRecord> SenderProfile<R> {
    fn new() -> Self {
        Self {
            records: BTreeMap::new(),
            changed: BTreeSet::new(),
            alive_changed: false,
        }
    }

    fn insert(&mut self, record: R) {
        let session_id = record.session_id();
        self.records.insert(session_id, record);
        self.changed.insert(session_id);
        self.alive_changed = true;
    }

    fn update(
        &mut self,
        session_id: SessionId,
        apply: impl FnOnce(&mut R),
    ) -> Result<(), TuioServerError> {
        let record = self
            .records
            .get_mut(&session_id)
            .ok_or(TuioServerError::UnknownSession {
                address: R::ADDRESS,
                session_id,
            })?;
        apply(record);
        self.changed.insert(session_id);
        Ok(())
    }

    fn remove(&mut self, session_id: SessionId) -> Result<R, TuioServerError> {
        let record = self
            .records
            .remove(&session_id)
            .ok_or(TuioServerError::UnknownSession {
                address: R::ADDRESS,
                session_id,
            })?;
        self.changed.remove(&session_id);
        self.alive_changed = true;
        Ok(record)
    }

    /// Appends `source`, `alive`, the `set` records and `fseq` for this
    /// profile. An idle profile with nothing to report is skipped.
    fn write_frame(
        &mut self,
        bundle: &mut OscBundle,
        frame_id: FrameId,
        source: Option<&str>,
        full_update: bool,
    ) {
        if self.records.is_empty() && !self.alive_changed {
            return;
        }

        if let Some(source) = source {
            bundle.push(Tuio11Command::Source(source.to_owned()).to_message(R::ADDRESS));
        }
        let alive = self.records.keys().copied().collect();
        bundle.push(Tuio11Command::Alive(alive).to_message(R::ADDRESS));
        for (session_id, record) in &self.records {
            if full_update || self.changed.contains(session_id) {
                bundle.push(record.to_message());
            }
        }
        bundle.push(Tuio11Command::Fseq(frame_id).to_message(R::ADDRESS));

        self.changed.clear();
        self.alive_changed = false;
    }
}

/// Builds TUIO 1.1 bundles for the cursor, object and blob profiles
///
/// Session ids are shared by the three profiles and handed out from 1.
/// Positions are sent without explicit velocities unless a full record is
/// given; receivers derive motion from successive positions.
pub struct Tuio11Server {
    config: ServerConfig,
    frame_id: FrameId,
    next_session_id: SessionId,
    cursors: SenderProfile<CursorSet>,
    objects: SenderProfile<ObjectSet>,
    blobs: SenderProfile<BlobSet>,
}

impl Tuio11Server {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            frame_id: 0,
            next_session_id: 1,
            cursors: SenderProfile::new(),
            objects: SenderProfile::new(),
            blobs: SenderProfile::new(),
        }
    }

    fn next_session_id(&mut self) -> SessionId {
        let session_id = self.next_session_id;
        self.next_session_id = self.next_session_id.wrapping_add(1).max(1);
        session_id
    }

    /// Id of the last committed frame, 0 before the first
    pub fn frame_id(&self) -> FrameId {
        self.frame_id
    }

    // Cursors

    pub fn add_cursor(&mut self, x: f32, y: f32) -> SessionId {
        let session_id = self.next_session_id();
        self.cursors.insert(CursorSet {
            session_id,
            x,
            y,
            ..CursorSet::default()
        });
        session_id
    }

    pub fn update_cursor(
        &mut self,
        session_id: SessionId,
        x: f32,
        y: f32,
    ) -> Result<(), TuioServerError> {
        self.cursors.update(session_id, |cursor| {
            *cursor = CursorSet {
                session_id,
                x,
                y,
                ..CursorSet::default()
            }
        })
    }

    /// Replaces a live cursor's record, explicit kinematics included
    pub fn update_cursor_record(&mut self, record: CursorSet) -> Result<(), TuioServerError> {
        self.cursors
            .update(record.session_id, |cursor| *cursor = record)
    }

    pub fn remove_cursor(&mut self, session_id: SessionId) -> Result<(), TuioServerError> {
        self.cursors.remove(session_id).map(|_| ())
    }

    pub fn cursors(&self) -> impl Iterator<Item = &CursorSet> {
        self.cursors.records.values()
    }

    // Objects

    pub fn add_object(&mut self, symbol_id: SymbolId, x: f32, y: f32, angle: f32) -> SessionId {
        let session_id = self.next_session_id();
        self.objects.insert(ObjectSet {
            session_id,
            symbol_id,
            x,
            y,
            angle,
            ..ObjectSet::default()
        });
        session_id
    }

    pub fn update_object(
        &mut self,
        session_id: SessionId,
        x: f32,
        y: f32,
        angle: f32,
    ) -> Result<(), TuioServerError> {
        self.objects.update(session_id, |object| {
            *object = ObjectSet {
                session_id,
                symbol_id: object.symbol_id,
                x,
                y,
                angle,
                ..ObjectSet::default()
            }
        })
    }

    pub fn update_object_record(&mut self, record: ObjectSet) -> Result<(), TuioServerError> {
        self.objects
            .update(record.session_id, |object| *object = record)
    }

    pub fn remove_object(&mut self, session_id: SessionId) -> Result<(), TuioServerError> {
        self.objects.remove(session_id).map(|_| ())
    }

    pub fn objects(&self) -> impl Iterator<Item = &ObjectSet> {
        self.objects.records.values()
    }

    // Blobs

    pub fn add_blob(
        &mut self,
        x: f32,
        y: f32,
        angle: f32,
        width: f32,
        height: f32,
        area: f32,
    ) -> SessionId {
        let session_id = self.next_session_id();
        self.blobs.insert(BlobSet {
            session_id,
            x,
            y,
            angle,
            width,
            height,
            area,
            ..BlobSet::default()
        });
        session_id
    }

    #[allow(clippy::too_many_arguments)]
    pub fn update_blob(
        &mut self,
        session_id: SessionId,
        x: f32,
        y: f32,
        angle: f32,
        width: f32,
        height: f32,
        area: f32,
    ) -> Result<(), TuioServerError> {
        self.blobs.update(session_id, |blob| {
            *blob = BlobSet {
                session_id,
                x,
                y,
                angle,
                width,
                height,
                area,
                ..BlobSet::default()
            }
        })
    }

    pub fn update_blob_record(&mut self, record: BlobSet) -> Result<(), TuioServerError> {
        self.blobs.update(record.session_id, |blob| *blob = record)
    }

    pub fn remove_blob(&mut self, session_id: SessionId) -> Result<(), TuioServerError> {
        self.blobs.remove(session_id).map(|_| ())
    }

    pub fn blobs(&self) -> impl Iterator<Item = &BlobSet> {
        self.blobs.records.values()
    }

    // Frames

    /// Starts the next frame and returns it as a packed bundle
    pub fn commit_frame(&mut self) -> Vec<u8> {
        self.frame_id = self.frame_id.wrapping_add(1).max(1);
        let source = self.config.source_name.as_deref();
        let full_update = self.config.full_update;

        let mut bundle = OscBundle::new(OscTime::IMMEDIATELY, Vec::new());
        self.cursors
            .write_frame(&mut bundle, self.frame_id, source, full_update);
        self.objects
            .write_frame(&mut bundle, self.frame_id, source, full_update);
        self.blobs
            .write_frame(&mut bundle, self.frame_id, source, full_update);

        trace!("Frame {}: {} messages", self.frame_id, bundle.len());
        bundle.pack()
    }
}
