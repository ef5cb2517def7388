use std::collections::BTreeMap;

use log::trace;

use tuio_shared::{
    AliveRecord, BoundsRecord, FrameId, FrameRecord, OscBundle, PointerRecord, SessionId,
    SymbolRecord, TimeValue, TokenRecord, TuioRecord, TUIO20_ALIVE_ADDRESS,
    TUIO20_BOUNDS_ADDRESS, TUIO20_POINTER_ADDRESS, TUIO20_SYMBOL_ADDRESS, TUIO20_TOKEN_ADDRESS,
};

use crate::{error::TuioServerError, server_config::ServerConfig};

/// One component record and whether it changed since the last frame
struct Slot<R> {
    record: R,
    changed: bool,
}

impl<R: TuioRecord> Slot<R> {
    fn new(record: R) -> Self {
        Self {
            record,
            changed: true,
        }
    }

    fn set(&mut self, record: R) {
        self.record = record;
        self.changed = true;
    }
}

#[derive(Default)]
struct SenderObject {
    token: Option<Slot<TokenRecord>>,
    pointer: Option<Slot<PointerRecord>>,
    bounds: Option<Slot<BoundsRecord>>,
    symbol: Option<Slot<SymbolRecord>>,
}

fn set_slot<R: TuioRecord>(slot: &mut Option<Slot<R>>, record: R) {
    match slot {
        Some(slot) => slot.set(record),
        None => *slot = Some(Slot::new(record)),
    }
}

fn write_slot<R: TuioRecord>(
    bundle: &mut OscBundle,
    slot: &mut Option<Slot<R>>,
    full_update: bool,
) {
    if let Some(slot) = slot {
        if full_update || slot.changed {
            bundle.push(slot.record.to_message());
        }
        slot.changed = false;
    }
}

/// Builds TUIO 2.0 bundles
///
/// Each object gets a session id and may then carry one token, pointer,
/// bounds and symbol component. Every frame is
/// `frm, tok*, ptr*, bnd*, sym*, alv`.
pub struct Tuio20Server {
    config: ServerConfig,
    frame_id: FrameId,
    next_session_id: SessionId,
    objects: BTreeMap<SessionId, SenderObject>,
}

impl Tuio20Server {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            frame_id: 0,
            next_session_id: 1,
            objects: BTreeMap::new(),
        }
    }

    /// Id of the last committed frame, 0 before the first
    pub fn frame_id(&self) -> FrameId {
        self.frame_id
    }

    /// Starts tracking a new object without components
    pub fn add_object(&mut self) -> SessionId {
        let mut session_id = self.next_session_id;
        while self.objects.contains_key(&session_id) {
            session_id = session_id.wrapping_add(1).max(1);
        }
        self.next_session_id = session_id.wrapping_add(1).max(1);
        self.objects.insert(session_id, SenderObject::default());
        session_id
    }

    /// Starts tracking an object under a session id chosen by the caller
    pub fn insert_object(&mut self, session_id: SessionId) -> Result<(), TuioServerError> {
        if self.objects.contains_key(&session_id) {
            return Err(TuioServerError::SessionInUse {
                address: TUIO20_ALIVE_ADDRESS,
                session_id,
            });
        }
        self.objects.insert(session_id, SenderObject::default());
        Ok(())
    }

    pub fn remove_object(&mut self, session_id: SessionId) -> Result<(), TuioServerError> {
        self.objects
            .remove(&session_id)
            .map(|_| ())
            .ok_or(TuioServerError::UnknownSession {
                address: TUIO20_ALIVE_ADDRESS,
                session_id,
            })
    }

    pub fn session_ids(&self) -> impl Iterator<Item = SessionId> + '_ {
        self.objects.keys().copied()
    }

    fn object_mut(
        &mut self,
        session_id: SessionId,
        address: &'static str,
    ) -> Result<&mut SenderObject, TuioServerError> {
        self.objects
            .get_mut(&session_id)
            .ok_or(TuioServerError::UnknownSession {
                address,
                session_id,
            })
    }

    /// Attaches or replaces the object's token. The record's session id is
    /// overwritten with `session_id`.
    pub fn set_token(
        &mut self,
        session_id: SessionId,
        mut token: TokenRecord,
    ) -> Result<(), TuioServerError> {
        token.session_id = session_id;
        let object = self.object_mut(session_id, TUIO20_TOKEN_ADDRESS)?;
        set_slot(&mut object.token, token);
        Ok(())
    }

    pub fn set_pointer(
        &mut self,
        session_id: SessionId,
        mut pointer: PointerRecord,
    ) -> Result<(), TuioServerError> {
        pointer.session_id = session_id;
        let object = self.object_mut(session_id, TUIO20_POINTER_ADDRESS)?;
        set_slot(&mut object.pointer, pointer);
        Ok(())
    }

    pub fn set_bounds(
        &mut self,
        session_id: SessionId,
        mut bounds: BoundsRecord,
    ) -> Result<(), TuioServerError> {
        bounds.session_id = session_id;
        let object = self.object_mut(session_id, TUIO20_BOUNDS_ADDRESS)?;
        set_slot(&mut object.bounds, bounds);
        Ok(())
    }

    pub fn set_symbol(
        &mut self,
        session_id: SessionId,
        mut symbol: SymbolRecord,
    ) -> Result<(), TuioServerError> {
        symbol.session_id = session_id;
        let object = self.object_mut(session_id, TUIO20_SYMBOL_ADDRESS)?;
        set_slot(&mut object.symbol, symbol);
        Ok(())
    }

    /// Starts the next frame, stamped with `time`, and returns it as a
    /// packed bundle
    pub fn commit_frame(&mut self, time: TimeValue) -> Vec<u8> {
        self.frame_id = self.frame_id.wrapping_add(1).max(1);
        let full_update = self.config.full_update;
        let osc_time = time.to_osc_time();

        let frame = FrameRecord {
            frame_id: self.frame_id,
            time: osc_time,
            dimension: self.config.dimension,
            source: self.config.source_name.clone().unwrap_or_default(),
        };
        let mut bundle = OscBundle::new(osc_time, vec![frame.to_message().into()]);

        for object in self.objects.values_mut() {
            write_slot(&mut bundle, &mut object.token, full_update);
        }
        for object in self.objects.values_mut() {
            write_slot(&mut bundle, &mut object.pointer, full_update);
        }
        for object in self.objects.values_mut() {
            write_slot(&mut bundle, &mut object.bounds, full_update);
        }
        for object in self.objects.values_mut() {
            write_slot(&mut bundle, &mut object.symbol, full_update);
        }

        let alive = AliveRecord(self.objects.keys().copied().collect());
        bundle.push(alive.to_message());

        trace!("Frame {}: {} messages", self.frame_id, bundle.len());
        bundle.pack()
    }
}
