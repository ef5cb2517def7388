/// Protocol-assigned id of one tracked entity for its whole lifetime
pub type SessionId = u32;
/// Frame sequence number (`fseq` in TUIO 1.1, `frm` in TUIO 2.0)
pub type FrameId = u32;
/// Small recyclable per-profile id (cursor id, blob id)
pub type InstanceId = u32;
/// Fiducial marker id of a TUIO 1.1 object
pub type SymbolId = u32;
