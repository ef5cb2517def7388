use tuio_shared::{ObjectState, SessionId, TimeValue, TuioState};

use crate::tuio20::{
    bounds::TuioBounds, pointer::TuioPointer, symbol::TuioSymbol, token::TuioToken,
    tuio_component::TuioComponent,
};

/// A tracked TUIO 2.0 session carrying up to one component of each kind
#[derive(Debug, Clone, PartialEq)]
pub struct TuioObject {
    session_id: SessionId,
    start_time: TimeValue,
    current_time: TimeValue,
    state: ObjectState,
    pub(crate) token: Option<TuioToken>,
    pub(crate) pointer: Option<TuioPointer>,
    pub(crate) bounds: Option<TuioBounds>,
    pub(crate) symbol: Option<TuioSymbol>,
}

impl TuioObject {
    pub(crate) fn new(time: TimeValue, session_id: SessionId) -> Self {
        Self {
            session_id,
            start_time: time,
            current_time: time,
            state: ObjectState::Added,
            token: None,
            pointer: None,
            bounds: None,
            symbol: None,
        }
    }

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    pub fn start_time(&self) -> TimeValue {
        self.start_time
    }

    pub fn current_time(&self) -> TimeValue {
        self.current_time
    }

    pub fn state(&self) -> ObjectState {
        self.state
    }

    pub fn token(&self) -> Option<&TuioToken> {
        self.token.as_ref()
    }

    pub fn pointer(&self) -> Option<&TuioPointer> {
        self.pointer.as_ref()
    }

    pub fn bounds(&self) -> Option<&TuioBounds> {
        self.bounds.as_ref()
    }

    pub fn symbol(&self) -> Option<&TuioSymbol> {
        self.symbol.as_ref()
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    pub fn has_pointer(&self) -> bool {
        self.pointer.is_some()
    }

    pub fn has_bounds(&self) -> bool {
        self.bounds.is_some()
    }

    pub fn has_symbol(&self) -> bool {
        self.symbol.is_some()
    }

    /// Whether any component was attached in the latest commit
    pub fn contains_new_component(&self) -> bool {
        let added = |state: Option<TuioState>| state == Some(TuioState::Added);
        added(self.token.as_ref().map(|c| c.state()))
            || added(self.pointer.as_ref().map(|c| c.state()))
            || added(self.bounds.as_ref().map(|c| c.state()))
            || added(self.symbol.as_ref().map(|c| c.state()))
    }

    // Crate-public

    pub(crate) fn touch(&mut self, time: TimeValue) {
        self.current_time = time;
    }

    pub(crate) fn set_idle(&mut self) {
        if self.state == ObjectState::Added {
            self.state = ObjectState::Idle;
        }
    }

    /// Removes the object and every component it carries
    pub(crate) fn remove(&mut self, time: TimeValue) {
        self.current_time = time;
        self.state = ObjectState::Removed;
        if let Some(token) = self.token.as_mut() {
            token.remove(time);
        }
        if let Some(pointer) = self.pointer.as_mut() {
            pointer.remove(time);
        }
        if let Some(bounds) = self.bounds.as_mut() {
            bounds.remove(time);
        }
        if let Some(symbol) = self.symbol.as_mut() {
            symbol.remove(time);
        }
    }
}
