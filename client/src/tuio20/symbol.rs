use std::ops::Deref;

use tuio_shared::{Motion, Rate, SymbolRecord, TimeValue};

use crate::tuio20::{
    component::Component,
    tuio_component::TuioComponent,
    tuio_object::TuioObject,
};

/// Symbolic data attached to an object (`/tuio2/sym`), e.g. a decoded
/// marker. Its spatial fields stay at zero.
#[derive(Debug, Clone, PartialEq)]
pub struct TuioSymbol {
    component: Component,
    type_user_id: u32,
    component_id: u32,
    group: String,
    data: String,
}

impl TuioSymbol {
    pub fn type_user_id(&self) -> u32 {
        self.type_user_id
    }

    pub fn component_id(&self) -> u32 {
        self.component_id
    }

    /// Symbol family, e.g. `"fidtrk/18"` or `"qr"`
    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn data(&self) -> &str {
        &self.data
    }

    pub fn component(&self) -> &Component {
        &self.component
    }
}

impl Deref for TuioSymbol {
    type Target = Component;

    fn deref(&self) -> &Component {
        &self.component
    }
}

impl TuioComponent for TuioSymbol {
    type Record = SymbolRecord;

    fn create(time: TimeValue, record: &SymbolRecord, max_path_length: usize) -> Self {
        Self {
            component: Component::new(
                time,
                record.session_id,
                (0.0, 0.0, 0.0),
                Motion::default(),
                Rate::default(),
                max_path_length,
            ),
            type_user_id: record.type_user_id,
            component_id: record.component_id,
            group: record.group.clone(),
            data: record.data.clone(),
        }
    }

    fn differs(&self, record: &SymbolRecord) -> bool {
        self.type_user_id != record.type_user_id
            || self.component_id != record.component_id
            || self.group != record.group
            || self.data != record.data
    }

    fn update(&mut self, time: TimeValue, record: &SymbolRecord) {
        self.type_user_id = record.type_user_id;
        self.component_id = record.component_id;
        self.group.clone_from(&record.group);
        self.data.clone_from(&record.data);
        self.component.update(
            time,
            0.0,
            (0.0, 0.0, 0.0),
            Motion::default(),
            Rate::default(),
        );
    }

    fn remove(&mut self, time: TimeValue) {
        self.component.remove(time);
    }

    fn slot(object: &mut TuioObject) -> &mut Option<Self> {
        &mut object.symbol
    }
}
