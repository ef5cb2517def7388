use tuio_shared::TimeValue;

use crate::tuio20::tuio_object::TuioObject;

/// One of the four component channels of a TUIO 2.0 object, built from and
/// updated by the record on its address
pub(crate) trait TuioComponent: Sized {
    type Record;

    fn create(time: TimeValue, record: &Self::Record, max_path_length: usize) -> Self;

    fn differs(&self, record: &Self::Record) -> bool;

    fn update(&mut self, time: TimeValue, record: &Self::Record);

    fn remove(&mut self, time: TimeValue);

    /// Where this kind of component lives on its object
    fn slot(object: &mut TuioObject) -> &mut Option<Self>;
}

/// What applying one record did to an object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ComponentChange {
    Added,
    Updated,
    Unchanged,
}

/// Creates the component slot from `record` if it is empty, otherwise
/// updates it if anything differs
pub(crate) fn apply_record<C: TuioComponent>(
    object: &mut TuioObject,
    time: TimeValue,
    record: &C::Record,
    max_path_length: usize,
) -> ComponentChange {
    let slot = C::slot(object);
    match slot {
        Some(component) => {
            if component.differs(record) {
                component.update(time, record);
                ComponentChange::Updated
            } else {
                ComponentChange::Unchanged
            }
        }
        None => {
            *slot = Some(C::create(time, record, max_path_length));
            ComponentChange::Added
        }
    }
}
