use std::collections::BTreeSet;

use thiserror::Error;

use crate::types::InstanceId;

/// Errors that can occur when returning ids to an `InstanceIdPool`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InstanceIdError {
    /// The id was never handed out by this pool
    #[error("Instance id {id} was never allocated by this pool (next fresh id is {next_id})")]
    NeverAllocated { id: InstanceId, next_id: InstanceId },

    /// The id is already in the free list
    #[error("Instance id {id} was released twice")]
    AlreadyFree { id: InstanceId },
}

/// Hands out small recyclable ids (cursor ids, blob ids)
///
/// Released ids are kept sorted and the smallest one is always reused first;
/// fresh ids are only minted when nothing is free.
#[derive(Debug, Clone, Default)]
pub struct InstanceIdPool {
    next_id: InstanceId,
    free_ids: BTreeSet<InstanceId>,
}

impl InstanceIdPool {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            free_ids: BTreeSet::new(),
        }
    }

    pub fn acquire(&mut self) -> InstanceId {
        if let Some(id) = self.free_ids.pop_first() {
            return id;
        }
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    pub fn try_release(&mut self, id: InstanceId) -> Result<(), InstanceIdError> {
        if id >= self.next_id {
            return Err(InstanceIdError::NeverAllocated {
                id,
                next_id: self.next_id,
            });
        }
        if !self.free_ids.insert(id) {
            return Err(InstanceIdError::AlreadyFree { id });
        }
        Ok(())
    }

    /// Ids currently waiting to be reused, ascending
    pub fn free_ids(&self) -> impl Iterator<Item = InstanceId> + '_ {
        self.free_ids.iter().copied()
    }

    /// Number of ids handed out and not yet released
    pub fn in_use(&self) -> usize {
        self.next_id as usize - self.free_ids.len()
    }

    pub fn clear(&mut self) {
        self.next_id = 0;
        self.free_ids.clear();
    }
}
