use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::StoreError;
use crate::model::leave_request::{Decision, LeaveDetails, LeaveRequest};

/// In-memory, insertion-ordered leave requests.
///
/// Entries are addressed by position. Positions are not stable: removing the
/// entry at `i` moves every entry after it down by one.
#[derive(Debug, Default)]
pub struct LeaveStore {
    requests: Mutex<Vec<LeaveRequest>>,
}

impl LeaveStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<LeaveRequest>> {
        self.requests.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn list(&self) -> Vec<LeaveRequest> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn get(&self, position: usize) -> Result<LeaveRequest, StoreError> {
        self.lock()
            .get(position)
            .cloned()
            .ok_or(StoreError::NotFound(position))
    }

    pub fn append(&self, details: LeaveDetails) {
        self.lock().push(LeaveRequest::new(details));
    }

    /// Overwrites the editable fields at `position`, returning the updated entry.
    pub fn update(&self, position: usize, details: LeaveDetails) -> Result<LeaveRequest, StoreError> {
        let mut requests = self.lock();
        let request = requests
            .get_mut(position)
            .ok_or(StoreError::NotFound(position))?;
        request.apply(details);
        Ok(request.clone())
    }

    pub fn remove_at(&self, position: usize) -> Result<LeaveRequest, StoreError> {
        let mut requests = self.lock();
        if position >= requests.len() {
            return Err(StoreError::NotFound(position));
        }
        Ok(requests.remove(position))
    }

    pub fn set_status(&self, position: usize, decision: Decision) -> Result<LeaveRequest, StoreError> {
        let mut requests = self.lock();
        let request = requests
            .get_mut(position)
            .ok_or(StoreError::NotFound(position))?;
        request.status = request
            .status
            .decide(decision)
            .ok_or(StoreError::AlreadyDecided {
                position,
                status: request.status,
            })?;
        Ok(request.clone())
    }
}
