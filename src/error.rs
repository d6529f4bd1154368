use derive_more::Display;

use crate::model::leave_request::LeaveStatus;

/// Why a submitted leave form was refused.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[display(fmt = "missing field")]
    MissingField,
    #[display(fmt = "bad format")]
    BadDateFormat,
    #[display(fmt = "bad range")]
    BadDateRange,
}

impl std::error::Error for ValidationError {}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    #[display(fmt = "no leave request at position {}", _0)]
    NotFound(usize),
    #[display(fmt = "leave request at position {} is already {}", position, status)]
    AlreadyDecided { position: usize, status: LeaveStatus },
}

impl std::error::Error for StoreError {}
