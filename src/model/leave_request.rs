use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, Display, AsRefStr)]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

/// Outcome a reviewer can give a pending request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Decision {
    Approve,
    Reject,
}

impl Decision {
    pub fn status(self) -> LeaveStatus {
        match self {
            Decision::Approve => LeaveStatus::Approved,
            Decision::Reject => LeaveStatus::Rejected,
        }
    }
}

impl LeaveStatus {
    /// Approved and Rejected are terminal; only Pending accepts a decision.
    pub fn decide(self, decision: Decision) -> Option<LeaveStatus> {
        match self {
            LeaveStatus::Pending => Some(decision.status()),
            LeaveStatus::Approved | LeaveStatus::Rejected => None,
        }
    }
}

/// The editable part of a leave request, already trimmed and validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaveDetails {
    pub name: String,
    pub leave_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LeaveRequest {
    #[schema(example = "Bob")]
    pub name: String,
    #[schema(example = "Vacation")]
    pub leave_type: String,
    #[schema(example = "2024-02-01", value_type = String)]
    pub start_date: NaiveDate,
    #[schema(example = "2024-02-05", value_type = String)]
    pub end_date: NaiveDate,
    #[schema(example = "trip")]
    pub reason: String,
    pub status: LeaveStatus,
}

impl LeaveRequest {
    pub fn new(details: LeaveDetails) -> Self {
        Self {
            name: details.name,
            leave_type: details.leave_type,
            start_date: details.start_date,
            end_date: details.end_date,
            reason: details.reason,
            status: LeaveStatus::Pending,
        }
    }

    /// Overwrites the editable fields; status is left as it is.
    pub fn apply(&mut self, details: LeaveDetails) {
        self.name = details.name;
        self.leave_type = details.leave_type;
        self.start_date = details.start_date;
        self.end_date = details.end_date;
        self.reason = details.reason;
    }
}
