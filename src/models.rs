use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::ValidationError;
use crate::model::leave_request::{LeaveDetails, LeaveRequest};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw create/edit form. Missing keys deserialize as empty strings so that
/// they are reported as missing fields rather than as a malformed body.
#[derive(Debug, Default, Clone, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct LeaveForm {
    #[schema(example = "Bob")]
    pub name: String,
    #[schema(example = "Vacation")]
    pub leave_type: String,
    #[schema(example = "2024-02-01")]
    pub start_date: String,
    #[schema(example = "2024-02-05")]
    pub end_date: String,
    #[schema(example = "trip")]
    pub reason: String,
}

impl LeaveForm {
    /// Trims every field, then checks presence, date format and date range,
    /// in that order.
    pub fn validate(&self) -> Result<LeaveDetails, ValidationError> {
        let name = self.name.trim();
        let leave_type = self.leave_type.trim();
        let start_date = self.start_date.trim();
        let end_date = self.end_date.trim();
        let reason = self.reason.trim();

        if [name, leave_type, start_date, end_date, reason]
            .iter()
            .any(|field| field.is_empty())
        {
            return Err(ValidationError::MissingField);
        }

        let start = parse_date(start_date)?;
        let end = parse_date(end_date)?;
        if end < start {
            return Err(ValidationError::BadDateRange);
        }

        Ok(LeaveDetails {
            name: name.to_string(),
            leave_type: leave_type.to_string(),
            start_date: start,
            end_date: end,
            reason: reason.to_string(),
        })
    }
}

/// `%Y` alone also takes signed and five-digit years; only `YYYY` is accepted.
fn parse_date(value: &str) -> Result<NaiveDate, ValidationError> {
    let year = value.split('-').next().unwrap_or_default();
    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::BadDateFormat);
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| ValidationError::BadDateFormat)
}

#[derive(Serialize, ToSchema)]
pub struct LeaveListResponse {
    pub data: Vec<LeaveRequest>,
    #[schema(example = 1)]
    pub total: usize,
}
