use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use super::common::{is_present, missing_fields, validate_calendar_date};

/// Request payload for creating or replacing a weight entry
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_weight_entry"))]
pub struct WeightEntryRequest {
    /// Calendar date, `YYYY-MM-DD`
    pub date: Option<String>,
    /// Kilograms
    pub weight: Option<f64>,
    pub notes: Option<String>,
}

fn validate_weight_entry(req: &WeightEntryRequest) -> Result<(), ValidationError> {
    if !is_present(&req.date) || !is_present(&req.weight) {
        return Err(missing_fields("Date and weight are required"));
    }

    match req.date.as_deref() {
        Some(date) => validate_calendar_date(date),
        None => Ok(()),
    }
}
