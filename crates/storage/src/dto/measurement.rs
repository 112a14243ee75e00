use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use super::common::{is_present, missing_fields, validate_calendar_date};

/// Request payload for creating or replacing a body measurement.
/// All four circumferences are required together.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_body_measurement"))]
pub struct BodyMeasurementRequest {
    pub date: Option<String>,
    pub arms: Option<f64>,
    pub legs: Option<f64>,
    pub abdomen: Option<f64>,
    pub torso: Option<f64>,
    pub notes: Option<String>,
}

fn validate_body_measurement(req: &BodyMeasurementRequest) -> Result<(), ValidationError> {
    let complete = is_present(&req.date)
        && is_present(&req.arms)
        && is_present(&req.legs)
        && is_present(&req.abdomen)
        && is_present(&req.torso);

    if !complete {
        return Err(missing_fields("Date and all measurements are required"));
    }

    match req.date.as_deref() {
        Some(date) => validate_calendar_date(date),
        None => Ok(()),
    }
}
