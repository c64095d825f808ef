//! Validation utilities for the Crop Advisor service
//!
//! Soil inputs are checked against the agronomic ranges the prediction model
//! was trained on. The classifier itself performs no range validation, so
//! these checks are the only guard against feeding it undefined input.

// ============================================================================
// Soil Input Ranges (ppm for N/P/K, pH scale, mm for rainfall)
// ============================================================================

pub const NITROGEN_RANGE: (f64, f64) = (0.0, 140.0);
pub const PHOSPHORUS_RANGE: (f64, f64) = (5.0, 145.0);
pub const POTASSIUM_RANGE: (f64, f64) = (5.0, 205.0);
pub const PH_RANGE: (f64, f64) = (3.5, 10.0);
pub const RAINFALL_RANGE: (f64, f64) = (20.0, 300.0);

/// A rejected soil input: which field and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoilValidationError {
    pub field: &'static str,
    pub message: &'static str,
}

fn in_range(value: f64, range: (f64, f64)) -> bool {
    value.is_finite() && value >= range.0 && value <= range.1
}

/// Validate nitrogen content (ppm)
pub fn validate_nitrogen(value: f64) -> Result<(), &'static str> {
    if in_range(value, NITROGEN_RANGE) {
        Ok(())
    } else {
        Err("Nitrogen must be between 0 and 140 ppm")
    }
}

/// Validate phosphorus content (ppm)
pub fn validate_phosphorus(value: f64) -> Result<(), &'static str> {
    if in_range(value, PHOSPHORUS_RANGE) {
        Ok(())
    } else {
        Err("Phosphorus must be between 5 and 145 ppm")
    }
}

/// Validate potassium content (ppm)
pub fn validate_potassium(value: f64) -> Result<(), &'static str> {
    if in_range(value, POTASSIUM_RANGE) {
        Ok(())
    } else {
        Err("Potassium must be between 5 and 205 ppm")
    }
}

/// Validate soil pH
pub fn validate_ph(value: f64) -> Result<(), &'static str> {
    if in_range(value, PH_RANGE) {
        Ok(())
    } else {
        Err("Soil pH must be between 3.5 and 10.0")
    }
}

/// Validate annual rainfall (mm)
pub fn validate_rainfall(value: f64) -> Result<(), &'static str> {
    if in_range(value, RAINFALL_RANGE) {
        Ok(())
    } else {
        Err("Rainfall must be between 20 and 300 mm")
    }
}

/// Validate a full set of soil inputs, reporting the first offending field.
pub fn validate_soil_inputs(
    nitrogen: f64,
    phosphorus: f64,
    potassium: f64,
    ph: f64,
    rainfall_mm: f64,
) -> Result<(), SoilValidationError> {
    let checks: [(&'static str, Result<(), &'static str>); 5] = [
        ("nitrogen", validate_nitrogen(nitrogen)),
        ("phosphorus", validate_phosphorus(phosphorus)),
        ("potassium", validate_potassium(potassium)),
        ("ph", validate_ph(ph)),
        ("rainfall_mm", validate_rainfall(rainfall_mm)),
    ];

    for (field, result) in checks {
        if let Err(message) = result {
            return Err(SoilValidationError { field, message });
        }
    }
    Ok(())
}
