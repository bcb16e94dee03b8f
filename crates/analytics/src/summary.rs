//! Qualitative banding for the summary statistics.

/// Qualitative label for a chlorophyll mean in mg/m^3.
pub fn chl_level_label(value: f64) -> &'static str {
    if value >= 1.5 {
        "Very High"
    } else if value >= 1.0 {
        "High"
    } else if value >= 0.5 {
        "Moderate"
    } else if value >= 0.2 {
        "Low"
    } else {
        "Very Low"
    }
}
