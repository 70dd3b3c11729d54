//! Small unit-conversion and clock helpers.

/// Converts device-independent pixels to absolute pixels for a display density.
///
/// A density of 1.0 is a baseline (~160 dpi) screen; 2.0 doubles every size.
pub fn dp_to_px(dp: f64, density: f64) -> f64 {
    dp * density
}

/// Seconds since the Unix epoch, used for export file names.
pub fn unix_timestamp() -> i64 {
    chrono::Utc::now().timestamp()
}
