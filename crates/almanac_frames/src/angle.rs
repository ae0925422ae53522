//! Angle normalization.

/// Wrap an angle into [0, 360).
pub fn normalize_deg(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.0
    if r >= 360.0 { 0.0 } else { r }
}

/// Wrap an angle into [-180, 180).
pub fn normalize_signed_deg(deg: f64) -> f64 {
    let r = normalize_deg(deg);
    if r >= 180.0 { r - 360.0 } else { r }
}
