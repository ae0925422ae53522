//! Ecliptic → equatorial rotation about the x-axis (vernal equinox).

/// Rotate an ecliptic rectangular vector into the equatorial frame.
///
/// `obliquity_deg` is the obliquity of the ecliptic of date, degrees.
/// The vector's length unit is preserved.
pub fn ecliptic_to_equatorial(ecl: &[f64; 3], obliquity_deg: f64) -> [f64; 3] {
    let (sin_e, cos_e) = obliquity_deg.to_radians().sin_cos();
    [
        ecl[0],
        ecl[1] * cos_e - ecl[2] * sin_e,
        ecl[1] * sin_e + ecl[2] * cos_e,
    ]
}
