//! Mean obliquity of the ecliptic.

/// Mean obliquity at J2000.0 in degrees (low-precision series).
pub const OBLIQUITY_J2000_DEG: f64 = 23.4393;

/// Secular drift of the obliquity in degrees per Julian century
/// (3.563e-7 °/day).
const OBLIQUITY_RATE_DEG_PER_CENTURY: f64 = -0.013_013_86;

/// Mean obliquity of the ecliptic in degrees for `t` Julian centuries
/// since J2000.0.
pub fn mean_obliquity_deg(t: f64) -> f64 {
    OBLIQUITY_J2000_DEG + OBLIQUITY_RATE_DEG_PER_CENTURY * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_value() {
        assert_eq!(mean_obliquity_deg(0.0), OBLIQUITY_J2000_DEG);
    }

    #[test]
    fn decreases_slowly() {
        let now = mean_obliquity_deg(0.2);
        assert!(now < OBLIQUITY_J2000_DEG);
        assert!((OBLIQUITY_J2000_DEG - now) < 0.003, "obliquity = {now}");
    }
}
