//! Atmospheric refraction for a standard atmosphere.
//!
//! Three-regime empirical fit (the NOAA solar calculator form), in
//! arcseconds of the true elevation `h`:
//!
//! | true elevation | refraction (″) |
//! |---|---|
//! | h > 85° | 0 |
//! | 5° < h ≤ 85° | 58.1/tan h − 0.07/tan³ h + 0.000086/tan⁵ h |
//! | −0.575° < h ≤ 5° | 1735 − 518.2h + 103.4h² − 12.79h³ + 0.711h⁴ |
//! | h ≤ −0.575° | −20.774 / tan h |

/// Elevation above which refraction is ignored, degrees.
pub const REFRACTION_CUTOFF_DEG: f64 = 85.0;

/// Refraction correction in degrees for a true (geometric) elevation in
/// degrees. Always ≥ 0; add it to the true elevation.
pub fn refraction_deg(true_elevation_deg: f64) -> f64 {
    let h = true_elevation_deg;
    if h > REFRACTION_CUTOFF_DEG {
        return 0.0;
    }
    let arcsec = if h > 5.0 {
        let te = h.to_radians().tan();
        58.1 / te - 0.07 / te.powi(3) + 0.000_086 / te.powi(5)
    } else if h > -0.575 {
        1735.0 + h * (-518.2 + h * (103.4 + h * (-12.79 + h * 0.711)))
    } else {
        -20.774 / h.to_radians().tan()
    };
    arcsec / 3600.0
}

/// Apparent (refracted) elevation in degrees for a true elevation in degrees.
pub fn apparent_elevation_deg(true_elevation_deg: f64) -> f64 {
    true_elevation_deg + refraction_deg(true_elevation_deg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_above_cutoff() {
        assert_eq!(refraction_deg(85.5), 0.0);
        assert_eq!(refraction_deg(90.0), 0.0);
    }

    #[test]
    fn horizon_value() {
        // ~29' at the geometric horizon.
        let r = refraction_deg(0.0) * 60.0;
        assert!((r - 28.9).abs() < 0.1, "horizon refraction = {r}'");
    }

    #[test]
    fn forty_five_degrees() {
        // ~1' at 45°.
        let r = refraction_deg(45.0) * 60.0;
        assert!((r - 0.97).abs() < 0.02, "45° refraction = {r}'");
    }

    #[test]
    fn regimes_join_smoothly() {
        for &edge in &[5.0, -0.575] {
            let below = refraction_deg(edge - 1e-6);
            let above = refraction_deg(edge + 1e-6);
            assert!(
                (below - above).abs() < 0.002,
                "jump at {edge}: {below} vs {above}"
            );
        }
    }

    #[test]
    fn decreases_with_elevation() {
        let mut prev = refraction_deg(-0.5);
        for i in 0..85 {
            let r = refraction_deg(i as f64);
            assert!(r <= prev + 1e-12, "not monotonic at {i}°");
            prev = r;
        }
    }

    #[test]
    fn apparent_is_higher() {
        assert!(apparent_elevation_deg(-0.833) > -0.833);
        assert_eq!(apparent_elevation_deg(88.0), 88.0);
    }
}
