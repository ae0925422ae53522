//! Kepler's equation and the orbit-plane → ecliptic rotation.
//!
//! Angles in degrees at the boundary, radians inside.

use crate::elements::OrbitalElements;

/// Maximum Newton iterations after the initial guess.
pub const KEPLER_MAX_ITERATIONS: usize = 10;

/// Iteration stops once successive estimates of E differ by less than this,
/// in degrees.
pub const KEPLER_TOLERANCE_DEG: f64 = 0.005;

/// Solve `M = E − e·sin E` for the eccentric anomaly E, in degrees.
///
/// Starts from `E₀ = M + e·sin M·(1 + e·cos M)` (in degrees) and refines
/// with Newton steps. The loop is capped at [`KEPLER_MAX_ITERATIONS`]; the
/// last estimate is returned whether or not it met the tolerance.
pub fn eccentric_anomaly_deg(mean_anomaly_deg: f64, eccentricity: f64) -> f64 {
    let m = mean_anomaly_deg.rem_euclid(360.0);
    let e = eccentricity;
    let mr = m.to_radians();
    let mut e0 = m + e.to_degrees() * mr.sin() * (1.0 + e * mr.cos());
    for _ in 0..KEPLER_MAX_ITERATIONS {
        let er = e0.to_radians();
        let e1 = e0 - (e0 - e.to_degrees() * er.sin() - m) / (1.0 - e * er.cos());
        let delta = (e1 - e0).abs();
        e0 = e1;
        if delta < KEPLER_TOLERANCE_DEG {
            break;
        }
    }
    e0
}

/// Position in the orbital plane: true anomaly (degrees) and radius (same
/// unit as the semi-major axis).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitPoint {
    pub true_anomaly_deg: f64,
    pub radius: f64,
}

/// True anomaly and radius for a set of elements.
pub fn orbit_point(el: &OrbitalElements) -> OrbitPoint {
    let ea = eccentric_anomaly_deg(el.mean_anomaly_deg, el.eccentricity).to_radians();
    let e = el.eccentricity;
    let xv = el.semi_major_axis * (ea.cos() - e);
    let yv = el.semi_major_axis * (1.0 - e * e).sqrt() * ea.sin();
    OrbitPoint {
        true_anomaly_deg: yv.atan2(xv).to_degrees(),
        radius: xv.hypot(yv),
    }
}

/// Rotate an orbit point by (N, i, w) into ecliptic rectangular coordinates
/// centred on the primary. Same length unit as `point.radius`.
pub fn ecliptic_rectangular(el: &OrbitalElements, point: &OrbitPoint) -> [f64; 3] {
    let (sin_n, cos_n) = el.node_deg.to_radians().sin_cos();
    let (sin_i, cos_i) = el.inclination_deg.to_radians().sin_cos();
    let (sin_vw, cos_vw) = (point.true_anomaly_deg + el.perihelion_deg)
        .to_radians()
        .sin_cos();
    let r = point.radius;
    [
        r * (cos_n * cos_vw - sin_n * sin_vw * cos_i),
        r * (sin_n * cos_vw + cos_n * sin_vw * cos_i),
        r * sin_vw * sin_i,
    ]
}
