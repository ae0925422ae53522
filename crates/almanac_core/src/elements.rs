//! Mean orbital elements as linear functions of the day number.
//!
//! Every element is `base + rate · d`, where `d` is days since
//! 1999-12-31 0h TT (`JD − 2451543.5`). Angles are in degrees. Semi-major
//! axes are in AU, except the Moon's which is in Earth radii. The Sun's
//! row describes Earth's orbit seen from the Earth (node and inclination
//! are zero by construction).

use crate::body::Body;

/// A single linearly varying element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearTerm {
    pub base: f64,
    pub rate: f64,
}

impl LinearTerm {
    const fn new(base: f64, rate: f64) -> Self {
        Self { base, rate }
    }

    const fn fixed(base: f64) -> Self {
        Self { base, rate: 0.0 }
    }

    /// Value at day number `d`.
    pub fn at(&self, d: f64) -> f64 {
        self.base + self.rate * d
    }
}

/// The six element series of one body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementSeries {
    /// Longitude of the ascending node N.
    pub node: LinearTerm,
    /// Inclination i.
    pub inclination: LinearTerm,
    /// Argument of perihelion (perigee for Sun/Moon) w.
    pub perihelion: LinearTerm,
    /// Semi-major axis a.
    pub semi_major_axis: LinearTerm,
    /// Eccentricity e.
    pub eccentricity: LinearTerm,
    /// Mean anomaly M.
    pub mean_anomaly: LinearTerm,
}

/// Elements evaluated at one day number. Angles in degrees, not reduced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    pub node_deg: f64,
    pub inclination_deg: f64,
    pub perihelion_deg: f64,
    pub semi_major_axis: f64,
    pub eccentricity: f64,
    pub mean_anomaly_deg: f64,
}

impl OrbitalElements {
    /// Mean longitude `N + w + M` in degrees, not reduced.
    pub fn mean_longitude_deg(&self) -> f64 {
        self.node_deg + self.perihelion_deg + self.mean_anomaly_deg
    }
}

impl ElementSeries {
    /// Evaluate all six elements at day number `d`.
    pub fn at(&self, d: f64) -> OrbitalElements {
        OrbitalElements {
            node_deg: self.node.at(d),
            inclination_deg: self.inclination.at(d),
            perihelion_deg: self.perihelion.at(d),
            semi_major_axis: self.semi_major_axis.at(d),
            eccentricity: self.eccentricity.at(d),
            mean_anomaly_deg: self.mean_anomaly.at(d),
        }
    }
}

const SUN: ElementSeries = ElementSeries {
    node: LinearTerm::fixed(0.0),
    inclination: LinearTerm::fixed(0.0),
    perihelion: LinearTerm::new(282.9404, 4.70935e-5),
    semi_major_axis: LinearTerm::fixed(1.0),
    eccentricity: LinearTerm::new(0.016709, -1.151e-9),
    mean_anomaly: LinearTerm::new(356.0470, 0.985_600_258_5),
};

const MOON: ElementSeries = ElementSeries {
    node: LinearTerm::new(125.1228, -0.052_953_808_3),
    inclination: LinearTerm::fixed(5.1454),
    perihelion: LinearTerm::new(318.0634, 0.164_357_322_3),
    semi_major_axis: LinearTerm::fixed(60.2666),
    eccentricity: LinearTerm::fixed(0.054900),
    mean_anomaly: LinearTerm::new(115.3654, 13.064_992_950_9),
};

const MERCURY: ElementSeries = ElementSeries {
    node: LinearTerm::new(48.3313, 3.24587e-5),
    inclination: LinearTerm::new(7.0047, 5.00e-8),
    perihelion: LinearTerm::new(29.1241, 1.01444e-5),
    semi_major_axis: LinearTerm::fixed(0.387098),
    eccentricity: LinearTerm::new(0.205635, 5.59e-10),
    mean_anomaly: LinearTerm::new(168.6562, 4.092_334_436_8),
};

const VENUS: ElementSeries = ElementSeries {
    node: LinearTerm::new(76.6799, 2.46590e-5),
    inclination: LinearTerm::new(3.3946, 2.75e-8),
    perihelion: LinearTerm::new(54.8910, 1.38374e-5),
    semi_major_axis: LinearTerm::fixed(0.723330),
    eccentricity: LinearTerm::new(0.006773, -1.302e-9),
    mean_anomaly: LinearTerm::new(48.0052, 1.602_130_224_4),
};

const MARS: ElementSeries = ElementSeries {
    node: LinearTerm::new(49.5574, 2.11081e-5),
    inclination: LinearTerm::new(1.8497, -1.78e-8),
    perihelion: LinearTerm::new(286.5016, 2.92961e-5),
    semi_major_axis: LinearTerm::fixed(1.523688),
    eccentricity: LinearTerm::new(0.093405, 2.516e-9),
    mean_anomaly: LinearTerm::new(18.6021, 0.524_020_776_6),
};

const JUPITER: ElementSeries = ElementSeries {
    node: LinearTerm::new(100.4542, 2.76854e-5),
    inclination: LinearTerm::new(1.3030, -1.557e-7),
    perihelion: LinearTerm::new(273.8777, 1.64505e-5),
    semi_major_axis: LinearTerm::fixed(5.20256),
    eccentricity: LinearTerm::new(0.048498, 4.469e-9),
    mean_anomaly: LinearTerm::new(19.8950, 0.083_085_300_1),
};

const SATURN: ElementSeries = ElementSeries {
    node: LinearTerm::new(113.6634, 2.38980e-5),
    inclination: LinearTerm::new(2.4886, -1.081e-7),
    perihelion: LinearTerm::new(339.3939, 2.97661e-5),
    semi_major_axis: LinearTerm::fixed(9.55475),
    eccentricity: LinearTerm::new(0.055546, -9.499e-9),
    mean_anomaly: LinearTerm::new(316.9670, 0.033_444_228_2),
};

const URANUS: ElementSeries = ElementSeries {
    node: LinearTerm::new(74.0005, 1.3978e-5),
    inclination: LinearTerm::new(0.7733, 1.9e-8),
    perihelion: LinearTerm::new(96.6612, 3.0565e-5),
    semi_major_axis: LinearTerm::new(19.18171, -1.55e-8),
    eccentricity: LinearTerm::new(0.047318, 7.45e-9),
    mean_anomaly: LinearTerm::new(142.5905, 0.011_725_806),
};

const NEPTUNE: ElementSeries = ElementSeries {
    node: LinearTerm::new(131.7806, 3.0173e-5),
    inclination: LinearTerm::new(1.7700, -2.55e-7),
    perihelion: LinearTerm::new(272.8461, -6.027e-6),
    semi_major_axis: LinearTerm::new(30.05826, 3.313e-8),
    eccentricity: LinearTerm::new(0.008606, 2.15e-9),
    mean_anomaly: LinearTerm::new(260.2471, 0.005_995_147),
};

/// Element series for `body`.
pub const fn series(body: Body) -> &'static ElementSeries {
    match body {
        Body::Sun => &SUN,
        Body::Moon => &MOON,
        Body::Mercury => &MERCURY,
        Body::Venus => &VENUS,
        Body::Mars => &MARS,
        Body::Jupiter => &JUPITER,
        Body::Saturn => &SATURN,
        Body::Uranus => &URANUS,
        Body::Neptune => &NEPTUNE,
    }
}

/// Elements of `body` at day number `d`.
pub fn elements_at(body: Body, d: f64) -> OrbitalElements {
    series(body).at(d)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_values_are_bases() {
        let e = elements_at(Body::Mars, 0.0);
        assert_eq!(e.semi_major_axis, 1.523688);
        assert_eq!(e.mean_anomaly_deg, 18.6021);
    }

    #[test]
    fn sun_mean_longitude_near_j2000() {
        // L = w + M ≈ 279.0° on 1999-12-31.
        let l = elements_at(Body::Sun, 0.0).mean_longitude_deg();
        assert!((l - 638.9874).abs() < 1e-9, "L = {l}");
        assert!(((l % 360.0) - 278.9874).abs() < 1e-9);
    }

    #[test]
    fn moon_node_regresses() {
        let now = elements_at(Body::Moon, 0.0).node_deg;
        let later = elements_at(Body::Moon, 365.25).node_deg;
        // ~19.3°/year westward.
        assert!((now - later - 19.34).abs() < 0.05, "{}", now - later);
    }

    #[test]
    fn eccentricities_are_elliptic() {
        for body in Body::ALL {
            for d in [-36_525.0, 0.0, 36_525.0] {
                let e = elements_at(body, d).eccentricity;
                assert!((0.0..1.0).contains(&e), "{body} e = {e}");
            }
        }
    }
}
