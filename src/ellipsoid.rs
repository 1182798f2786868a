/// Reference ellipsoid parameters.
#[derive(Clone, Copy, Debug)]
pub struct Ellipsoid {
    /// Semi-major axis (metres)
    pub a: f64,
    /// Flattening (dimensionless)
    pub f: f64,
    /// Semi-minor axis: a * (1 - f)
    pub b: f64,
    /// First eccentricity squared: f * (2 - f)
    pub e2: f64,
    /// Third flattening: f / (2 - f)
    pub n: f64,
}

impl Ellipsoid {
    pub const fn new(a: f64, f: f64) -> Self {
        let b = a * (1.0 - f);
        let e2 = f * (2.0 - f);
        let n = f / (2.0 - f);
        Self { a, f, b, e2, n }
    }
}

/// GRS 1980, the ellipsoid of SWEREF 99 and ETRS89.
pub const GRS80: Ellipsoid = Ellipsoid::new(6_378_137.0, 1.0 / 298.257_222_101);

pub const WGS84: Ellipsoid = Ellipsoid::new(6_378_137.0, 1.0 / 298.257_223_563);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_grs80_constants() {
        assert_eq!(GRS80.a, 6_378_137.0);
        assert_relative_eq!(GRS80.b, 6_356_752.314_140_356, epsilon = 1e-6);
        assert_relative_eq!(GRS80.e2, 0.006_694_380_022_900_787, epsilon = 1e-12);
        assert_relative_eq!(GRS80.n, 0.001_679_220_394_628_745, epsilon = 1e-12);
    }

    #[test]
    fn test_wgs84_close_to_grs80() {
        // WGS84 and GRS80 differ only in the flattening, and only slightly
        assert_eq!(WGS84.a, GRS80.a);
        assert!((WGS84.f - GRS80.f).abs() < 1e-10);
    }
}
