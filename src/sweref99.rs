//! The SWEREF 99 family of projection zones.
//!
//! Sweden uses one nationwide Transverse Mercator zone, SWEREF 99 TM, plus
//! twelve regional zones spaced 0.75 or 1.5 degrees apart. The regional
//! zones share the same layout: scale 1.0, false easting 150 km, named after
//! their central meridian (SWEREF 99 13 30 is the zone on 13°30'E).

use crate::ellipsoid::GRS80;
use crate::gauss_kruger::{GaussKruger, GridParams};

/// A SWEREF 99 projection zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sweref99 {
    /// SWEREF 99 TM, the nationwide zone (EPSG:3006).
    Tm,
    /// SWEREF 99 12 00 (EPSG:3007).
    Zone1200,
    /// SWEREF 99 13 30 (EPSG:3008).
    Zone1330,
    /// SWEREF 99 14 15 (EPSG:3012).
    Zone1415,
    /// SWEREF 99 15 00 (EPSG:3009).
    Zone1500,
    /// SWEREF 99 15 45 (EPSG:3013).
    Zone1545,
    /// SWEREF 99 16 30 (EPSG:3010).
    Zone1630,
    /// SWEREF 99 17 15 (EPSG:3014).
    Zone1715,
    /// SWEREF 99 18 00 (EPSG:3011).
    Zone1800,
    /// SWEREF 99 18 45 (EPSG:3015).
    Zone1845,
    /// SWEREF 99 20 15 (EPSG:3016).
    Zone2015,
    /// SWEREF 99 21 45 (EPSG:3017).
    Zone2145,
    /// SWEREF 99 23 15 (EPSG:3018).
    Zone2315,
}

impl Sweref99 {
    /// Looks up a zone by its EPSG code, e.g. 3006 for SWEREF 99 TM.
    pub fn from_epsg(code: u32) -> Option<Sweref99> {
        match code {
            3006 => Some(Sweref99::Tm),
            3007 => Some(Sweref99::Zone1200),
            3008 => Some(Sweref99::Zone1330),
            3009 => Some(Sweref99::Zone1500),
            3010 => Some(Sweref99::Zone1630),
            3011 => Some(Sweref99::Zone1800),
            3012 => Some(Sweref99::Zone1415),
            3013 => Some(Sweref99::Zone1545),
            3014 => Some(Sweref99::Zone1715),
            3015 => Some(Sweref99::Zone1845),
            3016 => Some(Sweref99::Zone2015),
            3017 => Some(Sweref99::Zone2145),
            3018 => Some(Sweref99::Zone2315),
            _ => None,
        }
    }

    pub fn epsg(&self) -> u32 {
        match self {
            Sweref99::Tm => 3006,
            Sweref99::Zone1200 => 3007,
            Sweref99::Zone1330 => 3008,
            Sweref99::Zone1500 => 3009,
            Sweref99::Zone1630 => 3010,
            Sweref99::Zone1800 => 3011,
            Sweref99::Zone1415 => 3012,
            Sweref99::Zone1545 => 3013,
            Sweref99::Zone1715 => 3014,
            Sweref99::Zone1845 => 3015,
            Sweref99::Zone2015 => 3016,
            Sweref99::Zone2145 => 3017,
            Sweref99::Zone2315 => 3018,
        }
    }

    /// The projection parameters of this zone.
    pub fn params(&self) -> GridParams {
        match self {
            Sweref99::Tm => GridParams {
                central_meridian: 15.0,
                latitude_of_origin: 0.0,
                scale: 0.9996,
                false_northing: 0.0,
                false_easting: 500_000.0,
            },
            _ => GridParams {
                central_meridian: self.central_meridian(),
                latitude_of_origin: 0.0,
                scale: 1.0,
                false_northing: 0.0,
                false_easting: 150_000.0,
            },
        }
    }

    /// An inverse converter for this zone on GRS80.
    pub fn projection(&self) -> GaussKruger {
        GaussKruger::new(GRS80, self.params())
    }

    fn central_meridian(&self) -> f64 {
        match self {
            Sweref99::Tm => 15.0,
            Sweref99::Zone1200 => 12.0,
            Sweref99::Zone1330 => 13.5,
            Sweref99::Zone1415 => 14.25,
            Sweref99::Zone1500 => 15.0,
            Sweref99::Zone1545 => 15.75,
            Sweref99::Zone1630 => 16.5,
            Sweref99::Zone1715 => 17.25,
            Sweref99::Zone1800 => 18.0,
            Sweref99::Zone1845 => 18.75,
            Sweref99::Zone2015 => 20.25,
            Sweref99::Zone2145 => 21.75,
            Sweref99::Zone2315 => 23.25,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const ALL_ZONES: [Sweref99; 13] = [
        Sweref99::Tm,
        Sweref99::Zone1200,
        Sweref99::Zone1330,
        Sweref99::Zone1415,
        Sweref99::Zone1500,
        Sweref99::Zone1545,
        Sweref99::Zone1630,
        Sweref99::Zone1715,
        Sweref99::Zone1800,
        Sweref99::Zone1845,
        Sweref99::Zone2015,
        Sweref99::Zone2145,
        Sweref99::Zone2315,
    ];

    #[test]
    fn test_zone_1500_is_the_default() {
        assert_eq!(Sweref99::Zone1500.params(), GridParams::default());
    }

    #[test]
    fn test_tm_params() {
        let params = Sweref99::Tm.params();
        assert_eq!(params.central_meridian, 15.0);
        assert_eq!(params.scale, 0.9996);
        assert_eq!(params.false_easting, 500_000.0);
    }

    #[test]
    fn test_regional_params() {
        let params = Sweref99::Zone2315.params();
        assert_eq!(params.central_meridian, 23.25);
        assert_eq!(params.scale, 1.0);
        assert_eq!(params.false_easting, 150_000.0);
    }

    #[test]
    fn test_regional_zone_conversion() {
        // On the 18 00 central meridian, roughly the latitude of Stockholm
        let proj = Sweref99::Zone1800.projection();
        let (lat, lon) = proj.grid_to_geodetic(150_000.0, 6_580_000.0).unwrap();
        assert_relative_eq!(lon, 18.0, epsilon = 1e-9);
        assert!(lat > 59.0 && lat < 59.7, "latitude out of range: {lat}");
    }

    #[test]
    fn test_epsg_roundtrip() {
        for zone in ALL_ZONES {
            assert_eq!(Sweref99::from_epsg(zone.epsg()), Some(zone));
        }
    }

    #[test]
    fn test_unknown_epsg() {
        for code in [3005, 3019, 4326] {
            assert_eq!(Sweref99::from_epsg(code), None);
        }
    }
}
