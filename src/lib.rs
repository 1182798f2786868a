//! Inverse Gauss conformal projection for the Swedish SWEREF 99 grids.
//!
//! Converts grid coordinates (easting, northing) to geodetic latitude and
//! longitude on the GRS80 ellipsoid using Krüger's fourth-order series. The
//! default converter is the SWEREF 99 15 00 zone; the whole zone family is
//! available through [`Sweref99`].
//!
//! ```
//! use gausskruger::GaussKruger;
//!
//! let proj = GaussKruger::default();
//! let (lat, lon) = proj.grid_to_geodetic(150_000.0, 6_583_052.0)?;
//! assert!((lon - 15.0).abs() < 1e-9);
//! assert!(lat > 59.0 && lat < 59.7);
//! # Ok::<(), gausskruger::GridError>(())
//! ```

pub mod ellipsoid;
pub mod error;
pub mod gauss_kruger;
pub mod sweref99;

pub use ellipsoid::{Ellipsoid, GRS80, WGS84};
pub use error::GridError;
pub use gauss_kruger::{GaussKruger, GridParams};
pub use sweref99::Sweref99;
