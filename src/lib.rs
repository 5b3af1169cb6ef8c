//! `sweden-crs` transforms point coordinates between the coordinate
//! reference systems used in Sweden: WGS84, SWEREF99 (the current national
//! grid, 13 versions) and RT90 (the legacy national grid, 6 versions).
//!
//! Each supported system is a variant of [`CrsProjection`], whose
//! discriminant is the corresponding EPSG number (4326 for WGS84,
//! 3006-3018 for SWEREF99, 3019-3024 for RT90). A [`CrsCoordinate`] is an
//! immutable (projection, x, y) value; [`transform`] (or
//! [`CrsCoordinate::transform`]) converts it to any other supported
//! system. Transforms to and from WGS84 are a single Gauss-Krüger
//! projection; transforms between two grid systems always pivot through
//! WGS84, since no direct grid-to-grid formula exists.
//!
//! Everything is pure, synchronous and CPU-bound. The per-zone projection
//! parameters are computed once and shared immutably, so transforms may be
//! issued concurrently from any number of threads.
//!
//! Accuracy: grid output is rounded to the nearest millimeter. SWEREF99
//! and WGS84 agree at the sub-millimeter level; the RT90 zones use
//! Lantmäteriet's direct-projection fit of the legacy Bessel grid, which
//! is accurate to roughly a decimeter.
//!
//! # Example
//!
//! ```
//! use sweden_crs::{CrsCoordinate, CrsProjection};
//!
//! // Stockholm Central Station.
//! let wgs84 = CrsCoordinate::new(CrsProjection::Wgs84, 18.059196, 59.330231);
//!
//! let sweref = wgs84.transform(CrsProjection::Sweref99Tm)?;
//! assert!((sweref.x() - 674032.357).abs() < 0.5);
//! assert!((sweref.y() - 6580821.991).abs() < 0.5);
//!
//! // Grid to grid pivots through WGS84 internally.
//! let rt90 = sweref.transform(CrsProjection::Rt9025GonV)?;
//! assert_eq!(rt90.projection().epsg_number(), 3021);
//! # Ok::<(), sweden_crs::Error>(())
//! ```
//!
//! Coordinates can also be tagged by EPSG number, and looked up from it:
//!
//! ```
//! use sweden_crs::{CrsCoordinate, CrsProjection};
//!
//! let coordinate = CrsCoordinate::from_epsg(3006, 674032.357, 6580821.991)?;
//! assert_eq!(coordinate.projection(), CrsProjection::Sweref99Tm);
//! assert!(CrsProjection::is_epsg_supported(3011));
//! assert!(!CrsProjection::is_epsg_supported(3025));
//! # Ok::<(), sweden_crs::Error>(())
//! ```

mod coordinate;
mod error;
mod gauss_kruger;
#[cfg(feature = "geo-types")]
mod geo_types;
mod params;
mod projection;
mod transform;

pub use crate::coordinate::CoordinateType;
pub use crate::coordinate::CrsCoordinate;
pub use crate::coordinate::Point;
pub use crate::error::Error;
pub use crate::projection::CrsFamily;
pub use crate::projection::CrsProjection;
pub use crate::transform::transform;
pub use crate::transform::transform_point;
