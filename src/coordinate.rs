use crate::error::Error;
use crate::projection::CrsProjection;
use crate::transform::transform;
use num_traits::Float;
use std::fmt;

/// A point coordinate tagged with its coordinate reference system.
///
/// For WGS84 the two numeric fields are longitude and latitude in decimal
/// degrees; for the SWEREF99 and RT90 grids they are easting and northing
/// in meters.
///
/// This is a plain immutable value: freely copyable, no shared state.
/// Equality is exact field equality — coordinates that differ by
/// floating-point noise compare unequal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrsCoordinate {
    projection: CrsProjection,
    x: f64,
    y: f64,
}

impl CrsCoordinate {
    /// Creates a coordinate in the given coordinate reference system.
    ///
    /// `x` is longitude (degrees) for WGS84 and easting (meters) for the
    /// grids; `y` is latitude respectively northing.
    pub fn new(projection: CrsProjection, x: f64, y: f64) -> CrsCoordinate {
        CrsCoordinate { projection, x, y }
    }

    /// Creates a coordinate in the coordinate reference system identified
    /// by an EPSG number.
    ///
    /// # Errors
    ///
    /// [`Error::UnsupportedEpsg`] if the code is not in the supported set.
    pub fn from_epsg(epsg: u32, x: f64, y: f64) -> Result<CrsCoordinate, Error> {
        Ok(CrsCoordinate::new(CrsProjection::from_epsg(epsg)?, x, y))
    }

    /// The coordinate reference system this coordinate is expressed in.
    pub fn projection(&self) -> CrsProjection {
        self.projection
    }

    /// Longitude in degrees (WGS84) or easting in meters (grids).
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Latitude in degrees (WGS84) or northing in meters (grids).
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Transforms this coordinate to another coordinate reference system.
    ///
    /// See [`transform`] for the dispatch rules.
    pub fn transform(&self, target: CrsProjection) -> Result<CrsCoordinate, Error> {
        transform(self, target)
    }
}

impl fmt::Display for CrsCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CrsCoordinate [ X: {} , Y: {} , CRS: {} ]",
            self.x, self.y, self.projection
        )
    }
}

/// The numeric types usable as coordinate values in [`Point`].
pub trait CoordinateType: Float + Copy + PartialOrd + fmt::Debug {}
impl<T: Float + Copy + PartialOrd + fmt::Debug> CoordinateType for T {}

/// An x/y value pair that can be fed to [`transform_point`].
///
/// Implementations for `geo_types::Coord` and `geo_types::Point` are
/// provided behind the `geo-types` feature (enabled by default); a plain
/// `(T, T)` tuple works out of the box.
///
/// [`transform_point`]: crate::transform_point
pub trait Point<T: CoordinateType> {
    fn x(&self) -> T;
    fn y(&self) -> T;
    fn from_xy(x: T, y: T) -> Self;
}

impl<T: CoordinateType> Point<T> for (T, T) {
    fn x(&self) -> T {
        self.0
    }
    fn y(&self) -> T {
        self.1
    }
    fn from_xy(x: T, y: T) -> Self {
        (x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_epsg_rejects_unsupported_codes() {
        assert_eq!(
            CrsCoordinate::from_epsg(3025, 0.0, 0.0),
            Err(Error::UnsupportedEpsg(3025))
        );
        let coordinate = CrsCoordinate::from_epsg(3006, 674032.357, 6580821.991).unwrap();
        assert_eq!(coordinate.projection(), CrsProjection::Sweref99Tm);
    }

    #[test]
    fn equality_is_exact() {
        let a = CrsCoordinate::new(CrsProjection::Wgs84, 18.059196, 59.330231);
        let b = CrsCoordinate::new(CrsProjection::Wgs84, 18.059196, 59.330231);
        assert_eq!(a, b);

        let nudged = CrsCoordinate::new(CrsProjection::Wgs84, 18.059196 + 1e-12, 59.330231);
        assert_ne!(a, nudged);

        let other_crs = CrsCoordinate::new(CrsProjection::Sweref991500, 18.059196, 59.330231);
        assert_ne!(a, other_crs);
    }

    #[test]
    fn display_rendering() {
        let coordinate = CrsCoordinate::new(CrsProjection::Sweref99Tm, 674032.357, 6580821.991);
        assert_eq!(
            coordinate.to_string(),
            "CrsCoordinate [ X: 674032.357 , Y: 6580821.991 , CRS: SWEREF_99_TM(EPSG:3006) ]"
        );
    }

    #[test]
    fn tuple_implements_point() {
        let point = <(f64, f64)>::from_xy(1.5, 2.5);
        assert_eq!(point.x(), 1.5);
        assert_eq!(point.y(), 2.5);
    }
}
