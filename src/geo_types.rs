use crate::coordinate::{CoordinateType, Point};

///```rust
/// use geo_types::Coord;
/// use sweden_crs::{transform_point, CrsProjection};
///
/// let stockholm = Coord { x: 18.059196, y: 59.330231 };
/// let projected: Coord<f64> =
///     transform_point(&stockholm, CrsProjection::Wgs84, CrsProjection::Sweref99Tm).unwrap();
/// assert!((projected.x - 674032.357).abs() < 0.5);
/// assert!((projected.y - 6580821.991).abs() < 0.5);
/// ```
impl<T: CoordinateType> Point<T> for geo_types::Coord<T> {
    fn x(&self) -> T {
        self.x
    }
    fn y(&self) -> T {
        self.y
    }
    fn from_xy(x: T, y: T) -> Self {
        Self { x, y }
    }
}

///```rust
/// use geo_types::Point;
/// use sweden_crs::{transform_point, CrsProjection};
///
/// let stockholm = Point::new(18.059196, 59.330231);
/// let projected: Point<f64> =
///     transform_point(&stockholm, CrsProjection::Wgs84, CrsProjection::Sweref99Tm).unwrap();
/// assert!((projected.x() - 674032.357).abs() < 0.5);
/// assert!((projected.y() - 6580821.991).abs() < 0.5);
/// ```
impl<T: CoordinateType> Point<T> for geo_types::Point<T> {
    fn x(&self) -> T {
        geo_types::Point::x(*self)
    }
    fn y(&self) -> T {
        geo_types::Point::y(*self)
    }
    fn from_xy(x: T, y: T) -> Self {
        Self::new(x, y)
    }
}
