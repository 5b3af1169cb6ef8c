use crate::coordinate::{CoordinateType, CrsCoordinate, Point};
use crate::error::Error;
use crate::params::gauss_kruger_for;
use crate::projection::{CrsFamily, CrsProjection};

/// Transforms a coordinate to another coordinate reference system.
///
/// The dispatch is a single classification over the source and target
/// families:
///
/// * same source and target projection: the input is returned unchanged
///   (no engine call is made);
/// * WGS84 to a grid: one forward projection with the target's parameters;
/// * grid to WGS84: one inverse projection with the source's parameters;
/// * grid to grid (between or within the SWEREF99 and RT90 families): no
///   direct formula exists, so the coordinate is first taken to WGS84 with
///   the source's parameters and then projected with the target's.
///
/// Grid output is rounded to the nearest millimeter; geodetic output is
/// not rounded.
///
/// # Errors
///
/// [`Error::UnhandledCrsPair`] for a source/target combination that cannot
/// be classified. With the current closed catalog this branch is
/// unreachable, but it is kept so an incomplete classification would fail
/// loudly rather than silently misproject.
///
/// # Example
///
/// ```
/// use sweden_crs::{transform, CrsCoordinate, CrsProjection};
///
/// let stockholm = CrsCoordinate::new(CrsProjection::Wgs84, 18.059196, 59.330231);
/// let projected = transform(&stockholm, CrsProjection::Sweref99Tm)?;
/// assert_eq!(projected.projection(), CrsProjection::Sweref99Tm);
/// assert!((projected.x() - 674032.357).abs() < 0.5);
/// assert!((projected.y() - 6580821.991).abs() < 0.5);
/// # Ok::<(), sweden_crs::Error>(())
/// ```
pub fn transform(source: &CrsCoordinate, target: CrsProjection) -> Result<CrsCoordinate, Error> {
    if source.projection() == target {
        return Ok(*source);
    }

    match (source.projection().family(), target.family()) {
        (CrsFamily::Wgs84, CrsFamily::Sweref99 | CrsFamily::Rt90) => {
            geodetic_to_grid(source, target)
        }
        (CrsFamily::Sweref99 | CrsFamily::Rt90, CrsFamily::Wgs84) => {
            grid_to_geodetic(source, target)
        }
        (CrsFamily::Sweref99 | CrsFamily::Rt90, CrsFamily::Sweref99 | CrsFamily::Rt90) => {
            // The only direct transforms are to and from WGS84, so pivot
            // through it.
            let pivot = grid_to_geodetic(source, CrsProjection::Wgs84)?;
            geodetic_to_grid(&pivot, target)
        }
        _ => Err(Error::UnhandledCrsPair {
            from: source.projection(),
            to: target,
        }),
    }
}

/// Transforms an x/y point between two coordinate reference systems.
///
/// Any [`Point`] value works as input; the transformation itself runs in
/// `f64` and the result is converted back to the point's value type.
///
#[cfg_attr(
    feature = "geo-types",
    doc = r##"
# Example

```
use geo_types::Point;
use sweden_crs::{transform_point, CrsProjection};

let stockholm = Point::new(18.059196, 59.330231);
let projected: Point<f64> =
    transform_point(&stockholm, CrsProjection::Wgs84, CrsProjection::Sweref99Tm)?;
assert!((projected.x() - 674032.357).abs() < 0.5);
# Ok::<(), sweden_crs::Error>(())
```
"##
)]
pub fn transform_point<T, P>(
    point: &P,
    source: CrsProjection,
    target: CrsProjection,
) -> Result<P, Error>
where
    T: CoordinateType,
    P: Point<T>,
{
    let x = point.x().to_f64().ok_or(Error::FloatConversion)?;
    let y = point.y().to_f64().ok_or(Error::FloatConversion)?;
    let transformed = transform(&CrsCoordinate::new(source, x, y), target)?;
    Ok(P::from_xy(
        T::from(transformed.x()).ok_or(Error::FloatConversion)?,
        T::from(transformed.y()).ok_or(Error::FloatConversion)?,
    ))
}

// Precondition of both helpers: the grid-side projection is not WGS84;
// the router's classification guarantees it.

fn geodetic_to_grid(source: &CrsCoordinate, target: CrsProjection) -> Result<CrsCoordinate, Error> {
    let engine = gauss_kruger_for(target)?;
    let (easting, northing) = engine.geodetic_to_grid(source.y(), source.x());
    Ok(CrsCoordinate::new(target, easting, northing))
}

fn grid_to_geodetic(source: &CrsCoordinate, target: CrsProjection) -> Result<CrsCoordinate, Error> {
    let engine = gauss_kruger_for(source.projection())?;
    let (latitude, longitude) = engine.grid_to_geodetic(source.y(), source.x());
    Ok(CrsCoordinate::new(target, longitude, latitude))
}
