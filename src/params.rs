//! Grid parameters for the projected coordinate reference systems.
//!
//! Every zone is parameterized on the GRS80 ellipsoid. The SWEREF99 zones
//! use their nominal central meridian and offsets. The RT90 zones use the
//! "direct projection" parameter set published by Lantmäteriet, which fits
//! the Bessel-based RT90 grid onto GRS80 with a per-zone adjusted central
//! meridian, scale and false offsets, so no separate datum shift is needed.

use crate::error::Error;
use crate::gauss_kruger::GaussKruger;
use crate::projection::CrsProjection;
use std::sync::OnceLock;

// GRS80
const AXIS: f64 = 6378137.0;
const FLATTENING: f64 = 1.0 / 298.257222101;

/// The six base constants defining one projected zone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct GridParameters {
    /// Semi-major axis of the ellipsoid, meters.
    pub axis: f64,
    /// Flattening of the ellipsoid.
    pub flattening: f64,
    /// Central meridian of the zone, degrees.
    pub central_meridian: f64,
    /// Scale factor on the central meridian.
    pub scale: f64,
    /// Northing of the origin, meters.
    pub false_northing: f64,
    /// Easting of the origin, meters.
    pub false_easting: f64,
}

impl GridParameters {
    const fn sweref99(central_meridian: f64, scale: f64, false_easting: f64) -> Self {
        GridParameters {
            axis: AXIS,
            flattening: FLATTENING,
            central_meridian,
            scale,
            false_northing: 0.0,
            false_easting,
        }
    }

    const fn rt90(
        central_meridian: f64,
        scale: f64,
        false_northing: f64,
        false_easting: f64,
    ) -> Self {
        GridParameters {
            axis: AXIS,
            flattening: FLATTENING,
            central_meridian,
            scale,
            false_northing,
            false_easting,
        }
    }

    /// The parameters for one projected coordinate reference system.
    ///
    /// # Errors
    ///
    /// [`Error::NotProjected`] for WGS84, which has no grid parameters.
    pub fn for_projection(projection: CrsProjection) -> Result<GridParameters, Error> {
        use CrsProjection::*;
        match projection {
            Wgs84 => Err(Error::NotProjected(projection)),

            Sweref99Tm => Ok(Self::sweref99(15.00, 0.9996, 500000.0)),
            Sweref991200 => Ok(Self::sweref99(12.00, 1.0, 150000.0)),
            Sweref991330 => Ok(Self::sweref99(13.50, 1.0, 150000.0)),
            Sweref991500 => Ok(Self::sweref99(15.00, 1.0, 150000.0)),
            Sweref991630 => Ok(Self::sweref99(16.50, 1.0, 150000.0)),
            Sweref991800 => Ok(Self::sweref99(18.00, 1.0, 150000.0)),
            Sweref991415 => Ok(Self::sweref99(14.25, 1.0, 150000.0)),
            Sweref991545 => Ok(Self::sweref99(15.75, 1.0, 150000.0)),
            Sweref991715 => Ok(Self::sweref99(17.25, 1.0, 150000.0)),
            Sweref991845 => Ok(Self::sweref99(18.75, 1.0, 150000.0)),
            Sweref992015 => Ok(Self::sweref99(20.25, 1.0, 150000.0)),
            Sweref992145 => Ok(Self::sweref99(21.75, 1.0, 150000.0)),
            Sweref992315 => Ok(Self::sweref99(23.25, 1.0, 150000.0)),

            Rt9075GonV => Ok(Self::rt90(
                11.0 + 18.375 / 60.0,
                1.000006000000,
                -667.282,
                1500025.141,
            )),
            Rt9050GonV => Ok(Self::rt90(
                13.0 + 33.376 / 60.0,
                1.000005800000,
                -667.130,
                1500044.695,
            )),
            Rt9025GonV => Ok(Self::rt90(
                15.0 + 48.0 / 60.0 + 22.624306 / 3600.0,
                1.00000561024,
                -667.711,
                1500064.274,
            )),
            Rt9000GonV => Ok(Self::rt90(
                18.0 + 3.378 / 60.0,
                1.000005400000,
                -668.844,
                1500083.521,
            )),
            Rt9025GonO => Ok(Self::rt90(
                20.0 + 18.379 / 60.0,
                1.000005200000,
                -670.706,
                1500102.765,
            )),
            Rt9050GonO => Ok(Self::rt90(
                22.0 + 33.380 / 60.0,
                1.000004900000,
                -672.557,
                1500121.846,
            )),
        }
    }
}

/// One engine per projected CRS, EPSG 3006 up to 3024 in order.
static ENGINES: OnceLock<Vec<GaussKruger>> = OnceLock::new();

/// The shared Gauss-Krüger engine for a projected coordinate reference
/// system.
///
/// The full table is built on first use and never mutated afterwards, so
/// concurrent transforms read it without synchronization.
///
/// # Errors
///
/// [`Error::NotProjected`] for WGS84: it is never fed into the engine as a
/// projected CRS.
pub(crate) fn gauss_kruger_for(projection: CrsProjection) -> Result<&'static GaussKruger, Error> {
    if projection.is_wgs84() {
        return Err(Error::NotProjected(projection));
    }
    let engines = ENGINES.get_or_init(|| {
        CrsProjection::all()
            .iter()
            .filter(|p| !p.is_wgs84())
            .map(|p| {
                // Infallible: every non-WGS84 projection has parameters.
                let parameters = GridParameters::for_projection(*p)
                    .unwrap_or_else(|_| unreachable!("grid parameters exist for {p}"));
                GaussKruger::new(&parameters)
            })
            .collect()
    });
    // The table is ordered by EPSG number starting at 3006.
    Ok(&engines[(projection.epsg_number() - 3006) as usize])
}
