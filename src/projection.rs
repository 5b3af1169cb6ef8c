use crate::coordinate::CrsCoordinate;
use crate::error::Error;
use std::fmt;

const EPSG_WGS84: u32 = 4326;
const EPSG_SWEREF_LOWER: u32 = 3006; // the national SWEREF 99 TM
const EPSG_SWEREF_UPPER: u32 = 3018;
const EPSG_RT90_LOWER: u32 = 3019;
const EPSG_RT90_UPPER: u32 = 3024;

/// The supported coordinate reference systems.
///
/// The discriminant of each variant is its EPSG number, so the
/// projection/EPSG mapping is a bijection by construction:
///
/// * [`CrsProjection::Wgs84`] — the global geodetic system (EPSG:4326),
///   longitude/latitude in decimal degrees.
/// * SWEREF99 — the current Swedish grid (EPSG:3006-3018): the national
///   "SWEREF 99 TM" plus twelve 1°30′-wide local zones, meters.
/// * RT90 — the legacy Swedish grid (EPSG:3019-3024): six local zones,
///   meters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum CrsProjection {
    /// <https://epsg.io/4326>
    Wgs84 = 4326,

    /// "SWEREF 99 TM", the national projection. <https://epsg.io/3006>
    Sweref99Tm = 3006,
    /// SWEREF 99 12 00
    Sweref991200 = 3007,
    /// SWEREF 99 13 30
    Sweref991330 = 3008,
    /// SWEREF 99 15 00
    Sweref991500 = 3009,
    /// SWEREF 99 16 30
    Sweref991630 = 3010,
    /// SWEREF 99 18 00
    Sweref991800 = 3011,
    /// SWEREF 99 14 15
    Sweref991415 = 3012,
    /// SWEREF 99 15 45
    Sweref991545 = 3013,
    /// SWEREF 99 17 15
    Sweref991715 = 3014,
    /// SWEREF 99 18 45
    Sweref991845 = 3015,
    /// SWEREF 99 20 15
    Sweref992015 = 3016,
    /// SWEREF 99 21 45
    Sweref992145 = 3017,
    /// SWEREF 99 23 15
    Sweref992315 = 3018,

    /// RT90 7.5 gon V
    Rt9075GonV = 3019,
    /// RT90 5 gon V
    Rt9050GonV = 3020,
    /// RT90 2.5 gon V. <https://epsg.io/3021>
    Rt9025GonV = 3021,
    /// RT90 0 gon
    Rt9000GonV = 3022,
    /// RT90 2.5 gon O
    Rt9025GonO = 3023,
    /// RT90 5 gon O
    Rt9050GonO = 3024,
}

/// The three families of supported coordinate reference systems.
///
/// Family membership is always derived from the EPSG code range, never
/// stored separately, so the two representations cannot drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrsFamily {
    /// Geodetic longitude/latitude (EPSG:4326).
    Wgs84,
    /// The current Swedish grid (EPSG:3006-3018).
    Sweref99,
    /// The legacy Swedish grid (EPSG:3019-3024).
    Rt90,
}

impl CrsProjection {
    /// All 20 supported projections: WGS84 first, the remainder strictly
    /// ascending by EPSG number (3006 up to 3024).
    ///
    /// The ordering is part of the contract and may be relied upon for
    /// deterministic iteration.
    pub const fn all() -> [CrsProjection; 20] {
        use CrsProjection::*;
        [
            Wgs84,
            Sweref99Tm,
            Sweref991200,
            Sweref991330,
            Sweref991500,
            Sweref991630,
            Sweref991800,
            Sweref991415,
            Sweref991545,
            Sweref991715,
            Sweref991845,
            Sweref992015,
            Sweref992145,
            Sweref992315,
            Rt9075GonV,
            Rt9050GonV,
            Rt9025GonV,
            Rt9000GonV,
            Rt9025GonO,
            Rt9050GonO,
        ]
    }

    /// Look up a projection by its EPSG number.
    ///
    /// # Errors
    ///
    /// [`Error::UnsupportedEpsg`] if the code is not one of the 20
    /// supported systems.
    pub fn from_epsg(epsg: u32) -> Result<CrsProjection, Error> {
        use CrsProjection::*;
        match epsg {
            4326 => Ok(Wgs84),
            3006 => Ok(Sweref99Tm),
            3007 => Ok(Sweref991200),
            3008 => Ok(Sweref991330),
            3009 => Ok(Sweref991500),
            3010 => Ok(Sweref991630),
            3011 => Ok(Sweref991800),
            3012 => Ok(Sweref991415),
            3013 => Ok(Sweref991545),
            3014 => Ok(Sweref991715),
            3015 => Ok(Sweref991845),
            3016 => Ok(Sweref992015),
            3017 => Ok(Sweref992145),
            3018 => Ok(Sweref992315),
            3019 => Ok(Rt9075GonV),
            3020 => Ok(Rt9050GonV),
            3021 => Ok(Rt9025GonV),
            3022 => Ok(Rt9000GonV),
            3023 => Ok(Rt9025GonO),
            3024 => Ok(Rt9050GonO),
            other => Err(Error::UnsupportedEpsg(other)),
        }
    }

    /// Whether an EPSG number refers to one of the supported systems.
    pub fn is_epsg_supported(epsg: u32) -> bool {
        epsg == EPSG_WGS84 || (EPSG_SWEREF_LOWER..=EPSG_RT90_UPPER).contains(&epsg)
    }

    /// The EPSG number of this projection.
    pub fn epsg_number(&self) -> u32 {
        *self as u32
    }

    /// The family this projection belongs to, derived from its EPSG number.
    pub fn family(&self) -> CrsFamily {
        match self.epsg_number() {
            EPSG_SWEREF_LOWER..=EPSG_SWEREF_UPPER => CrsFamily::Sweref99,
            EPSG_RT90_LOWER..=EPSG_RT90_UPPER => CrsFamily::Rt90,
            _ => CrsFamily::Wgs84,
        }
    }

    /// True for WGS84 (EPSG:4326).
    pub fn is_wgs84(&self) -> bool {
        self.family() == CrsFamily::Wgs84
    }

    /// True for any version of SWEREF99 (EPSG:3006-3018).
    pub fn is_sweref99(&self) -> bool {
        self.family() == CrsFamily::Sweref99
    }

    /// True for any version of RT90 (EPSG:3019-3024).
    pub fn is_rt90(&self) -> bool {
        self.family() == CrsFamily::Rt90
    }

    /// Convenience constructor for a coordinate in this projection.
    ///
    /// `x` is longitude (degrees) for WGS84 and easting (meters) for the
    /// grids; `y` is latitude respectively northing.
    pub fn create_coordinate(&self, x: f64, y: f64) -> CrsCoordinate {
        CrsCoordinate::new(*self, x, y)
    }

    fn name(&self) -> &'static str {
        use CrsProjection::*;
        match self {
            Wgs84 => "WGS84",
            Sweref99Tm => "SWEREF_99_TM",
            Sweref991200 => "SWEREF_99_12_00",
            Sweref991330 => "SWEREF_99_13_30",
            Sweref991500 => "SWEREF_99_15_00",
            Sweref991630 => "SWEREF_99_16_30",
            Sweref991800 => "SWEREF_99_18_00",
            Sweref991415 => "SWEREF_99_14_15",
            Sweref991545 => "SWEREF_99_15_45",
            Sweref991715 => "SWEREF_99_17_15",
            Sweref991845 => "SWEREF_99_18_45",
            Sweref992015 => "SWEREF_99_20_15",
            Sweref992145 => "SWEREF_99_21_45",
            Sweref992315 => "SWEREF_99_23_15",
            Rt9075GonV => "RT90_7_5_GON_V",
            Rt9050GonV => "RT90_5_0_GON_V",
            Rt9025GonV => "RT90_2_5_GON_V",
            Rt9000GonV => "RT90_0_0_GON_V",
            Rt9025GonO => "RT90_2_5_GON_O",
            Rt9050GonO => "RT90_5_0_GON_O",
        }
    }
}

/// Renders e.g. `SWEREF_99_TM(EPSG:3006)` or `RT90_0_0_GON_V(EPSG:3022)`.
impl fmt::Display for CrsProjection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(EPSG:{})", self.name(), self.epsg_number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_returns_wgs84_first_then_ascending_epsg() {
        let all = CrsProjection::all();
        assert_eq!(all.len(), 20);
        assert_eq!(all[0], CrsProjection::Wgs84);
        for (i, projection) in all.iter().enumerate().skip(1) {
            assert_eq!(projection.epsg_number(), 3005 + i as u32);
        }
        assert_eq!(all[1], CrsProjection::Sweref99Tm);
        assert_eq!(all[19], CrsProjection::Rt9050GonO);
    }

    #[test]
    fn epsg_lookup_is_a_bijection() {
        for projection in CrsProjection::all() {
            let roundtripped = CrsProjection::from_epsg(projection.epsg_number()).unwrap();
            assert_eq!(roundtripped, projection);
        }
    }

    #[test]
    fn unsupported_epsg_is_rejected() {
        for epsg in [0, 3005, 3025, 4325, 4327, 9999] {
            assert!(!CrsProjection::is_epsg_supported(epsg));
            assert_eq!(
                CrsProjection::from_epsg(epsg),
                Err(Error::UnsupportedEpsg(epsg))
            );
        }
    }

    #[test]
    fn supported_epsg_range() {
        assert!(CrsProjection::is_epsg_supported(4326));
        for epsg in 3006..=3024 {
            assert!(CrsProjection::is_epsg_supported(epsg));
        }
    }

    #[test]
    fn family_classification_covers_every_projection() {
        let mut wgs84 = 0;
        let mut sweref = 0;
        let mut rt90 = 0;
        for projection in CrsProjection::all() {
            match projection.family() {
                CrsFamily::Wgs84 => wgs84 += 1,
                CrsFamily::Sweref99 => sweref += 1,
                CrsFamily::Rt90 => rt90 += 1,
            }
            // The predicates are mutually exclusive views of the family.
            assert_eq!(
                1,
                projection.is_wgs84() as u8
                    + projection.is_sweref99() as u8
                    + projection.is_rt90() as u8
            );
        }
        assert_eq!((wgs84, sweref, rt90), (1, 13, 6));
    }

    #[test]
    fn display_includes_name_and_epsg() {
        assert_eq!(
            CrsProjection::Sweref99Tm.to_string(),
            "SWEREF_99_TM(EPSG:3006)"
        );
        assert_eq!(
            CrsProjection::Rt9000GonV.to_string(),
            "RT90_0_0_GON_V(EPSG:3022)"
        );
        assert_eq!(CrsProjection::Wgs84.to_string(), "WGS84(EPSG:4326)");
    }
}
