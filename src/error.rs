use crate::projection::CrsProjection;
use thiserror::Error;

/// Errors that can occur when looking up a projection or transforming a
/// coordinate.
///
/// All failures are immediate and deterministic for a given input; nothing
/// is retried internally.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The EPSG code is not one of the 20 supported coordinate reference
    /// systems (4326, 3006-3018, 3019-3024).
    #[error("no coordinate reference system is supported for EPSG:{0}")]
    UnsupportedEpsg(u32),

    /// WGS84 was used where a projected (grid) coordinate reference system
    /// is required. Grid parameters only exist for SWEREF99 and RT90.
    #[error("{0} is not a projected coordinate reference system")]
    NotProjected(CrsProjection),

    /// The source/target combination could not be classified. Only
    /// reachable if the family classification ever became incomplete.
    //
    // Field names avoid `source`, which thiserror reserves for the
    // underlying-cause accessor of std::error::Error.
    #[error("unhandled transformation: {from} => {to}")]
    UnhandledCrsPair {
        from: CrsProjection,
        to: CrsProjection,
    },

    /// A coordinate value could not be converted to or from `f64`.
    #[error("coordinate value could not be converted to/from f64")]
    FloatConversion,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_the_offending_identifiers() {
        assert_eq!(
            Error::UnsupportedEpsg(3025).to_string(),
            "no coordinate reference system is supported for EPSG:3025"
        );
        assert_eq!(
            Error::NotProjected(CrsProjection::Wgs84).to_string(),
            "WGS84(EPSG:4326) is not a projected coordinate reference system"
        );
        assert_eq!(
            Error::UnhandledCrsPair {
                from: CrsProjection::Sweref99Tm,
                to: CrsProjection::Rt9025GonV,
            }
            .to_string(),
            "unhandled transformation: SWEREF_99_TM(EPSG:3006) => RT90_2_5_GON_V(EPSG:3021)"
        );
    }

    #[test]
    fn projections_are_message_context_not_a_cause_chain() {
        // The pair variant names both projections for diagnosis; neither
        // is an underlying error, so the std cause accessor stays empty.
        let error: &dyn std::error::Error = &Error::UnhandledCrsPair {
            from: CrsProjection::Sweref99Tm,
            to: CrsProjection::Rt9025GonV,
        };
        assert!(error.source().is_none());
    }
}
