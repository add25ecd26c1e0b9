use thiserror::Error;

/// Rejection reported by a path-building operation whose arguments fall
/// outside its domain.
///
/// A rejected operation never changes the builder; the variant names the
/// precondition that failed.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RejectedInput {
    #[error("length {parameter} = {value} must be finite and greater than {min}")]
    Length {
        parameter: &'static str,
        value: f64,
        min: f64,
    },

    #[error("angle {parameter} = {value} is out of range {range}")]
    Angle {
        parameter: &'static str,
        value: f64,
        range: &'static str,
    },

    #[error("radius {parameter} = {value} must be finite and greater than {min}")]
    Radius {
        parameter: &'static str,
        value: f64,
        min: f64,
    },

    #[error("segment count {value} must be at least {min}")]
    SegmentCount { value: usize, min: usize },

    #[error("minimum arc length {value} is out of range ({min}, {max})")]
    MinArcLength { value: f64, min: f64, max: f64 },

    #[error("displacement ({parallel}, {perpendicular}) is zero-length or not finite")]
    Displacement { parallel: f64, perpendicular: f64 },
}

/// Convenience type alias for results of path-building operations.
pub type Result<T> = std::result::Result<T, RejectedInput>;
