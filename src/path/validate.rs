//! Argument checks for [`PathBuilder`](super::PathBuilder) operations.
//!
//! Each check is pure: it depends only on its arguments and reports the
//! first precondition that fails. Composite checks are the conjunction of the
//! checks of every primitive the composite commits, evaluated on the derived
//! (radius-trimmed) arguments, so a composite that passes always commits in
//! full.

use std::f64::consts::PI;

use crate::error::{RejectedInput, Result};
use crate::geometry::Turn;
use crate::math::arc_2d::arc_length;
use crate::math::{EPSILON, TAU};
use crate::tessellation::ArcTessellation;

/// Absolute heading in the open interval `(-2π, 2π)`.
///
/// # Errors
///
/// Returns [`RejectedInput::Angle`] when out of range.
pub fn orientation(angle: f64) -> Result<()> {
    if angle > -TAU && angle < TAU {
        Ok(())
    } else {
        Err(RejectedInput::Angle {
            parameter: "orientation",
            value: angle,
            range: "(-2π, 2π)",
        })
    }
}

/// Relative turn in the closed interval `[-π, π]`.
///
/// # Errors
///
/// Returns [`RejectedInput::Angle`] when out of range.
pub fn rotation(parameter: &'static str, angle: f64) -> Result<()> {
    if (-PI..=PI).contains(&angle) {
        Ok(())
    } else {
        Err(RejectedInput::Angle {
            parameter,
            value: angle,
            range: "[-π, π]",
        })
    }
}

/// Finite straight run longer than [`EPSILON`].
///
/// # Errors
///
/// Returns [`RejectedInput::Length`] otherwise.
pub fn linear(parameter: &'static str, length: f64) -> Result<()> {
    if length.is_finite() && length > EPSILON {
        Ok(())
    } else {
        Err(RejectedInput::Length {
            parameter,
            value: length,
            min: EPSILON,
        })
    }
}

/// Straight run taken after turning by `angle`.
///
/// # Errors
///
/// Fails as [`linear`] or [`rotation`].
pub fn linear_offset_angle(length: f64, angle: f64) -> Result<()> {
    linear("length", length)?;
    rotation("angle", angle)
}

/// Displacement relative to the current heading.
///
/// # Errors
///
/// Returns [`RejectedInput::Displacement`] when its magnitude is not
/// finite or not above [`EPSILON`].
pub fn linear_offset_delta(parallel: f64, perpendicular: f64) -> Result<()> {
    let magnitude = parallel.hypot(perpendicular);
    if magnitude.is_finite() && magnitude > EPSILON {
        Ok(())
    } else {
        Err(RejectedInput::Displacement {
            parallel,
            perpendicular,
        })
    }
}

/// Circular arc of `radius` spanning `sweep`, split per `tessellation`.
///
/// The radius must be finite; the sweep must be non-zero and strictly inside
/// a full turn; the tessellation must yield at least two chords.
///
/// # Errors
///
/// Returns [`RejectedInput::Radius`], [`RejectedInput::Angle`],
/// [`RejectedInput::SegmentCount`] or [`RejectedInput::MinArcLength`].
pub fn circular(radius: f64, sweep: f64, tessellation: ArcTessellation) -> Result<()> {
    if !radius.is_finite() || radius <= EPSILON {
        return Err(RejectedInput::Radius {
            parameter: "radius",
            value: radius,
            min: EPSILON,
        });
    }
    if !(sweep > -TAU && sweep < TAU) || sweep.abs() <= EPSILON {
        return Err(RejectedInput::Angle {
            parameter: "sweep",
            value: sweep,
            range: "(-2π, 2π) excluding 0",
        });
    }
    match tessellation {
        ArcTessellation::Segments(n) if n < 2 => {
            Err(RejectedInput::SegmentCount { value: n, min: 2 })
        }
        ArcTessellation::Segments(_) => Ok(()),
        ArcTessellation::MinArcLength(min) => {
            let max = arc_length(radius, sweep) / 2.0;
            if min > EPSILON && min < max {
                Ok(())
            } else {
                Err(RejectedInput::MinArcLength {
                    value: min,
                    min: EPSILON,
                    max,
                })
            }
        }
    }
}

/// Straight run, arc, straight run.
///
/// # Errors
///
/// Fails as [`linear`] or [`circular`].
pub fn extended_circular(
    length1: f64,
    radius: f64,
    sweep: f64,
    tessellation: ArcTessellation,
    length2: f64,
) -> Result<()> {
    linear("length1", length1)?;
    circular(radius, sweep, tessellation)?;
    linear("length2", length2)
}

/// Two straight legs joined by a sharp quarter turn.
///
/// # Errors
///
/// Fails as [`linear`].
pub fn l_shape(length1: f64, length2: f64) -> Result<()> {
    linear("length1", length1)?;
    linear("length2", length2)
}

/// Two legs joined by a quarter arc; each leg is trimmed by `radius`.
///
/// # Errors
///
/// Fails as [`extended_circular`] on the trimmed legs.
pub fn rounded_l_shape(
    length1: f64,
    length2: f64,
    radius: f64,
    tessellation: ArcTessellation,
    turn: Turn,
) -> Result<()> {
    extended_circular(
        length1 - radius,
        radius,
        turn.quarter(),
        tessellation,
        length2 - radius,
    )
}

/// Out leg, cross leg of `height`, return leg, joined by sharp quarter turns.
///
/// # Errors
///
/// Fails as [`linear`].
pub fn u_shape(length1: f64, height: f64, length2: f64) -> Result<()> {
    linear("length1", length1)?;
    linear("height", height)?;
    linear("length2", length2)
}

/// Out and return legs joined by a half arc of diameter `height`.
///
/// # Errors
///
/// Fails as [`extended_circular`] on legs trimmed by `height / 2`.
pub fn rounded_u_shape(
    length1: f64,
    height: f64,
    length2: f64,
    tessellation: ArcTessellation,
    turn: Turn,
) -> Result<()> {
    let radius = height / 2.0;
    extended_circular(
        length1 - radius,
        radius,
        turn.half(),
        tessellation,
        length2 - radius,
    )
}

/// Three legs joined by two sharp half-height jogs.
///
/// # Errors
///
/// Fails as [`linear`].
pub fn s_shape(length1: f64, length2: f64, length3: f64, height: f64) -> Result<()> {
    linear("length1", length1)?;
    linear("height / 2", height / 2.0)?;
    linear("length2", length2)?;
    linear("length3", length3)
}

/// Three legs joined by two opposite half arcs of radius `height / 4`.
///
/// # Errors
///
/// Fails as [`linear`] or [`circular`] on the trimmed legs.
pub fn rounded_s_shape(
    length1: f64,
    length2: f64,
    length3: f64,
    height: f64,
    tessellation: ArcTessellation,
    turn: Turn,
) -> Result<()> {
    let radius = height / 4.0;
    linear("length1 - height / 4", length1 - radius)?;
    circular(radius, turn.half(), tessellation)?;
    linear("length2 - height / 2", length2 - 2.0 * radius)?;
    linear("length3 - height / 4", length3 - radius)
}
