use crate::error::Result;
use crate::tessellation::ArcTessellation;

use super::{validate, PathBuilder};

impl PathBuilder {
    /// Sets the construction heading to an absolute angle in radians.
    ///
    /// While the path has no segment, the entry heading follows.
    ///
    /// # Errors
    ///
    /// Rejects angles outside `(-2π, 2π)`.
    pub fn set_orientation(&mut self, angle: f64) -> Result<()> {
        validate::orientation(angle)?;
        self.commit_orientation(angle);
        Ok(())
    }

    /// Turns the construction heading by `delta` radians.
    ///
    /// While the path has no segment, the entry heading follows.
    ///
    /// # Errors
    ///
    /// Rejects turns outside `[-π, π]`.
    pub fn rotate(&mut self, delta: f64) -> Result<()> {
        validate::rotation("delta", delta)?;
        self.commit_orientation(self.exit_orientation + delta);
        Ok(())
    }

    /// Appends a straight run along the current heading.
    ///
    /// # Errors
    ///
    /// Rejects lengths not above [`EPSILON`](crate::math::EPSILON).
    pub fn add_linear(&mut self, length: f64) -> Result<()> {
        validate::linear("length", length)?;
        self.commit_linear(length);
        Ok(())
    }

    /// Turns by `angle` radians, then appends a straight run.
    ///
    /// # Errors
    ///
    /// Rejects as [`add_linear`](Self::add_linear) and [`rotate`](Self::rotate).
    pub fn add_linear_offset_angle(&mut self, length: f64, angle: f64) -> Result<()> {
        validate::linear_offset_angle(length, angle)?;
        self.commit_linear_offset_angle(length, angle);
        Ok(())
    }

    /// Appends the straight run reaching the point displaced by `parallel`
    /// along and `perpendicular` across the current heading.
    ///
    /// # Errors
    ///
    /// Rejects zero-length displacements.
    pub fn add_linear_offset_delta(&mut self, parallel: f64, perpendicular: f64) -> Result<()> {
        validate::linear_offset_delta(parallel, perpendicular)?;
        self.commit_linear_offset_angle(
            parallel.hypot(perpendicular),
            perpendicular.atan2(parallel),
        );
        Ok(())
    }

    /// Appends a circular arc of `radius` spanning `sweep` radians.
    ///
    /// A positive sweep turns clockwise. The arc is split into equal-angle
    /// chords as `tessellation` asks; each chord's heading is taken from its
    /// end points. Afterwards the heading is advanced by exactly `sweep`,
    /// whatever the number of chords.
    ///
    /// # Errors
    ///
    /// Rejects radii not above epsilon, sweeps that are zero or not strictly
    /// inside a full turn, and tessellations yielding fewer than two chords.
    pub fn add_circular(
        &mut self,
        radius: f64,
        sweep: f64,
        tessellation: ArcTessellation,
    ) -> Result<()> {
        validate::circular(radius, sweep, tessellation)?;
        self.commit_circular(radius, sweep, tessellation.segment_count(radius, sweep));
        Ok(())
    }

    /// Appends a straight run, an arc, and another straight run.
    ///
    /// # Errors
    ///
    /// Rejects unless all three parts would be accepted on their own.
    pub fn add_extended_circular(
        &mut self,
        length1: f64,
        radius: f64,
        sweep: f64,
        tessellation: ArcTessellation,
        length2: f64,
    ) -> Result<()> {
        validate::extended_circular(length1, radius, sweep, tessellation, length2)?;
        self.commit_extended_circular(length1, radius, sweep, tessellation, length2);
        Ok(())
    }

    pub(super) fn commit_extended_circular(
        &mut self,
        length1: f64,
        radius: f64,
        sweep: f64,
        tessellation: ArcTessellation,
        length2: f64,
    ) {
        self.commit_linear(length1);
        self.commit_circular(radius, sweep, tessellation.segment_count(radius, sweep));
        self.commit_linear(length2);
    }
}
