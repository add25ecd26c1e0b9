//! L, U and S motifs built from the primitive runs and arcs.
//!
//! Rounded variants trim their straight legs by the corner radius, so the
//! motif spans the same footprint as its sharp counterpart.

use crate::error::Result;
use crate::geometry::Turn;
use crate::tessellation::ArcTessellation;

use super::{validate, PathBuilder};

impl PathBuilder {
    /// Appends two legs joined by a sharp quarter turn.
    ///
    /// # Errors
    ///
    /// Rejects legs not longer than epsilon.
    pub fn add_l_shape(&mut self, length1: f64, length2: f64, turn: Turn) -> Result<()> {
        validate::l_shape(length1, length2)?;
        self.commit_linear(length1);
        self.commit_linear_offset_angle(length2, turn.quarter());
        Ok(())
    }

    /// Appends two legs joined by a quarter arc of `radius`.
    ///
    /// The legs span `length1` and `length2` measured to the virtual sharp
    /// corner, so each straight part is shortened by `radius`.
    ///
    /// # Errors
    ///
    /// Rejects when a trimmed leg is not longer than epsilon or the arc is
    /// rejected.
    pub fn add_rounded_l_shape(
        &mut self,
        length1: f64,
        length2: f64,
        radius: f64,
        tessellation: ArcTessellation,
        turn: Turn,
    ) -> Result<()> {
        validate::rounded_l_shape(length1, length2, radius, tessellation, turn)?;
        self.commit_extended_circular(
            length1 - radius,
            radius,
            turn.quarter(),
            tessellation,
            length2 - radius,
        );
        tracing::trace!(length1, length2, radius, "rounded L committed");
        Ok(())
    }

    /// Appends an out leg, a cross leg of `height` and a return leg, joined
    /// by sharp quarter turns in the same direction.
    ///
    /// # Errors
    ///
    /// Rejects legs not longer than epsilon.
    pub fn add_u_shape(
        &mut self,
        length1: f64,
        height: f64,
        length2: f64,
        turn: Turn,
    ) -> Result<()> {
        validate::u_shape(length1, height, length2)?;
        let angle = turn.quarter();
        self.commit_linear(length1);
        self.commit_linear_offset_angle(height, angle);
        self.commit_linear_offset_angle(length2, angle);
        Ok(())
    }

    /// Appends out and return legs joined by a half arc of diameter `height`.
    ///
    /// # Errors
    ///
    /// Rejects when a leg does not exceed `height / 2` by more than epsilon
    /// or the arc is rejected.
    pub fn add_rounded_u_shape(
        &mut self,
        length1: f64,
        height: f64,
        length2: f64,
        tessellation: ArcTessellation,
        turn: Turn,
    ) -> Result<()> {
        validate::rounded_u_shape(length1, height, length2, tessellation, turn)?;
        let radius = height / 2.0;
        self.commit_extended_circular(
            length1 - radius,
            radius,
            turn.half(),
            tessellation,
            length2 - radius,
        );
        tracing::trace!(length1, height, length2, "rounded U committed");
        Ok(())
    }

    /// Appends three legs joined by two jogs of `height / 2`.
    ///
    /// The path turns back along `length2`, then forward again along
    /// `length3`, ending `height` away from its start line.
    ///
    /// # Errors
    ///
    /// Rejects legs or half height not longer than epsilon.
    pub fn add_s_shape(
        &mut self,
        length1: f64,
        length2: f64,
        length3: f64,
        height: f64,
        turn: Turn,
    ) -> Result<()> {
        validate::s_shape(length1, length2, length3, height)?;
        let angle = turn.quarter();
        self.commit_linear(length1);
        self.commit_linear_offset_angle(height / 2.0, angle);
        self.commit_linear_offset_angle(length2, angle);
        self.commit_linear_offset_angle(height / 2.0, -angle);
        self.commit_linear_offset_angle(length3, -angle);
        Ok(())
    }

    /// Appends three legs joined by two opposite half arcs of radius
    /// `height / 4`.
    ///
    /// The outer legs are trimmed by one radius, the middle leg by two.
    ///
    /// # Errors
    ///
    /// Rejects when a trimmed leg is not longer than epsilon or an arc is
    /// rejected.
    pub fn add_rounded_s_shape(
        &mut self,
        length1: f64,
        length2: f64,
        length3: f64,
        height: f64,
        tessellation: ArcTessellation,
        turn: Turn,
    ) -> Result<()> {
        validate::rounded_s_shape(length1, length2, length3, height, tessellation, turn)?;
        let radius = height / 4.0;
        let sweep = turn.half();
        let segments = tessellation.segment_count(radius, sweep);

        self.commit_linear(length1 - radius);
        self.commit_circular(radius, sweep, segments);
        self.commit_linear(length2 - 2.0 * radius);
        self.commit_circular(radius, -sweep, segments);
        self.commit_linear(length3 - radius);
        tracing::trace!(length1, length2, length3, height, "rounded S committed");
        Ok(())
    }
}
