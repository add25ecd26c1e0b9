//! Degree-based wrappers around the radian operations.

use crate::error::Result;
use crate::math::deg_to_rad;
use crate::tessellation::ArcTessellation;

use super::PathBuilder;

impl PathBuilder {
    /// [`set_orientation`](Self::set_orientation) with the angle in degrees.
    ///
    /// # Errors
    ///
    /// Rejects angles outside `(-360°, 360°)`.
    pub fn set_orientation_deg(&mut self, angle: f64) -> Result<()> {
        self.set_orientation(deg_to_rad(angle))
    }

    /// [`rotate`](Self::rotate) with the turn in degrees.
    ///
    /// # Errors
    ///
    /// Rejects turns outside `[-180°, 180°]`.
    pub fn rotate_deg(&mut self, delta: f64) -> Result<()> {
        self.rotate(deg_to_rad(delta))
    }

    /// [`add_linear_offset_angle`](Self::add_linear_offset_angle) with the
    /// turn in degrees.
    ///
    /// # Errors
    ///
    /// Rejects as the radian operation.
    pub fn add_linear_offset_angle_deg(&mut self, length: f64, angle: f64) -> Result<()> {
        self.add_linear_offset_angle(length, deg_to_rad(angle))
    }

    /// [`add_circular`](Self::add_circular) with the sweep in degrees.
    ///
    /// # Errors
    ///
    /// Rejects as the radian operation.
    pub fn add_circular_deg(
        &mut self,
        radius: f64,
        sweep: f64,
        tessellation: ArcTessellation,
    ) -> Result<()> {
        self.add_circular(radius, deg_to_rad(sweep), tessellation)
    }

    /// [`add_extended_circular`](Self::add_extended_circular) with the sweep
    /// in degrees.
    ///
    /// # Errors
    ///
    /// Rejects as the radian operation.
    pub fn add_extended_circular_deg(
        &mut self,
        length1: f64,
        radius: f64,
        sweep: f64,
        tessellation: ArcTessellation,
        length2: f64,
    ) -> Result<()> {
        self.add_extended_circular(length1, radius, deg_to_rad(sweep), tessellation, length2)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn degree_and_radian_paths_match() {
        let mut deg = PathBuilder::new();
        deg.set_orientation_deg(30.0).unwrap();
        deg.add_linear_offset_angle_deg(10.0, -45.0).unwrap();
        deg.add_circular_deg(5.0, 90.0, ArcTessellation::Segments(5)).unwrap();
        deg.rotate_deg(15.0).unwrap();
        deg.add_extended_circular_deg(2.0, 3.0, -120.0, ArcTessellation::Segments(4), 2.0)
            .unwrap();

        let mut rad = PathBuilder::new();
        rad.set_orientation(30f64.to_radians()).unwrap();
        rad.add_linear_offset_angle(10.0, (-45f64).to_radians()).unwrap();
        rad.add_circular(5.0, FRAC_PI_2, ArcTessellation::Segments(5)).unwrap();
        rad.rotate(15f64.to_radians()).unwrap();
        rad.add_extended_circular(2.0, 3.0, (-120f64).to_radians(), ArcTessellation::Segments(4), 2.0)
            .unwrap();

        assert_eq!(deg.count(), rad.count());
        assert_abs_diff_eq!(deg.exit_point().x, rad.exit_point().x, epsilon = 1e-9);
        assert_abs_diff_eq!(deg.exit_point().y, rad.exit_point().y, epsilon = 1e-9);
        assert_abs_diff_eq!(deg.exit_orientation_deg(), 30.0 - 45.0 + 90.0 + 15.0 - 120.0, epsilon = 1e-9);
        assert_abs_diff_eq!(deg.entry_orientation_deg(), 30.0, epsilon = 1e-9);
    }

    #[test]
    fn degree_bounds_are_converted() {
        let mut builder = PathBuilder::new();
        assert!(builder.set_orientation_deg(360.5).is_err());
        assert!(builder.set_orientation_deg(359.5).is_ok());
        assert!(builder.rotate_deg(179.5).is_ok());
        assert!(builder.rotate_deg(181.0).is_err());
    }
}
