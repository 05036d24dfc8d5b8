//! Geometry helpers for the string-and-axle layout.

use std::f64::consts::FRAC_PI_2;

use glam::DVec2;

/// Cartesian position of the light mass relative to the axle centre.
///
/// The string leaves the axle tangentially, so the mass sits `r` along the
/// string from a tangent point `R` off the centre.
pub fn light_mass_position(theta: f64, r: f64, axle_radius: f64) -> DVec2 {
    let (sin, cos) = theta.sin_cos();
    DVec2::new(r * cos + axle_radius * sin, -r * sin + axle_radius * cos)
}

/// Total string length implied by the current configuration:
/// heavy segment + wrapped arc + light segment.
pub fn string_length(y2: f64, theta: f64, r: f64, axle_radius: f64) -> f64 {
    y2 + axle_radius * (theta + FRAC_PI_2) + r
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_string_points_along_x() {
        let p = light_mass_position(0.0, 0.5, 0.01);
        assert!((p.x - 0.5).abs() < 1e-15);
        assert!((p.y - 0.01).abs() < 1e-15);
    }

    #[test]
    fn mass_is_r_from_tangent_point() {
        let theta = 1.3;
        let p = light_mass_position(theta, 0.4, 0.02);
        let tangent = DVec2::new(0.02 * theta.sin(), 0.02 * theta.cos());
        assert!(((p - tangent).length() - 0.4).abs() < 1e-12);
    }
}
