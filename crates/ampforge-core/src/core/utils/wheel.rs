//! Helical-wheel geometry.
//!
//! An ideal α-helix has 3.6 residues per turn, so consecutive residues are rotated by
//! 100° around the helix axis when projected onto a wheel.

/// Rotation between consecutive residues of an ideal α-helix, in degrees.
pub const HELIX_ANGLE_DEG: f64 = 100.0;

/// Angular position of residue `position` on the wheel, in degrees within `[0, 360)`.
pub fn wheel_angle(position: usize, angle_per_residue: f64, phase: f64) -> f64 {
    (position as f64 * angle_per_residue + phase).rem_euclid(360.0)
}

/// Whether `angle` lies in the sector starting at `start` and spanning `width` degrees.
///
/// Sectors wrap around 0°. A width of 360° or more covers the whole wheel.
pub fn in_sector(angle: f64, start: f64, width: f64) -> bool {
    if width >= 360.0 {
        return true;
    }
    if width <= 0.0 {
        return false;
    }
    (angle - start).rem_euclid(360.0) < width
}

/// Magnitude of the vector sum of `values` placed at successive wheel positions.
pub fn vector_sum_magnitude(values: &[f64], angle_per_residue: f64) -> f64 {
    let step = angle_per_residue.to_radians();
    let (sin_sum, cos_sum) = values
        .iter()
        .enumerate()
        .fold((0.0, 0.0), |(s, c), (i, &v)| {
            let theta = step * i as f64;
            (s + v * theta.sin(), c + v * theta.cos())
        });
    (sin_sum * sin_sum + cos_sum * cos_sum).sqrt()
}
