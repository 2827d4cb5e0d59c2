use glam::{DQuat, DVec2, DVec3};
use tracing::{debug, trace};

use crate::error::{Result, TerrainError, ensure_positive};
use crate::geometry::{Plane, Terrain};

/// Slope angle used when none is given.
pub const DEFAULT_SLOPE_ANGLE_DEG: f64 = 15.0;

// Pitch about the lateral (X) axis. Positive angles tilt the far end of the
// plane (+Y) downwards.
pub fn tilt_rotation(angle_deg: f64) -> DQuat {
    DQuat::from_rotation_x(-angle_deg.to_radians())
}

// World-space point where a slope of the given length, starting at the
// origin, ends: (0, L cos θ, -L sin θ).
pub fn slope_end(length: f64, angle_deg: f64) -> DVec3 {
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    DVec3::new(0.0, length * cos, -length * sin)
}

fn check_plane_size(name: &str, size: DVec2) -> Result<()> {
    ensure_positive(&format!("{name} width"), size.x)?;
    ensure_positive(&format!("{name} length"), size.y)
}

fn check_angle(angle_deg: f64) -> Result<()> {
    if angle_deg.is_finite() {
        Ok(())
    } else {
        Err(TerrainError::InvalidArgument(format!(
            "slope angle must be finite, got {angle_deg}"
        )))
    }
}

/// A single tilted plane at the origin.
pub fn slope(size: DVec2, angle_deg: f64) -> Result<Terrain> {
    check_plane_size("slope", size)?;
    check_angle(angle_deg)?;

    debug!(width = size.x, length = size.y, angle_deg, "building slope terrain");
    Terrain::new(vec![
        Plane {
            position: DVec3::ZERO,
            orientation: tilt_rotation(angle_deg),
            size: size.extend(0.0),
        }
        .into(),
    ])
}

/// A tilted plane followed by a level landing.
///
/// The landing is placed at the slope's far edge, so the two planes meet
/// without a gap: rotating the slope-local point `(0, length, 0)` by the
/// slope orientation gives the landing position.
pub fn slope_with_flat(size_slope: DVec2, size_flat: DVec2, angle_deg: f64) -> Result<Terrain> {
    check_plane_size("slope", size_slope)?;
    check_plane_size("landing", size_flat)?;
    check_angle(angle_deg)?;

    let rotation = tilt_rotation(angle_deg);
    let landing = slope_end(size_slope.y, angle_deg);
    trace!(y = landing.y, z = landing.z, "landing position");

    debug!(
        slope_length = size_slope.y,
        landing_length = size_flat.y,
        angle_deg,
        "building slope with landing"
    );
    Terrain::new(vec![
        Plane {
            position: DVec3::ZERO,
            orientation: rotation,
            size: size_slope.extend(0.0),
        }
        .into(),
        Plane {
            position: landing,
            orientation: DQuat::IDENTITY,
            size: size_flat.extend(0.0),
        }
        .into(),
    ])
}
