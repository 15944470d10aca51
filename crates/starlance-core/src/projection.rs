//! Camera projection math: world-to-screen, the analytic inverse for a
//! known world Z, billboard scaling, and the sphere collision test.
//!
//! The camera is fixed for the whole session: position `CAMERA_POS`,
//! pitched by `CAMERA_PITCH` about the horizontal axis, with focal
//! length `FOCAL_LENGTH` and clip depths `NEAR_CLIP`/`FAR_CLIP`. All
//! functions are pure; degenerate inputs yield `None` rather than
//! non-finite values.

use glam::{Vec2, Vec3};

use crate::constants::{CAMERA_PITCH, CAMERA_POS, FAR_CLIP, FOCAL_LENGTH, NEAR_CLIP};

/// Denominator guard for the inverse projection.
const DEGENERACY_EPS: f32 = 1e-4;

/// Project a world point onto a surface of `width` x `height` pixels.
///
/// Returns `None` when the pitched camera-space depth falls at or
/// behind the near clip, or beyond the far clip; the caller skips the
/// point for this frame.
pub fn project(p: Vec3, width: f32, height: f32) -> Option<Vec2> {
    let r = p - CAMERA_POS;
    let (sin_p, cos_p) = CAMERA_PITCH.sin_cos();
    let py = r.y * cos_p - r.z * sin_p;
    let pz = r.y * sin_p + r.z * cos_p;
    if pz <= NEAR_CLIP || pz > FAR_CLIP {
        return None;
    }
    let s = FOCAL_LENGTH / pz;
    // Screen Y grows downward.
    Some(Vec2::new(
        r.x * s + width * 0.5,
        -py * s + height * 0.5,
    ))
}

/// Perspective scale of a point at world Z on the Y = 0 plane.
///
/// Approximates the projected scale without a full projection; used to
/// size billboard discs. Returns 0.0 at or behind the near clip.
pub fn scale_factor(z: f32) -> f32 {
    let r_y = -CAMERA_POS.y;
    let r_z = z - CAMERA_POS.z;
    let (sin_p, cos_p) = CAMERA_PITCH.sin_cos();
    let pz = r_y * sin_p + r_z * cos_p;
    if pz <= NEAR_CLIP {
        return 0.0;
    }
    FOCAL_LENGTH / pz
}

/// Invert `project` for a point whose world Z is known in advance.
///
/// `nx`/`ny` are normalized screen offsets in [-1, 1]; the result is
/// the world point at `target_z` that projects to that screen
/// position. Returns `None` in the degenerate region where the screen
/// slope approaches the pitch singularity or the implied depth falls
/// at or behind the near clip.
pub fn unproject(nx: f32, ny: f32, target_z: f32, width: f32, height: f32) -> Option<Vec3> {
    let sx = nx * width * 0.5;
    let sy = ny * height * 0.5;
    let (sin_p, cos_p) = CAMERA_PITCH.sin_cos();
    let tan_p = sin_p / cos_p;

    let r_z = target_z - CAMERA_POS.z;
    let slope_y = -sy / FOCAL_LENGTH;
    let denom = 1.0 - slope_y * tan_p;
    if denom.abs() < DEGENERACY_EPS {
        return None;
    }

    // Camera-space depth after pitch consistent with both the fixed
    // world Z and the requested screen Y.
    let pitch_z = r_z * (sin_p * tan_p + cos_p) / denom;
    if pitch_z <= NEAR_CLIP {
        return None;
    }

    let scale = FOCAL_LENGTH / pitch_z;
    let r_x = sx / scale;
    let pitch_y = slope_y * pitch_z;
    let r_y = pitch_y * cos_p + pitch_z * sin_p;

    Some(Vec3::new(
        r_x + CAMERA_POS.x,
        r_y + CAMERA_POS.y,
        target_z,
    ))
}

/// Sphere-sphere collision test on squared distances.
///
/// An exact tie (centers separated by precisely the radius sum) counts
/// as non-colliding.
pub fn collides(pos_a: Vec3, radius_a: f32, pos_b: Vec3, radius_b: f32) -> bool {
    let sum = radius_a + radius_b;
    pos_a.distance_squared(pos_b) < sum * sum
}
