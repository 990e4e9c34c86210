use parry3d::query::Ray;

use super::{
    settings::{GROUND_PLANE_Y, GROUND_TOLERANCE, PROBE_HEIGHT, PROBE_RANGE},
    types::{Obstacle, Point3, Vec3},
};

/// Probe downward for a walkable surface under the body and decide whether it
/// qualifies as ground.
///
/// - `position` is the body's feet position (world space).
/// - `vertical_velocity` gates the snap: a body moving upward is never
///   grounded, no matter how close a surface is.
/// - `candidates` are broad-phase indices into `statics`.
///
/// The probe ray starts at chest height (`PROBE_HEIGHT` above the feet) and is
/// capped at `PROBE_RANGE`. The flat ground plane at `GROUND_PLANE_Y` is an
/// implicit obstacle; like the infinite planes of any broad phase, it is kept
/// out of the candidate set and tested separately. A hit qualifies when the
/// gap between the hit surface and the feet is under `GROUND_TOLERANCE`
/// (negative gaps step the body up onto low ledges).
///
/// Obstacle casts are hollow: a probe that starts inside a solid passes
/// through to the far face rather than reporting an immediate surface at the
/// chest.
///
/// Returns the snapped surface height on success.
pub fn ground_snap(
    position: &Point3,
    vertical_velocity: f32,
    statics: &[Obstacle],
    candidates: &[usize],
) -> Option<f32> {
    if vertical_velocity > 0.0 {
        return None;
    }

    let origin = Point3::new(position.x, position.y + PROBE_HEIGHT, position.z);
    let ray = Ray::new(origin, -Vec3::y());

    // Nearest hit: implicit plane first, then broad-phase survivors.
    let mut best: Option<f32> = None;

    let plane_toi = origin.y - GROUND_PLANE_Y;
    if (0.0..=PROBE_RANGE).contains(&plane_toi) {
        best = Some(plane_toi);
    }

    for &idx in candidates {
        let Some((t_min, t_max)) = statics[idx].aabb.clip_ray_parameters(&ray) else {
            continue;
        };
        if t_max < 0.0 {
            // The box lies entirely above the probe origin.
            continue;
        }
        // A probe starting inside the box passes through to the far face.
        let toi = if t_min >= 0.0 { t_min } else { t_max };
        if toi <= PROBE_RANGE && best.map_or(true, |b| toi < b) {
            best = Some(toi);
        }
    }

    let toi = best?;
    let gap_to_feet = toi - PROBE_HEIGHT;
    if gap_to_feet < GROUND_TOLERANCE {
        Some(origin.y - toi)
    } else {
        None
    }
}
