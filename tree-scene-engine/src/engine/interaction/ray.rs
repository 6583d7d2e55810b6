//! Ray intersection against oriented boxes, used for card picking.

use bevy::prelude::*;

/// Slab-method ray test against an oriented box. The ray is taken into
/// the box's local frame, where the box is an axis-aligned slab of
/// `half_extents` around the origin; scale in the transform is folded
/// into that frame. Returns the nearest non-negative hit distance.
pub fn ray_obb_distance(
    origin: Vec3,
    direction: Vec3,
    transform: &GlobalTransform,
    half_extents: Vec3,
) -> Option<f32> {
    let inverse = transform.compute_matrix().inverse();
    let local_origin = inverse.transform_point3(origin);
    let local_direction = inverse.transform_vector3(direction);

    let mut t_min = f32::NEG_INFINITY;
    let mut t_max = f32::INFINITY;

    for axis in 0..3 {
        let o = local_origin[axis];
        let d = local_direction[axis];
        let extent = half_extents[axis];

        if d.abs() < 1e-8 {
            // Parallel to this slab: either always inside it or never.
            if o.abs() > extent {
                return None;
            }
            continue;
        }

        let inv_d = 1.0 / d;
        let mut t0 = (-extent - o) * inv_d;
        let mut t1 = (extent - o) * inv_d;
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }
        t_min = t_min.max(t0);
        t_max = t_max.min(t1);
        if t_min > t_max {
            return None;
        }
    }

    if t_max < 0.0 {
        return None;
    }
    Some(if t_min >= 0.0 { t_min } else { t_max })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hits_box_straight_on() {
        let transform = GlobalTransform::from(Transform::from_xyz(0.0, 0.0, -5.0));
        let t = ray_obb_distance(Vec3::ZERO, Vec3::NEG_Z, &transform, Vec3::splat(0.5));
        assert!(t.is_some());
        assert!((t.unwrap() - 4.5).abs() < 1e-4);
    }

    #[test]
    fn misses_offset_box() {
        let transform = GlobalTransform::from(Transform::from_xyz(3.0, 0.0, -5.0));
        assert!(ray_obb_distance(Vec3::ZERO, Vec3::NEG_Z, &transform, Vec3::splat(0.5)).is_none());
    }

    #[test]
    fn respects_box_rotation() {
        // A thin card rotated 90 degrees about Y presents its depth to
        // the ray, so a ray that missed the face edge-on now hits.
        let thin = Vec3::new(0.5, 0.5, 0.01);
        let offset_origin = Vec3::new(0.3, 0.0, 0.0);

        let facing = GlobalTransform::from(
            Transform::from_xyz(0.0, 0.0, -5.0).with_rotation(Quat::from_rotation_y(0.0)),
        );
        assert!(ray_obb_distance(offset_origin, Vec3::NEG_Z, &facing, thin).is_some());

        let edge_on = GlobalTransform::from(
            Transform::from_xyz(0.0, 0.0, -5.0)
                .with_rotation(Quat::from_rotation_y(std::f32::consts::FRAC_PI_2)),
        );
        assert!(ray_obb_distance(offset_origin, Vec3::NEG_Z, &edge_on, thin).is_none());
    }

    #[test]
    fn ray_starting_inside_reports_exit() {
        let transform = GlobalTransform::IDENTITY;
        let t = ray_obb_distance(Vec3::ZERO, Vec3::X, &transform, Vec3::splat(1.0));
        assert!((t.unwrap() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn behind_the_ray_is_a_miss() {
        let transform = GlobalTransform::from(Transform::from_xyz(0.0, 0.0, 5.0));
        assert!(ray_obb_distance(Vec3::ZERO, Vec3::NEG_Z, &transform, Vec3::splat(0.5)).is_none());
    }
}
