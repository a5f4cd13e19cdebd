use glam::{Mat4, Vec3, Vec4};

/// Right-handed perspective projection with 0..1 depth.
#[inline]
pub fn perspective_rh(fovy_radians: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let ys = 1.0 / (fovy_radians * 0.5).tan();
    let xs = ys / aspect;
    let zs = far / (near - far);

    Mat4::from_cols(
        Vec4::new(xs, 0.0, 0.0, 0.0),
        Vec4::new(0.0, ys, 0.0, 0.0),
        Vec4::new(0.0, 0.0, zs, -1.0),
        Vec4::new(0.0, 0.0, near * zs, 0.0),
    )
}

/// Rotation of `radians` about `axis`. The axis need not be unit length.
///
/// A zero (or non-finite) axis has no direction and yields the identity.
#[inline]
pub fn rotation(radians: f32, axis: Vec3) -> Mat4 {
    axis.try_normalize()
        .map_or(Mat4::IDENTITY, |axis| Mat4::from_axis_angle(axis, radians))
}

#[inline]
pub fn uniform_scale(s: f32) -> Mat4 {
    Mat4::from_scale(Vec3::splat(s))
}

#[inline]
pub fn translation(tx: f32, ty: f32, tz: f32) -> Mat4 {
    Mat4::from_translation(Vec3::new(tx, ty, tz))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn perspective_matches_glam() {
        let ours = perspective_rh(1.13, 1.6, 0.1, 100.0);
        let glam = Mat4::perspective_rh(1.13, 1.6, 0.1, 100.0);
        assert!(ours.abs_diff_eq(glam, EPS));
    }

    #[test]
    fn perspective_maps_near_and_far_to_depth_range() {
        let p = perspective_rh(1.0, 1.0, 0.1, 100.0);
        let near = p * Vec4::new(0.0, 0.0, -0.1, 1.0);
        let far = p * Vec4::new(0.0, 0.0, -100.0, 1.0);
        assert!((near.z / near.w).abs() < EPS);
        assert!((far.z / far.w - 1.0).abs() < EPS);
    }

    #[test]
    fn rotation_normalizes_axis() {
        let a = rotation(0.7, Vec3::new(1.0, 1.0, 0.0));
        let b = rotation(0.7, Vec3::new(1.0, 1.0, 0.0).normalize());
        assert!(a.abs_diff_eq(b, EPS));
    }

    #[test]
    fn rotation_about_zero_axis_is_identity() {
        assert_eq!(rotation(1.2, Vec3::ZERO), Mat4::IDENTITY);
    }

    #[test]
    fn rotation_about_z_quarter_turn() {
        let r = rotation(std::f32::consts::FRAC_PI_2, Vec3::Z);
        let v = r.transform_vector3(Vec3::X);
        assert!(v.abs_diff_eq(Vec3::Y, EPS));
    }

    #[test]
    fn translation_lives_in_last_column() {
        let t = translation(1.0, 2.0, 3.0);
        assert_eq!(t.w_axis, Vec4::new(1.0, 2.0, 3.0, 1.0));
    }

    #[test]
    fn uniform_scale_scales_all_axes() {
        let s = uniform_scale(0.02);
        assert!(s.transform_point3(Vec3::ONE).abs_diff_eq(Vec3::splat(0.02), EPS));
    }
}
