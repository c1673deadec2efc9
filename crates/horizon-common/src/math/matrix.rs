//! 4×4 matrix math for view transforms.
//!
//! Column-major layout stored as `[f64; 16]`, matching GPU `mat4x4`
//! conventions. Minimal set: look-at, translate, rotate-by-quaternion,
//! multiply, plus an f32 export for upload-side consumers.

use super::quaternion::Quaternion;
use super::vec::Vec3;

/// 4×4 column-major matrix stored as `[f64; 16]`.
pub type Mat4 = [f64; 16];

/// Identity matrix.
pub const IDENTITY: Mat4 = [
    1.0, 0.0, 0.0, 0.0, // col 0
    0.0, 1.0, 0.0, 0.0, // col 1
    0.0, 0.0, 1.0, 0.0, // col 2
    0.0, 0.0, 0.0, 1.0, // col 3
];

/// Translation matrix.
pub fn translation(t: Vec3) -> Mat4 {
    [
        1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, t.x, t.y, t.z, 1.0,
    ]
}

/// Rotation matrix from a unit quaternion.
pub fn rotation(q: Quaternion) -> Mat4 {
    let (x, y, z, w) = (q.x, q.y, q.z, q.w);
    let (x2, y2, z2) = (x + x, y + y, z + z);
    let (xx, yy, zz) = (x * x2, y * y2, z * z2);
    let (xy, xz, yz) = (x * y2, x * z2, y * z2);
    let (wx, wy, wz) = (w * x2, w * y2, w * z2);

    [
        1.0 - (yy + zz),
        xy + wz,
        xz - wy,
        0.0,
        xy - wz,
        1.0 - (xx + zz),
        yz + wx,
        0.0,
        xz + wy,
        yz - wx,
        1.0 - (xx + yy),
        0.0,
        0.0,
        0.0,
        0.0,
        1.0,
    ]
}

/// Right-handed look-at view matrix.
///
/// Falls back to the identity basis when `eye` and `center` coincide
/// (the forward vector would be degenerate).
pub fn look_at_rh(eye: Vec3, center: Vec3, up: Vec3) -> Mat4 {
    let f = (center - eye).normalized();
    if f == Vec3::ZERO {
        return translation(-eye);
    }
    let s = f.cross(up).normalized();
    let u = s.cross(f);

    [
        s.x,
        u.x,
        -f.x,
        0.0,
        s.y,
        u.y,
        -f.y,
        0.0,
        s.z,
        u.z,
        -f.z,
        0.0,
        -s.dot(eye),
        -u.dot(eye),
        f.dot(eye),
        1.0,
    ]
}

/// Multiply two 4×4 column-major matrices: result = a × b.
pub fn mul(a: &Mat4, b: &Mat4) -> Mat4 {
    let mut out = [0.0f64; 16];
    for col in 0..4 {
        for row in 0..4 {
            let mut sum = 0.0;
            for k in 0..4 {
                sum += a[k * 4 + row] * b[col * 4 + k];
            }
            out[col * 4 + row] = sum;
        }
    }
    out
}

/// Transform a point (w = 1) by an affine matrix.
pub fn transform_point(m: &Mat4, p: Vec3) -> Vec3 {
    Vec3::new(
        m[0] * p.x + m[4] * p.y + m[8] * p.z + m[12],
        m[1] * p.x + m[5] * p.y + m[9] * p.z + m[13],
        m[2] * p.x + m[6] * p.y + m[10] * p.z + m[14],
    )
}

pub fn is_finite(m: &Mat4) -> bool {
    m.iter().all(|v| v.is_finite())
}

/// Export as `[[f32; 4]; 4]` columns for GPU uniform upload.
pub fn to_cols_f32(m: &Mat4) -> [[f32; 4]; 4] {
    let mut out = [[0.0f32; 4]; 4];
    for col in 0..4 {
        for row in 0..4 {
            out[col][row] = m[col * 4 + row] as f32;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: &Mat4, b: &Mat4, eps: f64) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < eps)
    }

    #[test]
    fn identity_mul_identity() {
        let result = mul(&IDENTITY, &IDENTITY);
        assert!(approx_eq(&result, &IDENTITY, 1e-12));
    }

    #[test]
    fn translation_moves_points() {
        let t = translation(Vec3::new(1.0, 2.0, 3.0));
        let p = transform_point(&t, Vec3::new(1.0, 1.0, 1.0));
        assert_eq!(p, Vec3::new(2.0, 3.0, 4.0));
    }

    #[test]
    fn rotation_matrix_matches_quaternion_rotate() {
        let q = Quaternion::from_axis_angle(Vec3::new(1.0, 1.0, 0.0), 0.8);
        let m = rotation(q);
        let v = Vec3::new(0.3, -1.2, 2.0);
        let via_matrix = transform_point(&m, v);
        let via_quat = q.rotate(v);
        assert!((via_matrix.x - via_quat.x).abs() < 1e-9);
        assert!((via_matrix.y - via_quat.y).abs() < 1e-9);
        assert!((via_matrix.z - via_quat.z).abs() < 1e-9);
    }

    #[test]
    fn look_at_maps_center_onto_negative_z() {
        let eye = Vec3::new(0.0, 0.0, 5.0);
        let center = Vec3::ZERO;
        let view = look_at_rh(eye, center, Vec3::Y);
        let c = transform_point(&view, center);
        // The look target lands straight ahead, 5 units down -Z.
        assert!(c.x.abs() < 1e-12);
        assert!(c.y.abs() < 1e-12);
        assert!((c.z - (-5.0)).abs() < 1e-12);
    }

    #[test]
    fn look_at_moves_eye_to_origin() {
        let eye = Vec3::new(2.0, 1.0, -4.0);
        let view = look_at_rh(eye, Vec3::ZERO, Vec3::Y);
        let e = transform_point(&view, eye);
        assert!(e.length() < 1e-12);
    }

    #[test]
    fn look_at_degenerate_eye_equals_center() {
        let eye = Vec3::new(1.0, 2.0, 3.0);
        let view = look_at_rh(eye, eye, Vec3::Y);
        assert!(is_finite(&view));
        // Degenerate case falls back to a pure translation.
        let e = transform_point(&view, eye);
        assert!(e.length() < 1e-12);
    }

    #[test]
    fn mul_composes_in_order() {
        let t = translation(Vec3::new(1.0, 0.0, 0.0));
        let q = Quaternion::from_axis_angle(Vec3::Y, std::f64::consts::FRAC_PI_2);
        let r = rotation(q);
        // t * r rotates first, then translates.
        let m = mul(&t, &r);
        let p = transform_point(&m, Vec3::new(1.0, 0.0, 0.0));
        assert!((p.x - 1.0).abs() < 1e-9);
        assert!(p.y.abs() < 1e-9);
        assert!((p.z - (-1.0)).abs() < 1e-9);
    }

    #[test]
    fn finite_check_catches_nan() {
        let mut m = IDENTITY;
        assert!(is_finite(&m));
        m[5] = f64::NAN;
        assert!(!is_finite(&m));
    }

    #[test]
    fn f32_export_preserves_layout() {
        let t = translation(Vec3::new(1.0, 2.0, 3.0));
        let cols = to_cols_f32(&t);
        assert_eq!(cols[3], [1.0, 2.0, 3.0, 1.0]);
        assert_eq!(cols[0], [1.0, 0.0, 0.0, 0.0]);
    }
}
