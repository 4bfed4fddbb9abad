//! OBB vs AABB overlap via the Separating Axis Theorem
//!
//! Both shapes are boxes, so the candidate separating axes are the six
//! face normals (three per box) plus nine edge-edge cross products.
//! This test checks only the six face axes, matching the behavior the
//! game was tuned against: the cross axes can separate certain oblique
//! configurations that the face axes miss, and in those configurations
//! this test reports an overlap that is not there. That conservatism is
//! intentional and pinned by a test; adding the cross axes would be a
//! behavior change, not a bug fix.
//!
//! The axis groups live in separate helpers so the nine cross-product
//! axes could be added behind the same public function.

use crate::foundation::math::{Mat3, Vec3};
use super::primitives::{Aabb, Obb};

/// Bias added to every |R| entry to absorb numerical cancellation when
/// two axes are near-parallel.
const EPSILON: f32 = 1e-3;

/// Test whether an oriented box overlaps an axis-aligned box.
///
/// The AABB is treated as an OBB with identity orientation. Returns
/// `true` when no separating axis is found among the six face normals.
/// Never panics; degenerate inputs (non-orthonormal rotation) yield an
/// unspecified but well-defined boolean.
pub fn obb_intersects_aabb(a: &Obb, b: &Aabb) -> bool {
    let b = Obb::from_aabb(b);
    obb_intersects_obb(a, &b)
}

/// Face-axis SAT between two oriented boxes.
pub(crate) fn obb_intersects_obb(a: &Obb, b: &Obb) -> bool {
    // R expresses b's axes in a's frame; AbsR is its biased absolute value
    let mut r = Mat3::zeros();
    let mut abs_r = Mat3::zeros();
    for i in 0..3 {
        for j in 0..3 {
            r[(i, j)] = a.axis(i).dot(&b.axis(j));
            abs_r[(i, j)] = r[(i, j)].abs() + EPSILON;
        }
    }

    // Translation from a to b, re-expressed in a's frame
    let delta = b.center - a.center;
    let t = Vec3::new(
        delta.dot(&a.axis(0)),
        delta.dot(&a.axis(1)),
        delta.dot(&a.axis(2)),
    );

    if separated_on_a_axes(a, b, &t, &abs_r) {
        return false;
    }
    if separated_on_b_axes(a, b, &t, &r, &abs_r) {
        return false;
    }

    // No separating axis among the face normals
    true
}

/// Test axes L = A0, A1, A2
fn separated_on_a_axes(a: &Obb, b: &Obb, t: &Vec3, abs_r: &Mat3) -> bool {
    for i in 0..3 {
        let ra = a.half_extents[i];
        let rb = b.half_extents.dot(&abs_r.row(i).transpose());
        if t[i].abs() > ra + rb {
            return true;
        }
    }
    false
}

/// Test axes L = B0, B1, B2
fn separated_on_b_axes(a: &Obb, b: &Obb, t: &Vec3, r: &Mat3, abs_r: &Mat3) -> bool {
    for i in 0..3 {
        let ra = a.half_extents.dot(&abs_r.column(i));
        let rb = b.half_extents[i];
        let projected = t.x * r[(0, i)] + t.y * r[(1, i)] + t.z * r[(2, i)];
        if projected.abs() > ra + rb {
            return true;
        }
    }
    false
}
