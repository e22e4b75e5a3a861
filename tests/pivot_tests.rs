//! Pivot Tests
//!
//! Tests for:
//! - Global/local translation against the current basis
//! - GlobalRotate (orbit about the origin) and Rotate (about a line)
//! - LocalRotate in the pivot's own frame, with re-orthonormalization
//! - Degenerate axes as no-ops
//! - Basis reset

use std::f32::consts::{FRAC_PI_2, PI};

use glam::Vec3;

use marionette::scene::Pivot;

const EPSILON: f32 = 1e-5;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn approx_vec(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < EPSILON
}

// ============================================================================
// Translation
// ============================================================================

#[test]
fn global_move_adds_world_delta() {
    let mut pivot = Pivot::new();
    pivot.global_move(Vec3::new(1.0, 2.0, 3.0));
    pivot.global_move(Vec3::new(-0.5, 0.0, 1.0));
    assert!(approx_vec(pivot.position, Vec3::new(0.5, 2.0, 4.0)));
}

#[test]
fn local_move_with_identity_basis_matches_global() {
    let mut pivot = Pivot::new();
    pivot.local_move(Vec3::new(1.0, 2.0, 3.0));
    assert!(approx_vec(pivot.position, Vec3::new(1.0, 2.0, 3.0)));
}

#[test]
fn local_move_follows_rotated_basis() {
    let mut pivot = Pivot::new();
    // Quarter turn about local Z: local X now points along world Y.
    pivot.local_rotate(FRAC_PI_2, Vec3::Z);
    pivot.local_move(Vec3::new(1.0, 0.0, 0.0));
    assert!(
        approx_vec(pivot.position, Vec3::new(0.0, 1.0, 0.0)),
        "expected movement along world Y, got {:?}",
        pivot.position
    );
}

#[test]
fn local_move_combines_all_three_axes() {
    let mut pivot = Pivot::new();
    pivot.local_rotate(FRAC_PI_2, Vec3::Z);
    pivot.local_move(Vec3::new(1.0, 1.0, 1.0));
    // X -> +Y, Y -> -X, Z unchanged.
    assert!(approx_vec(pivot.position, Vec3::new(-1.0, 1.0, 1.0)));
}

// ============================================================================
// Rotation of the position
// ============================================================================

#[test]
fn global_rotate_orbits_the_origin() {
    let mut pivot = Pivot::at(Vec3::new(0.0, 0.0, 5.0));
    pivot.global_rotate(FRAC_PI_2, Vec3::Y);
    assert!(
        approx_vec(pivot.position, Vec3::new(5.0, 0.0, 0.0)),
        "got {:?}",
        pivot.position
    );
    // Distance to the origin is preserved.
    assert!(approx(pivot.position.length(), 5.0));
}

#[test]
fn global_rotate_leaves_basis_untouched() {
    let mut pivot = Pivot::at(Vec3::new(1.0, 0.0, 0.0));
    pivot.global_rotate(1.3, Vec3::new(0.2, 0.9, -0.1));
    assert!(approx_vec(pivot.x_axis(), Vec3::X));
    assert!(approx_vec(pivot.y_axis(), Vec3::Y));
    assert!(approx_vec(pivot.z_axis(), Vec3::Z));
}

#[test]
fn rotate_about_line_spins_around_the_anchor() {
    let mut pivot = Pivot::at(Vec3::new(2.0, 0.0, 0.0));
    // Line through (1,0,0) pointing along Y; a half turn mirrors the
    // position across the anchor.
    pivot.rotate(PI, Vec3::new(1.0, 0.0, 0.0), Vec3::new(1.0, 1.0, 0.0));
    assert!(approx_vec(pivot.position, Vec3::ZERO), "got {:?}", pivot.position);
}

#[test]
fn rotate_about_line_through_origin_matches_global_rotate() {
    let mut a = Pivot::at(Vec3::new(0.0, 0.0, 5.0));
    let mut b = Pivot::at(Vec3::new(0.0, 0.0, 5.0));
    a.global_rotate(0.7, Vec3::Y);
    b.rotate(0.7, Vec3::ZERO, Vec3::Y);
    assert!(approx_vec(a.position, b.position));
}

// ============================================================================
// Local rotation
// ============================================================================

#[test]
fn local_rotate_quarter_turn_about_z() {
    let mut pivot = Pivot::new();
    pivot.local_rotate(FRAC_PI_2, Vec3::Z);
    assert!(approx_vec(pivot.x_axis(), Vec3::Y));
    assert!(approx_vec(pivot.y_axis(), -Vec3::X));
    assert!(approx_vec(pivot.z_axis(), Vec3::Z));
}

#[test]
fn local_rotate_axis_is_in_the_local_frame() {
    let mut pivot = Pivot::new();
    pivot.local_rotate(FRAC_PI_2, Vec3::Z);
    // Local Y now points along world -X, so rotating about "local Y"
    // spins the basis around the world -X axis.
    pivot.local_rotate(FRAC_PI_2, Vec3::Y);
    assert!(
        approx_vec(pivot.x_axis(), Vec3::new(0.0, 0.0, -1.0)),
        "got {:?}",
        pivot.x_axis()
    );
}

#[test]
fn local_rotate_does_not_move_position() {
    let mut pivot = Pivot::at(Vec3::new(3.0, -1.0, 2.0));
    pivot.local_rotate(1.1, Vec3::new(0.3, 0.5, 0.8));
    assert!(approx_vec(pivot.position, Vec3::new(3.0, -1.0, 2.0)));
}

#[test]
fn repeated_local_rotation_keeps_basis_orthonormal() {
    let mut pivot = Pivot::new();
    let axis = Vec3::new(0.3, 0.5, 0.8);
    for _ in 0..1000 {
        pivot.local_rotate(0.013, axis);
    }
    let (x, y, z) = (pivot.x_axis(), pivot.y_axis(), pivot.z_axis());
    assert!(approx(x.length(), 1.0));
    assert!(approx(y.length(), 1.0));
    assert!(approx(z.length(), 1.0));
    assert!(x.dot(y).abs() < 1e-3, "x.y drifted to {}", x.dot(y));
    assert!(y.dot(z).abs() < 1e-3, "y.z drifted to {}", y.dot(z));
    assert!(z.dot(x).abs() < 1e-3, "z.x drifted to {}", z.dot(x));
}

#[test]
fn reset_local_rotation_restores_identity_basis() {
    let mut pivot = Pivot::at(Vec3::new(1.0, 2.0, 3.0));
    pivot.local_rotate(0.9, Vec3::new(1.0, 1.0, 0.0));
    pivot.reset_local_rotation();
    assert!(approx_vec(pivot.x_axis(), Vec3::X));
    assert!(approx_vec(pivot.y_axis(), Vec3::Y));
    assert!(approx_vec(pivot.z_axis(), Vec3::Z));
    // Position is not part of the reset.
    assert!(approx_vec(pivot.position, Vec3::new(1.0, 2.0, 3.0)));
}

// ============================================================================
// Degenerate axes
// ============================================================================

#[test]
fn zero_axes_are_no_ops() {
    let mut pivot = Pivot::at(Vec3::new(1.0, 2.0, 3.0));
    pivot.local_rotate(0.4, Vec3::new(0.2, -0.1, 0.9));
    let before = pivot.clone();

    pivot.global_rotate(1.0, Vec3::ZERO);
    pivot.local_rotate(1.0, Vec3::ZERO);
    // start == end gives a zero-length axis.
    pivot.rotate(1.0, Vec3::ONE, Vec3::ONE);

    assert_eq!(pivot, before);
}

#[test]
fn basis_matrix_columns_are_the_axes() {
    let mut pivot = Pivot::new();
    pivot.local_rotate(0.6, Vec3::new(0.0, 1.0, 0.0));
    let basis = pivot.basis();
    assert!(approx_vec(basis.x_axis, pivot.x_axis()));
    assert!(approx_vec(basis.y_axis, pivot.y_axis()));
    assert!(approx_vec(basis.z_axis, pivot.z_axis()));
}
