// Host-side tests for the top-down view layout.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod layout {
    include!("../src/layout.rs");
}

use glam::{Vec2, Vec3};
use layout::*;

fn view(center: Vec3) -> ViewLayout {
    ViewLayout {
        center,
        canvas_size: Vec2::new(800.0, 600.0),
        px_per_unit: 20.0,
    }
}

#[test]
fn center_maps_to_canvas_middle() {
    let v = view(Vec3::new(3.0, 0.0, -2.0));
    let c = v.world_to_canvas(Vec3::new(3.0, 7.0, -2.0));
    assert_eq!(c, Vec2::new(400.0, 300.0));
}

#[test]
fn plus_x_is_right_and_plus_z_is_up() {
    let v = view(Vec3::ZERO);
    let right = v.world_to_canvas(Vec3::new(1.0, 0.0, 0.0));
    let up = v.world_to_canvas(Vec3::new(0.0, 0.0, 1.0));
    assert_eq!(right, Vec2::new(420.0, 300.0));
    assert_eq!(up, Vec2::new(400.0, 280.0));
}

#[test]
fn visible_bounds_cover_canvas() {
    let v = view(Vec3::new(10.0, 0.0, 0.0));
    let (min, max) = v.visible_bounds();
    assert!((min.x + 10.0).abs() < 1e-4);
    assert!((max.x - 30.0).abs() < 1e-4);
    assert!((min.y + 15.0).abs() < 1e-4);
    assert!((max.y - 15.0).abs() < 1e-4);
}

#[test]
fn grid_lines_align_to_spacing() {
    let lines = grid_lines(-1.5, 2.2, 1.0);
    let xs: Vec<f32> = lines.iter().map(|(_, x)| *x).collect();
    assert_eq!(xs, vec![-1.0, 0.0, 1.0, 2.0]);
    assert_eq!(lines[0].0, -1);
}

#[test]
fn grid_lines_reject_degenerate_input() {
    assert!(grid_lines(0.0, 10.0, 0.0).is_empty());
    assert!(grid_lines(5.0, 1.0, 1.0).is_empty());
    assert!(grid_lines(f32::NAN, 1.0, 1.0).is_empty());
}

#[test]
fn arrow_points_along_forward() {
    let [tip, left, right] = arrow_outline(Vec3::ZERO, Vec3::X, 2.0, 0.5);
    assert!((tip - Vec3::new(1.0, 0.0, 0.0)).length() < 1e-5);
    // Facing +X, the right-hand side is -Z
    assert!((right - Vec3::new(-1.0, 0.0, -0.5)).length() < 1e-5);
    assert!((left - Vec3::new(-1.0, 0.0, 0.5)).length() < 1e-5);
}

#[test]
fn arrow_with_vertical_forward_falls_back_to_plus_z() {
    let [tip, _, _] = arrow_outline(Vec3::ZERO, Vec3::Y, 2.0, 0.5);
    assert!((tip - Vec3::new(0.0, 0.0, 1.0)).length() < 1e-5);
}
