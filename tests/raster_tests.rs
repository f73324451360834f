/// Integration tests for line rasterization in trace and paint modes
use glam::{IVec3, Vec3};
use voxel_field::*;

#[test]
fn test_paint_axis_line_sets_expected_cells() {
    let mut field = VoxelField::new(false);
    field.paint_line(Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0), 1.0, true);

    // The dominant-axis loop stops within one step of the endpoint, so
    // cells 0..10 along x are painted and the endpoint cell is not.
    for x in 0..10 {
        assert!(field.point(IVec3::new(x, 0, 0)), "cell x={} unpainted", x);
    }
    assert!(!field.point(IVec3::new(10, 0, 0)));
    assert!(!field.point(IVec3::new(-1, 0, 0)));

    // No stray columns: one per painted x.
    assert_eq!(field.column_count(), 10);
    assert!(!field.point(IVec3::new(0, 1, 0)));
    assert!(!field.point(IVec3::new(0, -1, 0)));
}

#[test]
fn test_paint_respects_step_resolution() {
    let mut field = VoxelField::new(false);
    // World segment 0..10 sampled at step 2 maps to grid cells 0..5.
    field.paint_line(Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0), 2.0, true);
    for x in 0..5 {
        assert!(field.point(IVec3::new(x, 0, 0)));
    }
    assert_eq!(field.column_count(), 5);
}

#[test]
fn test_trace_mode_leaves_field_untouched() {
    let field = VoxelField::new(false);
    let points = line_points(Vec3::ZERO, Vec3::new(0.0, 6.0, 0.0), 1.0);
    assert_eq!(points.len(), 6);
    assert_eq!(points[3], Vec3::new(0.0, 3.0, 0.0));
    assert_eq!(field.column_count(), 0);
}

#[test]
fn test_paint_diagonal_line_connects_endpoints() {
    let mut field = VoxelField::new(false);
    field.paint_line(Vec3::ZERO, Vec3::new(8.0, 3.0, 5.0), 1.0, true);

    assert!(field.point(IVec3::ZERO));
    // Every painted cell must be adjacent (within one cell per axis) to
    // another painted cell, forming an unbroken trace.
    let mut cells = Vec::new();
    for (key, _) in field.columns() {
        for (y, _) in field.column_cells(key.x, key.y) {
            cells.push(IVec3::new(key.x, y, key.y));
        }
    }
    assert!(cells.len() >= 8);
    for &cell in &cells {
        if cell == IVec3::ZERO {
            continue;
        }
        let has_neighbor = cells.iter().any(|&other| {
            other != cell && (other - cell).abs().max_element() <= 1
        });
        assert!(has_neighbor, "isolated painted cell {:?}", cell);
    }
}

#[test]
fn test_paint_erase_round_trip() {
    let mut field = VoxelField::new(false);
    let a = Vec3::ZERO;
    let b = Vec3::new(12.0, 4.0, -7.0);
    field.paint_line(a, b, 1.0, true);
    assert!(field.point(IVec3::ZERO));

    field.paint_line(a, b, 1.0, false);
    field.compress_all();
    for (key, _) in field.columns() {
        assert!(
            field.column_cells(key.x, key.y).is_empty(),
            "column {:?} still occupied after erase",
            key
        );
    }
}
