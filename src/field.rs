/// Sparse voxel occupancy field keyed by (x, z) column
/// Owns the column map and translates between absolute occupancy values and
/// the columns' baseline-relative run encoding
use crate::count_call;
use crate::perf::FUNCTION_COUNTERS;
use crate::voxel::{rasterize_line, Column};
use glam::{IVec2, IVec3, Vec3};
use noise::{NoiseFn, Perlin};
use std::collections::HashMap;

/// Infinite, axis-aligned boolean occupancy field over integer 3D grid
/// coordinates.
///
/// Storage is column-oriented: each present (x, z) key maps to a
/// run-length encoded profile along y ([`Column`]); absent keys read as the
/// field's `default_value` everywhere. The default value is chosen at
/// construction and never changes for the lifetime of the field.
///
/// The field is single-threaded; callers that share one across threads must
/// serialize access externally.
pub struct VoxelField {
    columns: HashMap<IVec2, Column>,
    default_value: bool,
}

impl VoxelField {
    /// Create an empty field where every cell reads `default_value`.
    pub fn new(default_value: bool) -> Self {
        Self {
            columns: HashMap::new(),
            default_value,
        }
    }

    /// The baseline occupancy assumed everywhere not explicitly recorded.
    #[inline]
    pub fn default_value(&self) -> bool {
        self.default_value
    }

    /// Occupancy at a single grid cell.
    #[inline]
    pub fn point(&self, p: IVec3) -> bool {
        count_call!(FUNCTION_COUNTERS.point_query_calls);
        match self.columns.get(&IVec2::new(p.x, p.z)) {
            Some(column) => self.default_value ^ column.flipped_at(p.y),
            None => self.default_value,
        }
    }

    /// Set the occupancy of a single grid cell, creating the column if
    /// needed.
    pub fn set_point(&mut self, p: IVec3, value: bool) {
        count_call!(FUNCTION_COUNTERS.point_mutate_calls);
        let flipped = value != self.default_value;
        let column = self.columns.entry(IVec2::new(p.x, p.z)).or_default();
        column.set_flipped(p.y, flipped);
    }

    /// Sparse view of one column: a map from y to occupancy containing only
    /// the cells whose value differs from the default. Absent columns yield
    /// an empty map.
    pub fn column_cells(&self, x: i32, z: i32) -> HashMap<i32, bool> {
        let mut cells = HashMap::new();
        if let Some(column) = self.columns.get(&IVec2::new(x, z)) {
            let value = !self.default_value;
            for (start, end) in column.flipped_ranges() {
                for y in start..end {
                    cells.insert(y, value);
                }
            }
        }
        cells
    }

    /// Collapse degenerate zero-length runs in one column.
    /// No-op for absent columns.
    pub fn compress_column(&mut self, x: i32, z: i32) {
        if let Some(column) = self.columns.get_mut(&IVec2::new(x, z)) {
            column.compress();
        }
    }

    /// Collapse degenerate runs in every column.
    pub fn compress_all(&mut self) {
        for column in self.columns.values_mut() {
            column.compress();
        }
    }

    /// Burn the segment `p0 -> p1` (world units) into the field at
    /// resolution `step`: every sampled point is floored to grid
    /// coordinates and set to `value`.
    pub fn paint_line(&mut self, p0: Vec3, p1: Vec3, step: f32, value: bool) {
        rasterize_line(p0, p1, step, |p| {
            let cell = (p / step).floor().as_ivec3();
            self.set_point(cell, value);
        });
    }

    /// True if the (x, z) key has an explicit column.
    #[inline]
    pub fn contains_column(&self, key: IVec2) -> bool {
        self.columns.contains_key(&key)
    }

    /// Explicit column at `key`, if present.
    #[inline]
    pub fn column(&self, key: IVec2) -> Option<&Column> {
        self.columns.get(&key)
    }

    /// Iterate all explicit columns.
    pub fn columns(&self) -> impl Iterator<Item = (IVec2, &Column)> {
        self.columns.iter().map(|(&key, column)| (key, column))
    }

    /// Number of explicit columns.
    #[inline]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Drop every explicit column, resetting the field to uniform
    /// `default_value`. The default itself is unchanged.
    pub fn clear(&mut self) {
        self.columns.clear();
    }

    /// Paint a Perlin-noise heightfield into the field: for each (x, z) in
    /// the inclusive window, cells from `height - depth` up to `height`
    /// are set to the non-default value, then the column is compressed.
    ///
    /// Used by benches and tests to build fields with realistic occupancy.
    pub fn paint_terrain(&mut self, min: IVec2, max: IVec2, depth: i32, seed: u32) {
        let perlin = Perlin::new(seed);
        for z in min.y..=max.y {
            for x in min.x..=max.x {
                let height = sample_terrain_height(&perlin, x, z);
                let value = !self.default_value;
                for y in (height - depth)..=height {
                    self.set_point(IVec3::new(x, y, z), value);
                }
                self.compress_column(x, z);
            }
        }
    }
}

#[inline]
fn sample_terrain_height(perlin: &Perlin, x: i32, z: i32) -> i32 {
    let scale = 0.05;
    let noise_value = perlin.get([x as f64 * scale, z as f64 * scale]);
    (noise_value * 8.0) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_field_is_uniform_default() {
        let field = VoxelField::new(false);
        assert_eq!(field.column_count(), 0);
        assert!(!field.point(IVec3::ZERO));
        assert!(!field.point(IVec3::new(-37, 12, 99)));

        let solid = VoxelField::new(true);
        assert!(solid.point(IVec3::new(5, -5, 5)));
    }

    #[test]
    fn test_set_point_round_trip() {
        let mut field = VoxelField::new(false);
        field.set_point(IVec3::new(2, 7, -3), true);
        assert!(field.point(IVec3::new(2, 7, -3)));
        assert!(!field.point(IVec3::new(2, 6, -3)));
        assert!(!field.point(IVec3::new(2, 8, -3)));
        assert!(!field.point(IVec3::new(3, 7, -3)));
        assert_eq!(field.column_count(), 1);
    }

    #[test]
    fn test_inverted_default_round_trip() {
        let mut field = VoxelField::new(true);
        field.set_point(IVec3::new(0, 0, 0), false);
        assert!(!field.point(IVec3::ZERO));
        assert!(field.point(IVec3::new(0, 1, 0)));
    }

    #[test]
    fn test_column_cells_sparse_view() {
        let mut field = VoxelField::new(false);
        field.set_point(IVec3::new(1, 4, 2), true);
        field.set_point(IVec3::new(1, 5, 2), true);
        field.set_point(IVec3::new(1, 9, 2), true);
        field.compress_column(1, 2);

        let cells = field.column_cells(1, 2);
        assert_eq!(cells.len(), 3);
        assert_eq!(cells.get(&4), Some(&true));
        assert_eq!(cells.get(&5), Some(&true));
        assert_eq!(cells.get(&9), Some(&true));
        assert_eq!(cells.get(&6), None);

        assert!(field.column_cells(0, 0).is_empty());
    }

    #[test]
    fn test_clear_keeps_default() {
        let mut field = VoxelField::new(true);
        field.set_point(IVec3::ZERO, false);
        field.clear();
        assert_eq!(field.column_count(), 0);
        assert!(field.point(IVec3::ZERO));
        assert!(field.default_value());
    }

    #[test]
    fn test_paint_terrain_builds_columns() {
        let mut field = VoxelField::new(false);
        field.paint_terrain(IVec2::new(-4, -4), IVec2::new(4, 4), 3, 42);
        assert_eq!(field.column_count(), 81);
        // Every painted column carries a compressed two-run profile.
        for (_, column) in field.columns() {
            assert_eq!(column.run_count(), 2);
        }
    }
}
