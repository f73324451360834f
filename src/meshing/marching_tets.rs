use super::surface::SurfaceMesh;
/// Marching-tetrahedra surface extraction over the sparse column field
/// Walks occupied runs column by column and meshes each unit cell against
/// the fixed case tables
use super::tables::{CUBE_CORNERS, TETRAHEDRA, TET_EDGES, TET_TRIANGLES};
use crate::count_call;
use crate::field::VoxelField;
use crate::perf::FUNCTION_COUNTERS;
use crate::voxel::Column;
use glam::{IVec2, IVec3};

/// Minus-side neighbour offsets meshed on behalf of columns whose
/// neighbour key is absent from the field. A present neighbour meshes the
/// shared boundary in its own pass, so re-running it here would duplicate
/// geometry.
const NEIGHBOR_OFFSETS: [IVec2; 3] = [
    IVec2::new(-1, 0),
    IVec2::new(0, -1),
    IVec2::new(-1, -1),
];

pub struct MarchingTetsMesher;

impl MarchingTetsMesher {
    /// Extract the boundary surface of the occupied region inside the
    /// inclusive (x, z) window `min..=max`, as a triangle soup in world
    /// units (`scale` world units per grid cell).
    ///
    /// Columns are visited in sorted key order so the emitted triangle
    /// sequence is reproducible across runs.
    pub fn extract(field: &VoxelField, min: IVec2, max: IVec2, scale: f32) -> SurfaceMesh {
        count_call!(FUNCTION_COUNTERS.extract_calls);

        let mut columns: Vec<(IVec2, &Column)> = field
            .columns()
            .filter(|(key, _)| {
                key.x >= min.x && key.x <= max.x && key.y >= min.y && key.y <= max.y
            })
            .collect();
        columns.sort_by_key(|(key, _)| (key.x, key.y));

        let mut mesh = SurfaceMesh::new();
        for (key, column) in columns {
            count_call!(FUNCTION_COUNTERS.column_passes);
            Self::extract_column(field, column, key, &mut mesh, scale);

            // Boundaries against unpopulated minus-side neighbours: rerun
            // this column's pass translated into the empty neighbour so the
            // seam gets capped without the neighbour ever being populated.
            for offset in NEIGHBOR_OFFSETS {
                if field.contains_column(key + offset) {
                    continue;
                }
                count_call!(FUNCTION_COUNTERS.neighbor_passes);
                Self::extract_column(field, column, key + offset, &mut mesh, scale);
            }
        }
        mesh
    }

    /// March every cell of the column's occupied runs at the given (x, z)
    /// origin, extending each run one cell below to cap its underside.
    fn extract_column(
        field: &VoxelField,
        column: &Column,
        origin: IVec2,
        mesh: &mut SurfaceMesh,
        scale: f32,
    ) {
        for (start, end) in column.flipped_ranges() {
            for y in (start - 1)..end {
                Self::march_cell(field, IVec3::new(origin.x, y, origin.y), mesh, scale);
            }
        }
    }

    /// Classify the 6 tetrahedra of the unit cell at `cell` (its minimum
    /// corner) and append the case-table triangles to `mesh`.
    fn march_cell(field: &VoxelField, cell: IVec3, mesh: &mut SurfaceMesh, scale: f32) {
        count_call!(FUNCTION_COUNTERS.cells_marched);

        let mut corners = [IVec3::ZERO; 8];
        let mut occupied = [false; 8];
        for (i, offset) in CUBE_CORNERS.iter().enumerate() {
            corners[i] = cell + *offset;
            occupied[i] = field.point(corners[i]) != field.default_value();
        }

        // Uniform cells cannot intersect the surface.
        if occupied.iter().all(|&o| o) || occupied.iter().all(|&o| !o) {
            return;
        }

        let half_scale = scale * 0.5;
        for tet in &TETRAHEDRA {
            let mut mask = 0usize;
            for (i, &corner) in tet.iter().enumerate() {
                if !occupied[corner] {
                    mask |= 1 << i;
                }
            }

            for tri in TET_TRIANGLES[mask] {
                count_call!(FUNCTION_COUNTERS.triangles_emitted);
                for &edge in tri {
                    let [a, b] = TET_EDGES[edge];
                    let sum = corners[tet[a]] + corners[tet[b]];
                    mesh.positions.push(sum.as_vec3() * half_scale);
                }
            }
        }
    }
}
