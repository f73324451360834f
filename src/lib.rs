/// Sparse voxel occupancy field with marching-tetrahedra surface extraction
/// Columns are run-length encoded along y for compact storage of scan data
pub mod field;
pub mod meshing;
pub mod perf;
pub mod voxel;

pub use field::VoxelField;
pub use meshing::{MarchingTetsMesher, SurfaceMesh};
pub use perf::{CounterSnapshot, FunctionCounters, FUNCTION_COUNTERS};
pub use voxel::{line_points, rasterize_line, Column, Y_MIN};
