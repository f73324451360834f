/// Core voxel data structures: run-length encoded columns and line rasterization
pub mod column;
pub mod raster;

pub use column::{Column, Y_MIN};
pub use raster::{line_points, rasterize_line};
