/// Isosurface extraction: marching tetrahedra over the sparse column field
pub mod marching_tets;
pub mod surface;
pub mod tables;

pub use marching_tets::MarchingTetsMesher;
pub use surface::SurfaceMesh;
