/// Fixed lookup tables for the marching-tetrahedra decomposition
/// These are constants of the algorithm, not configuration
use glam::IVec3;

/// The 8 corners of a unit cube, as offsets from the cell's minimum corner.
///
/// Indexing follows the usual convention: 0..3 wind around the z = 0 face,
/// 4..7 around the z = 1 face, so corners 0 and 6 span the main diagonal.
pub const CUBE_CORNERS: [IVec3; 8] = [
    IVec3::new(0, 0, 0),
    IVec3::new(1, 0, 0),
    IVec3::new(1, 1, 0),
    IVec3::new(0, 1, 0),
    IVec3::new(0, 0, 1),
    IVec3::new(1, 0, 1),
    IVec3::new(1, 1, 1),
    IVec3::new(0, 1, 1),
];

/// Decomposition of the cube into 6 tetrahedra, each given as 4 indices
/// into [`CUBE_CORNERS`]. All six share the 0-6 main diagonal, which keeps
/// the triangulation consistent across neighbouring cells.
pub const TETRAHEDRA: [[usize; 4]; 6] = [
    [0, 5, 1, 6],
    [0, 1, 2, 6],
    [0, 2, 3, 6],
    [0, 3, 7, 6],
    [0, 7, 4, 6],
    [0, 4, 5, 6],
];

/// The 6 edges of a tetrahedron, as pairs of local corner indices (0..4).
pub const TET_EDGES: [[usize; 2]; 6] = [[0, 1], [1, 2], [2, 0], [0, 3], [1, 3], [2, 3]];

/// Triangulation for each of the 16 "which local corners are unoccupied"
/// masks. Bit i of the mask is the unoccupied flag of local corner i; each
/// triangle is 3 indices into [`TET_EDGES`], and the surface vertex sits at
/// the midpoint of that edge.
///
/// Masks 0b0000 (fully inside) and 0b1111 (fully outside) produce no
/// geometry. Complementary masks emit the same triangles with reversed
/// winding.
pub const TET_TRIANGLES: [&[[usize; 3]]; 16] = [
    &[],                      // 0b0000
    &[[0, 3, 2]],             // 0b0001
    &[[0, 1, 4]],             // 0b0010
    &[[1, 2, 3], [1, 3, 4]],  // 0b0011
    &[[1, 5, 2]],             // 0b0100
    &[[0, 1, 5], [0, 5, 3]],  // 0b0101
    &[[0, 2, 5], [0, 5, 4]],  // 0b0110
    &[[3, 5, 4]],             // 0b0111
    &[[3, 4, 5]],             // 0b1000
    &[[0, 5, 2], [0, 4, 5]],  // 0b1001
    &[[0, 5, 1], [0, 3, 5]],  // 0b1010
    &[[1, 2, 5]],             // 0b1011
    &[[1, 3, 2], [1, 4, 3]],  // 0b1100
    &[[0, 4, 1]],             // 0b1101
    &[[0, 2, 3]],             // 0b1110
    &[],                      // 0b1111
];
