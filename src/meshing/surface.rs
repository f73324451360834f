/// Triangle-soup output of surface extraction
use glam::Vec3;

/// A flat, unindexed triangle list: three consecutive positions form one
/// triangle. No shared-vertex indexing, normals, or colours — the minimal
/// contract a renderer or exporter needs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SurfaceMesh {
    /// Vertex positions in world units; length is always a multiple of 3.
    pub positions: Vec<Vec3>,
}

impl SurfaceMesh {
    pub fn new() -> Self {
        Self {
            positions: Vec::new(),
        }
    }

    pub fn with_capacity(triangles: usize) -> Self {
        Self {
            positions: Vec::with_capacity(triangles * 3),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Iterate the triangles as vertex triples.
    pub fn triangles(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        self.positions
            .chunks_exact(3)
            .map(|tri| [tri[0], tri[1], tri[2]])
    }

    /// Axis-aligned bounds of the emitted positions, or None when empty.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let first = *self.positions.first()?;
        let mut min = first;
        let mut max = first;
        for &p in &self.positions[1..] {
            min = min.min(p);
            max = max.max(p);
        }
        Some((min, max))
    }
}
