//! Geometry cooking backend interface
//!
//! The backend turns raw vertex/index data into an opaque optimized blob
//! and decodes such blobs back into runtime geometry. It is modeled as a
//! capability trait rather than a concrete library binding so the cooking
//! pipeline can be tested against a deterministic fake.

use crate::mesh::Vertex;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Cooking mode for a submesh
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CookMode {
    /// Cook a convex hull of the submesh
    Convex,
    /// Cook an optimized triangle mesh of the submesh
    Triangle,
}

/// Tuning parameters forwarded to the cooking backend
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CookParams {
    /// Weld nearby vertices before cooking
    pub weld_vertices: bool,
    /// Distance below which vertices are welded
    pub weld_tolerance: f32,
    /// Tolerance used when merging coplanar hull faces
    pub plane_tolerance: f32,
}

impl Default for CookParams {
    fn default() -> Self {
        Self {
            weld_vertices: true,
            weld_tolerance: 0.01,
            plane_tolerance: 0.0,
        }
    }
}

/// Errors reported by a cooking backend
#[derive(Debug, thiserror::Error)]
pub enum CookingError {
    #[error("backend failed to cook geometry: {0}")]
    Cook(String),

    #[error("cooked blob is not valid {mode:?} data: {reason}")]
    InvalidBlob { mode: CookMode, reason: String },
}

/// One face of a convex hull
///
/// References an ordered range of the hull's shared index buffer; the
/// referenced vertices have consistent winding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HullPolygon {
    /// Offset of this polygon's first index in the hull index buffer
    pub index_base: u32,
    /// Number of vertices (and indices) in this polygon
    pub vertex_count: u32,
}

/// Convex hull decoded from a cooked blob
#[derive(Debug, Clone, PartialEq)]
pub struct ConvexHull {
    /// Hull vertex positions, shared by all polygons
    pub vertices: Vec<Vec3>,
    /// Index buffer the polygons reference ranges of
    pub indices: Vec<u32>,
    /// Hull faces in backend order
    pub polygons: Vec<HullPolygon>,
}

impl ConvexHull {
    /// Vertex positions of one polygon, in winding order
    pub fn polygon_vertices(&self, polygon: HullPolygon) -> impl Iterator<Item = Vec3> + '_ {
        let base = polygon.index_base as usize;
        self.indices[base..base + polygon.vertex_count as usize]
            .iter()
            .map(|&i| self.vertices[i as usize])
    }
}

/// Triangle mesh decoded from a cooked blob
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleGeometry {
    /// Mesh vertex positions
    pub vertices: Vec<Vec3>,
    /// Triangle index triples
    pub triangles: Vec<[u32; 3]>,
}

/// Runtime geometry decoded from a cooked blob
#[derive(Debug, Clone, PartialEq)]
pub enum CookedGeometry {
    Convex(ConvexHull),
    Triangle(TriangleGeometry),
}

/// Capability interface to the external geometry-processing service
///
/// Implementations bind a concrete cooking library; the blob layout is
/// theirs alone. The only contract is that `build` understands whatever
/// `cook` produced for the same mode.
pub trait GeometryCooker {
    /// Cook one submesh into an opaque byte blob
    ///
    /// `indices` are triangle triples relative to the start of `vertices`.
    fn cook(
        &self,
        vertices: &[Vertex],
        indices: &[u32],
        mode: CookMode,
        params: &CookParams,
    ) -> Result<Vec<u8>, CookingError>;

    /// Decode a cooked blob back into runtime geometry
    fn build(&self, blob: &[u8], mode: CookMode) -> Result<CookedGeometry, CookingError>;
}
