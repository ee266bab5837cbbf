//! Mesh and vertex data structures
//!
//! A source mesh is the renderable geometry a collider references. Its
//! vertex and index buffers are partitioned into submeshes, each a
//! contiguous range with its own name and local transform.

use bytemuck::{Pod, Zeroable};
use glam::Mat4;
use std::path::PathBuf;

/// Vertex data structure shared with rendering
///
/// This struct is tightly packed so vertex ranges can be handed to a
/// cooking backend as raw bytes.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// Position in 3D space
    pub position: [f32; 3],
    /// Surface normal vector (normalized)
    pub normal: [f32; 3],
    /// Texture coordinates (UV mapping)
    pub uv: [f32; 2],
}

impl Vertex {
    /// Create a new vertex with the given attributes
    pub const fn new(position: [f32; 3], normal: [f32; 3], uv: [f32; 2]) -> Self {
        Self {
            position,
            normal,
            uv,
        }
    }

    /// Create a vertex carrying only a position
    pub const fn from_position(position: [f32; 3]) -> Self {
        Self {
            position,
            normal: [0.0; 3],
            uv: [0.0; 2],
        }
    }
}

/// A contiguous range of a mesh's buffers with one local transform
///
/// Submesh indices are relative to the submesh's base vertex.
#[derive(Debug, Clone)]
pub struct Submesh {
    /// Name of the submesh as authored in the source file
    pub name: String,
    /// First vertex of this submesh in the shared vertex buffer
    pub base_vertex: u32,
    /// Number of vertices in this submesh
    pub vertex_count: u32,
    /// First index of this submesh in the shared index buffer
    pub base_index: u32,
    /// Number of indices in this submesh (a multiple of three)
    pub index_count: u32,
    /// Local transform of this submesh within the mesh
    pub transform: Mat4,
}

/// A mesh asset partitioned into an ordered sequence of submeshes
///
/// The submesh order is load-bearing: cooked cache records are stored and
/// paired by submesh position.
#[derive(Debug, Clone)]
pub struct SourceMesh {
    /// Path the mesh was loaded from; keys the cooked cache
    pub source_path: PathBuf,
    /// Vertex data for all submeshes
    pub vertices: Vec<Vertex>,
    /// Index data for all submeshes
    pub indices: Vec<u32>,
    /// Ordered submesh partition of the buffers
    pub submeshes: Vec<Submesh>,
}

impl SourceMesh {
    /// Create a new mesh from buffers and their submesh partition
    pub fn new(
        source_path: PathBuf,
        vertices: Vec<Vertex>,
        indices: Vec<u32>,
        submeshes: Vec<Submesh>,
    ) -> Self {
        Self {
            source_path,
            vertices,
            indices,
            submeshes,
        }
    }

    /// Vertex range of one submesh
    pub fn submesh_vertices(&self, submesh: &Submesh) -> &[Vertex] {
        let base = submesh.base_vertex as usize;
        &self.vertices[base..base + submesh.vertex_count as usize]
    }

    /// Index range of one submesh, relative to its base vertex
    pub fn submesh_indices(&self, submesh: &Submesh) -> &[u32] {
        let base = submesh.base_index as usize;
        &self.indices[base..base + submesh.index_count as usize]
    }
}
