//! Collider component and physics materials

use crate::mesh::{SourceMesh, Vertex};
use crate::physics::cooking::ColliderShape;
use glam::Mat4;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Physics material properties
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PhysicsMaterial {
    /// Static friction coefficient
    pub static_friction: f32,

    /// Dynamic friction coefficient
    pub dynamic_friction: f32,

    /// Restitution (bounciness) coefficient
    pub restitution: f32,
}

impl Default for PhysicsMaterial {
    fn default() -> Self {
        Self {
            static_friction: 0.6,
            dynamic_friction: 0.6,
            restitution: 0.0,
        }
    }
}

impl PhysicsMaterial {
    /// Create a bouncy material
    pub fn bouncy() -> Self {
        Self {
            restitution: 0.8,
            ..Default::default()
        }
    }

    /// Create a slippery material (ice-like)
    pub fn slippery() -> Self {
        Self {
            static_friction: 0.1,
            dynamic_friction: 0.05,
            restitution: 0.0,
        }
    }
}

/// Whether a collider's debug geometry has been reconstructed yet
///
/// Debug meshes are built at most once per collider lifetime; the flag
/// makes that one-shot invariant explicit instead of inferring it from
/// list emptiness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DebugMeshState {
    #[default]
    Unbuilt,
    Built,
}

/// Triangle mesh reconstructed from a cooked shape
///
/// Used only for editor/debug visualization, never for simulation.
#[derive(Debug, Clone)]
pub struct ProcessedMesh {
    /// Vertex data for the mesh
    pub vertices: Vec<Vertex>,
    /// Triangle index triples, local to this mesh
    pub indices: Vec<[u32; 3]>,
    /// Placement of the mesh relative to the collider
    pub transform: Mat4,
}

/// Mesh collider component
///
/// References a source mesh asset and owns the runtime shapes cooked from
/// it, plus the debug geometry reconstructed from those shapes.
#[derive(Debug, Clone)]
pub struct MeshCollider {
    /// Source mesh the collision geometry is cooked from
    pub collision_mesh: Arc<SourceMesh>,

    /// Cook convex hulls instead of triangle meshes
    pub is_convex: bool,

    /// Material applied to all shapes of this collider
    pub material: PhysicsMaterial,

    /// Runtime shapes cooked from the source mesh, in submesh order
    pub shapes: Vec<ColliderShape>,

    /// Debug geometry reconstructed from the cooked shapes
    pub processed_meshes: Vec<ProcessedMesh>,

    /// One-shot state of the debug geometry
    pub debug_mesh_state: DebugMeshState,
}

impl MeshCollider {
    /// Create a new mesh collider
    pub fn new(collision_mesh: Arc<SourceMesh>, is_convex: bool) -> Self {
        Self {
            collision_mesh,
            is_convex,
            material: PhysicsMaterial::default(),
            shapes: Vec::new(),
            processed_meshes: Vec::new(),
            debug_mesh_state: DebugMeshState::Unbuilt,
        }
    }

    /// Create a convex mesh collider
    pub fn convex(collision_mesh: Arc<SourceMesh>) -> Self {
        Self::new(collision_mesh, true)
    }

    /// Create a triangle mesh collider
    pub fn triangle(collision_mesh: Arc<SourceMesh>) -> Self {
        Self::new(collision_mesh, false)
    }

    /// Set the physics material for this collider
    pub fn with_material(mut self, material: PhysicsMaterial) -> Self {
        self.material = material;
        self
    }

    /// Replace the runtime shapes with freshly cooked ones
    ///
    /// Previous shapes are dropped before the new ones are attached.
    pub fn attach_shapes(&mut self, shapes: Vec<ColliderShape>) {
        self.shapes = shapes;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn empty_mesh() -> Arc<SourceMesh> {
        Arc::new(SourceMesh::new(
            PathBuf::from("empty.obj"),
            Vec::new(),
            Vec::new(),
            Vec::new(),
        ))
    }

    #[test]
    fn test_material_defaults() {
        let material = PhysicsMaterial::default();
        assert_eq!(material.static_friction, 0.6);
        assert_eq!(material.dynamic_friction, 0.6);
        assert_eq!(material.restitution, 0.0);
    }

    #[test]
    fn test_collider_creation() {
        let convex = MeshCollider::convex(empty_mesh());
        assert!(convex.is_convex);
        assert!(convex.shapes.is_empty());
        assert_eq!(convex.debug_mesh_state, DebugMeshState::Unbuilt);

        let triangle = MeshCollider::triangle(empty_mesh());
        assert!(!triangle.is_convex);
    }

    #[test]
    fn test_collider_with_material() {
        let collider = MeshCollider::convex(empty_mesh()).with_material(PhysicsMaterial::bouncy());
        assert_eq!(collider.material.restitution, 0.8);
    }
}
