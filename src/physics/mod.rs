//! Collision geometry preparation for physics simulation
//!
//! This module provides the mesh collider component and the cooking
//! pipeline that turns its source mesh into backend-ready collision
//! shapes, with on-disk caching of the cooked results.

pub mod components;
pub mod cooking;

// Re-export commonly used types
pub use components::{DebugMeshState, MeshCollider, PhysicsMaterial, ProcessedMesh};
pub use cooking::{
    build_debug_meshes, ColliderShape, CookError, CookMode, CookParams, CookedGeometry,
    GeometryCooker, MeshCache, MeshCooker,
};
