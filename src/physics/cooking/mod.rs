//! Collision mesh cooking subsystem
//!
//! Cooking turns raw submesh geometry into backend-optimized collision
//! data. This module provides the backend capability interface, the
//! on-disk cache of cooked records, the orchestrator that drives both,
//! and debug mesh reconstruction from cooked shapes.

pub mod backend;
pub mod cache;
pub mod cooker;
pub mod debug_mesh;

// Re-export commonly used types
pub use backend::{
    ConvexHull, CookMode, CookParams, CookedGeometry, CookingError, GeometryCooker, HullPolygon,
    TriangleGeometry,
};
pub use cache::{CacheError, MeshCache};
pub use cooker::{ColliderShape, CookError, MeshCooker};
pub use debug_mesh::build_debug_meshes;
