//! Collision geometry cooking for physics simulation
//!
//! This crate prepares physics-ready collision geometry from renderable
//! meshes: it partitions a mesh into submeshes, cooks each one through an
//! external geometry-processing backend, and persists the cooked results
//! in a compact on-disk cache so the expensive work is not repeated across
//! runs. It also reconstructs approximate triangle meshes from cooked
//! shapes for editor/debug visualization.

pub mod config;
pub mod mesh;
pub mod physics;

// Re-export commonly used types
pub mod prelude {
    // Configuration types
    pub use crate::config::CacheConfig;

    // Mesh types
    pub use crate::mesh::{load_source_mesh, MeshLoadError, SourceMesh, Submesh, Vertex};

    // Collider types
    pub use crate::physics::{DebugMeshState, MeshCollider, PhysicsMaterial, ProcessedMesh};

    // Cooking types
    pub use crate::physics::cooking::{
        build_debug_meshes, ColliderShape, ConvexHull, CookError, CookMode, CookParams,
        CookedGeometry, CookingError, GeometryCooker, HullPolygon, MeshCache, MeshCooker,
        TriangleGeometry,
    };

    // Math types
    pub use glam::{Mat4, Quat, Vec3};
}

/// Initialize logging for the crate
pub fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
