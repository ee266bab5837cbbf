//! Source mesh assets
//!
//! Provides the submesh-partitioned mesh representation colliders are
//! cooked from, and loading of that representation from mesh files.

pub mod loader;
pub mod source;

// Re-export commonly used types
pub use loader::{load_source_mesh, MeshLoadError};
pub use source::{SourceMesh, Submesh, Vertex};
