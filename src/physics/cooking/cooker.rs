//! Cooking orchestration
//!
//! Produces one runtime collision shape per submesh of a collider's
//! source mesh, cooking through the backend on a cache miss and decoding
//! stored records on a hit.

use crate::mesh::{SourceMesh, Submesh};
use crate::physics::components::MeshCollider;
use crate::physics::cooking::backend::{
    CookMode, CookParams, CookedGeometry, CookingError, GeometryCooker,
};
use crate::physics::cooking::cache::{CacheError, MeshCache};
use glam::{Quat, Vec3};
use tracing::{debug, error, info};

/// Runtime collision shape descriptor
///
/// Pairs the decoded geometry with the scale and local pose extracted
/// from the submesh transform. Attached to a physical actor by the
/// caller; also the input to debug mesh reconstruction.
#[derive(Debug, Clone, PartialEq)]
pub struct ColliderShape {
    /// Decoded backend geometry
    pub geometry: CookedGeometry,
    /// Component-wise geometry scale: submesh scale times world scale
    pub scale: Vec3,
    /// Local-pose translation, from the submesh transform
    pub translation: Vec3,
    /// Local-pose rotation, from the submesh transform
    pub rotation: Quat,
}

/// Errors that can occur while cooking a collider
#[derive(Debug, thiserror::Error)]
pub enum CookError {
    #[error(transparent)]
    Cache(#[from] CacheError),

    #[error(transparent)]
    Cooking(#[from] CookingError),

    #[error("cache holds {records} records but the mesh has {submeshes} submeshes")]
    RecordCountMismatch { records: usize, submeshes: usize },
}

/// Orchestrates cooking, caching, and shape construction for colliders
pub struct MeshCooker {
    cache: MeshCache,
    backend: Box<dyn GeometryCooker>,
    params: CookParams,
}

impl MeshCooker {
    /// Create a cooker over a cache store and a cooking backend
    pub fn new(cache: MeshCache, backend: Box<dyn GeometryCooker>) -> Self {
        Self {
            cache,
            backend,
            params: CookParams::default(),
        }
    }

    /// Override the parameters forwarded to the backend
    pub fn with_params(mut self, params: CookParams) -> Self {
        self.params = params;
        self
    }

    /// Cache store this cooker reads and writes
    pub fn cache(&self) -> &MeshCache {
        &self.cache
    }

    /// Cook collision shapes for a collider, one per submesh
    ///
    /// Uses the on-disk cache when a cache file exists for the collider's
    /// source mesh; cooks through the backend and populates the cache
    /// otherwise. With `invalidate_old` the existing cache file is deleted
    /// first, so the result never reuses previously cooked bytes.
    ///
    /// Returned shapes are in submesh order. On a cache miss a submesh
    /// whose cooking fails is skipped, so the result may hold fewer shapes
    /// than the mesh has submeshes.
    pub fn cook(
        &self,
        collider: &MeshCollider,
        world_scale: Vec3,
        invalidate_old: bool,
    ) -> Result<Vec<ColliderShape>, CookError> {
        let mesh = collider.collision_mesh.as_ref();
        let mode = if collider.is_convex {
            CookMode::Convex
        } else {
            CookMode::Triangle
        };

        if invalidate_old {
            self.cache.invalidate(&mesh.source_path)?;
        }

        if self.cache.exists(&mesh.source_path) {
            self.build_from_cache(mesh, mode, world_scale)
        } else {
            self.cook_and_store(mesh, mode, world_scale)
        }
    }

    fn cook_and_store(
        &self,
        mesh: &SourceMesh,
        mode: CookMode,
        world_scale: Vec3,
    ) -> Result<Vec<ColliderShape>, CookError> {
        let mut records: Vec<Vec<u8>> = Vec::with_capacity(mesh.submeshes.len());
        let mut shapes = Vec::with_capacity(mesh.submeshes.len());

        for submesh in &mesh.submeshes {
            let vertices = mesh.submesh_vertices(submesh);
            let indices = mesh.submesh_indices(submesh);

            let blob = match self.backend.cook(vertices, indices, mode, &self.params) {
                Ok(blob) => blob,
                Err(e) => {
                    error!(submesh = %submesh.name, error = %e, "Failed to cook submesh, skipping");
                    continue;
                }
            };

            // A record is kept only together with its shape, so records
            // and shapes stay positionally aligned.
            let geometry = match self.backend.build(&blob, mode) {
                Ok(geometry) => geometry,
                Err(e) => {
                    error!(submesh = %submesh.name, error = %e, "Cooked blob failed to decode, skipping");
                    continue;
                }
            };

            shapes.push(build_shape(submesh, geometry, world_scale));
            records.push(blob);
        }

        // Records are persisted in submesh iteration order; the reader
        // pairs them positionally on the next load.
        self.cache.save(&mesh.source_path, &records)?;
        info!(
            asset = ?mesh.source_path,
            shapes = shapes.len(),
            submeshes = mesh.submeshes.len(),
            mode = ?mode,
            "Cooked collision mesh"
        );
        Ok(shapes)
    }

    fn build_from_cache(
        &self,
        mesh: &SourceMesh,
        mode: CookMode,
        world_scale: Vec3,
    ) -> Result<Vec<ColliderShape>, CookError> {
        let records = self.cache.load(&mesh.source_path)?;
        if records.len() != mesh.submeshes.len() {
            return Err(CookError::RecordCountMismatch {
                records: records.len(),
                submeshes: mesh.submeshes.len(),
            });
        }

        let mut shapes = Vec::with_capacity(records.len());
        for (submesh, record) in mesh.submeshes.iter().zip(&records) {
            let geometry = self.backend.build(record, mode)?;
            shapes.push(build_shape(submesh, geometry, world_scale));
        }

        debug!(
            asset = ?mesh.source_path,
            shapes = shapes.len(),
            "Rebuilt collision shapes from cache"
        );
        Ok(shapes)
    }
}

/// Decompose the submesh transform and pair it with decoded geometry
fn build_shape(submesh: &Submesh, geometry: CookedGeometry, world_scale: Vec3) -> ColliderShape {
    let (submesh_scale, rotation, translation) = submesh.transform.to_scale_rotation_translation();
    ColliderShape {
        geometry,
        scale: submesh_scale * world_scale,
        translation,
        rotation,
    }
}
