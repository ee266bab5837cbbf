//! Debug mesh reconstruction
//!
//! Rebuilds an approximate renderable triangle mesh from cooked collision
//! shapes, for editor/debug visualization only. Convex hull polygons are
//! fan triangulated; cooked triangle meshes are copied as-is.

use crate::mesh::Vertex;
use crate::physics::components::{DebugMeshState, MeshCollider, ProcessedMesh};
use crate::physics::cooking::backend::{ConvexHull, CookedGeometry, TriangleGeometry};
use crate::physics::cooking::cooker::ColliderShape;
use glam::Mat4;
use tracing::debug;

/// Populate the collider's processed-mesh list from its cooked shapes
///
/// Runs at most once per collider lifetime: when the debug state is
/// already `Built` the call is a no-op, even if the shapes have been
/// recooked since.
pub fn build_debug_meshes(collider: &mut MeshCollider) {
    if collider.debug_mesh_state == DebugMeshState::Built {
        return;
    }

    for shape in &collider.shapes {
        match &shape.geometry {
            CookedGeometry::Convex(hull) => {
                reconstruct_convex(hull, shape, &mut collider.processed_meshes);
            }
            CookedGeometry::Triangle(geometry) => {
                reconstruct_triangle(geometry, shape, &mut collider.processed_meshes);
            }
        }
    }

    collider.debug_mesh_state = DebugMeshState::Built;
    debug!(
        meshes = collider.processed_meshes.len(),
        "Built debug meshes for collider"
    );
}

/// Fan triangulate each hull polygon into its own processed mesh
///
/// A polygon with `k` vertices yields `k - 2` triangles, all anchored at
/// the polygon's first vertex, winding preserved. World placement comes
/// from the shape's local pose alone.
fn reconstruct_convex(hull: &ConvexHull, shape: &ColliderShape, out: &mut Vec<ProcessedMesh>) {
    let pose = Mat4::from_rotation_translation(shape.rotation, shape.translation);

    for &polygon in &hull.polygons {
        // Polygons always have at least three vertices
        if polygon.vertex_count < 3 {
            continue;
        }

        let vertices: Vec<Vertex> = hull
            .polygon_vertices(polygon)
            .map(|p| Vertex::from_position(p.to_array()))
            .collect();

        let mut indices = Vec::with_capacity(polygon.vertex_count as usize - 2);
        for i in 1..polygon.vertex_count - 1 {
            indices.push([0, i, i + 1]);
        }

        out.push(ProcessedMesh {
            vertices,
            indices,
            transform: pose,
        });
    }
}

/// Copy a cooked triangle mesh into a single processed mesh
///
/// The geometry scale is folded into the transform together with the
/// shape's local pose.
fn reconstruct_triangle(
    geometry: &TriangleGeometry,
    shape: &ColliderShape,
    out: &mut Vec<ProcessedMesh>,
) {
    let vertices = geometry
        .vertices
        .iter()
        .map(|p| Vertex::from_position(p.to_array()))
        .collect();

    let transform = Mat4::from_rotation_translation(shape.rotation, shape.translation)
        * Mat4::from_scale(shape.scale);

    out.push(ProcessedMesh {
        vertices,
        indices: geometry.triangles.clone(),
        transform,
    });
}
