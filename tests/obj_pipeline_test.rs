//! Integration test for the full asset-to-shapes pipeline
//!
//! Loads a multi-object OBJ file from disk, cooks it, and verifies the
//! cache serves identical shapes on the second pass.

use collision_cooking::physics::cooking::CookingError;
use collision_cooking::prelude::*;
use std::sync::Arc;

/// Minimal backend: the blob is the raw positions, the hull is one
/// polygon over all vertices
struct PassthroughCooker;

impl GeometryCooker for PassthroughCooker {
    fn cook(
        &self,
        vertices: &[Vertex],
        _indices: &[u32],
        _mode: CookMode,
        _params: &CookParams,
    ) -> Result<Vec<u8>, CookingError> {
        let mut blob = Vec::with_capacity(vertices.len() * 12);
        for vertex in vertices {
            for component in vertex.position {
                blob.extend_from_slice(&component.to_ne_bytes());
            }
        }
        Ok(blob)
    }

    fn build(&self, blob: &[u8], mode: CookMode) -> Result<CookedGeometry, CookingError> {
        if blob.len() % 12 != 0 {
            return Err(CookingError::InvalidBlob {
                mode,
                reason: "blob is not a whole number of positions".to_string(),
            });
        }

        let vertices: Vec<Vec3> = blob
            .chunks_exact(12)
            .map(|chunk| {
                let component = |i: usize| {
                    let mut bytes = [0u8; 4];
                    bytes.copy_from_slice(&chunk[i * 4..i * 4 + 4]);
                    f32::from_ne_bytes(bytes)
                };
                Vec3::new(component(0), component(1), component(2))
            })
            .collect();
        let count = vertices.len() as u32;

        Ok(match mode {
            CookMode::Convex => CookedGeometry::Convex(ConvexHull {
                vertices,
                indices: (0..count).collect(),
                polygons: vec![HullPolygon {
                    index_base: 0,
                    vertex_count: count,
                }],
            }),
            CookMode::Triangle => CookedGeometry::Triangle(TriangleGeometry {
                vertices,
                triangles: (0..count / 3).map(|t| [t * 3, t * 3 + 1, t * 3 + 2]).collect(),
            }),
        })
    }
}

#[test]
fn test_obj_to_shapes_and_back() {
    let dir = tempfile::tempdir().unwrap();
    let obj_path = dir.path().join("props.obj");
    std::fs::write(
        &obj_path,
        "o floor\n\
         v -1 0 -1\n\
         v 1 0 -1\n\
         v 1 0 1\n\
         v -1 0 1\n\
         f 1 2 3\n\
         f 1 3 4\n\
         o ramp\n\
         v 0 0 0\n\
         v 2 0 0\n\
         v 2 1 0\n\
         f 5 6 7\n",
    )
    .unwrap();

    let mesh = Arc::new(load_source_mesh(&obj_path).unwrap());
    assert_eq!(mesh.submeshes.len(), 2);

    let cache_dir = dir.path().join("cache");
    let cooker = MeshCooker::new(
        MeshCache::new(CacheConfig::new(cache_dir)),
        Box::new(PassthroughCooker),
    );
    let collider = MeshCollider::convex(mesh.clone());

    let fresh = cooker.cook(&collider, Vec3::ONE, false).unwrap();
    assert_eq!(fresh.len(), 2);
    match &fresh[0].geometry {
        CookedGeometry::Convex(hull) => assert_eq!(hull.vertices.len(), 4),
        CookedGeometry::Triangle(_) => panic!("expected a convex hull"),
    }

    let cached = cooker.cook(&collider, Vec3::ONE, false).unwrap();
    assert_eq!(fresh, cached);

    // And the debug geometry matches the reconstructed hulls: one mesh
    // per polygon, one polygon per submesh here
    let mut collider = collider;
    collider.attach_shapes(cached);
    build_debug_meshes(&mut collider);
    assert_eq!(collider.processed_meshes.len(), 2);
    assert_eq!(collider.processed_meshes[0].vertices.len(), 4);
    assert_eq!(collider.processed_meshes[0].indices.len(), 2);
}
