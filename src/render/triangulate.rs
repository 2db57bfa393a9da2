//! Fan triangulation of n-sided polygons.

use crate::model::Polygon;

/// Decompose an n-vertex polygon into `n - 2` triangles fanning out from
/// vertex 0, carrying texture and normal indices along when present.
///
/// A triangle yields a single equivalent triangle; anything with fewer than
/// 3 vertices yields nothing. Fan decomposition is not guaranteed to be
/// visually correct for non-convex polygons.
pub fn triangulate(polygon: &Polygon) -> Vec<Polygon> {
    let vertices = polygon.vertex_indices();
    if vertices.len() < 3 {
        return Vec::new();
    }
    if vertices.len() == 3 {
        return vec![polygon.clone()];
    }

    let textures = polygon.texture_indices();
    let normals = polygon.normal_indices();

    let mut triangles = Vec::with_capacity(vertices.len() - 2);
    for i in 1..vertices.len() - 1 {
        let corner_vertices = vec![vertices[0], vertices[i], vertices[i + 1]];
        let corner_textures = if polygon.is_textured() {
            vec![textures[0], textures[i], textures[i + 1]]
        } else {
            Vec::new()
        };
        let corner_normals = if polygon.has_normals() {
            vec![normals[0], normals[i], normals[i + 1]]
        } else {
            Vec::new()
        };
        triangles.push(Polygon::from_indices(
            corner_vertices,
            corner_textures,
            corner_normals,
        ));
    }
    triangles
}
