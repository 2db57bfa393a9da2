use std::collections::HashSet;

use cgmath::{Vector2, Vector3};

use crate::math::normalize_or_zero;

use super::Polygon;

/// The full geometric dataset for one object: vertex positions, texture
/// coordinates, normals, and polygons indexing into them.
///
/// The mesh also owns the vertex and polygon selection sets used by the
/// editing operations. Selection state never changes implicitly — parsing a
/// file or rendering a frame leaves it untouched.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    pub vertices: Vec<Vector3<f32>>,
    pub texture_coords: Vec<Vector2<f32>>,
    pub normals: Vec<Vector3<f32>>,
    pub polygons: Vec<Polygon>,
    selected_vertices: HashSet<usize>,
    selected_polygons: HashSet<usize>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn polygon_count(&self) -> usize {
        self.polygons.len()
    }

    /// Flat face normal of a polygon: normalized cross product of its first
    /// two edges. Returns the zero vector for degenerate or out-of-range
    /// polygons rather than failing mid-frame.
    pub fn face_normal(&self, polygon: &Polygon) -> Vector3<f32> {
        let indices = polygon.vertex_indices();
        if indices.len() < 3 {
            return Vector3::new(0.0, 0.0, 0.0);
        }
        let (Some(&v0), Some(&v1), Some(&v2)) = (
            self.vertices.get(indices[0]),
            self.vertices.get(indices[1]),
            self.vertices.get(indices[2]),
        ) else {
            return Vector3::new(0.0, 0.0, 0.0);
        };
        normalize_or_zero((v1 - v0).cross(v2 - v0))
    }

    // --- vertex selection ---

    /// Select a vertex by index. Non-additive selection replaces the current
    /// set. Out-of-range indices are ignored without error.
    pub fn select_vertex(&mut self, index: usize, additive: bool) {
        if !additive {
            self.selected_vertices.clear();
        }
        if index < self.vertices.len() {
            self.selected_vertices.insert(index);
        }
    }

    pub fn deselect_vertex(&mut self, index: usize) {
        self.selected_vertices.remove(&index);
    }

    pub fn clear_vertex_selection(&mut self) {
        self.selected_vertices.clear();
    }

    pub fn selected_vertex_indices(&self) -> &HashSet<usize> {
        &self.selected_vertices
    }

    pub fn is_vertex_selected(&self, index: usize) -> bool {
        self.selected_vertices.contains(&index)
    }

    pub fn selected_vertex_count(&self) -> usize {
        self.selected_vertices.len()
    }

    /// Positions of the currently selected vertices, skipping any index that
    /// no longer resolves.
    pub fn selected_vertices(&self) -> Vec<Vector3<f32>> {
        self.selected_vertices
            .iter()
            .filter_map(|&i| self.vertices.get(i).copied())
            .collect()
    }

    // --- polygon selection ---

    /// Select a polygon by index, with the same additive semantics and
    /// out-of-range tolerance as [`select_vertex`](Mesh::select_vertex).
    pub fn select_polygon(&mut self, index: usize, additive: bool) {
        if !additive {
            self.selected_polygons.clear();
        }
        if index < self.polygons.len() {
            self.selected_polygons.insert(index);
        }
    }

    pub fn deselect_polygon(&mut self, index: usize) {
        self.selected_polygons.remove(&index);
    }

    pub fn clear_polygon_selection(&mut self) {
        self.selected_polygons.clear();
    }

    pub fn selected_polygon_indices(&self) -> &HashSet<usize> {
        &self.selected_polygons
    }

    pub fn is_polygon_selected(&self, index: usize) -> bool {
        self.selected_polygons.contains(&index)
    }

    pub fn selected_polygon_count(&self) -> usize {
        self.selected_polygons.len()
    }

    pub fn selected_polygons(&self) -> Vec<&Polygon> {
        self.selected_polygons
            .iter()
            .filter_map(|&i| self.polygons.get(i))
            .collect()
    }

    // --- destructive editing ---

    /// Delete every selected vertex, along with the same-indexed texture
    /// coordinate and normal where one exists, then renumber all polygon
    /// index lists to match the surviving vertex order.
    ///
    /// Polygons that end up referencing an out-of-range vertex or with fewer
    /// than 3 vertices are dropped. The vertex selection set is cleared on
    /// completion whether or not anything was deleted.
    pub fn delete_selected_vertices(&mut self) {
        if self.selected_vertices.is_empty() {
            return;
        }

        let mut deleted: Vec<usize> = self.selected_vertices.iter().copied().collect();
        // Highest index first so earlier removals don't shift later ones.
        deleted.sort_unstable_by(|a, b| b.cmp(a));

        for &index in &deleted {
            if index < self.vertices.len() {
                self.vertices.remove(index);
                if index < self.texture_coords.len() {
                    self.texture_coords.remove(index);
                }
                if index < self.normals.len() {
                    self.normals.remove(index);
                }
            }
        }

        self.renumber_polygons_after_deletion(&deleted);
        self.selected_vertices.clear();
    }

    /// Renumber every polygon index by subtracting the count of deleted
    /// indices numerically below it, then drop polygons left invalid.
    fn renumber_polygons_after_deletion(&mut self, deleted: &[usize]) {
        fn shift_down(indices: &mut [usize], deleted: &[usize]) {
            for index in indices {
                let shift = deleted.iter().filter(|&&d| d < *index).count();
                *index -= shift;
            }
        }

        for polygon in &mut self.polygons {
            shift_down(polygon.vertex_indices_mut(), deleted);
            shift_down(polygon.texture_indices_mut(), deleted);
            shift_down(polygon.normal_indices_mut(), deleted);
        }

        let vertex_count = self.vertices.len();
        self.polygons.retain(|polygon| {
            polygon.vertex_count() >= 3
                && polygon.vertex_indices().iter().all(|&i| i < vertex_count)
        });
    }

    /// Delete every selected polygon by index, highest first. Vertex data is
    /// untouched. The polygon selection set is cleared on completion.
    pub fn delete_selected_polygons(&mut self) {
        if self.selected_polygons.is_empty() {
            return;
        }

        let mut deleted: Vec<usize> = self.selected_polygons.iter().copied().collect();
        deleted.sort_unstable_by(|a, b| b.cmp(a));

        for &index in &deleted {
            if index < self.polygons.len() {
                self.polygons.remove(index);
            }
        }

        self.selected_polygons.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn five_vertex_mesh() -> Mesh {
        let mut mesh = Mesh::new();
        for i in 0..5 {
            mesh.vertices.push(Vector3::new(i as f32, 0.0, 0.0));
        }
        mesh.polygons.push(Polygon::triangle(0, 1, 2));
        mesh
    }

    #[test]
    fn test_select_vertex_replaces_without_additive() {
        let mut mesh = five_vertex_mesh();
        mesh.select_vertex(0, false);
        mesh.select_vertex(1, false);
        assert_eq!(mesh.selected_vertex_count(), 1);
        assert!(mesh.is_vertex_selected(1));
    }

    #[test]
    fn test_select_vertex_additive_is_idempotent() {
        let mut mesh = five_vertex_mesh();
        mesh.select_vertex(2, true);
        mesh.select_vertex(2, true);
        assert_eq!(mesh.selected_vertex_count(), 1);
    }

    #[test]
    fn test_select_out_of_range_is_ignored() {
        let mut mesh = five_vertex_mesh();
        mesh.select_vertex(99, true);
        mesh.select_polygon(99, true);
        assert_eq!(mesh.selected_vertex_count(), 0);
        assert_eq!(mesh.selected_polygon_count(), 0);
    }

    #[test]
    fn test_non_additive_select_out_of_range_still_clears() {
        let mut mesh = five_vertex_mesh();
        mesh.select_vertex(1, false);
        mesh.select_vertex(99, false);
        assert_eq!(mesh.selected_vertex_count(), 0);
    }

    #[test]
    fn test_delete_selected_vertices_renumbers() {
        let mut mesh = five_vertex_mesh();
        mesh.select_vertex(1, false);
        mesh.delete_selected_vertices();

        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.selected_vertex_count(), 0);
        // Index 2 shifted down past the deleted index; indices 0 and 1 kept
        // their numeric values over the surviving vertex order.
        assert_eq!(mesh.polygons[0].vertex_indices(), &[0, 1, 1]);
    }

    #[test]
    fn test_delete_vertices_drops_out_of_range_polygons() {
        let mut mesh = Mesh::new();
        for i in 0..3 {
            mesh.vertices.push(Vector3::new(i as f32, 0.0, 0.0));
        }
        mesh.polygons.push(Polygon::triangle(0, 1, 2));
        mesh.select_vertex(2, false);
        mesh.delete_selected_vertices();

        // The polygon's highest index now exceeds the 2 surviving vertices.
        assert_eq!(mesh.vertex_count(), 2);
        assert_eq!(mesh.polygon_count(), 0);
    }

    #[test]
    fn test_delete_vertices_removes_parallel_attributes() {
        let mut mesh = Mesh::new();
        for i in 0..3 {
            mesh.vertices.push(Vector3::new(i as f32, 0.0, 0.0));
            mesh.texture_coords.push(Vector2::new(i as f32, 0.0));
            mesh.normals.push(Vector3::new(0.0, i as f32, 0.0));
        }
        mesh.select_vertex(1, false);
        mesh.delete_selected_vertices();

        assert_eq!(mesh.vertices.len(), 2);
        assert_eq!(mesh.texture_coords.len(), 2);
        assert_eq!(mesh.normals.len(), 2);
        assert_eq!(mesh.texture_coords[1], Vector2::new(2.0, 0.0));
    }

    #[test]
    fn test_delete_selected_polygons_keeps_vertices() {
        let mut mesh = five_vertex_mesh();
        mesh.polygons.push(Polygon::triangle(1, 2, 3));
        mesh.select_polygon(0, false);
        mesh.delete_selected_polygons();

        assert_eq!(mesh.polygon_count(), 1);
        assert_eq!(mesh.vertex_count(), 5);
        assert_eq!(mesh.selected_polygon_count(), 0);
        assert_eq!(mesh.polygons[0].vertex_indices(), &[1, 2, 3]);
    }

    #[test]
    fn test_face_normal_unit_triangle() {
        let mut mesh = Mesh::new();
        mesh.vertices.push(Vector3::new(0.0, 0.0, 0.0));
        mesh.vertices.push(Vector3::new(1.0, 0.0, 0.0));
        mesh.vertices.push(Vector3::new(0.0, 1.0, 0.0));
        let polygon = Polygon::triangle(0, 1, 2);

        let normal = mesh.face_normal(&polygon);
        assert!((normal.z - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_face_normal_degenerate_is_zero() {
        let mut mesh = Mesh::new();
        for _ in 0..3 {
            mesh.vertices.push(Vector3::new(1.0, 1.0, 1.0));
        }
        let polygon = Polygon::triangle(0, 1, 2);
        assert_eq!(mesh.face_normal(&polygon), Vector3::new(0.0, 0.0, 0.0));
    }
}
