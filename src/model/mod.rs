//! # Mesh Data Model
//!
//! The editable in-memory representation of one polygonal mesh: ordered
//! vertex positions, texture coordinates, normals, and polygons holding
//! parallel index lists into those sequences.
//!
//! The model also owns the vertex and polygon selection sets. Selection is
//! mutated only through explicit select/deselect/clear calls; deleting
//! selected elements renumbers the surviving polygon indices so the mesh
//! stays internally consistent.

pub mod mesh;
pub mod polygon;

pub use mesh::Mesh;
pub use polygon::Polygon;
