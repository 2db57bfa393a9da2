//! Meshview Core
//!
//! An editable 3D mesh viewer core: OBJ interchange parsing with positioned
//! errors, an indexed mesh model supporting safe incremental mutation, and a
//! fixed-function software render pipeline with per-triangle depth testing,
//! flat Lambertian lighting and texture sampling.
//!
//! Data flows text → [`obj::read`] → [`model::Mesh`] → [`scene::SceneObject`]
//! → transform pipeline → triangulation → [`render::rasterizer`] → a
//! caller-supplied pixel surface. Everything runs synchronously on the
//! calling thread; windowing, input handling and image decoding are the
//! caller's business.

pub mod math;
pub mod model;
pub mod obj;
pub mod render;
pub mod scene;

// Re-export main types for convenience
pub use model::{Mesh, Polygon};
pub use obj::ParseError;
pub use render::{Camera, Color, DepthBuffer, Pixmap, PixelSurface, RenderOptions, Texture};
pub use scene::{Scene, SceneObject, SharedMesh};
