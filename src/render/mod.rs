//! # Software Render Pipeline
//!
//! A direct, unoptimized per-triangle rasterizer for moderate mesh sizes:
//! object transform → axonometric projection → fan triangulation →
//! depth-tested shading onto a caller-supplied pixel surface.
//!
//! ## Key Components
//!
//! - [`pipeline`] - local → world → screen vertex transforms
//! - [`triangulate`](triangulate::triangulate) - fan decomposition of n-gons
//! - [`DepthBuffer`] - per-pixel nearest-depth record
//! - [`render_scene`](rasterizer::render_scene) - paints visible objects
//! - [`PixelSurface`] / [`Texture`] - collaborator traits for the raster
//!   target and the UV sampler; [`Pixmap`] is the bundled in-memory surface
//!
//! There is no culling, anti-aliasing or acceleration structure here, and
//! depth for filled triangles is resolved once per triangle at its centroid
//! rather than per pixel.

pub mod camera;
pub mod depth_buffer;
pub mod pipeline;
pub mod rasterizer;
pub mod surface;
pub mod triangulate;

pub use camera::Camera;
pub use depth_buffer::DepthBuffer;
pub use rasterizer::{render_object, render_scene, RenderOptions};
pub use surface::{Color, Pixmap, PixelSurface, Texture};
