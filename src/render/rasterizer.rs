//! Triangle rasterization onto a [`PixelSurface`] with per-pixel depth
//! resolution at triangle granularity.
//!
//! Filled triangles are depth-tested once, at their screen centroid with
//! their average depth, and painted only if that single test passes. This is
//! deliberately not a scanline z-buffer: overlap between triangles resolves
//! per triangle, which is accurate enough for moderate meshes and keeps the
//! inner loop trivial. Wireframe rendering bypasses the depth test entirely.

use cgmath::{InnerSpace, Vector2, Vector3};
use log::{debug, warn};

use crate::math::normalize_or_zero;
use crate::model::{Mesh, Polygon};
use crate::scene::{Scene, SceneObject};

use super::pipeline::{self, ScreenPoint};
use super::surface::{Color, PixelSurface, Texture};
use super::triangulate::triangulate;
use super::{Camera, DepthBuffer};

/// Independently combinable render flags and shading inputs.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Draw triangle edges only, without fill or depth testing.
    pub wireframe: bool,
    /// Modulate fill color by a flat Lambertian term per triangle.
    pub lighting: bool,
    /// Direction toward the light source, used when `lighting` is set. Need
    /// not be unit length.
    pub light_direction: Vector3<f32>,
    /// Fill color when no texture applies.
    pub base_color: Color,
    /// Edge color for wireframe rendering.
    pub wire_color: Color,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            wireframe: false,
            lighting: false,
            light_direction: Vector3::new(0.0, 0.0, 1.0),
            base_color: [0.75, 0.75, 0.75, 1.0],
            wire_color: [0.1, 0.1, 0.1, 1.0],
        }
    }
}

/// Lambertian cosine term between a face normal and a light direction,
/// clamped to zero for back-facing geometry. Both inputs are normalized
/// here; zero-length inputs shade to zero.
pub fn lambert(normal: Vector3<f32>, light_direction: Vector3<f32>) -> f32 {
    let n = normalize_or_zero(normal);
    let l = normalize_or_zero(light_direction);
    n.dot(l).max(0.0)
}

/// Render every visible object of a scene.
///
/// The depth buffer is cleared first: it is scoped to exactly one frame.
pub fn render_scene(
    surface: &mut dyn PixelSurface,
    depth_buffer: &mut DepthBuffer,
    scene: &Scene,
    camera: Option<&Camera>,
    texture: Option<&dyn Texture>,
    options: &RenderOptions,
) {
    depth_buffer.clear();
    for object in scene.objects() {
        if object.visible {
            render_object(surface, depth_buffer, object, camera, texture, options);
        }
    }
}

/// Render one object's mesh through the full pipeline: placement transform,
/// projection, fan triangulation, then per-triangle painting.
///
/// Degenerate geometry never aborts a frame: triangles referencing indices
/// outside the mesh are skipped (and counted in a log warning), and
/// triangles whose centroid lands off the surface are simply not painted.
pub fn render_object(
    surface: &mut dyn PixelSurface,
    depth_buffer: &mut DepthBuffer,
    object: &SceneObject,
    camera: Option<&Camera>,
    texture: Option<&dyn Texture>,
    options: &RenderOptions,
) {
    let mesh = object.mesh().borrow();
    let mut triangles = 0usize;
    let mut skipped = 0usize;

    for polygon in &mesh.polygons {
        for triangle in triangulate(polygon) {
            triangles += 1;
            if !render_triangle(
                surface,
                depth_buffer,
                &mesh,
                &triangle,
                object,
                camera,
                texture,
                options,
            ) {
                skipped += 1;
            }
        }
    }

    if skipped > 0 {
        warn!(
            "'{}': skipped {skipped} triangle(s) with out-of-range indices",
            object.name
        );
    }
    debug!("'{}': rasterized {} triangle(s)", object.name, triangles - skipped);
}

/// Paint a single triangle. Returns false when the triangle references an
/// index outside the mesh and was skipped.
#[allow(clippy::too_many_arguments)]
fn render_triangle(
    surface: &mut dyn PixelSurface,
    depth_buffer: &mut DepthBuffer,
    mesh: &Mesh,
    triangle: &Polygon,
    object: &SceneObject,
    camera: Option<&Camera>,
    texture: Option<&dyn Texture>,
    options: &RenderOptions,
) -> bool {
    let indices = triangle.vertex_indices();

    let mut world = [Vector3::new(0.0, 0.0, 0.0); 3];
    for (corner, &index) in world.iter_mut().zip(indices) {
        let Some(&vertex) = mesh.vertices.get(index) else {
            return false;
        };
        *corner = pipeline::to_world(vertex, object.position(), object.rotation(), object.scale());
    }

    let width = surface.width();
    let height = surface.height();
    let screen: [ScreenPoint; 3] = world.map(|w| match camera {
        Some(camera) => pipeline::to_screen_with_camera(w, camera, width, height),
        None => pipeline::to_screen(w, width, height),
    });

    if options.wireframe {
        for i in 0..3 {
            let a = screen[i];
            let b = screen[(i + 1) % 3];
            draw_line(surface, a, b, options.wire_color);
        }
        return true;
    }

    // Per-triangle depth resolution: one test at the screen centroid with
    // the average depth decides the whole triangle.
    let centroid_x = (screen[0].x + screen[1].x + screen[2].x) / 3.0;
    let centroid_y = (screen[0].y + screen[1].y + screen[2].y) / 3.0;
    let average_depth = (screen[0].depth + screen[1].depth + screen[2].depth) / 3.0;

    if centroid_x < 0.0
        || centroid_y < 0.0
        || centroid_x >= width as f32
        || centroid_y >= height as f32
    {
        return true;
    }
    if !depth_buffer.test_and_set(centroid_x as usize, centroid_y as usize, average_depth) {
        return true;
    }

    let mut color = options.base_color;
    if let Some(texture) = texture {
        if let Some((u, v)) = centroid_uv(mesh, triangle) {
            color = texture.sample(u, v);
        }
    }
    if options.lighting {
        let normal = normalize_or_zero((world[1] - world[0]).cross(world[2] - world[0]));
        let intensity = lambert(normal, options.light_direction);
        for channel in &mut color[..3] {
            *channel *= intensity;
        }
    }

    fill_triangle(surface, &screen, color);
    true
}

/// UV at the triangle's centroid, or None when the triangle is untextured
/// or a texture index no longer resolves.
fn centroid_uv(mesh: &Mesh, triangle: &Polygon) -> Option<(f32, f32)> {
    if !triangle.is_textured() {
        return None;
    }
    let mut sum = Vector2::new(0.0, 0.0);
    for &index in triangle.texture_indices() {
        sum += *mesh.texture_coords.get(index)?;
    }
    let count = triangle.texture_indices().len() as f32;
    Some((sum.x / count, sum.y / count))
}

/// Fill a screen-space triangle by edge-function coverage over its clamped
/// bounding box, sampling at pixel centers.
fn fill_triangle(surface: &mut dyn PixelSurface, screen: &[ScreenPoint; 3], color: Color) {
    let edge = |ax: f32, ay: f32, bx: f32, by: f32, cx: f32, cy: f32| -> f32 {
        (cx - ax) * (by - ay) - (cy - ay) * (bx - ax)
    };

    let min_x = screen[0].x.min(screen[1].x).min(screen[2].x).floor().max(0.0) as usize;
    let min_y = screen[0].y.min(screen[1].y).min(screen[2].y).floor().max(0.0) as usize;
    let max_x = screen[0]
        .x
        .max(screen[1].x)
        .max(screen[2].x)
        .ceil()
        .min(surface.width() as f32 - 1.0);
    let max_y = screen[0]
        .y
        .max(screen[1].y)
        .max(screen[2].y)
        .ceil()
        .min(surface.height() as f32 - 1.0);
    if max_x < 0.0 || max_y < 0.0 {
        return;
    }
    let (max_x, max_y) = (max_x as usize, max_y as usize);

    let area = edge(
        screen[0].x, screen[0].y, screen[1].x, screen[1].y, screen[2].x, screen[2].y,
    );
    if area.abs() < 1e-6 {
        return;
    }

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let px = x as f32 + 0.5;
            let py = y as f32 + 0.5;
            let w0 = edge(screen[1].x, screen[1].y, screen[2].x, screen[2].y, px, py);
            let w1 = edge(screen[2].x, screen[2].y, screen[0].x, screen[0].y, px, py);
            let w2 = edge(screen[0].x, screen[0].y, screen[1].x, screen[1].y, px, py);
            let inside = (w0 <= 0.0 && w1 <= 0.0 && w2 <= 0.0)
                || (w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0);
            if inside {
                surface.set_pixel(x, y, color);
            }
        }
    }
}

/// Bresenham line between two projected points, clipped per pixel.
fn draw_line(surface: &mut dyn PixelSurface, from: ScreenPoint, to: ScreenPoint, color: Color) {
    let mut x0 = from.x as i32;
    let mut y0 = from.y as i32;
    let x1 = to.x as i32;
    let y1 = to.y as i32;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if x0 >= 0 && y0 >= 0 && (x0 as usize) < surface.width() && (y0 as usize) < surface.height()
        {
            surface.set_pixel(x0 as usize, y0 as usize, color);
        }
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::object::share_mesh;
    use crate::render::surface::Pixmap;

    const RED: Color = [1.0, 0.0, 0.0, 1.0];
    const BLUE: Color = [0.0, 0.0, 1.0, 1.0];
    const BLACK: Color = [0.0, 0.0, 0.0, 1.0];

    /// Triangle in the x/y plane around the origin; projects to a region
    /// safely inside a 100x100 viewport, covering its center pixel.
    fn triangle_mesh() -> Mesh {
        let mut mesh = Mesh::new();
        mesh.vertices.push(Vector3::new(-2.0, -2.0, 0.0));
        mesh.vertices.push(Vector3::new(2.0, -2.0, 0.0));
        mesh.vertices.push(Vector3::new(0.0, 2.0, 0.0));
        mesh.polygons.push(Polygon::triangle(0, 1, 2));
        mesh
    }

    fn object_named(mesh: Mesh, name: &str) -> SceneObject {
        SceneObject::new(share_mesh(mesh), name)
    }

    fn flat_options(base_color: Color) -> RenderOptions {
        RenderOptions {
            base_color,
            ..RenderOptions::default()
        }
    }

    #[test]
    fn test_lambert_clamps_and_normalizes() {
        let normal = Vector3::new(0.0, 0.0, 10.0);
        assert!((lambert(normal, Vector3::new(0.0, 0.0, 3.0)) - 1.0).abs() < 1e-6);
        assert_eq!(lambert(normal, Vector3::new(1.0, 0.0, 0.0)), 0.0);
        assert_eq!(lambert(normal, Vector3::new(0.0, 0.0, -1.0)), 0.0);
        assert_eq!(lambert(Vector3::new(0.0, 0.0, 0.0), normal), 0.0);
    }

    #[test]
    fn test_fill_covers_center_pixel() {
        let mut surface = Pixmap::new(100, 100);
        let mut depth = DepthBuffer::new(100, 100);
        let object = object_named(triangle_mesh(), "tri");

        render_object(&mut surface, &mut depth, &object, None, None, &flat_options(RED));
        assert_eq!(surface.pixel(50, 50), Some(RED));
    }

    #[test]
    fn test_depth_test_keeps_nearer_triangle() {
        let mut surface = Pixmap::new(100, 100);
        let mut depth = DepthBuffer::new(100, 100);

        let near = object_named(triangle_mesh(), "near");
        // Offset along (1, -1, 1) keeps the screen footprint identical while
        // pushing the triangle farther down the view diagonal.
        let mut far = object_named(triangle_mesh(), "far");
        far.set_position(Vector3::new(2.0, -2.0, 2.0));

        render_object(&mut surface, &mut depth, &near, None, None, &flat_options(RED));
        render_object(&mut surface, &mut depth, &far, None, None, &flat_options(BLUE));

        // The farther triangle failed the depth test at the shared centroid.
        assert_eq!(surface.pixel(50, 50), Some(RED));
    }

    #[test]
    fn test_depth_test_is_order_independent() {
        let mut surface = Pixmap::new(100, 100);
        let mut depth = DepthBuffer::new(100, 100);

        let near = object_named(triangle_mesh(), "near");
        let mut far = object_named(triangle_mesh(), "far");
        far.set_position(Vector3::new(2.0, -2.0, 2.0));

        // Far first, then near: near overwrites.
        render_object(&mut surface, &mut depth, &far, None, None, &flat_options(BLUE));
        render_object(&mut surface, &mut depth, &near, None, None, &flat_options(RED));

        assert_eq!(surface.pixel(50, 50), Some(RED));
    }

    #[test]
    fn test_wireframe_paints_edges_not_interior() {
        let mut surface = Pixmap::new(100, 100);
        let mut depth = DepthBuffer::new(100, 100);
        let object = object_named(triangle_mesh(), "tri");
        let options = RenderOptions {
            wireframe: true,
            wire_color: [1.0, 1.0, 1.0, 1.0],
            ..RenderOptions::default()
        };

        render_object(&mut surface, &mut depth, &object, None, None, &options);

        // The apex vertex (0, 2, 0) projects to pixel (50, 48).
        assert_eq!(surface.pixel(50, 48), Some([1.0, 1.0, 1.0, 1.0]));
        // Interior stays untouched.
        assert_eq!(surface.pixel(50, 50), Some(BLACK));
    }

    #[test]
    fn test_lighting_modulates_fill() {
        let mut surface = Pixmap::new(100, 100);
        let mut depth = DepthBuffer::new(100, 100);
        let object = object_named(triangle_mesh(), "tri");

        // Face normal is +z; light from +z gives full intensity.
        let mut options = flat_options([0.5, 0.5, 0.5, 1.0]);
        options.lighting = true;
        options.light_direction = Vector3::new(0.0, 0.0, 1.0);
        render_object(&mut surface, &mut depth, &object, None, None, &options);
        assert_eq!(surface.pixel(50, 50), Some([0.5, 0.5, 0.5, 1.0]));

        // Light perpendicular to the normal shades to black.
        let mut surface = Pixmap::new(100, 100);
        let mut depth = DepthBuffer::new(100, 100);
        options.light_direction = Vector3::new(1.0, 0.0, 0.0);
        render_object(&mut surface, &mut depth, &object, None, None, &options);
        assert_eq!(surface.pixel(50, 50), Some([0.0, 0.0, 0.0, 1.0]));
    }

    struct SolidTexture(Color);

    impl Texture for SolidTexture {
        fn sample(&self, _u: f32, _v: f32) -> Color {
            self.0
        }
    }

    #[test]
    fn test_texture_sampled_at_centroid() {
        let mut mesh = triangle_mesh();
        mesh.texture_coords.push(Vector2::new(0.0, 0.0));
        mesh.texture_coords.push(Vector2::new(1.0, 0.0));
        mesh.texture_coords.push(Vector2::new(0.5, 1.0));
        mesh.polygons[0] = Polygon::from_indices(vec![0, 1, 2], vec![0, 1, 2], vec![]);

        let mut surface = Pixmap::new(100, 100);
        let mut depth = DepthBuffer::new(100, 100);
        let object = object_named(mesh, "tri");
        let texture = SolidTexture([0.0, 1.0, 0.0, 1.0]);

        render_object(
            &mut surface,
            &mut depth,
            &object,
            None,
            Some(&texture),
            &flat_options(RED),
        );
        assert_eq!(surface.pixel(50, 50), Some([0.0, 1.0, 0.0, 1.0]));
    }

    #[test]
    fn test_untextured_polygon_ignores_texture() {
        let mut surface = Pixmap::new(100, 100);
        let mut depth = DepthBuffer::new(100, 100);
        let object = object_named(triangle_mesh(), "tri");
        let texture = SolidTexture([0.0, 1.0, 0.0, 1.0]);

        render_object(
            &mut surface,
            &mut depth,
            &object,
            None,
            Some(&texture),
            &flat_options(RED),
        );
        assert_eq!(surface.pixel(50, 50), Some(RED));
    }

    #[test]
    fn test_out_of_range_indices_are_skipped() {
        let mut mesh = triangle_mesh();
        mesh.polygons.push(Polygon::triangle(0, 1, 99));

        let mut surface = Pixmap::new(100, 100);
        let mut depth = DepthBuffer::new(100, 100);
        let object = object_named(mesh, "broken");

        // Must not panic; the valid triangle still renders.
        render_object(&mut surface, &mut depth, &object, None, None, &flat_options(RED));
        assert_eq!(surface.pixel(50, 50), Some(RED));
    }

    #[test]
    fn test_offscreen_centroid_does_not_abort_frame() {
        let mut mesh = triangle_mesh();
        mesh.polygons.push(Polygon::triangle(0, 1, 2));

        let mut surface = Pixmap::new(100, 100);
        let mut depth = DepthBuffer::new(100, 100);
        let mut object = object_named(mesh, "offscreen");
        object.set_position(Vector3::new(0.0, 500.0, 0.0));

        render_object(&mut surface, &mut depth, &object, None, None, &flat_options(RED));
        assert_eq!(surface.pixel(50, 50), Some(BLACK));
    }

    #[test]
    fn test_render_scene_skips_invisible_and_clears_depth() {
        let mut scene = Scene::new();
        let mut hidden = object_named(triangle_mesh(), "hidden");
        hidden.visible = false;
        scene.add_object(hidden);
        scene.add_object(object_named(triangle_mesh(), "shown"));

        let mut surface = Pixmap::new(100, 100);
        let mut depth = DepthBuffer::new(100, 100);
        // Poison the depth buffer; render_scene must clear it first.
        depth.test_and_set(50, 50, -1000.0);

        render_scene(&mut surface, &mut depth, &scene, None, None, &flat_options(BLUE));
        assert_eq!(surface.pixel(50, 50), Some(BLUE));
    }
}
