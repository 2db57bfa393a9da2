//! Vertex transform pipeline: mesh-local space → world space → screen
//! space.
//!
//! World placement applies non-uniform scale, then intrinsic X → Y → Z
//! rotation (degrees, right-handed), then translation. Projection is a fixed
//! axonometric mapping; an optional [`Camera`] contributes only a view
//! offset and a forward axis for depth, never a projection matrix.

use cgmath::{Angle, Deg, ElementWise, InnerSpace, Matrix3, Vector3};

use super::Camera;

/// Horizontal axonometric angle: x/z recede along ±45°.
const AXON_X_ANGLE: Deg<f32> = Deg(45.0);
/// Vertical axonometric angle for the classic isometric-style foreshortening.
const AXON_Y_ANGLE: Deg<f32> = Deg(30.0);

/// A projected vertex: viewport pixel coordinates (top-left origin, Y down)
/// plus a depth value for the depth buffer (smaller = nearer).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
    pub depth: f32,
}

/// Place a mesh-local vertex in world space: componentwise scale, intrinsic
/// rotation about X then Y then Z (degrees per axis), then translation.
pub fn to_world(
    vertex: Vector3<f32>,
    position: Vector3<f32>,
    rotation: Vector3<f32>,
    scale: Vector3<f32>,
) -> Vector3<f32> {
    let scaled = vertex.mul_element_wise(scale);
    let rotated = Matrix3::from_angle_z(Deg(rotation.z))
        * Matrix3::from_angle_y(Deg(rotation.y))
        * Matrix3::from_angle_x(Deg(rotation.x))
        * scaled;
    rotated + position
}

/// Project a world-space point to viewport pixels with the axonometric
/// mapping, recentered on the viewport and with Y inverted for a top-left
/// origin. Depth is the point's component along the viewing diagonal.
pub fn to_screen(world: Vector3<f32>, width: usize, height: usize) -> ScreenPoint {
    project_view(world, width, height)
}

/// Like [`to_screen`], but viewing from a camera: the point is taken
/// relative to the camera position and depth is measured along the camera's
/// forward direction.
pub fn to_screen_with_camera(
    world: Vector3<f32>,
    camera: &Camera,
    width: usize,
    height: usize,
) -> ScreenPoint {
    let view = world - camera.position();
    let mut point = project_view(view, width, height);
    let forward = camera.direction();
    if forward != Vector3::new(0.0, 0.0, 0.0) {
        point.depth = view.dot(forward);
    }
    point
}

fn project_view(view: Vector3<f32>, width: usize, height: usize) -> ScreenPoint {
    let sx = (view.x - view.z) * AXON_X_ANGLE.cos();
    let sy = view.y + (view.x + view.z) * AXON_Y_ANGLE.sin();
    ScreenPoint {
        x: width as f32 / 2.0 + sx,
        y: height as f32 / 2.0 - sy,
        depth: (view.x + view.z) * AXON_X_ANGLE.cos(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn test_world_transform_order() {
        // Scale first, then rotate 90° about Y, then translate.
        let result = to_world(
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(10.0, 0.0, 0.0),
            Vector3::new(0.0, 90.0, 0.0),
            Vector3::new(2.0, 1.0, 1.0),
        );
        // (2,0,0) rotated +90° about Y lands on (0,0,-2).
        assert!((result.x - 10.0).abs() < EPS);
        assert!(result.y.abs() < EPS);
        assert!((result.z + 2.0).abs() < EPS);
    }

    #[test]
    fn test_identity_placement_is_identity() {
        let v = Vector3::new(1.5, -2.0, 0.5);
        let result = to_world(
            v,
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(1.0, 1.0, 1.0),
        );
        assert!((result - v).magnitude() < EPS);
    }

    #[test]
    fn test_origin_projects_to_viewport_center() {
        let point = to_screen(Vector3::new(0.0, 0.0, 0.0), 200, 100);
        assert!((point.x - 100.0).abs() < EPS);
        assert!((point.y - 50.0).abs() < EPS);
        assert!(point.depth.abs() < EPS);
    }

    #[test]
    fn test_screen_y_is_inverted() {
        // +Y in world space goes up, which is a smaller pixel row.
        let up = to_screen(Vector3::new(0.0, 1.0, 0.0), 200, 100);
        let origin = to_screen(Vector3::new(0.0, 0.0, 0.0), 200, 100);
        assert!(up.y < origin.y);
    }

    #[test]
    fn test_depth_grows_along_view_diagonal() {
        let near = to_screen(Vector3::new(0.0, 0.0, 0.0), 100, 100);
        let far = to_screen(Vector3::new(1.0, 0.0, 1.0), 100, 100);
        assert!(far.depth > near.depth);
    }

    #[test]
    fn test_camera_depth_along_forward() {
        // Default camera sits at z=100 looking at the origin, so a point at
        // the origin is 100 units down the forward axis.
        let camera = Camera::default();
        let point = to_screen_with_camera(Vector3::new(0.0, 0.0, 0.0), &camera, 100, 100);
        assert!((point.depth - 100.0).abs() < EPS);
    }
}
