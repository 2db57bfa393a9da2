use std::cell::RefCell;
use std::rc::Rc;

use cgmath::{ElementWise, Vector3};

use crate::model::Mesh;

/// Shared, single-threaded handle to a mesh.
///
/// Several scene objects may view the same geometry; `Rc<RefCell<_>>` makes
/// the sharing and the single-threaded access model explicit.
pub type SharedMesh = Rc<RefCell<Mesh>>;

/// Wrap a mesh in a fresh shared handle.
pub fn share_mesh(mesh: Mesh) -> SharedMesh {
    Rc::new(RefCell::new(mesh))
}

/// One entry in a scene: a mesh with a placement in world space.
///
/// Rotation is stored in degrees per axis; scale is non-uniform and
/// multiplicative. Placement mutators come in relative (`move_by`,
/// `rotate_by`, `scale_by`) and absolute (`set_*`) flavors.
#[derive(Debug, Clone)]
pub struct SceneObject {
    mesh: SharedMesh,
    pub name: String,
    position: Vector3<f32>,
    rotation: Vector3<f32>,
    scale: Vector3<f32>,
    pub visible: bool,
    pub selected: bool,
}

impl SceneObject {
    pub fn new(mesh: SharedMesh, name: impl Into<String>) -> Self {
        Self {
            mesh,
            name: name.into(),
            position: Vector3::new(0.0, 0.0, 0.0),
            rotation: Vector3::new(0.0, 0.0, 0.0),
            scale: Vector3::new(1.0, 1.0, 1.0),
            visible: true,
            selected: false,
        }
    }

    /// Create an object with an explicit placement.
    pub fn with_placement(
        mesh: SharedMesh,
        name: impl Into<String>,
        position: Vector3<f32>,
        rotation: Vector3<f32>,
        scale: Vector3<f32>,
    ) -> Self {
        Self {
            mesh,
            name: name.into(),
            position,
            rotation,
            scale,
            visible: true,
            selected: false,
        }
    }

    /// The shared mesh handle backing this object.
    pub fn mesh(&self) -> &SharedMesh {
        &self.mesh
    }

    pub fn set_mesh(&mut self, mesh: SharedMesh) {
        self.mesh = mesh;
    }

    pub fn position(&self) -> Vector3<f32> {
        self.position
    }

    pub fn rotation(&self) -> Vector3<f32> {
        self.rotation
    }

    pub fn scale(&self) -> Vector3<f32> {
        self.scale
    }

    pub fn set_position(&mut self, position: Vector3<f32>) {
        self.position = position;
    }

    pub fn set_rotation(&mut self, rotation: Vector3<f32>) {
        self.rotation = rotation;
    }

    pub fn set_scale(&mut self, scale: Vector3<f32>) {
        self.scale = scale;
    }

    /// Translate relative to the current position.
    pub fn move_by(&mut self, delta: Vector3<f32>) {
        self.position += delta;
    }

    /// Rotate relative to the current rotation, in degrees per axis.
    pub fn rotate_by(&mut self, delta: Vector3<f32>) {
        self.rotation += delta;
    }

    /// Scale relative to the current scale, componentwise.
    pub fn scale_by(&mut self, factor: Vector3<f32>) {
        self.scale.mul_assign_element_wise(factor);
    }

    pub fn reset_transform(&mut self) {
        self.position = Vector3::new(0.0, 0.0, 0.0);
        self.rotation = Vector3::new(0.0, 0.0, 0.0);
        self.scale = Vector3::new(1.0, 1.0, 1.0);
    }

    /// Shallow duplicate: shares the same mesh handle, copies the placement
    /// and visibility, and suffixes the name. The copy starts unselected.
    pub fn duplicate(&self) -> Self {
        Self {
            mesh: Rc::clone(&self.mesh),
            name: format!("{} Copy", self.name),
            position: self.position,
            rotation: self.rotation,
            scale: self.scale,
            visible: self.visible,
            selected: false,
        }
    }

    /// Deep duplicate: clones the underlying mesh into a fresh handle so the
    /// copy's geometry can diverge from the original's.
    pub fn duplicate_deep(&self) -> Self {
        let mut copy = self.duplicate();
        copy.mesh = share_mesh(self.mesh.borrow().clone());
        copy
    }

    pub fn vertex_count(&self) -> usize {
        self.mesh.borrow().vertex_count()
    }

    pub fn polygon_count(&self) -> usize {
        self.mesh.borrow().polygon_count()
    }
}
