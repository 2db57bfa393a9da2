//! # Scene Management
//!
//! A [`Scene`] owns an ordered list of [`SceneObject`]s; insertion order is
//! the display/list order. Each object pairs a shared mesh handle with a
//! placement (position, per-axis rotation in degrees, non-uniform scale)
//! and visibility/selection flags.
//!
//! ## Mesh ownership
//!
//! Objects hold their mesh as [`SharedMesh`] (`Rc<RefCell<Mesh>>`).
//! Duplicating an object is a shallow copy: the duplicate shares the same
//! mesh, so editing the geometry through either handle affects both. Callers
//! that want diverging geometry use [`SceneObject::duplicate_deep`], which
//! clones the underlying mesh into a fresh handle.
//!
//! The scene's selected subset is derived from per-object `selected` flags
//! rather than stored separately, so removing an object can never leave a
//! dangling selection entry behind.

pub mod object;
pub mod scene;

pub use object::{share_mesh, SceneObject, SharedMesh};
pub use scene::Scene;
