use super::SceneObject;

/// Ordered collection of scene objects plus the selected subset.
///
/// Selection lives on the objects themselves as a flag; the selected subset
/// is derived on demand, so it is always a subset of the scene's own objects
/// and removal cascades synchronously.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    objects: Vec<SceneObject>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_object(&mut self, object: SceneObject) {
        self.objects.push(object);
    }

    /// Remove an object by index, returning it. Selection state travels with
    /// the object, so no separate cleanup is needed.
    pub fn remove_object(&mut self, index: usize) -> Option<SceneObject> {
        if index < self.objects.len() {
            Some(self.objects.remove(index))
        } else {
            None
        }
    }

    /// Remove every selected object.
    pub fn remove_selected_objects(&mut self) {
        self.objects.retain(|object| !object.selected);
    }

    pub fn object(&self, index: usize) -> Option<&SceneObject> {
        self.objects.get(index)
    }

    pub fn object_mut(&mut self, index: usize) -> Option<&mut SceneObject> {
        self.objects.get_mut(index)
    }

    pub fn object_by_name(&self, name: &str) -> Option<&SceneObject> {
        self.objects.iter().find(|object| object.name == name)
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn objects_mut(&mut self) -> &mut [SceneObject] {
        &mut self.objects
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Select an object by index. Non-additive selection replaces the
    /// current selection; out-of-range indices only clear in that case and
    /// are otherwise ignored.
    pub fn select_object(&mut self, index: usize, additive: bool) {
        if !additive {
            self.clear_selection();
        }
        if let Some(object) = self.objects.get_mut(index) {
            object.selected = true;
        }
    }

    pub fn deselect_object(&mut self, index: usize) {
        if let Some(object) = self.objects.get_mut(index) {
            object.selected = false;
        }
    }

    pub fn select_all(&mut self) {
        for object in &mut self.objects {
            object.selected = true;
        }
    }

    pub fn clear_selection(&mut self) {
        for object in &mut self.objects {
            object.selected = false;
        }
    }

    /// Indices of the selected objects, in display order.
    pub fn selected_indices(&self) -> Vec<usize> {
        self.objects
            .iter()
            .enumerate()
            .filter(|(_, object)| object.selected)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn selected_objects(&self) -> impl Iterator<Item = &SceneObject> {
        self.objects.iter().filter(|object| object.selected)
    }

    pub fn selected_count(&self) -> usize {
        self.objects.iter().filter(|object| object.selected).count()
    }

    pub fn has_selection(&self) -> bool {
        self.objects.iter().any(|object| object.selected)
    }

    /// Shallow-duplicate every selected object. The duplicates share their
    /// originals' meshes, keep placement and visibility, get " Copy" names,
    /// are appended to the scene, and replace the previous selection.
    pub fn duplicate_selected(&mut self) {
        if !self.has_selection() {
            return;
        }

        let duplicates: Vec<SceneObject> = self
            .selected_objects()
            .map(|object| object.duplicate())
            .collect();

        self.clear_selection();
        for mut duplicate in duplicates {
            duplicate.selected = true;
            self.objects.push(duplicate);
        }
    }

    pub fn clear(&mut self) {
        self.objects.clear();
    }
}
