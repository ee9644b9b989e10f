//! Minimal scene store used by the hosts.
//!
//! Controls hold an [`ObjectId`] rather than a borrow and reach the target
//! through [`TransformStore`] on every frame, so a despawned object simply
//! stops being moved.

use crate::transform::Transform;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObjectId(usize);

#[derive(Clone, Debug)]
pub struct SceneObject {
    pub name: String,
    pub tag: Option<String>,
    pub transform: Transform,
}

/// Access to mutable transforms by handle.
pub trait TransformStore {
    fn transform_mut(&mut self, id: ObjectId) -> Option<&mut Transform>;
}

#[derive(Clone, Debug, Default)]
pub struct Scene {
    objects: Vec<Option<SceneObject>>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, name: &str, tag: Option<&str>, transform: Transform) -> ObjectId {
        let id = ObjectId(self.objects.len());
        self.objects.push(Some(SceneObject {
            name: name.to_string(),
            tag: tag.map(str::to_string),
            transform,
        }));
        id
    }

    pub fn despawn(&mut self, id: ObjectId) -> Option<SceneObject> {
        self.objects.get_mut(id.0).and_then(Option::take)
    }

    pub fn get(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.get(id.0).and_then(Option::as_ref)
    }

    pub fn transform(&self, id: ObjectId) -> Option<&Transform> {
        self.get(id).map(|o| &o.transform)
    }

    /// First live object carrying `tag`, in spawn order.
    pub fn find_with_tag(&self, tag: &str) -> Option<ObjectId> {
        self.objects.iter().enumerate().find_map(|(i, o)| match o {
            Some(obj) if obj.tag.as_deref() == Some(tag) => Some(ObjectId(i)),
            _ => None,
        })
    }

    pub fn len(&self) -> usize {
        self.objects.iter().filter(|o| o.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TransformStore for Scene {
    fn transform_mut(&mut self, id: ObjectId) -> Option<&mut Transform> {
        self.objects
            .get_mut(id.0)
            .and_then(Option::as_mut)
            .map(|o| &mut o.transform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_with_tag_returns_first_match() {
        let mut scene = Scene::new();
        scene.spawn("ground", None, Transform::default());
        let a = scene.spawn("hero", Some("Player"), Transform::default());
        scene.spawn("clone", Some("Player"), Transform::default());
        assert_eq!(scene.find_with_tag("Player"), Some(a));
        assert_eq!(scene.find_with_tag("Enemy"), None);
    }

    #[test]
    fn despawned_objects_are_not_found() {
        let mut scene = Scene::new();
        let id = scene.spawn("hero", Some("Player"), Transform::default());
        assert!(scene.despawn(id).is_some());
        assert_eq!(scene.find_with_tag("Player"), None);
        assert!(scene.transform_mut(id).is_none());
        assert!(scene.is_empty());
    }
}
