use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// The component's position in the reference space of the tracking source.
///
/// The grabbing system only ever writes `translation`: orientation and scale belong to whoever
/// owns the scene.
#[derive(Clone, PartialEq, Debug, Copy, Deserialize, Serialize)]
pub struct LocalTransform {
    /// The translation of the entity
    pub translation: Vec3,
    /// The rotation of the entity
    pub rotation: Quat,
    /// The non-uniform scale of the entity
    pub scale: Vec3,
}

impl Default for LocalTransform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl LocalTransform {
    /// Create a transform at `translation` with no rotation or scale
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Default::default()
        }
    }
}
