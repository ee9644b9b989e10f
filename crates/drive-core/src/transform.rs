//! Rigid transform of a scene object.
//!
//! Forward is local `+Z` and up is world `+Y`. A positive yaw turns `+Z`
//! toward `+X`, which reads as clockwise when the scene is viewed from above
//! with `+Z` pointing up the screen.

use crate::constants::{LOCAL_FORWARD, WORLD_UP};
use glam::{Quat, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

impl Transform {
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Local forward axis expressed in world space.
    pub fn forward(&self) -> Vec3 {
        self.rotation * LOCAL_FORWARD
    }

    /// Move by `offset` given in the object's own axes.
    pub fn translate_local(&mut self, offset: Vec3) {
        self.position += self.rotation * offset;
    }

    /// Rotate about a world-space axis by `degrees`.
    pub fn rotate_world(&mut self, axis: Vec3, degrees: f32) {
        let q = Quat::from_axis_angle(axis.normalize_or_zero(), degrees.to_radians());
        self.rotation = (q * self.rotation).normalize();
    }

    /// Heading around world up in degrees, in (-180, 180].
    pub fn yaw_degrees(&self) -> f32 {
        let f = self.forward();
        let flat = Vec3::new(f.x, 0.0, f.z);
        if flat.length_squared() < 1e-12 {
            return 0.0;
        }
        f.x.atan2(f.z).to_degrees()
    }

    pub fn up(&self) -> Vec3 {
        self.rotation * WORLD_UP
    }
}
