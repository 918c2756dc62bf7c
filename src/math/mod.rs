pub mod bounds;

pub use bounds::Aabb;

use glam::Vec3;

/// A ray in world space. `direction` is expected to be normalized by the
/// caller; the intersection helpers do not renormalize.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    #[allow(dead_code)]
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}
