use glam::{Mat4, Vec2, Vec3};

use crate::math::Ray;

const FOV_Y_RADIANS: f32 = 0.7853982; // 45 degrees
const Z_NEAR: f32 = 0.1;
const Z_FAR: f32 = 100.0;

/// Orbit-style look-at camera. `target` doubles as the orbit pivot that
/// double-click selection re-aims.
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
}

impl Camera {
    pub fn get_vp_matrix(&self, resolution: Vec2) -> Mat4 {
        let view = Mat4::look_at_lh(self.eye, self.target, self.up);
        let projection =
            Mat4::perspective_lh(FOV_Y_RADIANS, resolution.x / resolution.y, Z_NEAR, Z_FAR);
        projection * view
    }

    /// Unprojects a window-pixel position into a world-space pick ray.
    pub fn screen_ray(&self, screen: Vec2, resolution: Vec2) -> Ray {
        let ndc = Vec2::new(
            (screen.x / resolution.x) * 2.0 - 1.0,
            1.0 - (screen.y / resolution.y) * 2.0,
        );

        let inverse_vp = self.get_vp_matrix(resolution).inverse();
        let near = inverse_vp.project_point3(Vec3::new(ndc.x, ndc.y, 0.0));
        let far = inverse_vp.project_point3(Vec3::new(ndc.x, ndc.y, 1.0));

        Ray::new(near, (far - near).normalize())
    }

    /// Re-aims the orbit target, the double-click "focus in" effect.
    pub fn refocus(&mut self, target: Vec3) {
        self.target = target;
    }
}
