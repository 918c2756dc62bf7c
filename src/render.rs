use crate::camera::Camera;
use crate::math::Ray;
use crate::scene_graph::{MeshId, Scene};

/// One ray intersection, nearest first in the renderer's output.
#[derive(Debug, Clone, Copy)]
pub struct Hit {
    pub mesh: MeshId,
    pub distance: f32,
}

/// The rendering collaborator. Both operations are synchronous and
/// non-failing; `cast_ray` returns an empty list when nothing intersects.
/// The renderer, not the caller, defines the distance ordering of hits.
pub trait Renderer {
    fn cast_ray(&self, scene: &Scene, ray: &Ray, candidates: &[MeshId]) -> Vec<Hit>;

    fn draw_frame(&mut self, scene: &Scene, camera: &Camera);
}

/// Headless renderer: picks against mesh bounding boxes and logs frames
/// instead of drawing them. Enough to run the binary without a GPU backend
/// and to drive the interaction core in tests.
pub struct BoundsRenderer {
    frames: u64,
}

impl BoundsRenderer {
    pub fn new() -> Self {
        Self { frames: 0 }
    }

    #[allow(dead_code)]
    pub fn frames_drawn(&self) -> u64 {
        self.frames
    }
}

impl Renderer for BoundsRenderer {
    fn cast_ray(&self, scene: &Scene, ray: &Ray, candidates: &[MeshId]) -> Vec<Hit> {
        let mut hits: Vec<Hit> = candidates
            .iter()
            .filter_map(|&mesh_id| {
                let mesh = scene.get_mesh(mesh_id)?;
                let distance = mesh.world_bounds().intersect_ray(ray)?;
                Some(Hit {
                    mesh: mesh_id,
                    distance,
                })
            })
            .collect();

        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }

    fn draw_frame(&mut self, scene: &Scene, camera: &Camera) {
        self.frames += 1;
        log::trace!(
            "frame {}: {} objects, {} meshes, eye {:?} target {:?}",
            self.frames,
            scene.objects.len(),
            scene.meshes.len(),
            camera.eye,
            camera.target
        );
    }
}

/// Test double: replays a scripted hit list regardless of the ray.
#[cfg(test)]
pub struct ScriptedRenderer {
    pub hits: Vec<Hit>,
    pub frames: u64,
}

#[cfg(test)]
impl ScriptedRenderer {
    pub fn hitting(mesh: MeshId) -> Self {
        Self {
            hits: vec![Hit {
                mesh,
                distance: 1.0,
            }],
            frames: 0,
        }
    }

    pub fn missing() -> Self {
        Self {
            hits: Vec::new(),
            frames: 0,
        }
    }
}

#[cfg(test)]
impl Renderer for ScriptedRenderer {
    fn cast_ray(&self, _scene: &Scene, _ray: &Ray, _candidates: &[MeshId]) -> Vec<Hit> {
        self.hits.clone()
    }

    fn draw_frame(&mut self, _scene: &Scene, _camera: &Camera) {
        self.frames += 1;
    }
}
