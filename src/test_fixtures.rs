//! Shared scene fixtures for unit tests.

use glam::Vec3;

use crate::camera::Camera;
use crate::loader::{LoadedMesh, LoadedObject};
use crate::math::Aabb;
use crate::scene_graph::{MeshId, ObjectId, Scene};

fn fixture_mesh(name: &str, position: Vec3, center: Vec3) -> LoadedMesh {
    LoadedMesh {
        name: name.to_string(),
        geometric_center: center,
        bounds: Aabb::new(Vec3::splat(-0.1), Vec3::splat(0.1)),
        position,
    }
}

/// Three meshes at the unit axes with a common geometric center of
/// (1/3, 1/3, 1/3).
pub fn tripod_meshes() -> LoadedObject {
    let center = Vec3::splat(1.0 / 3.0);
    LoadedObject {
        name: "tripod".to_string(),
        file_path: "tripod.gltf".to_string(),
        bounds: Aabb::new(Vec3::splat(-1.1), Vec3::splat(1.1)),
        meshes: vec![
            fixture_mesh("leg-x", Vec3::X, center),
            fixture_mesh("leg-y", Vec3::Y, center),
            fixture_mesh("leg-z", Vec3::Z, center),
        ],
    }
}

pub fn tripod_scene() -> (Scene, ObjectId, Vec<MeshId>) {
    let mut scene = Scene::new();
    let object_id = scene.insert_object(tripod_meshes());
    let mesh_ids = scene.selectable_meshes().to_vec();
    (scene, object_id, mesh_ids)
}

pub fn single_mesh_scene() -> (Scene, ObjectId, Vec<MeshId>) {
    let mut scene = Scene::new();
    let object_id = scene.insert_object(LoadedObject {
        name: "pebble".to_string(),
        file_path: "pebble.gltf".to_string(),
        bounds: Aabb::new(Vec3::splat(-0.1), Vec3::splat(0.1)),
        meshes: vec![fixture_mesh("pebble", Vec3::ZERO, Vec3::ZERO)],
    });
    let mesh_ids = scene.selectable_meshes().to_vec();
    (scene, object_id, mesh_ids)
}

pub fn test_camera() -> Camera {
    Camera {
        eye: Vec3::new(0.0, 0.1, 2.0),
        target: Vec3::ZERO,
        up: Vec3::Y,
    }
}
