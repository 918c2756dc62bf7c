use id_arena::Arena;

use crate::loader::LoadedObject;
use crate::scene_graph::object::{MeshId, ObjectId, SceneMesh, SceneNode, SceneObject};

/// Default mesh color before any highlight is applied.
const BASE_MESH_COLOR: glam::Vec3 = glam::Vec3::new(0.8, 0.8, 0.8);

pub struct Scene {
    pub objects: Arena<SceneObject>,
    pub meshes: Arena<SceneMesh>,
    /// Flattened list of every mesh registered for ray picking, across all
    /// loaded objects.
    selectable: Vec<MeshId>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            objects: Arena::new(),
            meshes: Arena::new(),
            selectable: Vec::new(),
        }
    }

    pub fn get_object(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.get(id)
    }

    pub fn get_object_mut(&mut self, id: ObjectId) -> Option<&mut SceneObject> {
        self.objects.get_mut(id)
    }

    pub fn get_mesh(&self, id: MeshId) -> Option<&SceneMesh> {
        self.meshes.get(id)
    }

    pub fn get_mesh_mut(&mut self, id: MeshId) -> Option<&mut SceneMesh> {
        self.meshes.get_mut(id)
    }

    #[allow(dead_code)]
    pub fn get_object_by_name(&self, name: &str) -> Option<ObjectId> {
        self.objects
            .iter()
            .find(|(_, object)| object.name == name)
            .map(|(id, _)| id)
    }

    pub fn mesh_parent(&self, id: MeshId) -> Option<ObjectId> {
        self.meshes.get(id).map(|mesh| mesh.parent_id)
    }

    pub fn selectable_meshes(&self) -> &[MeshId] {
        &self.selectable
    }

    /// Inserts a fully decorated loader result as a new root object and
    /// registers its meshes for picking. All decoration starts hidden.
    pub fn insert_object(&mut self, loaded: LoadedObject) -> ObjectId {
        let object_id = self.objects.alloc(SceneObject {
            name: loaded.name,
            file_path: loaded.file_path,
            mesh_count: 0,
            bounds: loaded.bounds,
            bounds_visible: false,
            children: Vec::new(),
        });

        let mut children = Vec::with_capacity(loaded.meshes.len());
        for mesh in loaded.meshes {
            let mesh_id = self.meshes.alloc(SceneMesh {
                name: mesh.name,
                parent_id: object_id,
                geometric_center: mesh.geometric_center,
                bounds: mesh.bounds,
                bounds_visible: false,
                position: mesh.position,
                saved_position: None,
                color: BASE_MESH_COLOR,
            });
            children.push(SceneNode::Mesh(mesh_id));
            self.selectable.push(mesh_id);
        }

        let mesh_count = children.len();
        let object = self
            .objects
            .get_mut(object_id)
            .expect("object allocated above");
        object.children = children;
        object.mesh_count = mesh_count;

        object_id
    }

    /// Recomputes an object's bounding volume from the current positions of
    /// its mesh children. Used by the glue exit of the explode gesture, which
    /// freezes the exploded layout in place.
    pub fn recompute_object_bounds(&mut self, object_id: ObjectId) {
        let Some(object) = self.objects.get(object_id) else {
            return;
        };

        let mut bounds: Option<crate::math::Aabb> = None;
        for child in &object.children {
            match child {
                SceneNode::Mesh(mesh_id) => {
                    if let Some(mesh) = self.meshes.get(*mesh_id) {
                        let world = mesh.world_bounds();
                        bounds = Some(match bounds {
                            None => world,
                            Some(acc) => acc.union(&world),
                        });
                    }
                }
                SceneNode::Object(_) => {}
            }
        }

        if let Some(bounds) = bounds {
            if let Some(object) = self.objects.get_mut(object_id) {
                object.bounds = bounds;
            }
        }
    }
}
