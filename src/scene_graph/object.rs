use glam::Vec3;
use id_arena::Id;

use crate::math::Aabb;
use crate::scene_graph::scene::Scene;

pub type ObjectId = Id<SceneObject>;
pub type MeshId = Id<SceneMesh>;

/// A child of a [`SceneObject`]. Making the variant explicit keeps child
/// traversal exhaustive: code that walks children has to say what it does
/// with nested objects instead of silently skipping non-mesh nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneNode {
    Mesh(MeshId),
    Object(ObjectId),
}

/// Root node of one loaded mesh hierarchy.
pub struct SceneObject {
    pub name: String,
    pub file_path: String,
    /// Number of mesh children. Cached at insertion; the hierarchy does not
    /// change after load.
    pub mesh_count: usize,
    pub bounds: Aabb,
    /// Bounding-box decoration toggle. Geometry lives in the render layer.
    pub bounds_visible: bool,
    pub children: Vec<SceneNode>,
}

impl SceneObject {
    pub fn mesh_children(&self) -> impl Iterator<Item = MeshId> + '_ {
        self.children.iter().filter_map(|child| match child {
            SceneNode::Mesh(mesh_id) => Some(*mesh_id),
            SceneNode::Object(_) => None,
        })
    }
}

/// A mesh group within a [`SceneObject`]. Owned by exactly one parent.
pub struct SceneMesh {
    pub name: String,
    pub parent_id: ObjectId,
    /// Precomputed centroid, the gathering point for the explode gesture.
    /// Read-only after load.
    pub geometric_center: Vec3,
    pub bounds: Aabb,
    pub bounds_visible: bool,
    /// Current offset from the parent object.
    pub position: Vec3,
    /// Populated only while the parent object is exploded.
    pub saved_position: Option<Vec3>,
    pub color: Vec3,
}

impl SceneMesh {
    #[allow(dead_code)]
    pub fn parent<'a>(&self, scene: &'a Scene) -> Option<&'a SceneObject> {
        scene.get_object(self.parent_id)
    }

    /// World-space bounds at the mesh's current offset.
    pub fn world_bounds(&self) -> Aabb {
        self.bounds.translated(self.position)
    }
}
