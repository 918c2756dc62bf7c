pub mod object;
pub mod scene;

// Re-export main types for convenience
pub use object::{MeshId, ObjectId, SceneMesh, SceneNode, SceneObject};
pub use scene::Scene;
