use glam::Vec3;
use thiserror::Error;

use crate::math::Aabb;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("malformed scene file: {0}")]
    Malformed(#[from] gltf::Error),
    #[error("scene file contains no scenes")]
    NoScene,
    #[error("mesh '{0}' has no vertex positions")]
    MissingPositions(String),
}

/// One mesh group of a loader result, with its metadata precomputed: the
/// interaction core never touches vertex data.
pub struct LoadedMesh {
    pub name: String,
    pub geometric_center: Vec3,
    pub bounds: Aabb,
    /// Initial offset from the object origin.
    pub position: Vec3,
}

/// A fully decorated hierarchy, ready for insertion into the scene.
pub struct LoadedObject {
    pub name: String,
    pub file_path: String,
    pub bounds: Aabb,
    pub meshes: Vec<LoadedMesh>,
}

/// The import collaborator. Either returns a complete object or fails with
/// no observable effect.
pub trait Loader {
    fn load(&self, name: &str, file_path: &str, bytes: &[u8]) -> Result<LoadedObject, ParseError>;
}

/// glTF-backed loader. Walks the default scene's node tree and turns every
/// node with a mesh into one [`LoadedMesh`].
pub struct GltfLoader;

impl Loader for GltfLoader {
    fn load(&self, name: &str, file_path: &str, bytes: &[u8]) -> Result<LoadedObject, ParseError> {
        let (document, buffers, _images) = gltf::import_slice(bytes)?;
        let scene = document
            .default_scene()
            .or_else(|| document.scenes().next())
            .ok_or(ParseError::NoScene)?;

        let mut meshes = Vec::new();
        for node in scene.nodes() {
            collect_meshes(&node, &buffers, &mut meshes)?;
        }

        let bounds = meshes
            .iter()
            .map(|mesh| mesh.bounds.translated(mesh.position))
            .reduce(|acc, bounds| acc.union(&bounds))
            .unwrap_or(Aabb::at_point(Vec3::ZERO));

        log::info!(
            "loaded object '{}' from {}: {} meshes",
            name,
            file_path,
            meshes.len()
        );

        Ok(LoadedObject {
            name: name.to_string(),
            file_path: file_path.to_string(),
            bounds,
            meshes,
        })
    }
}

fn collect_meshes(
    node: &gltf::Node,
    buffers: &[gltf::buffer::Data],
    out: &mut Vec<LoadedMesh>,
) -> Result<(), ParseError> {
    if let Some(mesh) = node.mesh() {
        let mesh_name = mesh
            .name()
            .or_else(|| node.name())
            .unwrap_or("Unnamed")
            .to_string();

        let (translation, _rotation, _scale) = node.transform().decomposed();

        let mut sum = Vec3::ZERO;
        let mut count = 0usize;
        let mut bounds: Option<Aabb> = None;

        for primitive in mesh.primitives() {
            let reader = primitive.reader(|buffer| Some(&buffers[buffer.index()]));
            let positions = reader
                .read_positions()
                .ok_or_else(|| ParseError::MissingPositions(mesh_name.clone()))?;

            for position in positions {
                let point = Vec3::from(position);
                sum += point;
                count += 1;
                bounds = Some(match bounds {
                    None => Aabb::at_point(point),
                    Some(acc) => acc.expand_to_point(point),
                });
            }
        }

        let (bounds, geometric_center) = match (bounds, count) {
            (Some(bounds), count) if count > 0 => (bounds, sum / count as f32),
            _ => return Err(ParseError::MissingPositions(mesh_name)),
        };

        out.push(LoadedMesh {
            name: mesh_name,
            geometric_center,
            bounds,
            position: Vec3::from(translation),
        });
    }

    for child in node.children() {
        collect_meshes(&child, buffers, out)?;
    }

    Ok(())
}
