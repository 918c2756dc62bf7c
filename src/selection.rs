use glam::Vec3;

use crate::camera::Camera;
use crate::gizmo::{GizmoController, GizmoSpace, GizmoTarget};
use crate::input::{ActivationKind, Modifiers};
use crate::math::Ray;
use crate::render::Renderer;
use crate::scene_graph::{MeshId, ObjectId, Scene};

/// Highlight cue applied on focus-modified selection.
const HIGHLIGHT_COLOR: Vec3 = Vec3::new(0.6, 0.6, 0.0);

/// The one legal non-empty selection shape: a mesh together with its exact
/// parent object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub mesh: MeshId,
    pub object: ObjectId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionResult {
    Selected(Selection),
    NoHit,
}

/// Single source of truth for what is selected. Every decoration side effect
/// of a selection change (bounding boxes, gizmo attachment, highlight,
/// camera refocus) runs through [`SelectionState::select_ray`].
pub struct SelectionState {
    current: Option<Selection>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self { current: None }
    }

    pub fn selected(&self) -> Option<Selection> {
        self.current
    }

    /// Casts a pick ray and, on a hit, moves the selection to the nearest
    /// hit mesh. A ray that hits nothing leaves the selection untouched —
    /// clicking empty space never deselects. An empty scene is simply zero
    /// candidates.
    pub fn select_ray(
        &mut self,
        scene: &mut Scene,
        gizmo: &mut GizmoController,
        camera: &mut Camera,
        renderer: &dyn Renderer,
        ray: Ray,
        modifiers: Modifiers,
        kind: ActivationKind,
    ) -> SelectionResult {
        let hits = renderer.cast_ray(scene, &ray, scene.selectable_meshes());

        // First reported hit wins; the renderer owns the distance ordering.
        let Some(hit) = hits.first() else {
            return SelectionResult::NoHit;
        };

        let Some(object_id) = scene.mesh_parent(hit.mesh) else {
            return SelectionResult::NoHit;
        };

        self.hide_decoration(scene);

        let selection = Selection {
            mesh: hit.mesh,
            object: object_id,
        };
        self.current = Some(selection);

        if let Some(mesh) = scene.get_mesh_mut(hit.mesh) {
            mesh.bounds_visible = true;
            if modifiers.focus {
                mesh.color = HIGHLIGHT_COLOR;
            }
        }

        gizmo.attach(GizmoTarget::Mesh(hit.mesh));
        gizmo.set_space(GizmoSpace::Local);

        if kind == ActivationKind::Double {
            if let Some(mesh) = scene.get_mesh(hit.mesh) {
                camera.refocus(mesh.position);
            }
        }

        if let (Some(mesh), Some(object)) = (scene.get_mesh(hit.mesh), scene.get_object(object_id))
        {
            log::info!("selected mesh '{}' of object '{}'", mesh.name, object.name);
        }

        SelectionResult::Selected(selection)
    }

    /// Drops the selection and its decoration. Safe to call redundantly.
    #[allow(dead_code)]
    pub fn clear(&mut self, scene: &mut Scene, gizmo: &mut GizmoController) {
        self.hide_decoration(scene);
        self.current = None;
        gizmo.detach();
    }

    /// Hides the previous selection's bounding boxes. Idempotent when they
    /// are already hidden or the ids have gone stale.
    fn hide_decoration(&self, scene: &mut Scene) {
        if let Some(selection) = self.current {
            if let Some(mesh) = scene.get_mesh_mut(selection.mesh) {
                mesh.bounds_visible = false;
            }
            if let Some(object) = scene.get_object_mut(selection.object) {
                object.bounds_visible = false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::ScriptedRenderer;
    use crate::test_fixtures::{test_camera, tripod_scene};
    use glam::Vec3;

    fn pick_ray() -> Ray {
        Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::Z)
    }

    #[test]
    fn hit_selects_mesh_and_its_parent() {
        let (mut scene, object_id, mesh_ids) = tripod_scene();
        let mut gizmo = GizmoController::new();
        let mut camera = test_camera();
        let mut state = SelectionState::new();
        let renderer = ScriptedRenderer::hitting(mesh_ids[1]);

        let result = state.select_ray(
            &mut scene,
            &mut gizmo,
            &mut camera,
            &renderer,
            pick_ray(),
            Modifiers::default(),
            ActivationKind::Single,
        );

        let selection = state.selected().unwrap();
        assert_eq!(result, SelectionResult::Selected(selection));
        assert_eq!(selection.mesh, mesh_ids[1]);
        assert_eq!(selection.object, object_id);
        assert_eq!(scene.mesh_parent(selection.mesh), Some(selection.object));
    }

    #[test]
    fn no_hit_leaves_selection_unchanged() {
        let (mut scene, _, mesh_ids) = tripod_scene();
        let mut gizmo = GizmoController::new();
        let mut camera = test_camera();
        let mut state = SelectionState::new();

        let hit = ScriptedRenderer::hitting(mesh_ids[0]);
        state.select_ray(
            &mut scene,
            &mut gizmo,
            &mut camera,
            &hit,
            pick_ray(),
            Modifiers::default(),
            ActivationKind::Single,
        );

        let miss = ScriptedRenderer::missing();
        let result = state.select_ray(
            &mut scene,
            &mut gizmo,
            &mut camera,
            &miss,
            pick_ray(),
            Modifiers::default(),
            ActivationKind::Single,
        );

        assert_eq!(result, SelectionResult::NoHit);
        assert_eq!(state.selected().unwrap().mesh, mesh_ids[0]);
        assert!(scene.get_mesh(mesh_ids[0]).unwrap().bounds_visible);
    }

    #[test]
    fn no_hit_on_empty_scene_is_a_noop() {
        let mut scene = Scene::new();
        let mut gizmo = GizmoController::new();
        let mut camera = test_camera();
        let mut state = SelectionState::new();
        let renderer = crate::render::BoundsRenderer::new();

        let result = state.select_ray(
            &mut scene,
            &mut gizmo,
            &mut camera,
            &renderer,
            pick_ray(),
            Modifiers::default(),
            ActivationKind::Single,
        );

        assert_eq!(result, SelectionResult::NoHit);
        assert!(state.selected().is_none());
    }

    #[test]
    fn reselection_moves_the_bounding_box() {
        let (mut scene, _, mesh_ids) = tripod_scene();
        let mut gizmo = GizmoController::new();
        let mut camera = test_camera();
        let mut state = SelectionState::new();

        let first = ScriptedRenderer::hitting(mesh_ids[0]);
        state.select_ray(
            &mut scene,
            &mut gizmo,
            &mut camera,
            &first,
            pick_ray(),
            Modifiers::default(),
            ActivationKind::Single,
        );

        let second = ScriptedRenderer::hitting(mesh_ids[2]);
        state.select_ray(
            &mut scene,
            &mut gizmo,
            &mut camera,
            &second,
            pick_ray(),
            Modifiers::default(),
            ActivationKind::Single,
        );

        assert!(!scene.get_mesh(mesh_ids[0]).unwrap().bounds_visible);
        assert!(scene.get_mesh(mesh_ids[2]).unwrap().bounds_visible);
        assert_eq!(gizmo.target, GizmoTarget::Mesh(mesh_ids[2]));
        assert_eq!(gizmo.config.space, GizmoSpace::Local);
    }

    #[test]
    fn focus_modifier_recolors_the_mesh() {
        let (mut scene, _, mesh_ids) = tripod_scene();
        let mut gizmo = GizmoController::new();
        let mut camera = test_camera();
        let mut state = SelectionState::new();
        let renderer = ScriptedRenderer::hitting(mesh_ids[0]);

        state.select_ray(
            &mut scene,
            &mut gizmo,
            &mut camera,
            &renderer,
            pick_ray(),
            Modifiers { focus: true },
            ActivationKind::Single,
        );

        assert_eq!(scene.get_mesh(mesh_ids[0]).unwrap().color, HIGHLIGHT_COLOR);
    }

    #[test]
    fn double_activation_reaims_the_camera() {
        let (mut scene, _, mesh_ids) = tripod_scene();
        let mut gizmo = GizmoController::new();
        let mut camera = test_camera();
        let mut state = SelectionState::new();
        let renderer = ScriptedRenderer::hitting(mesh_ids[1]);

        let before = camera.target;
        state.select_ray(
            &mut scene,
            &mut gizmo,
            &mut camera,
            &renderer,
            pick_ray(),
            Modifiers::default(),
            ActivationKind::Single,
        );
        assert_eq!(camera.target, before);

        state.select_ray(
            &mut scene,
            &mut gizmo,
            &mut camera,
            &renderer,
            pick_ray(),
            Modifiers::default(),
            ActivationKind::Double,
        );
        let mesh_position = scene.get_mesh(mesh_ids[1]).unwrap().position;
        assert_eq!(camera.target, mesh_position);
    }

    #[test]
    fn clear_is_redundant_safe() {
        let (mut scene, _, mesh_ids) = tripod_scene();
        let mut gizmo = GizmoController::new();
        let mut camera = test_camera();
        let mut state = SelectionState::new();
        let renderer = ScriptedRenderer::hitting(mesh_ids[0]);

        state.select_ray(
            &mut scene,
            &mut gizmo,
            &mut camera,
            &renderer,
            pick_ray(),
            Modifiers::default(),
            ActivationKind::Single,
        );

        state.clear(&mut scene, &mut gizmo);
        state.clear(&mut scene, &mut gizmo);
        assert!(state.selected().is_none());
        assert!(!gizmo.is_attached());
        assert!(!scene.get_mesh(mesh_ids[0]).unwrap().bounds_visible);
    }
}
