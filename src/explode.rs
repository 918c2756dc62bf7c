use crate::gizmo::{GizmoController, GizmoSpace, GizmoTarget};
use crate::scene_graph::{MeshId, Scene};
use crate::selection::SelectionState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum ExplodePhase {
    #[default]
    Assembled,
    Exploded,
}

/// Hold-to-explode gesture: while the modifier is held, the selected
/// object's meshes gather at their precomputed geometric centers; releasing
/// restores the original layout. The phase doubles as the one-shot latch —
/// host key events are not guaranteed to arrive in matched down/up pairs,
/// so every transition is a silent no-op in the wrong state.
pub struct ExplodeGesture {
    phase: ExplodePhase,
}

impl ExplodeGesture {
    pub fn new() -> Self {
        Self {
            phase: ExplodePhase::Assembled,
        }
    }

    #[allow(dead_code)]
    pub fn is_exploded(&self) -> bool {
        self.phase == ExplodePhase::Exploded
    }

    /// Assembled → Exploded. Requires a selection whose object has more
    /// than one mesh; a held key cannot re-fire this while exploded.
    pub fn hold_start(
        &mut self,
        scene: &mut Scene,
        selection: &SelectionState,
        gizmo: &mut GizmoController,
    ) {
        if self.phase == ExplodePhase::Exploded {
            return;
        }
        let Some(selected) = selection.selected() else {
            return;
        };
        let Some(object) = scene.get_object(selected.object) else {
            return;
        };
        // Gathering a single mesh at its own center is meaningless.
        if object.mesh_count <= 1 {
            return;
        }
        let mesh_ids: Vec<MeshId> = object.mesh_children().collect();

        self.phase = ExplodePhase::Exploded;

        gizmo.set_space(GizmoSpace::World);
        gizmo.attach(GizmoTarget::Object(selected.object));

        if let Some(mesh) = scene.get_mesh_mut(selected.mesh) {
            mesh.bounds_visible = false;
        }
        if let Some(object) = scene.get_object_mut(selected.object) {
            object.bounds_visible = true;
        }

        let gathered = mesh_ids.len();
        for mesh_id in mesh_ids {
            if let Some(mesh) = scene.get_mesh_mut(mesh_id) {
                mesh.saved_position = Some(mesh.position);
                mesh.position = mesh.geometric_center;
            }
        }

        log::debug!("exploded object, {} meshes gathered", gathered);
    }

    /// Exploded → Assembled, the temporary-peek exit: every mesh returns to
    /// its saved position and the save slot is cleared.
    pub fn hold_end(
        &mut self,
        scene: &mut Scene,
        selection: &SelectionState,
        gizmo: &mut GizmoController,
    ) {
        if self.phase != ExplodePhase::Exploded {
            return;
        }
        self.phase = ExplodePhase::Assembled;

        let Some(selected) = selection.selected() else {
            return;
        };

        gizmo.set_space(GizmoSpace::Local);
        gizmo.attach(GizmoTarget::Mesh(selected.mesh));

        if let Some(mesh) = scene.get_mesh_mut(selected.mesh) {
            mesh.bounds_visible = true;
        }
        if let Some(object) = scene.get_object_mut(selected.object) {
            object.bounds_visible = false;
        }

        let mesh_ids: Vec<MeshId> = scene
            .get_object(selected.object)
            .map(|object| object.mesh_children().collect())
            .unwrap_or_default();

        for mesh_id in mesh_ids {
            if let Some(mesh) = scene.get_mesh_mut(mesh_id) {
                // A mesh without a saved position is skipped, never a panic.
                if let Some(saved) = mesh.saved_position.take() {
                    mesh.position = saved;
                }
            }
        }

        log::debug!("reassembled object to saved layout");
    }

    /// Exploded → Assembled, the permanent-glue exit: the exploded layout
    /// is kept, the object's bounds are recomputed around it, and the
    /// restore data is dropped. Gizmo attachment and space are deliberately
    /// left alone — this exit is not a variant of `hold_end`.
    pub fn glue(&mut self, scene: &mut Scene, selection: &SelectionState) {
        if self.phase != ExplodePhase::Exploded {
            return;
        }
        self.phase = ExplodePhase::Assembled;

        let Some(selected) = selection.selected() else {
            return;
        };

        if let Some(mesh) = scene.get_mesh_mut(selected.mesh) {
            mesh.bounds_visible = false;
        }

        scene.recompute_object_bounds(selected.object);

        let mesh_ids: Vec<MeshId> = scene
            .get_object(selected.object)
            .map(|object| object.mesh_children().collect())
            .unwrap_or_default();

        for mesh_id in mesh_ids {
            if let Some(mesh) = scene.get_mesh_mut(mesh_id) {
                mesh.saved_position = None;
            }
        }

        log::debug!("glued object at exploded layout");
    }
}
