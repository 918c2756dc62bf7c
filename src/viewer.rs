use glam::{Vec2, Vec3};

use crate::camera::Camera;
use crate::explode::ExplodeGesture;
use crate::gizmo::{GizmoCommand, GizmoController, GizmoMode, GizmoTarget};
use crate::input::{InputEvent, Key};
use crate::loader::{Loader, ParseError};
use crate::render::Renderer;
use crate::render_loop::RenderLoop;
use crate::scene_graph::{ObjectId, Scene};
use crate::selection::SelectionState;

/// Top-level viewer state: the scene plus every interaction component, and
/// the dispatch table that routes discrete input events to them. All
/// mutation happens synchronously inside `handle_event`; the render tick
/// only reads.
pub struct Viewer {
    pub scene: Scene,
    pub camera: Camera,
    pub selection: SelectionState,
    pub explode: ExplodeGesture,
    pub gizmo: GizmoController,
    resolution: Vec2,
}

impl Viewer {
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            camera: Camera {
                eye: Vec3::new(0.0, 0.1, 2.0),
                target: Vec3::ZERO,
                up: Vec3::Y,
            },
            selection: SelectionState::new(),
            explode: ExplodeGesture::new(),
            gizmo: GizmoController::new(),
            resolution: Vec2::new(1.0, 1.0),
        }
    }

    pub fn set_resolution(&mut self, resolution: Vec2) {
        self.resolution = resolution;
    }

    /// Runs the loader and inserts the result. On failure the scene is left
    /// untouched — insertion only happens after a successful parse. The
    /// gizmo attaches to the fresh object; selection stays as it was until
    /// the first click.
    pub fn load_object(
        &mut self,
        loader: &dyn Loader,
        name: &str,
        file_path: &str,
        bytes: &[u8],
    ) -> Result<ObjectId, ParseError> {
        let loaded = loader.load(name, file_path, bytes)?;
        let object_id = self.scene.insert_object(loaded);
        self.gizmo.attach(GizmoTarget::Object(object_id));
        Ok(object_id)
    }

    pub fn handle_event(&mut self, renderer: &dyn Renderer, event: InputEvent) {
        match event {
            InputEvent::Pointer(pointer) => {
                let ray = self.camera.screen_ray(pointer.position, self.resolution);
                self.selection.select_ray(
                    &mut self.scene,
                    &mut self.gizmo,
                    &mut self.camera,
                    renderer,
                    ray,
                    pointer.modifiers,
                    pointer.kind,
                );
            }
            InputEvent::KeyDown(key) => self.handle_key_down(key),
            InputEvent::KeyUp(key) => self.handle_key_up(key),
        }
    }

    fn handle_key_down(&mut self, key: Key) {
        match key {
            Key::Shift => {
                self.explode
                    .hold_start(&mut self.scene, &self.selection, &mut self.gizmo)
            }
            Key::Digit0 => self.gizmo.apply(GizmoCommand::ToggleSpace),
            Key::Digit1 => self.gizmo.apply(GizmoCommand::SetMode(GizmoMode::Translate)),
            Key::Digit2 => self.gizmo.apply(GizmoCommand::SetMode(GizmoMode::Rotate)),
            Key::Digit3 => self.gizmo.apply(GizmoCommand::SetMode(GizmoMode::Scale)),
            Key::Plus => self.gizmo.apply(GizmoCommand::SizeIncrease),
            Key::Minus => self.gizmo.apply(GizmoCommand::SizeDecrease),
            Key::Ctrl => self.gizmo.apply(GizmoCommand::ToggleSnap),
            Key::H => self.gizmo.apply(GizmoCommand::ToggleVisibility),
            Key::G | Key::B => {}
        }
    }

    fn handle_key_up(&mut self, key: Key) {
        match key {
            Key::Shift => {
                self.explode
                    .hold_end(&mut self.scene, &self.selection, &mut self.gizmo)
            }
            Key::G | Key::B => self.explode.glue(&mut self.scene, &self.selection),
            _ => {}
        }
    }

    pub fn tick(&mut self, render_loop: &mut RenderLoop, renderer: &mut dyn Renderer) {
        render_loop.tick(
            std::time::Instant::now(),
            &mut self.gizmo,
            &self.scene,
            &self.camera,
            renderer,
        );
    }
}
