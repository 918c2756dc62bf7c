use std::{path::PathBuf, time::Duration, time::Instant};

use anyhow::Context;
use glam::Vec2;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, MouseButton, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::Window,
};

use crate::input::{ActivationKind, InputEvent, Key, Modifiers, PointerActivate};
use crate::loader::GltfLoader;
use crate::render::BoundsRenderer;
use crate::render_loop::RenderLoop;
use crate::viewer::Viewer;

const DOUBLE_CLICK_WINDOW: Duration = Duration::from_millis(350);
const DOUBLE_CLICK_RADIUS: f32 = 5.0;

struct App {
    window: Option<Window>,
    viewer: Viewer,
    renderer: BoundsRenderer,
    render_loop: RenderLoop,
    mouse_pos: Vec2,
    ctrl_held: bool,
    last_click: Option<(Instant, Vec2)>,
}

impl App {
    fn from_viewer(viewer: Viewer) -> Self {
        Self {
            window: None,
            viewer,
            renderer: BoundsRenderer::new(),
            render_loop: RenderLoop::default(),
            mouse_pos: Vec2::ZERO,
            ctrl_held: false,
            last_click: None,
        }
    }

    /// Two clicks close together in time and space count as a double
    /// activation; the host window system does not report this for us.
    fn activation_kind(&mut self, now: Instant) -> ActivationKind {
        let kind = match self.last_click {
            Some((at, pos))
                if now.duration_since(at) <= DOUBLE_CLICK_WINDOW
                    && pos.distance(self.mouse_pos) <= DOUBLE_CLICK_RADIUS =>
            {
                ActivationKind::Double
            }
            _ => ActivationKind::Single,
        };
        self.last_click = match kind {
            // A double click consumes the pending click.
            ActivationKind::Double => None,
            ActivationKind::Single => Some((now, self.mouse_pos)),
        };
        kind
    }

    fn dispatch(&mut self, event: InputEvent) {
        self.viewer.handle_event(&self.renderer, event);
    }
}

fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::ShiftLeft | KeyCode::ShiftRight => Some(Key::Shift),
        KeyCode::ControlLeft | KeyCode::ControlRight => Some(Key::Ctrl),
        KeyCode::KeyG => Some(Key::G),
        KeyCode::KeyB => Some(Key::B),
        KeyCode::KeyH => Some(Key::H),
        KeyCode::Digit0 => Some(Key::Digit0),
        KeyCode::Digit1 => Some(Key::Digit1),
        KeyCode::Digit2 => Some(Key::Digit2),
        KeyCode::Digit3 => Some(Key::Digit3),
        KeyCode::Equal | KeyCode::NumpadAdd => Some(Key::Plus),
        KeyCode::Minus | KeyCode::NumpadSubtract => Some(Key::Minus),
        _ => None,
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &winit::event_loop::ActiveEventLoop) {
        let window_attributes = Window::default_attributes().with_title("meshview");
        let window = event_loop.create_window(window_attributes).unwrap();

        let size = window.inner_size();
        self.viewer
            .set_resolution(Vec2::new(size.width as f32, size.height as f32));

        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &winit::event_loop::ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                self.viewer
                    .set_resolution(Vec2::new(new_size.width as f32, new_size.height as f32));
            }
            WindowEvent::RedrawRequested => {
                self.viewer.tick(&mut self.render_loop, &mut self.renderer);
                event_loop.set_control_flow(ControlFlow::WaitUntil(
                    self.render_loop.next_deadline(),
                ));
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.mouse_pos = Vec2::new(position.x as f32, position.y as f32);
            }
            WindowEvent::ModifiersChanged(modifiers) => {
                self.ctrl_held = modifiers.state().control_key();
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                let kind = self.activation_kind(Instant::now());
                let pointer = PointerActivate {
                    position: self.mouse_pos,
                    modifiers: Modifiers {
                        focus: self.ctrl_held,
                    },
                    kind,
                };
                self.dispatch(InputEvent::Pointer(pointer));
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    if let Some(key) = map_key(code) {
                        let input = match event.state {
                            ElementState::Pressed => InputEvent::KeyDown(key),
                            ElementState::Released => InputEvent::KeyUp(key),
                        };
                        self.dispatch(input);
                    }
                }
            }
            _ => (),
        }
    }

    fn about_to_wait(&mut self, event_loop: &winit::event_loop::ActiveEventLoop) {
        if self.render_loop.is_due(Instant::now()) {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        } else {
            event_loop.set_control_flow(ControlFlow::WaitUntil(self.render_loop.next_deadline()));
        }
    }
}

pub fn run(scene_path: Option<PathBuf>) -> anyhow::Result<()> {
    let event_loop = EventLoop::new().context("Failed to create event loop")?;

    let mut viewer = Viewer::new();
    if let Some(path) = scene_path {
        let bytes = std::fs::read(&path)
            .with_context(|| format!("Failed to read scene file {}", path.display()))?;
        let name = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("scene")
            .to_string();
        viewer
            .load_object(&GltfLoader, &name, &path.to_string_lossy(), &bytes)
            .with_context(|| format!("Failed to load {}", path.display()))?;
    }

    let mut app = App::from_viewer(viewer);
    event_loop.run_app(&mut app)?;

    Ok(())
}
