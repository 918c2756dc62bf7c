use crate::scene_graph::{MeshId, ObjectId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GizmoMode {
    #[default]
    Translate,
    Rotate,
    Scale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GizmoSpace {
    #[default]
    Local,
    World,
}

/// Snap increments. Translation and rotation snap are enabled and disabled
/// together, never independently.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GizmoSnap {
    /// World units.
    pub translation: f32,
    /// Radians.
    pub rotation: f32,
}

impl Default for GizmoSnap {
    fn default() -> Self {
        Self {
            translation: 1.0,
            rotation: 15f32.to_radians(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GizmoTarget {
    #[default]
    Detached,
    Mesh(MeshId),
    Object(ObjectId),
}

/// The full configuration the render tick reads each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GizmoConfig {
    pub mode: GizmoMode,
    pub space: GizmoSpace,
    pub size: f32,
    pub snap: Option<GizmoSnap>,
    pub visible: bool,
}

impl Default for GizmoConfig {
    fn default() -> Self {
        Self {
            mode: GizmoMode::Translate,
            space: GizmoSpace::Local,
            size: 0.6,
            snap: None,
            visible: false,
        }
    }
}

/// Discrete configuration commands. This table is the only way the config
/// changes outside of selection/explode forcing the space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GizmoCommand {
    ToggleSpace,
    SetMode(GizmoMode),
    SizeIncrease,
    SizeDecrease,
    ToggleSnap,
    ToggleVisibility,
}

const SIZE_STEP: f32 = 0.1;
const SIZE_FLOOR: f32 = 0.1;

pub struct GizmoController {
    pub config: GizmoConfig,
    pub target: GizmoTarget,
    /// Size actually drawn this frame; eased toward `config.size` each tick.
    displayed_size: f32,
}

impl GizmoController {
    pub fn new() -> Self {
        let config = GizmoConfig::default();
        Self {
            config,
            target: GizmoTarget::Detached,
            displayed_size: config.size,
        }
    }

    pub fn attach(&mut self, target: GizmoTarget) {
        self.target = target;
    }

    /// Safe to call redundantly.
    pub fn detach(&mut self) {
        self.target = GizmoTarget::Detached;
    }

    pub fn is_attached(&self) -> bool {
        self.target != GizmoTarget::Detached
    }

    pub fn set_space(&mut self, space: GizmoSpace) {
        self.config.space = space;
    }

    #[allow(dead_code)]
    pub fn displayed_size(&self) -> f32 {
        self.displayed_size
    }

    /// Applies one command from the table. No-op while detached.
    pub fn apply(&mut self, command: GizmoCommand) {
        if !self.is_attached() {
            return;
        }

        match command {
            GizmoCommand::ToggleSpace => {
                self.config.space = match self.config.space {
                    GizmoSpace::Local => GizmoSpace::World,
                    GizmoSpace::World => GizmoSpace::Local,
                };
            }
            GizmoCommand::SetMode(mode) => {
                self.config.mode = mode;
            }
            GizmoCommand::SizeIncrease => {
                self.config.size += SIZE_STEP;
            }
            GizmoCommand::SizeDecrease => {
                self.config.size = (self.config.size - SIZE_STEP).max(SIZE_FLOOR);
            }
            GizmoCommand::ToggleSnap => {
                self.config.snap = match self.config.snap {
                    None => Some(GizmoSnap::default()),
                    Some(_) => None,
                };
            }
            GizmoCommand::ToggleVisibility => {
                self.config.visible = !self.config.visible;
            }
        }
    }

    /// Per-tick handle animation: ease the drawn size toward the configured
    /// size. Committed before the frame is rendered.
    pub fn update(&mut self) {
        let delta = self.config.size - self.displayed_size;
        if delta.abs() < 1e-3 {
            self.displayed_size = self.config.size;
        } else {
            self.displayed_size += delta * 0.5;
        }
    }
}
