use std::time::{Duration, Instant};

use crate::camera::Camera;
use crate::gizmo::GizmoController;
use crate::render::Renderer;
use crate::scene_graph::Scene;

pub const DEFAULT_TICK_RATE: u32 = 60;

/// Fixed-rate frame pacing. The loop is free-running: input handlers mutate
/// shared state between ticks, and each tick commits the gizmo update
/// before drawing the frame.
pub struct RenderLoop {
    tick_interval: Duration,
    last_tick: Option<Instant>,
}

impl RenderLoop {
    pub fn new(ticks_per_second: u32) -> Self {
        Self {
            tick_interval: Duration::from_secs(1) / ticks_per_second.max(1),
            last_tick: None,
        }
    }

    /// When the next tick should run. Now, if none has run yet.
    pub fn next_deadline(&self) -> Instant {
        match self.last_tick {
            None => Instant::now(),
            Some(last) => last + self.tick_interval,
        }
    }

    pub fn is_due(&self, now: Instant) -> bool {
        match self.last_tick {
            None => true,
            Some(last) => now.duration_since(last) >= self.tick_interval,
        }
    }

    /// One tick: advance the gizmo animation, then draw. Update strictly
    /// precedes the frame.
    pub fn tick(
        &mut self,
        now: Instant,
        gizmo: &mut GizmoController,
        scene: &Scene,
        camera: &Camera,
        renderer: &mut dyn Renderer,
    ) {
        gizmo.update();
        renderer.draw_frame(scene, camera);
        self.last_tick = Some(now);
    }
}

impl Default for RenderLoop {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_RATE)
    }
}
