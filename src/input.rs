use glam::Vec2;

/// Keys the viewer reacts to. The window layer maps physical winit keys onto
/// this vocabulary; everything else is dropped there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Hold to temporarily gather an object's meshes at its center.
    Shift,
    /// Glue the exploded layout in place.
    G,
    /// Same as G; kept as a second binding from the original key map.
    B,
    /// Toggle snap-to-grid. Also the focus modifier for pointer activation.
    Ctrl,
    /// Toggle gizmo visibility.
    H,
    /// Toggle gizmo space.
    Digit0,
    Digit1,
    Digit2,
    Digit3,
    Plus,
    Minus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationKind {
    Single,
    Double,
}

/// Modifier state captured at the moment of a pointer activation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Modifiers {
    /// The focus modifier recolors the hit mesh as a highlight cue.
    pub focus: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct PointerActivate {
    /// Pointer position in physical window pixels.
    pub position: Vec2,
    pub modifiers: Modifiers,
    pub kind: ActivationKind,
}

/// Discrete input events as delivered by the host layer. KeyDown/KeyUp
/// pairing is not guaranteed: focus loss can swallow either half, so
/// consumers must treat unmatched events as no-ops.
#[derive(Debug, Clone, Copy)]
pub enum InputEvent {
    Pointer(PointerActivate),
    KeyDown(Key),
    KeyUp(Key),
}
