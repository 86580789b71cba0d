//! Toolkit windowing capability consumed by the context.
//!
//! Windows and surfaces are referred to by stable ids rather than owned
//! references: the context never assumes a window outlives a focus event,
//! so every protocol-touching path re-resolves the surface through
//! [`Windowing::surface_of`] first.

/// Stable identifier for a toolkit window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowId(pub u32);

/// Stable identifier for a compositor-side surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceId(pub u32);

/// Introspection into the toolkit's focus and window state.
///
/// `surface_of` returns `None` once the window lost its native handle
/// (destroyed or not yet realized); callers treat that as "target
/// unobtainable" and skip the protocol call.
pub trait Windowing {
    /// Resolve a window to its surface, if the window is still live.
    fn surface_of(&self, window: WindowId) -> Option<SurfaceId>;

    /// The window that currently has input focus.
    fn focus_window(&self) -> Option<WindowId>;

    /// Whether any object has input focus at all.
    fn has_focus_object(&self) -> bool;

    /// Whether the focused object currently wants text input.
    fn input_method_accepted(&self) -> bool;
}
