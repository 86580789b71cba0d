// Text Input Context
// Copyright (c) 2026
//
// Focus-tracking bridge between a toolkit's input-method events and a
// compositor-side text-input protocol session. The wire protocol itself
// lives behind the `TextInputSession` capability; this crate owns the
// enable/disable decision logic.

pub mod core;
pub mod util;
pub mod prelude;

// Re-export key types
pub use crate::core::context::TextInputContext;
pub use crate::core::query::{InputAction, InputDirection, Locale, QueryMask, UpdateReason};
pub use crate::core::session::{NoopSession, SessionFactory, SessionHandle, TextInputSession};
pub use crate::core::windowing::{SurfaceId, WindowId, Windowing};
pub use crate::util::geometry::Rect;
