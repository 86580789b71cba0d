//! Text-input session capability and the owning handle.
//!
//! The wire protocol (binding the manager global, serializing requests,
//! dispatching events) lives behind the [`TextInputSession`] trait; this
//! crate only decides *when* to call it. All mutating operations are
//! fire-and-forget request emissions with no round-trip.

use crate::core::query::{InputDirection, Locale, QueryMask, UpdateReason};
use crate::core::windowing::SurfaceId;
use crate::prelude::Result;
use crate::util::geometry::Rect;

// ============================================================================
// Capability traits
// ============================================================================

/// The protocol collaborator carrying enable/disable/update requests to the
/// compositor.
///
/// The session object is stateful on the compositor side: redundant
/// enable/disable pairs or a stale surface handle are protocol errors, so
/// callers (the context) validate surface liveness before every call.
/// The session itself performs no validation.
pub trait TextInputSession {
    /// Enable text input for a surface.
    fn enable_surface(&mut self, surface: SurfaceId);

    /// Disable text input for a surface.
    fn disable_surface(&mut self, surface: SurfaceId);

    /// Resend the given query categories to the compositor.
    fn update_state(&mut self, queries: QueryMask, reason: UpdateReason);

    /// Discard any pending composition state.
    fn reset(&mut self);

    /// Flush pending protocol requests.
    fn commit(&mut self);

    /// Move the cursor inside the preedit string.
    fn set_cursor_inside_preedit(&mut self, index: i32);

    fn is_input_panel_visible(&self) -> bool;
    fn keyboard_rect(&self) -> Rect;
    fn locale(&self) -> Locale;
    fn input_direction(&self) -> InputDirection;

    fn show_input_panel(&mut self);
    fn hide_input_panel(&mut self);
}

/// Creates the protocol session on the first display-available signal.
pub trait SessionFactory {
    fn create_session(&self) -> Result<Box<dyn TextInputSession>>;
}

// ============================================================================
// No-op provider
// ============================================================================

/// Session implementation that ignores every request and answers every
/// query with the documented platform default. Useful as a stand-in where
/// a backend is optional.
#[derive(Debug, Default)]
pub struct NoopSession;

impl TextInputSession for NoopSession {
    fn enable_surface(&mut self, _surface: SurfaceId) {}
    fn disable_surface(&mut self, _surface: SurfaceId) {}
    fn update_state(&mut self, _queries: QueryMask, _reason: UpdateReason) {}
    fn reset(&mut self) {}
    fn commit(&mut self) {}
    fn set_cursor_inside_preedit(&mut self, _index: i32) {}

    fn is_input_panel_visible(&self) -> bool {
        false
    }

    fn keyboard_rect(&self) -> Rect {
        Rect::default()
    }

    fn locale(&self) -> Locale {
        Locale::invalid()
    }

    fn input_direction(&self) -> InputDirection {
        InputDirection::default()
    }

    fn show_input_panel(&mut self) {}
    fn hide_input_panel(&mut self) {}
}

// ============================================================================
// SessionHandle
// ============================================================================

/// Owning handle to the protocol session.
///
/// Created at most once per context, lazily, on the first display-available
/// signal; destroyed together with the owning context. Every method is a
/// plain forwarder — surface-liveness validation is the context's job.
pub struct SessionHandle {
    session: Box<dyn TextInputSession>,
}

impl SessionHandle {
    pub fn new(session: Box<dyn TextInputSession>) -> Self {
        Self { session }
    }

    pub fn enable_surface(&mut self, surface: SurfaceId) {
        self.session.enable_surface(surface);
    }

    pub fn disable_surface(&mut self, surface: SurfaceId) {
        self.session.disable_surface(surface);
    }

    pub fn update_state(&mut self, queries: QueryMask, reason: UpdateReason) {
        self.session.update_state(queries, reason);
    }

    pub fn reset(&mut self) {
        self.session.reset();
    }

    pub fn commit(&mut self) {
        self.session.commit();
    }

    pub fn set_cursor_inside_preedit(&mut self, index: i32) {
        self.session.set_cursor_inside_preedit(index);
    }

    pub fn is_input_panel_visible(&self) -> bool {
        self.session.is_input_panel_visible()
    }

    pub fn keyboard_rect(&self) -> Rect {
        self.session.keyboard_rect()
    }

    pub fn locale(&self) -> Locale {
        self.session.locale()
    }

    pub fn input_direction(&self) -> InputDirection {
        self.session.input_direction()
    }

    pub fn show_input_panel(&mut self) {
        self.session.show_input_panel();
    }

    pub fn hide_input_panel(&mut self) {
        self.session.hide_input_panel();
    }
}

impl Drop for SessionHandle {
    fn drop(&mut self) {
        tracing::debug!("Text-input session destroyed");
    }
}
