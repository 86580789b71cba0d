//! The focus-tracking input context.
//!
//! Tracks which window currently owns an enabled text-input session and
//! reacts to focus changes and input-method query updates from the toolkit.
//! The tricky part is deduplication: the protocol session is stateful, so
//! enable/disable must be sent exactly on the transitions and never with a
//! stale surface handle.

use std::sync::Arc;

use crate::core::query::{InputAction, InputDirection, Locale, QueryMask, UpdateReason};
use crate::core::session::{SessionFactory, SessionHandle};
use crate::core::windowing::{WindowId, Windowing};
use crate::util::geometry::Rect;
use crate::util::logging;

/// Bridges toolkit input-method events to the compositor's text-input
/// session.
///
/// Lifecycle: constructed without a session (`has_session() == false`);
/// the first [`on_display_available`](Self::on_display_available) signal
/// creates the session through the factory, exactly once. The session is
/// destroyed only together with the context.
///
/// All methods run on the toolkit's UI event thread; nothing here blocks.
pub struct TextInputContext {
    windowing: Arc<dyn Windowing>,
    factory: Arc<dyn SessionFactory>,
    session: Option<SessionHandle>,
    /// The window whose surface is currently enabled on the session.
    /// Held as an id, never as an owned reference: the window may be
    /// destroyed behind our back and is re-resolved before every use.
    current_window: Option<WindowId>,
}

impl TextInputContext {
    pub fn new(windowing: Arc<dyn Windowing>, factory: Arc<dyn SessionFactory>) -> Self {
        Self {
            windowing,
            factory,
            session: None,
            current_window: None,
        }
    }

    /// A context is usable from construction, even before any session
    /// exists.
    pub fn is_valid(&self) -> bool {
        true
    }

    pub fn has_session(&self) -> bool {
        self.session.is_some()
    }

    /// The window that currently owns the enabled session, if any.
    pub fn current_window(&self) -> Option<WindowId> {
        self.current_window
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// A display/screen became usable; lazily create the session.
    ///
    /// Idempotent: ignored once a session exists. A factory failure is
    /// absorbed — the context stays session-less and a later signal may
    /// retry.
    pub fn on_display_available(&mut self) {
        if self.session.is_some() {
            return;
        }
        match self.factory.create_session() {
            Ok(session) => {
                self.session = Some(SessionHandle::new(session));
                crate::wlog!(logging::SESSION, "Text-input session created");
            }
            Err(err) => {
                tracing::warn!("Failed to create text-input session: {}", err);
            }
        }
    }

    // =========================================================================
    // Forwarded operations
    // =========================================================================

    /// Clear pending composition state on the protocol side.
    pub fn reset(&mut self) {
        tracing::debug!("reset");
        if let Some(session) = self.session.as_mut() {
            session.reset();
        }
    }

    /// Flush pending protocol requests.
    pub fn commit(&mut self) {
        tracing::debug!("commit");
        if let Some(session) = self.session.as_mut() {
            session.commit();
        }
    }

    /// Forward a toolkit input-method action.
    ///
    /// Only `Click` reaches the session (as a preedit cursor move); other
    /// actions are left to default toolkit handling.
    pub fn on_invoke_action(&mut self, action: InputAction, cursor_position: i32) {
        tracing::debug!(?action, cursor_position, "invoke action");
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if action == InputAction::Click {
            session.set_cursor_inside_preedit(cursor_position);
        }
    }

    // =========================================================================
    // Focus transitions
    // =========================================================================

    /// The toolkit's focus object changed.
    ///
    /// `window` is the window holding the new focus object (if any) and
    /// `accepts` whether that object wants text input. Issues at most one
    /// disable and at most one enable on the session, disable first, and a
    /// full-state update tagged [`UpdateReason::Enter`] iff an enable
    /// happened.
    pub fn on_focus_changed(&mut self, window: Option<WindowId>, accepts: bool) {
        tracing::debug!(?window, accepts, "focus changed");
        if self.session.is_none() {
            return;
        }

        let entered = self.reconcile(window, accepts);
        if entered {
            if let Some(session) = self.session.as_mut() {
                session.update_state(QueryMask::all(), UpdateReason::Enter);
            }
        }
    }

    /// The focused object reported changed input-method state.
    ///
    /// Re-checks enablement against the toolkit's *live* focus window (the
    /// focus may have moved since the last focus event), then always sends
    /// an incremental update so changed query results (e.g. a new cursor
    /// rectangle) reach the compositor even when no transition happened.
    pub fn on_input_method_query(&mut self, queries: QueryMask) {
        tracing::debug!(?queries, "input method query");
        if self.session.is_none() || !self.windowing.has_focus_object() {
            return;
        }

        let window = self.windowing.focus_window();
        let accepts = self.windowing.input_method_accepted();
        self.reconcile(window, accepts);

        if let Some(session) = self.session.as_mut() {
            session.update_state(queries, UpdateReason::Change);
        }
    }

    /// Reconcile session enablement against a target window.
    ///
    /// Step 1: if some other window (or a window that stopped accepting
    /// input) still owns the session, disable it — skipping the protocol
    /// call, but still clearing `current_window`, when its surface is no
    /// longer resolvable. Step 2: enable the target if it accepts input
    /// and is not already current. Returns whether an enable was issued.
    fn reconcile(&mut self, target: Option<WindowId>, accepts: bool) -> bool {
        if let Some(current) = self.current_window {
            if target != Some(current) || !accepts {
                if let Some(surface) = self.windowing.surface_of(current) {
                    if let Some(session) = self.session.as_mut() {
                        session.disable_surface(surface);
                        tracing::debug!(?current, ?surface, "disabled surface");
                    }
                } else {
                    tracing::debug!(?current, "current window gone, skipping disable");
                }
                self.current_window = None;
            }
        }

        if !accepts {
            return false;
        }
        let Some(window) = target else {
            return false;
        };
        if self.current_window == Some(window) {
            return false;
        }
        let Some(surface) = self.windowing.surface_of(window) else {
            // Window has no native handle yet (or anymore); nothing to enable.
            return false;
        };

        if let Some(session) = self.session.as_mut() {
            session.enable_surface(surface);
            self.current_window = Some(window);
            tracing::debug!(?window, ?surface, "enabled surface");
            return true;
        }
        false
    }

    // =========================================================================
    // Read-through accessors
    // =========================================================================

    /// Whether the virtual keyboard / input panel is shown.
    /// `false` while no session exists.
    pub fn is_input_panel_visible(&self) -> bool {
        match self.session.as_ref() {
            Some(session) => session.is_input_panel_visible(),
            None => false,
        }
    }

    /// Area covered by the input panel; empty while no session exists.
    pub fn keyboard_rect(&self) -> Rect {
        match self.session.as_ref() {
            Some(session) => session.keyboard_rect(),
            None => Rect::default(),
        }
    }

    /// Locale of the active input method; invalid while no session exists.
    pub fn locale(&self) -> Locale {
        match self.session.as_ref() {
            Some(session) => session.locale(),
            None => Locale::invalid(),
        }
    }

    /// Layout direction of the active input method; left-to-right while no
    /// session exists.
    pub fn input_direction(&self) -> InputDirection {
        match self.session.as_ref() {
            Some(session) => session.input_direction(),
            None => InputDirection::default(),
        }
    }

    pub fn show_input_panel(&mut self) {
        tracing::debug!("show input panel");
        if let Some(session) = self.session.as_mut() {
            session.show_input_panel();
        }
    }

    pub fn hide_input_panel(&mut self) {
        tracing::debug!("hide input panel");
        if let Some(session) = self.session.as_mut() {
            session.hide_input_panel();
        }
    }
}
