//! Input-method query categories and related protocol enums.

use bitflags::bitflags;

bitflags! {
    /// Set of input-method query categories that changed and must be
    /// resent to the compositor.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct QueryMask: u32 {
        const ENABLED            = 1 << 0;
        const CURSOR_RECTANGLE   = 1 << 1;
        const CURSOR_POSITION    = 1 << 2;
        const SURROUNDING_TEXT   = 1 << 3;
        const CURRENT_SELECTION  = 1 << 4;
        const ANCHOR_POSITION    = 1 << 5;
        const ANCHOR_RECTANGLE   = 1 << 6;
        const HINTS              = 1 << 7;
        const PREFERRED_LANGUAGE = 1 << 8;
    }
}

/// Why a state update is being sent to the session.
///
/// `Enter` is only used right after a surface was enabled: the compositor
/// knows nothing about the new context yet, so the full query set is resent.
/// `Change` is the incremental case driven by toolkit query events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateReason {
    Enter,
    Change,
}

/// Toolkit input-method action delivered with a cursor position.
///
/// Only `Click` is meaningful to the protocol session (it moves the cursor
/// inside the preedit string); everything else stays with the toolkit's
/// default handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Click,
    ContextMenu,
}

/// Text layout direction reported by the input method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}

/// Input-method locale.
///
/// `Locale::invalid()` is the documented value while no session exists.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Locale {
    tag: Option<String>,
}

impl Locale {
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: Some(tag.into()) }
    }

    pub fn invalid() -> Self {
        Self { tag: None }
    }

    pub fn is_valid(&self) -> bool {
        self.tag.is_some()
    }

    /// The locale tag, e.g. `de-DE`, if one was reported.
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }
}
