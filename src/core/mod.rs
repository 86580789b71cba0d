pub mod errors;
pub mod query;
pub mod windowing;
pub mod session;
pub mod context;


// Re-export key types
pub use context::TextInputContext;
pub use query::{InputAction, InputDirection, Locale, QueryMask, UpdateReason};
pub use session::{NoopSession, SessionFactory, SessionHandle, TextInputSession};
pub use windowing::{SurfaceId, WindowId, Windowing};
