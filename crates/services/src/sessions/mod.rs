mod handle;
mod progress;
mod runtime;
mod snapshot;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use handle::SessionHandle;
pub use progress::SessionProgress;
pub use runtime::spawn_session;
pub use snapshot::{Notice, SessionSnapshot};
