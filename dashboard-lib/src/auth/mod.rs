//! Authentication

mod session;

pub use session::MemorySessionStore;
pub use session::Session;
pub use session::SessionHandle;
pub use session::SessionStore;
