//! Request middleware.

pub mod session;

pub use session::{AuthUser, admin_guard, session_middleware};
