//! Authentication HTTP Handlers
//!
//! Handlers for the three authentication endpoints. Request/response
//! types live in `types`; each handler gets its own file.

/// Request and response types
pub mod types;

/// POST /signup - user registration
pub mod signup;

/// POST /login - credential verification and token issuance
pub mod login;

/// GET /private - token-guarded identity echo
pub mod private;

pub use login::login;
pub use private::private;
pub use signup::signup;
