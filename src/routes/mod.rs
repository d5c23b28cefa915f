//! Route Configuration Module
//!
//! Assembles the HTTP routes for the server:
//!
//! - `POST /signup` - user registration
//! - `POST /login`  - credential verification and token issuance
//! - `GET /private` - token-guarded identity echo
//! - anything else  - static file with `index.html` fallback

/// Main router creation
pub mod router;

pub use router::create_router;
