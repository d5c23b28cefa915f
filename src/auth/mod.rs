//! Authentication Module
//!
//! User registration, credential verification and session tokens.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs      - Module exports
//! ├── users.rs    - User model and credential store operations
//! ├── sessions.rs - JWT issuance and validation
//! └── handlers/   - HTTP handlers
//!     ├── mod.rs
//!     ├── types.rs   - Request/response types
//!     ├── signup.rs  - POST /signup
//!     ├── login.rs   - POST /login
//!     └── private.rs - GET /private
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Signup**: email + password -> bcrypt hash -> user row (201)
//! 2. **Login**: credentials verified -> JWT access token (200)
//! 3. **Private**: bearer token verified -> identity echoed back
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage; the plaintext is
//!   never persisted or logged
//! - Login failures are uniform 401s, so account existence cannot be
//!   probed through the error message
//! - Tokens are stateless HS256 JWTs with an expiry claim

/// User model and credential store operations
pub mod users;

/// JWT issuance and validation
pub mod sessions;

/// HTTP handlers for the authentication endpoints
pub mod handlers;

pub use handlers::types::{LoginRequest, SignupRequest, TokenResponse};
pub use handlers::{login, private, signup};
