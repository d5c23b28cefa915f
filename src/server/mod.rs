//! Server Module
//!
//! Handles configuration, shared application state, and construction of
//! the Axum application.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs    - Module exports
//! ├── config.rs - AppConfig and database loading
//! ├── state.rs  - Shared AppState
//! └── init.rs   - create_app
//! ```

/// Configuration loading
pub mod config;

/// Server initialization
pub mod init;

/// Shared application state
pub mod state;

pub use init::create_app;
pub use state::AppState;
