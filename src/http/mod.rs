//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (assign request ID)
//!     → handlers.rs (routing::match_path → page | redirect | 404)
//!     → context.rs (locale, translator, config snapshot for this request)
//!     → render.rs (HTML)
//!     → Send to client
//! ```

pub mod context;
pub mod handlers;
pub mod render;
pub mod request;
pub mod server;

pub use context::PageContext;
pub use request::X_REQUEST_ID;
pub use server::{AppState, HttpServer};
