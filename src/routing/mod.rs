//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Outbound links:
//!     (RouteKey, Locale) → route.rs resolve() → "/en/hakkimda"
//!
//! Incoming request path:
//!     → router.rs match_path()
//!     → Page | Redirect | Admin | NotFound
//! ```
//!
//! # Design Decisions
//! - Route table is static, compiled into the binary
//! - Deterministic: same path always yields the same match
//! - Locale only ever changes the prefix, never the slug

pub mod route;
pub mod router;

pub use route::{resolve, RouteKey};
pub use router::{admin_dashboard_path, match_path, RouteMatch};
