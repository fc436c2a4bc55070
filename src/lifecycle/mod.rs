//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load dictionaries → Mount config provider → Start watcher
//!
//! Shutdown (shutdown.rs):
//!     Signal received → Stop accepting → Drain connections → Dispose provider
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Trigger graceful shutdown
//! ```

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
pub use signals::wait_for_shutdown;
pub use startup::{init_subsystems, StartupError, Subsystems};
