//! Response models for the packaging API.
//!
//! Everything here is deserialized from the server's PascalCase JSON and
//! treated as read-only: the client never mutates or re-uploads these.

pub mod shell;
pub mod standard;

// Re-export all public types
pub use shell::{ExecutionEnvironment, ShellInfo, UserInfo};
pub use standard::StandardInfo;
