//! # labpack-core
//!
//! Transport-agnostic core of the labpack client: everything about the
//! packaging REST API of a virtual-lab automation platform that does not
//! touch the network.
//!
//! This crate provides:
//! - Response models for shells and installed standards
//! - `LabpackError` enum for unified error handling
//! - Session state (connection parameters, credentials, auth header)
//! - Request construction and response interpretation for every API
//!   operation
//!
//! ## Architecture
//!
//! The crate is organized into modules:
//! - `types`: read-only response models
//! - `error`: error types and result aliases
//! - `session`: connection parameters and the authentication contract
//! - `request`: one request description per REST action
//! - `response`: status-code interpretation, one function per action
//!
//! The transport adapters in `labpack-client` lower [`request::ApiRequest`]
//! values onto an HTTP client and feed the raw status and body back into
//! the `response` functions, so the blocking and async clients share one
//! definition of the protocol.

pub mod error;
pub mod request;
pub mod response;
pub mod session;
pub mod types;

// Re-export commonly used types
pub use error::{LabpackError, LabpackResult};
pub use request::{ApiRequest, FileUpload, Payload, Verb, FILE_PART_NAME};
pub use session::{ConnectionConfig, Credentials, Session, DEFAULT_DOMAIN, DEFAULT_PORT};
pub use types::{ExecutionEnvironment, ShellInfo, StandardInfo, UserInfo};
