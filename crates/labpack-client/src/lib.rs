//! Packaging API clients for the CloudShell automation platform
//!
//! This crate provides the transport layer over `labpack-core`: an async
//! client built on reqwest and tokio, and a blocking twin behind the
//! `blocking` feature that mirrors the async surface method for method.

pub mod client;

#[cfg(feature = "blocking")]
pub mod blocking;

// Re-export main types
pub use client::PackagingApiClient;
pub use labpack_core::{
    ConnectionConfig, Credentials, ExecutionEnvironment, FileUpload, LabpackError,
    LabpackResult, ShellInfo, StandardInfo, UserInfo,
};
