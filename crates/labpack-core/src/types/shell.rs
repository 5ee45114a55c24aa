//! Shell description models returned by `GET Shells/{name}`.

use serde::{Deserialize, Serialize};

/// A shell installed on the platform
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ShellInfo {
    /// Server-assigned identifier
    pub id: String,
    /// Shell name, unique per server
    pub name: String,
    /// Shell version string
    pub version: String,
    /// Name of the standard the shell implements
    pub standard_type: String,
    /// Last modification timestamp, kept as the server's own string
    pub modification_date: String,
    /// User who last modified the shell
    pub last_modified_by_user: UserInfo,
    /// Shell author
    pub author: String,
    /// Whether the shell is an official one
    pub is_official: bool,
    /// Name of the shell this one is based on, empty when standalone
    pub based_on: String,
    /// Execution environment the shell's driver runs in
    pub execution_environment_type: ExecutionEnvironment,
}

/// User reference nested in a shell description
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserInfo {
    pub username: String,
    /// Absent for system accounts
    pub email: Option<String>,
}

/// Execution environment a shell's driver runs in
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExecutionEnvironment {
    pub position: i32,
    /// Interpreter path or version, e.g. "2.7.10"
    pub path: String,
}
