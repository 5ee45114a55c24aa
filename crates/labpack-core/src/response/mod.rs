//! Response interpretation: turns raw HTTP outcomes into typed results.
//!
//! Each function here pairs with one [`ApiRequest`](crate::request::ApiRequest)
//! constructor and encodes the status contract of that endpoint. The functions
//! are pure, so both transport adapters share a single reading of the
//! protocol. The server reports "shell does not exist" inconsistently across
//! endpoints (404 on update, 400 on get and delete, with 404 meaning the
//! whole feature is absent there); these functions absorb that asymmetry.

use crate::error::{LabpackError, LabpackResult};
use crate::types::{ShellInfo, StandardInfo};

/// Interpret `PUT Auth/Login`: the body is the token on success.
pub fn login(status: u16, body: &str) -> LabpackResult<String> {
    match status {
        200 => Ok(normalize_token(body)),
        401 => Err(LabpackError::AuthenticationFailed {
            message: body.to_owned(),
        }),
        _ => Err(LabpackError::api(body)),
    }
}

/// Interpret `POST Shells`. Created shells answer 201, anything else is a
/// rejection.
pub fn add_shell(status: u16, body: &str) -> LabpackResult<()> {
    if status == 201 {
        Ok(())
    } else {
        Err(LabpackError::api(format!(
            "Can't add shell, response: {body}"
        )))
    }
}

/// Interpret `PUT Shells/{name}`.
pub fn update_shell(shell_name: &str, status: u16, body: &str) -> LabpackResult<()> {
    match status {
        200 => Ok(()),
        404 => Err(LabpackError::ShellNotFound {
            name: shell_name.to_owned(),
        }),
        _ => Err(LabpackError::api(format!(
            "Can't update shell, response: {body}"
        ))),
    }
}

/// Interpret `GET Shells/{name}`.
pub fn get_shell(shell_name: &str, status: u16, body: &str) -> LabpackResult<ShellInfo> {
    match status {
        200 => serde_json::from_str(body)
            .map_err(|e| LabpackError::decode(format!("shell description for '{shell_name}'"), e)),
        404 => Err(LabpackError::FeatureUnavailable {
            feature: "shell retrieval",
        }),
        400 => Err(LabpackError::ShellNotFound {
            name: shell_name.to_owned(),
        }),
        _ => Err(LabpackError::api(body)),
    }
}

/// Interpret `DELETE Shells/{name}`.
pub fn delete_shell(shell_name: &str, status: u16, body: &str) -> LabpackResult<()> {
    match status {
        200 => Ok(()),
        404 => Err(LabpackError::FeatureUnavailable {
            feature: "shell deletion",
        }),
        400 => Err(LabpackError::ShellNotFound {
            name: shell_name.to_owned(),
        }),
        _ => Err(LabpackError::api(body)),
    }
}

/// Interpret `GET Standards`.
pub fn list_standards(status: u16, body: &str) -> LabpackResult<Vec<StandardInfo>> {
    match status {
        200 => serde_json::from_str(body).map_err(|e| LabpackError::decode("standards list", e)),
        404 => Err(LabpackError::FeatureUnavailable {
            feature: "standards listing",
        }),
        _ => Err(LabpackError::api(body)),
    }
}

/// Interpret `POST Package/ExportPackage`: the body is the package archive
/// on success and must pass through untouched.
pub fn export_package(status: u16, body: Vec<u8>) -> LabpackResult<Vec<u8>> {
    match status {
        200 => Ok(body),
        404 => Err(LabpackError::FeatureUnavailable {
            feature: "package export",
        }),
        _ => Err(LabpackError::api(String::from_utf8_lossy(&body).into_owned())),
    }
}

/// Interpret `POST Package/ImportPackage`.
pub fn import_package(status: u16, body: &str) -> LabpackResult<()> {
    match status {
        200 => Ok(()),
        404 => Err(LabpackError::FeatureUnavailable {
            feature: "package import",
        }),
        _ => Err(LabpackError::api(body)),
    }
}

// The server wraps the token in quotes, single or double depending on
// version.
fn normalize_token(raw: &str) -> String {
    raw.trim_matches(['\'', '"']).to_owned()
}

#[cfg(test)]
mod tests;
