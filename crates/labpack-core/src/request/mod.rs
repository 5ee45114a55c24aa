//! Request construction: one [`ApiRequest`] description per REST action.
//!
//! An `ApiRequest` is a transport-agnostic description of one exchange: a
//! verb, a path relative to the API base and a payload. The adapters in
//! `labpack-client` lower it onto
//! reqwest (async or blocking) and attach the authorization header for
//! requests flagged as authenticated.

use std::fmt;
use std::path::Path;

use serde_json::json;

use crate::error::{LabpackError, LabpackResult};

/// Multipart field name the server expects file uploads under
pub const FILE_PART_NAME: &str = "file";

/// HTTP verb of an API request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

/// File contents staged for a multipart upload
#[derive(Clone, PartialEq, Eq)]
pub struct FileUpload {
    /// Filename sent on the multipart part
    pub file_name: String,
    pub contents: Vec<u8>,
}

impl FileUpload {
    pub fn new(file_name: impl Into<String>, contents: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            contents,
        }
    }

    /// Upload from an in-memory buffer. The part filename falls back to
    /// the multipart field name, which is what the server sees from
    /// buffer uploads.
    pub fn from_bytes(contents: &[u8]) -> Self {
        Self::new(FILE_PART_NAME, contents.to_vec())
    }

    /// Read the file at `path` into an upload. The handle is closed before
    /// this returns, whatever the outcome.
    pub fn from_path(path: impl AsRef<Path>) -> LabpackResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read(path)
            .map_err(|e| LabpackError::io(format!("Failed to read '{}'", path.display()), e))?;
        Ok(Self::new(part_file_name(path), contents))
    }

    /// Shell name implied by the upload: the file name with its final
    /// extension removed
    pub fn shell_name(&self) -> &str {
        self.file_name
            .rsplit_once('.')
            .map(|(stem, _)| stem)
            .unwrap_or(&self.file_name)
    }
}

// Upload contents are arbitrary archives; print their size, not the bytes.
impl fmt::Debug for FileUpload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileUpload")
            .field("file_name", &self.file_name)
            .field("len", &self.contents.len())
            .finish()
    }
}

/// Multipart filename for a path: its final component, or the field name
/// when the path has none
pub fn part_file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| FILE_PART_NAME.to_owned())
}

/// Request payload, one variant per body encoding the API uses
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Empty,
    /// Form-encoded fields, sent in order
    Form(Vec<(&'static str, String)>),
    Json(serde_json::Value),
    /// Multipart body with a single part named [`FILE_PART_NAME`]
    File(FileUpload),
}

/// One packaging API exchange, ready for a transport adapter
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub verb: Verb,
    /// Path relative to `http://{host}:{port}/API/`
    pub path: String,
    pub payload: Payload,
    /// Whether the request carries the `Authorization` header
    pub authenticated: bool,
}

impl ApiRequest {
    /// `PUT Auth/Login`, the only unauthenticated exchange
    pub fn login(username: &str, password: &str, domain: &str) -> Self {
        Self {
            verb: Verb::Put,
            path: "Auth/Login".to_owned(),
            payload: Payload::Form(vec![
                ("username", username.to_owned()),
                ("password", password.to_owned()),
                ("domain", domain.to_owned()),
            ]),
            authenticated: false,
        }
    }

    /// `POST Shells`
    pub fn add_shell(upload: FileUpload) -> Self {
        Self {
            verb: Verb::Post,
            path: "Shells".to_owned(),
            payload: Payload::File(upload),
            authenticated: true,
        }
    }

    /// `PUT Shells/{name}`
    pub fn update_shell(shell_name: &str, upload: FileUpload) -> Self {
        Self {
            verb: Verb::Put,
            path: format!("Shells/{shell_name}"),
            payload: Payload::File(upload),
            authenticated: true,
        }
    }

    /// `GET Shells/{name}`
    pub fn get_shell(shell_name: &str) -> Self {
        Self {
            verb: Verb::Get,
            path: format!("Shells/{shell_name}"),
            payload: Payload::Empty,
            authenticated: true,
        }
    }

    /// `DELETE Shells/{name}`
    pub fn delete_shell(shell_name: &str) -> Self {
        Self {
            verb: Verb::Delete,
            path: format!("Shells/{shell_name}"),
            payload: Payload::Empty,
            authenticated: true,
        }
    }

    /// `GET Standards`
    pub fn list_standards() -> Self {
        Self {
            verb: Verb::Get,
            path: "Standards".to_owned(),
            payload: Payload::Empty,
            authenticated: true,
        }
    }

    /// `POST Package/ExportPackage` with the topologies to bundle
    pub fn export_package<S: AsRef<str>>(topologies: &[S]) -> Self {
        let names: Vec<&str> = topologies.iter().map(AsRef::as_ref).collect();
        Self {
            verb: Verb::Post,
            path: "Package/ExportPackage".to_owned(),
            payload: Payload::Json(json!({ "TopologyNames": names })),
            authenticated: true,
        }
    }

    /// `POST Package/ImportPackage`
    pub fn import_package(upload: FileUpload) -> Self {
        Self {
            verb: Verb::Post,
            path: "Package/ImportPackage".to_owned(),
            payload: Payload::File(upload),
            authenticated: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_buffer_upload_uses_field_name_as_filename() {
        let upload = FileUpload::from_bytes(b"zip bytes");

        assert_eq!(upload.file_name, "file");
        assert_eq!(upload.contents, b"zip bytes");
    }

    #[test]
    fn test_path_upload_reads_contents_and_filename() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shell_name.zip");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"shell bytes").unwrap();
        drop(file);

        let upload = FileUpload::from_path(&path).unwrap();

        assert_eq!(upload.file_name, "shell_name.zip");
        assert_eq!(upload.contents, b"shell bytes");
    }

    #[test]
    fn test_path_upload_missing_file_is_io_error() {
        let err = FileUpload::from_path("no/such/file.zip").unwrap_err();
        assert!(matches!(err, LabpackError::Io { .. }));
    }

    #[test]
    fn test_shell_name_strips_final_extension() {
        assert_eq!(FileUpload::new("shell_name.zip", vec![]).shell_name(), "shell_name");
        assert_eq!(FileUpload::new("bundle.tar.gz", vec![]).shell_name(), "bundle.tar");
        assert_eq!(FileUpload::new("no_extension", vec![]).shell_name(), "no_extension");
    }

    #[test]
    fn test_upload_debug_hides_contents() {
        let upload = FileUpload::new("shell.zip", b"secret bytes".to_vec());
        let rendered = format!("{upload:?}");

        assert!(rendered.contains("shell.zip"));
        assert!(!rendered.contains("secret"));
    }

    #[test]
    fn test_login_request_shape() {
        let request = ApiRequest::login("admin", "secret", "Global");

        assert_eq!(request.verb, Verb::Put);
        assert_eq!(request.path, "Auth/Login");
        assert!(!request.authenticated);
    }

    #[test]
    fn test_shell_requests_address_named_shell() {
        assert_eq!(ApiRequest::get_shell("fw").path, "Shells/fw");
        assert_eq!(ApiRequest::delete_shell("fw").path, "Shells/fw");
        assert_eq!(
            ApiRequest::update_shell("fw", FileUpload::from_bytes(b"")).path,
            "Shells/fw"
        );
        assert_eq!(ApiRequest::add_shell(FileUpload::from_bytes(b"")).path, "Shells");
    }

    #[test]
    fn test_export_request_body_lists_topologies() {
        let request = ApiRequest::export_package(&["topology", "other"]);

        assert_eq!(request.verb, Verb::Post);
        assert_eq!(request.path, "Package/ExportPackage");
        assert_eq!(
            request.payload,
            Payload::Json(json!({ "TopologyNames": ["topology", "other"] }))
        );
    }

    #[test]
    fn test_all_operations_but_login_are_authenticated() {
        assert!(ApiRequest::add_shell(FileUpload::from_bytes(b"")).authenticated);
        assert!(ApiRequest::get_shell("s").authenticated);
        assert!(ApiRequest::delete_shell("s").authenticated);
        assert!(ApiRequest::list_standards().authenticated);
        assert!(ApiRequest::export_package(&["t"]).authenticated);
        assert!(ApiRequest::import_package(FileUpload::from_bytes(b"")).authenticated);
    }
}
