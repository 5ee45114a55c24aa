//! Asynchronous packaging API client built on reqwest and tokio

use std::fmt;
use std::path::Path;

use reqwest::header;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, ClientBuilder};
use tokio::sync::OnceCell;
use tracing::debug;

use labpack_core::error::{LabpackError, LabpackResult};
use labpack_core::request::{part_file_name, ApiRequest, FileUpload, Payload, Verb, FILE_PART_NAME};
use labpack_core::response;
use labpack_core::session::{ConnectionConfig, Credentials, Session};
use labpack_core::types::{ShellInfo, StandardInfo};

/// Asynchronous client for the packaging REST API
pub struct PackagingApiClient {
    /// Underlying HTTP client with connection pooling
    http: Client,
    session: Session,
    /// Token cell; the once-guard makes concurrent first calls log in once
    token: OnceCell<String>,
}

impl PackagingApiClient {
    /// Log in right away and return a client holding a fresh token
    pub async fn login(config: ConnectionConfig, credentials: Credentials) -> LabpackResult<Self> {
        let client = Self::with_credentials(config, credentials)?;
        client.token().await?;
        Ok(client)
    }

    /// Create a client that logs in lazily on the first authenticated call
    pub fn with_credentials(
        config: ConnectionConfig,
        credentials: Credentials,
    ) -> LabpackResult<Self> {
        Self::build(Session::with_credentials(config, credentials), OnceCell::new())
    }

    /// Create a client around a previously issued token; no login occurs
    pub fn with_token(config: ConnectionConfig, token: impl Into<String>) -> LabpackResult<Self> {
        Self::build(
            Session::without_credentials(config),
            OnceCell::new_with(Some(token.into())),
        )
    }

    fn build(session: Session, token: OnceCell<String>) -> LabpackResult<Self> {
        let http = ClientBuilder::new()
            .user_agent(concat!("labpack/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| LabpackError::transport("Failed to create HTTP client", e))?;
        Ok(Self {
            http,
            session,
            token,
        })
    }

    /// The session token, logging in first if none is cached yet
    pub async fn token(&self) -> LabpackResult<&str> {
        self.token
            .get_or_try_init(|| self.fetch_token())
            .await
            .map(String::as_str)
    }

    /// Add a new shell to the server from a packaged shell archive
    pub async fn add_shell(&self, shell_path: impl AsRef<Path>) -> LabpackResult<()> {
        let upload = read_upload(shell_path.as_ref()).await?;
        self.add_shell_upload(upload).await
    }

    /// Add a new shell from an in-memory archive
    pub async fn add_shell_from_buffer(&self, contents: &[u8]) -> LabpackResult<()> {
        self.add_shell_upload(FileUpload::from_bytes(contents)).await
    }

    /// Update an existing shell; its name is the file name minus extension
    pub async fn update_shell(&self, shell_path: impl AsRef<Path>) -> LabpackResult<()> {
        let upload = read_upload(shell_path.as_ref()).await?;
        let shell_name = upload.shell_name().to_owned();
        self.update_shell_upload(&shell_name, upload).await
    }

    /// Update the named shell from an archive on disk
    pub async fn update_shell_named(
        &self,
        shell_path: impl AsRef<Path>,
        shell_name: &str,
    ) -> LabpackResult<()> {
        let upload = read_upload(shell_path.as_ref()).await?;
        self.update_shell_upload(shell_name, upload).await
    }

    /// Update the named shell from an in-memory archive
    pub async fn update_shell_from_buffer(
        &self,
        contents: &[u8],
        shell_name: &str,
    ) -> LabpackResult<()> {
        self.update_shell_upload(shell_name, FileUpload::from_bytes(contents))
            .await
    }

    /// Fetch a shell's description
    pub async fn get_shell(&self, shell_name: &str) -> LabpackResult<ShellInfo> {
        let (status, body) = self.call(ApiRequest::get_shell(shell_name)).await?;
        response::get_shell(shell_name, status, &body)
    }

    /// Delete a shell from the server
    pub async fn delete_shell(&self, shell_name: &str) -> LabpackResult<()> {
        let (status, body) = self.call(ApiRequest::delete_shell(shell_name)).await?;
        response::delete_shell(shell_name, status, &body)
    }

    /// List the standards installed on the server
    pub async fn get_installed_standards(&self) -> LabpackResult<Vec<StandardInfo>> {
        let (status, body) = self.call(ApiRequest::list_standards()).await?;
        response::list_standards(status, &body)
    }

    /// Export the named topologies as a package archive
    pub async fn export_package<S: AsRef<str>>(&self, topologies: &[S]) -> LabpackResult<Vec<u8>> {
        let token = self.token().await?;
        let resp = self
            .dispatch(ApiRequest::export_package(topologies), Some(token))
            .await?;
        let (status, body) = read_bytes(resp).await?;
        response::export_package(status, body)
    }

    /// Export the named topologies and write the archive to `file_path`
    pub async fn export_package_to_file<S: AsRef<str>>(
        &self,
        topologies: &[S],
        file_path: impl AsRef<Path>,
    ) -> LabpackResult<()> {
        let package = self.export_package(topologies).await?;
        let file_path = file_path.as_ref();
        tokio::fs::write(file_path, package)
            .await
            .map_err(|e| LabpackError::io(format!("Failed to write '{}'", file_path.display()), e))
    }

    /// Import a package archive from disk into the server
    pub async fn import_package(&self, package_path: impl AsRef<Path>) -> LabpackResult<()> {
        let upload = read_upload(package_path.as_ref()).await?;
        self.import_package_upload(upload).await
    }

    /// Import an in-memory package archive into the server
    pub async fn import_package_from_buffer(&self, contents: &[u8]) -> LabpackResult<()> {
        self.import_package_upload(FileUpload::from_bytes(contents))
            .await
    }

    async fn add_shell_upload(&self, upload: FileUpload) -> LabpackResult<()> {
        let (status, body) = self.call(ApiRequest::add_shell(upload)).await?;
        response::add_shell(status, &body)
    }

    async fn update_shell_upload(&self, shell_name: &str, upload: FileUpload) -> LabpackResult<()> {
        let (status, body) = self
            .call(ApiRequest::update_shell(shell_name, upload))
            .await?;
        response::update_shell(shell_name, status, &body)
    }

    async fn import_package_upload(&self, upload: FileUpload) -> LabpackResult<()> {
        let (status, body) = self.call(ApiRequest::import_package(upload)).await?;
        response::import_package(status, &body)
    }

    async fn fetch_token(&self) -> LabpackResult<String> {
        debug!("Logging in to {}", self.session.config().host);
        let request = self.session.login_request()?;
        let resp = self.dispatch(request, None).await?;
        let (status, body) = read_text(resp).await?;
        response::login(status, &body)
    }

    /// Resolve the token and perform one exchange, reading a text body
    async fn call(&self, request: ApiRequest) -> LabpackResult<(u16, String)> {
        let token = self.token().await?;
        let resp = self.dispatch(request, Some(token)).await?;
        read_text(resp).await
    }

    /// Lower an [`ApiRequest`] onto reqwest and send it
    async fn dispatch(
        &self,
        request: ApiRequest,
        token: Option<&str>,
    ) -> LabpackResult<reqwest::Response> {
        let url = self.session.config().endpoint_url(&request.path);
        debug!("Sending {:?} {}", request.verb, url);
        let mut builder = match request.verb {
            Verb::Get => self.http.get(&url),
            Verb::Post => self.http.post(&url),
            Verb::Put => self.http.put(&url),
            Verb::Delete => self.http.delete(&url),
        };
        builder = match request.payload {
            Payload::Empty => builder,
            Payload::Form(fields) => builder.form(&fields),
            Payload::Json(body) => builder.json(&body),
            Payload::File(upload) => builder.multipart(multipart_form(upload)),
        };
        if request.authenticated {
            if let Some(token) = token {
                builder = builder.header(header::AUTHORIZATION, Session::authorization(token));
            }
        }
        let resp = builder
            .send()
            .await
            .map_err(|e| LabpackError::transport(format!("Failed to reach '{url}'"), e))?;
        debug!("{} answered {}", url, resp.status());
        Ok(resp)
    }
}

// The token must not leak through Debug output.
impl fmt::Debug for PackagingApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PackagingApiClient")
            .field("session", &self.session)
            .field("token", &"<redacted>")
            .finish()
    }
}

async fn read_upload(path: &Path) -> LabpackResult<FileUpload> {
    let contents = tokio::fs::read(path)
        .await
        .map_err(|e| LabpackError::io(format!("Failed to read '{}'", path.display()), e))?;
    Ok(FileUpload::new(part_file_name(path), contents))
}

async fn read_text(resp: reqwest::Response) -> LabpackResult<(u16, String)> {
    let status = resp.status().as_u16();
    let body = resp
        .text()
        .await
        .map_err(|e| LabpackError::transport("Failed to read response body", e))?;
    Ok((status, body))
}

async fn read_bytes(resp: reqwest::Response) -> LabpackResult<(u16, Vec<u8>)> {
    let status = resp.status().as_u16();
    let body = resp
        .bytes()
        .await
        .map_err(|e| LabpackError::transport("Failed to read response body", e))?;
    Ok((status, body.to_vec()))
}

fn multipart_form(upload: FileUpload) -> Form {
    let part = Part::bytes(upload.contents).file_name(upload.file_name);
    Form::new().part(FILE_PART_NAME, part)
}
