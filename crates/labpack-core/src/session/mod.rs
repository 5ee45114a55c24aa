//! Session state: where the API lives and how to authenticate against it.
//!
//! A [`Session`] owns the connection parameters and (optionally) the
//! credentials used for the login exchange. The token itself is cached by
//! the transport adapters, whose synchronization primitive depends on the
//! scheduling model; the transport-agnostic parts of authentication, such
//! as building the login request and formatting the authorization header,
//! live here.

use std::fmt;

use crate::error::{LabpackError, LabpackResult};
use crate::request::ApiRequest;

/// Port the platform serves the packaging API on unless told otherwise
pub const DEFAULT_PORT: u16 = 9000;

/// Management domain used when none is given
pub const DEFAULT_DOMAIN: &str = "Global";

/// Connection parameters for a packaging API server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    /// Server host name or address
    pub host: String,
    /// API port, [`DEFAULT_PORT`] unless overridden
    pub port: u16,
    /// Management domain logins are scoped to
    pub domain: String,
}

impl ConnectionConfig {
    /// Create a configuration with the default port and domain
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: DEFAULT_PORT,
            domain: DEFAULT_DOMAIN.to_owned(),
        }
    }

    /// Override the API port
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Override the management domain
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    /// Base URL every request path is joined onto. The platform serves the
    /// packaging API over plain HTTP only.
    pub fn api_url(&self) -> String {
        format!("http://{}:{}/API/", self.host, self.port)
    }

    /// Absolute URL for a request path relative to the API base
    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}{}", self.api_url(), path)
    }
}

/// Username and password for the login exchange
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

// Keeps the password out of logs and panic messages.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Connection parameters plus the credentials a client logs in with.
///
/// Sessions created from a previously issued token carry no credentials;
/// for those, the adapters pre-fill their token cache so
/// [`Session::login_request`] is never consulted.
#[derive(Debug, Clone)]
pub struct Session {
    config: ConnectionConfig,
    credentials: Option<Credentials>,
}

impl Session {
    /// Session that can log in on demand
    pub fn with_credentials(config: ConnectionConfig, credentials: Credentials) -> Self {
        Self {
            config,
            credentials: Some(credentials),
        }
    }

    /// Session for clients constructed from an existing token
    pub fn without_credentials(config: ConnectionConfig) -> Self {
        Self {
            config,
            credentials: None,
        }
    }

    pub fn config(&self) -> &ConnectionConfig {
        &self.config
    }

    /// Build the login request for this session's credentials and domain
    pub fn login_request(&self) -> LabpackResult<ApiRequest> {
        let credentials = self.credentials.as_ref().ok_or_else(|| LabpackError::Config {
            message: "Session was created from a token and has no credentials to log in with"
                .to_owned(),
        })?;
        Ok(ApiRequest::login(
            &credentials.username,
            &credentials.password,
            &self.config.domain,
        ))
    }

    /// Authorization header value for an issued token.
    ///
    /// The server expects its own opaque token in the Basic slot, not a
    /// base64 credential pair; the literal format is part of the wire
    /// contract.
    pub fn authorization(token: &str) -> String {
        format!("Basic {token}")
    }
}
