//! Basic authentication middleware
//!
//! Validates `Authorization: Basic <base64(username:password)>` against the
//! configured broker credentials. Both parts are compared in constant time;
//! a failure short-circuits with 401 and a `WWW-Authenticate` challenge
//! without calling the wrapped service.

use std::{
    future::Future,
    pin::Pin,
    sync::Arc,
    task::{Context, Poll},
};

use axum::{
    extract::Request,
    http::header::AUTHORIZATION,
    response::{IntoResponse, Response},
};
use base64::{Engine, engine::general_purpose::STANDARD};
use infrastructure::SecurityConfig;
use secrecy::{ExposeSecret, SecretString};
use subtle::ConstantTimeEq;
use tower::{Layer, Service};
use tracing::{debug, warn};

use crate::error::ApiError;

/// Expected credentials and challenge realm
struct Credentials {
    username: String,
    password: SecretString,
    realm: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("realm", &self.realm)
            .finish_non_exhaustive()
    }
}

impl Credentials {
    /// Constant-time check of a presented username/password pair
    fn matches(&self, username: &str, password: &str) -> bool {
        let user_ok = self.username.as_bytes().ct_eq(username.as_bytes());
        let pass_ok = self
            .password
            .expose_secret()
            .as_bytes()
            .ct_eq(password.as_bytes());
        (user_ok & pass_ok).into()
    }
}

/// Why a request was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Refusal {
    MissingHeader,
    NotBasic,
    Malformed,
    WrongCredentials,
}

impl Refusal {
    const fn as_str(self) -> &'static str {
        match self {
            Self::MissingHeader => "missing_header",
            Self::NotBasic => "not_basic",
            Self::Malformed => "malformed",
            Self::WrongCredentials => "wrong_credentials",
        }
    }
}

/// Decode `Basic <base64>` into a `(username, password)` pair
fn parse_basic(header: &str) -> Result<(String, String), Refusal> {
    let (scheme, encoded) = header.trim().split_once(' ').ok_or(Refusal::NotBasic)?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return Err(Refusal::NotBasic);
    }

    let decoded = STANDARD
        .decode(encoded.trim())
        .map_err(|_| Refusal::Malformed)?;
    let decoded = String::from_utf8(decoded).map_err(|_| Refusal::Malformed)?;
    let (username, password) = decoded.split_once(':').ok_or(Refusal::Malformed)?;

    Ok((username.to_string(), password.to_string()))
}

/// Layer that applies Basic authentication
#[derive(Clone, Debug)]
pub struct BasicAuthLayer {
    credentials: Arc<Credentials>,
}

impl BasicAuthLayer {
    /// Require the given username and password
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            credentials: Arc::new(Credentials {
                username: username.into(),
                password: SecretString::from(password.into()),
                realm: "service-broker".to_string(),
            }),
        }
    }

    /// Build from the security section of the configuration
    #[must_use]
    pub fn from_config(config: &SecurityConfig) -> Self {
        Self {
            credentials: Arc::new(Credentials {
                username: config.username.clone(),
                password: config.password.clone(),
                realm: config.realm.clone(),
            }),
        }
    }

    /// Override the realm advertised in the challenge
    #[must_use]
    pub fn with_realm(self, realm: impl Into<String>) -> Self {
        Self {
            credentials: Arc::new(Credentials {
                username: self.credentials.username.clone(),
                password: self.credentials.password.clone(),
                realm: realm.into(),
            }),
        }
    }
}

impl<S> Layer<S> for BasicAuthLayer {
    type Service = BasicAuth<S>;

    fn layer(&self, inner: S) -> Self::Service {
        BasicAuth {
            inner,
            credentials: Arc::clone(&self.credentials),
        }
    }
}

/// Middleware service for Basic authentication
#[derive(Clone, Debug)]
pub struct BasicAuth<S> {
    inner: S,
    credentials: Arc<Credentials>,
}

impl<S> BasicAuth<S> {
    fn check(&self, req: &Request) -> Result<(), Refusal> {
        let header = req
            .headers()
            .get(AUTHORIZATION)
            .ok_or(Refusal::MissingHeader)?
            .to_str()
            .map_err(|_| Refusal::Malformed)?;

        let (username, password) = parse_basic(header)?;
        if self.credentials.matches(&username, &password) {
            Ok(())
        } else {
            Err(Refusal::WrongCredentials)
        }
    }
}

impl<S> Service<Request> for BasicAuth<S>
where
    S: Service<Request, Response = Response> + Clone + Send + 'static,
    S::Future: Send,
{
    type Response = Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request) -> Self::Future {
        match self.check(&req) {
            Ok(()) => {
                debug!("Basic credentials accepted");
                let mut inner = self.inner.clone();
                Box::pin(async move { inner.call(req).await })
            },
            Err(refusal) => {
                warn!(
                    reason = refusal.as_str(),
                    method = %req.method(),
                    path = %req.uri().path(),
                    "Rejected unauthenticated request"
                );
                let response = ApiError::Unauthorized {
                    realm: self.credentials.realm.clone(),
                }
                .into_response();
                Box::pin(async move { Ok(response) })
            },
        }
    }
}
