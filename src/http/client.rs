//! Backend HTTP client with response classification.
//!
//! # Responsibilities
//! - Rewrite the request URI to target the configured backend
//! - Execute the exchange over a pooled hyper client
//! - Apply the backend's status handler to the completed response
//!
//! # Design Decisions
//! - The handler is bound once at construction, from the backend's
//!   extra_config
//! - Classification errors are returned alongside the response, never in
//!   place of it; the caller decides whether they abort the request

use std::str::FromStr;

use axum::body::Body;
use axum::http::uri::{Authority, InvalidUriParts, PathAndQuery, Scheme};
use axum::http::{Request, Response, Uri};
use hyper_util::client::legacy::{connect::HttpConnector, Client};
use hyper_util::rt::TokioExecutor;
use thiserror::Error;

use crate::config::schema::BackendConfig;
use crate::status::{StatusError, StatusHandler};

/// Errors from the exchange itself, as opposed to classification results.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid backend address: {0}")]
    Address(String),

    #[error("invalid request URI: {0}")]
    Uri(#[from] InvalidUriParts),

    #[error("upstream request failed: {0}")]
    Transport(#[from] hyper_util::client::legacy::Error),
}

/// Client for a single configured backend.
pub struct BackendClient {
    name: String,
    authority: Authority,
    handler: StatusHandler,
    client: Client<HttpConnector, Body>,
}

impl BackendClient {
    /// Build a client for a backend, binding its status handler.
    pub fn new(backend: &BackendConfig) -> Result<Self, ClientError> {
        let authority = Authority::from_str(&backend.address)
            .map_err(|_| ClientError::Address(backend.address.clone()))?;

        let client = Client::builder(TokioExecutor::new()).build(HttpConnector::new());

        Ok(Self {
            name: backend.name.clone(),
            authority,
            handler: StatusHandler::from_config(backend),
            client,
        })
    }

    /// The status handler bound to this backend.
    pub fn handler(&self) -> &StatusHandler {
        &self.handler
    }

    /// Execute one exchange and classify the response.
    ///
    /// The response is always returned when the roundtrip succeeds; the
    /// error slot carries a [`StatusError`] when the bound handler treats
    /// the status code as a failure.
    pub async fn execute(
        &self,
        request: Request<Body>,
    ) -> Result<(Response<Body>, Option<StatusError>), ClientError> {
        let (mut parts, body) = request.into_parts();

        // Retarget the URI at the backend, keeping path and query.
        let mut uri_parts = parts.uri.into_parts();
        uri_parts.scheme = Some(Scheme::HTTP);
        uri_parts.authority = Some(self.authority.clone());
        if uri_parts.path_and_query.is_none() {
            uri_parts.path_and_query = Some(PathAndQuery::from_static("/"));
        }
        parts.uri = Uri::from_parts(uri_parts)?;

        tracing::debug!(
            backend = %self.name,
            uri = %parts.uri,
            "Forwarding request"
        );

        let response = self.client.request(Request::from_parts(parts, body)).await?;
        let (parts, body) = response.into_parts();
        let response = Response::from_parts(parts, Body::new(body));

        let (response, error) = self.handler.classify(response).await;
        if let Some(error) = &error {
            tracing::debug!(
                backend = %self.name,
                status = error.status_code(),
                "Backend response classified as error"
            );
        }

        Ok((response, error))
    }
}
