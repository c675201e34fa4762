//! Reqwest-backed transport adapter.
//!
//! This adapter owns transport details only: URL joining, timeout, header and
//! body serialisation. Status classification and payload decoding belong to
//! the gateway.
//!
//! A non-2xx response whose body cannot be read is still returned, with an
//! empty body, so the gateway's stages see the status. A 2xx response with an
//! unreadable body is a transport failure.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, StatusCode};
use tracing::warn;

use crate::domain::ports::{
    HttpMethod, HttpTransport, OutboundRequest, TransportError, TransportResponse,
};
use crate::gateway::GatewayConfig;

/// Transport that sends requests to one configured origin.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    config: GatewayConfig,
}

impl ReqwestTransport {
    /// Build a transport using a reqwest client with the configured timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(config: &GatewayConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self {
            client,
            config: config.clone(),
        })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: OutboundRequest) -> Result<TransportResponse, TransportError> {
        let url = self
            .config
            .endpoint(request.path())
            .map_err(|error| TransportError::invalid_request(error.to_string()))?;
        let headers = build_headers(&request)?;

        let mut builder = self
            .client
            .request(method(request.method()), url)
            .headers(headers);
        if let Some(body) = request.body() {
            let encoded = serde_json::to_vec(body)
                .map_err(|error| TransportError::invalid_request(error.to_string()))?;
            builder = builder.body(encoded);
        }

        let response = builder.send().await.map_err(map_transport_error)?;
        let status = response.status();
        let body = match response.bytes().await {
            Ok(body) => body.to_vec(),
            Err(error) => unread_body(status, error)?,
        };
        Ok(TransportResponse::new(status.as_u16(), body))
    }
}

fn unread_body(status: StatusCode, error: reqwest::Error) -> Result<Vec<u8>, TransportError> {
    if status.is_success() {
        return Err(map_transport_error(error));
    }
    warn!(
        status = status.as_u16(),
        error = %error,
        "error response body unreadable; continuing without it"
    );
    Ok(Vec::new())
}

fn method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Patch => Method::PATCH,
        HttpMethod::Delete => Method::DELETE,
    }
}

fn build_headers(request: &OutboundRequest) -> Result<HeaderMap, TransportError> {
    let mut headers = HeaderMap::new();
    for (name, value) in request.headers() {
        let name = HeaderName::from_bytes(name.as_bytes()).map_err(|error| {
            TransportError::invalid_request(format!("header name {name:?}: {error}"))
        })?;
        let value = HeaderValue::from_str(value).map_err(|error| {
            TransportError::invalid_request(format!("header {name} value: {error}"))
        })?;
        headers.insert(name, value);
    }
    Ok(headers)
}

fn map_transport_error(error: reqwest::Error) -> TransportError {
    if error.is_builder() {
        TransportError::invalid_request(error.to_string())
    } else {
        TransportError::no_response(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for non-network mapping helpers.

    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(HttpMethod::Get, Method::GET)]
    #[case(HttpMethod::Post, Method::POST)]
    #[case(HttpMethod::Put, Method::PUT)]
    #[case(HttpMethod::Patch, Method::PATCH)]
    #[case(HttpMethod::Delete, Method::DELETE)]
    fn maps_methods(#[case] verb: HttpMethod, #[case] expected: Method) {
        assert_eq!(method(verb), expected);
    }

    #[test]
    fn copies_headers_onto_the_request() {
        let mut request = OutboundRequest::new(HttpMethod::Get, "/api/products");
        request.set_header("Authorization", "Bearer t");
        request.set_header("Accept", "application/json");

        let headers = build_headers(&request).expect("headers are valid");

        assert_eq!(headers.get("authorization").map(HeaderValue::as_bytes), Some(&b"Bearer t"[..]));
        assert_eq!(headers.len(), 2);
    }

    #[test]
    fn rejects_header_values_with_control_characters() {
        let mut request = OutboundRequest::new(HttpMethod::Get, "/x");
        request.set_header("authorization", "Bearer bad\nvalue");

        let error = build_headers(&request).expect_err("newline is invalid");

        assert!(matches!(error, TransportError::InvalidRequest { .. }));
    }
}
