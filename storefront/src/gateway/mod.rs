//! HTTP gateway: the single client every backend call goes through.
//!
//! A [`Gateway`] wraps an [`HttpTransport`] with an ordered pipeline. Before
//! sending, [`RequestDecorator`]s add headers; after a response arrives,
//! [`ResponseStage`]s run in order and may fail the call. Every failure is
//! one of the [`ApiError`] variants.

mod config;
mod pipeline;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use crate::domain::ports::{
    HttpMethod, HttpTransport, Navigator, OutboundRequest, TransportError, TransportResponse,
};
use crate::domain::{ApiError, AuthStore};

pub use self::config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, GatewayConfig};
pub use self::pipeline::{
    BearerToken, JsonContentType, RequestDecorator, ResponseStage, SessionExpiryGuard,
    StatusGuard, error_message,
};

/// Assembles a [`Gateway`] pipeline.
pub struct GatewayBuilder {
    transport: Arc<dyn HttpTransport>,
    decorators: Vec<Arc<dyn RequestDecorator>>,
    stages: Vec<Arc<dyn ResponseStage>>,
}

impl GatewayBuilder {
    /// Append a request decorator; decorators run in insertion order.
    #[must_use]
    pub fn decorator(mut self, decorator: Arc<dyn RequestDecorator>) -> Self {
        self.decorators.push(decorator);
        self
    }

    /// Append a response stage; stages run in insertion order.
    #[must_use]
    pub fn stage(mut self, stage: Arc<dyn ResponseStage>) -> Self {
        self.stages.push(stage);
        self
    }

    /// Finish the pipeline.
    pub fn build(self) -> Gateway {
        Gateway {
            transport: self.transport,
            decorators: self.decorators,
            stages: self.stages,
        }
    }
}

/// Shared HTTP client with auth injection and error normalization.
///
/// # Examples
/// ```no_run
/// use std::sync::Arc;
///
/// use storefront::domain::{AuthStore, Product};
/// use storefront::gateway::{Gateway, GatewayConfig};
/// use storefront::outbound::http::ReqwestTransport;
/// use storefront::outbound::navigation::LoggingNavigator;
/// use storefront::outbound::storage::InMemorySessionStorage;
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let config = GatewayConfig::local()?;
/// let auth = Arc::new(AuthStore::open(Arc::new(InMemorySessionStorage::default())));
/// let gateway = Gateway::new(
///     Arc::new(ReqwestTransport::new(&config)?),
///     auth,
///     Arc::new(LoggingNavigator::default()),
/// );
/// let products: Vec<Product> = gateway.get("/api/products").await?;
/// println!("{} products", products.len());
/// # Ok(())
/// # }
/// ```
pub struct Gateway {
    transport: Arc<dyn HttpTransport>,
    decorators: Vec<Arc<dyn RequestDecorator>>,
    stages: Vec<Arc<dyn ResponseStage>>,
}

impl Gateway {
    /// Gateway with the standard pipeline: JSON headers, bearer token,
    /// forced logout on `401`, then status normalization.
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        auth: Arc<AuthStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self::standard(transport, auth, navigator).build()
    }

    /// Builder preloaded with the standard pipeline, for appending extras.
    pub fn standard(
        transport: Arc<dyn HttpTransport>,
        auth: Arc<AuthStore>,
        navigator: Arc<dyn Navigator>,
    ) -> GatewayBuilder {
        Self::builder(transport)
            .decorator(Arc::new(JsonContentType))
            .decorator(Arc::new(BearerToken::new(auth.clone())))
            .stage(Arc::new(SessionExpiryGuard::new(auth, navigator)))
            .stage(Arc::new(StatusGuard))
    }

    /// Builder with an empty pipeline.
    pub fn builder(transport: Arc<dyn HttpTransport>) -> GatewayBuilder {
        GatewayBuilder {
            transport,
            decorators: Vec::new(),
            stages: Vec::new(),
        }
    }

    /// `GET path`, decoding the response body as `T`.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(OutboundRequest::new(HttpMethod::Get, path))
            .await
    }

    /// `POST path` with a JSON `body`.
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute_with_body(HttpMethod::Post, path, body).await
    }

    /// `PUT path` with a JSON `body`.
    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute_with_body(HttpMethod::Put, path, body).await
    }

    /// `PATCH path` with a JSON `body`.
    pub async fn patch<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute_with_body(HttpMethod::Patch, path, body).await
    }

    /// `DELETE path`.
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(OutboundRequest::new(HttpMethod::Delete, path))
            .await
    }

    async fn execute_with_body<T, B>(
        &self,
        method: HttpMethod,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_value(body).map_err(|err| {
            ApiError::config_with(format!("request body could not be encoded: {err}"))
        })?;
        self.execute(OutboundRequest::new(method, path).with_body(body))
            .await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        mut request: OutboundRequest,
    ) -> Result<T, ApiError> {
        for decorator in &self.decorators {
            decorator.decorate(&mut request);
        }
        let method = request.method();
        let path = request.path().to_owned();
        let authenticated = request.header("authorization").is_some();
        debug!(%method, %path, authenticated, "sending request");

        let response = self.transport.send(request).await.map_err(|failure| {
            let mapped = map_transport_error(&failure);
            error!(
                %method,
                %path,
                category = mapped.category(),
                cause = %failure,
                "request failed"
            );
            mapped
        })?;

        for stage in &self.stages {
            stage.inspect(&response).inspect_err(|err| {
                error!(
                    %method,
                    %path,
                    category = err.category(),
                    status = response.status,
                    error = %err,
                    "request failed"
                );
            })?;
        }
        debug!(%method, %path, status = response.status, "request succeeded");
        decode_payload(&response).inspect_err(|err| {
            error!(
                %method,
                %path,
                category = err.category(),
                error = %err,
                "request failed"
            );
        })
    }
}

fn map_transport_error(error: &TransportError) -> ApiError {
    match error {
        TransportError::NoResponse { .. } => ApiError::network(),
        TransportError::InvalidRequest { message } if message.is_empty() => ApiError::config(),
        TransportError::InvalidRequest { message } => ApiError::config_with(message.as_str()),
    }
}

fn decode_payload<T: DeserializeOwned>(response: &TransportResponse) -> Result<T, ApiError> {
    let body: &[u8] = if response.body.iter().all(u8::is_ascii_whitespace) {
        b"null"
    } else {
        &response.body
    };
    serde_json::from_slice(body).map_err(|err| ApiError::decode(err.to_string()))
}
