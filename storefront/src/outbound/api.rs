//! Gateway-backed adapter for the catalogue and member endpoints.
//!
//! Request bodies are borrowed wire DTOs so validated domain inputs are
//! serialised without copying secrets into new owned strings.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::ports::{CatalogueSource, MemberAccounts};
use crate::domain::{
    ApiError, LoginCredentials, MemberLoginResponse, MemberRegisterResponse, Product, ProductId,
    SignupRequest, SlideItem,
};
use crate::gateway::Gateway;

const MAIN_SLIDES_PATH: &str = "/api/main-slides";
const PRODUCTS_PATH: &str = "/api/products";
const REGISTER_PATH: &str = "/api/members/register";
const LOGIN_PATH: &str = "/api/members/login";

/// Body of `POST /api/members/register`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct MemberRegisterRequest<'a> {
    email: &'a str,
    password: &'a str,
    marketing_agreed: bool,
}

/// Body of `POST /api/members/login`.
#[derive(Debug, Serialize)]
struct MemberLoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// Storefront endpoints reached through one [`Gateway`].
#[derive(Clone)]
pub struct GatewayStorefrontApi {
    gateway: Arc<Gateway>,
}

impl GatewayStorefrontApi {
    /// Adapter over `gateway`.
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self { gateway }
    }
}

fn product_path(id: ProductId) -> String {
    format!("{PRODUCTS_PATH}/{id}")
}

#[async_trait]
impl CatalogueSource for GatewayStorefrontApi {
    async fn main_slides(&self) -> Result<Vec<SlideItem>, ApiError> {
        self.gateway.get(MAIN_SLIDES_PATH).await
    }

    async fn products(&self) -> Result<Vec<Product>, ApiError> {
        self.gateway.get(PRODUCTS_PATH).await
    }

    async fn product(&self, id: ProductId) -> Result<Product, ApiError> {
        self.gateway.get(&product_path(id)).await
    }
}

#[async_trait]
impl MemberAccounts for GatewayStorefrontApi {
    async fn register(&self, request: &SignupRequest) -> Result<MemberRegisterResponse, ApiError> {
        let body = MemberRegisterRequest {
            email: request.email(),
            password: request.password(),
            marketing_agreed: request.marketing_agreed(),
        };
        self.gateway.post(REGISTER_PATH, &body).await
    }

    async fn login(
        &self,
        credentials: &LoginCredentials,
    ) -> Result<MemberLoginResponse, ApiError> {
        let body = MemberLoginRequest {
            email: credentials.email(),
            password: credentials.password(),
        };
        self.gateway.post(LOGIN_PATH, &body).await
    }
}

#[cfg(test)]
mod tests {
    //! Endpoint and body shape coverage with a mocked transport.
    use super::*;
    use crate::domain::ports::{HttpMethod, MockHttpTransport, MockNavigator, TransportResponse};
    use crate::domain::{AuthStore, SignupForm};
    use crate::outbound::storage::InMemorySessionStorage;
    use serde_json::json;
    use zeroize::Zeroizing;

    fn api(transport: MockHttpTransport) -> GatewayStorefrontApi {
        let auth = Arc::new(AuthStore::open(Arc::new(InMemorySessionStorage::default())));
        let gateway = Gateway::new(Arc::new(transport), auth, Arc::new(MockNavigator::new()));
        GatewayStorefrontApi::new(Arc::new(gateway))
    }

    #[tokio::test]
    async fn product_uses_the_id_path() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_send()
            .withf(|request| request.method() == HttpMethod::Get && request.path() == "/api/products/12")
            .times(1)
            .returning(|_| {
                let body = json!({
                    "id": 12, "tripType": "domestic", "title": "Jeju",
                    "prevPrice": 300, "currPrice": 250, "rating": 4.1, "sold": 3
                });
                Ok(TransportResponse::new(200, body.to_string()))
            });

        let product = api(transport).product(12).await.expect("product decodes");

        assert_eq!(product.title, "Jeju");
    }

    #[tokio::test]
    async fn slides_hit_the_slides_endpoint() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_send()
            .withf(|request| request.path() == "/api/main-slides")
            .times(1)
            .returning(|_| Ok(TransportResponse::new(200, "[]")));

        let slides = api(transport).main_slides().await.expect("slides decode");

        assert!(slides.is_empty());
    }

    #[tokio::test]
    async fn register_sends_camel_case_body() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_send()
            .withf(|request| {
                request.path() == "/api/members/register"
                    && request.body()
                        == Some(&json!({
                            "email": "new@example.com",
                            "password": "secret1",
                            "marketingAgreed": true
                        }))
            })
            .times(1)
            .returning(|_| {
                Ok(TransportResponse::new(
                    201,
                    r#"{"id":4,"email":"new@example.com","marketingAgreed":true}"#,
                ))
            });
        let form = SignupForm {
            email: "new@example.com".to_owned(),
            password: Zeroizing::new("secret1".to_owned()),
            confirm: Zeroizing::new("secret1".to_owned()),
            agreed: true,
        };
        let request = SignupRequest::try_from_form(&form).expect("valid form");

        let member = api(transport).register(&request).await.expect("registered");

        assert_eq!(member.id, 4);
        assert!(member.marketing_agreed);
    }

    #[tokio::test]
    async fn login_posts_credentials() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_send()
            .withf(|request| {
                request.method() == HttpMethod::Post
                    && request.path() == "/api/members/login"
                    && request.body()
                        == Some(&json!({"email": "user@example.com", "password": "pw"}))
            })
            .times(1)
            .returning(|_| {
                Ok(TransportResponse::new(
                    200,
                    r#"{"id":2,"email":"user@example.com","token":"jwt"}"#,
                ))
            });
        let credentials = LoginCredentials::try_from_parts("user@example.com", "pw").expect("valid");

        let response = api(transport).login(&credentials).await.expect("logged in");

        assert_eq!(response.token, "jwt");
    }
}
