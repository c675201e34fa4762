//! Domain primitives, ports and page services.
//!
//! Purpose: Define the catalogue and member records exchanged with the
//! backend, the session owner, the pure view-model normalizer and the
//! services that compose them. Nothing in here knows about reqwest or the
//! filesystem; those live behind [`ports`].
//!
//! Public surface:
//! - ApiError: closed error union raised by every gateway call.
//! - Product, SlideItem, TripType: catalogue records.
//! - AuthStore, Session: the persisted client session.
//! - HomeFeed, ProductDetailView, SlideView: display-ready shapes.
//! - HomePageService, ProductDetailService, AccountService: page flows.

mod account_service;
mod auth;
mod catalogue;
mod catalogue_service;
mod error;
mod member;
pub mod normalizer;
pub mod ports;
mod session;
mod view_model;

pub use self::account_service::{AccountError, AccountService};
pub use self::auth::{
    CredentialsValidationError, LoginCredentials, MIN_PASSWORD_LEN, SignupForm, SignupRequest,
};
pub use self::catalogue::{Product, ProductId, SlideItem, TripType};
pub use self::catalogue_service::{HomePageService, ProductDetailService};
pub use self::error::{ApiError, CONFIG_ERROR_MESSAGE, NETWORK_ERROR_MESSAGE};
pub use self::member::{MemberId, MemberLoginResponse, MemberRegisterResponse};
pub use self::normalizer::{RatingError, StarKind};
pub use self::session::{AUTH_STORAGE_KEY, AuthStore, Session};
pub use self::view_model::{
    HomeFeed, INSTALLMENT_MONTHS, ProductCard, ProductDetailView, SlideView,
};

/// Result alias for gateway-backed calls.
pub type ApiResult<T> = Result<T, ApiError>;
