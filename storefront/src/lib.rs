//! Travel storefront client library.
//!
//! The crate is laid out hexagonally: [`domain`] holds catalogue and member
//! records, the session owner, view-model shaping and the port traits;
//! [`gateway`] is the single HTTP client with auth injection and error
//! normalization; [`outbound`] provides the reqwest, filesystem and
//! navigation adapters; [`config`] loads settings via OrthoConfig.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

pub mod config;
pub mod domain;
pub mod gateway;
pub mod outbound;

pub use config::StorefrontSettings;
