//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **http**: reqwest-backed `HttpTransport`
//! - **storage**: in-memory and file-backed `SessionStorage`
//! - **navigation**: logging `Navigator` for non-browser hosts
//! - **api**: catalogue and member endpoints over the gateway
//!
//! Adapters are thin translators between domain types and infrastructure
//! representations. They contain no business logic.

pub mod api;
pub mod http;
pub mod navigation;
pub mod storage;
