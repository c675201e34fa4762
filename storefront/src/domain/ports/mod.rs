//! Domain ports defining the edges of the hexagon.
//!
//! Driven ports (`SessionStorage`, `HttpTransport`, `Navigator`) describe what
//! the gateway and session store need from the outside world. Driving ports
//! (`CatalogueSource`, `MemberAccounts`) are what page services call; the
//! gateway-backed adapter implements them.

mod catalogue_source;
mod http_transport;
mod member_accounts;
mod navigator;
mod session_storage;

#[cfg(test)]
pub use catalogue_source::MockCatalogueSource;
pub use catalogue_source::CatalogueSource;
#[cfg(test)]
pub use http_transport::MockHttpTransport;
pub use http_transport::{
    HttpMethod, HttpTransport, OutboundRequest, TransportError, TransportResponse,
};
#[cfg(test)]
pub use member_accounts::MockMemberAccounts;
pub use member_accounts::MemberAccounts;
#[cfg(test)]
pub use navigator::MockNavigator;
pub use navigator::{APPLICATION_ROOT, Navigator};
#[cfg(test)]
pub use session_storage::MockSessionStorage;
pub use session_storage::{SessionStorage, SessionStorageError};
