pub mod api;
pub mod clock;
pub mod config;
pub mod containers;
pub mod document;
pub mod error;
pub mod format;
pub mod interop;
pub mod router;
pub mod routes;
pub mod session;
pub mod store;
pub mod views;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::AppConfig;
pub use error::{StoreError, SubmitError};
pub use router::{Navigation, Router, UiEvent, ViewToken};
pub use routes::{RouteName, RouteTable};
