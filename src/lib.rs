pub mod app;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::data_service::DataService;
pub use domain::{DataError, UserDirectory, UserRecord};
pub use storage::{DocumentStore, StoreError};
