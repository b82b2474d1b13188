pub mod api;
pub mod config;
pub mod constants;
pub mod defaults;
pub mod ident;
pub mod images;
pub mod models;
pub mod session;
pub mod store;
pub mod submit;
pub mod sync;

// Re-export the main entry points at the crate root for convenience
pub use api::BackendClient;
pub use config::CoreConfig;
pub use session::{FileSessionStore, SessionError, SessionGate, SessionStore};
pub use store::{EntityKind, PortfolioStore, ResourceState};
pub use submit::{QueryForm, SubmissionController, SubmissionStatus};
pub use sync::{FetchPolicy, SyncController};
