pub mod auth_gateway;
pub mod auth_state;
pub mod document_store;
pub mod error;
pub mod memory_backend;

pub use auth_gateway::AuthGateway;
pub use auth_state::AuthState;
pub use document_store::{Document, DocumentStore, Fields};
pub use error::{AuthError, AuthResult, StoreError, StoreResult};
pub use memory_backend::MemoryBackend;
