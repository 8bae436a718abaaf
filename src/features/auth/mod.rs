pub mod model;
pub mod service;
pub mod session_store;

pub use model::AuthSession;
pub use service::AuthService;
pub use session_store::SessionStore;
