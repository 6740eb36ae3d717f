pub mod config;
pub mod handlers;
pub mod observability;
pub mod server;
pub mod state;

pub use config::AppConfig;
pub use server::{MockfhirServer, ServerBuilder, build_app};
pub use state::AppState;
