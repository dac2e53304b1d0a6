pub mod routes;
pub mod startup;
pub mod state;
pub mod swift_codes;
pub mod errors;
pub mod openapi;

pub use startup::{load_config, serve};
pub use state::ServerState;
