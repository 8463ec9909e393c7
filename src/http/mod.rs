//! # HTTP Surface
//!
//! Route registrar, write gate, server, and configuration.

pub mod config;
pub mod routes;
pub mod server;
pub mod write_gate;

pub use config::ServiceConfig;
pub use routes::AppState;
pub use server::HttpServer;
pub use write_gate::WriteGate;
