//! Módulo de base de datos
//!
//! Maneja el arranque de SQLite, el esquema y la sesión por request

pub mod connection;
pub mod schema;
pub mod session;

pub use connection::{DatabaseConnection, SeedOutcome};
pub use session::DbSession;
