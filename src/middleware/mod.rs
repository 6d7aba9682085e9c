//! Middleware del sistema
//!
//! Este módulo contiene la configuración de CORS aplicada al router.

pub mod cors;

pub use cors::*;
