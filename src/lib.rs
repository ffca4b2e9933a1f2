// Biblioteca raíz del crate `asignador_vicidial`.
// Asigna leads de la base principal a asesores en cantidades fijas y genera
// la carga Vicidial y la base actualizada.
pub mod error;
pub mod config;
pub mod models;
pub mod excel;
pub mod algorithm;
pub mod sesion;
pub mod api_json;
pub mod server;

/// Ejecuta el servidor HTTP (reexport para facilitar uso desde `main`)
pub use server::run_server;
pub use error::{AsignadorError, Result};
