pub mod base;
pub mod asignaciones;
pub mod descargas;
pub mod docs;

pub use base::*;
pub use asignaciones::*;
pub use descargas::*;
pub use docs::*;
