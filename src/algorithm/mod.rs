// Lógica de asignación: libro de solicitudes y pasada de asignación.
pub mod libro;
pub mod asignacion;

pub use libro::{disponibles, LibroAsignaciones, ResumenSolicitud, Solicitud};
pub use asignacion::{ejecutar_asignacion, rellenar_id_cliente, ResultadoAsignacion, ANCHO_ID_CLIENTE};
