//! Módulo `excel`: lectura de la base principal y escritura de los archivos
//! de salida.
//!
//! Submódulos:
//! - `io`: conversión de celdas de calamine y lectura de la primera hoja
//! - `base`: construcción de `BaseLeads` (columnas obligatorias y backfill)
//! - `exportar`: carga Vicidial y base actualizada en xlsx

/// Helpers de IO y utilidades para parsing de Excel
mod io;

/// Lectura de la base principal: `leer_base_excel`
mod base;

/// Escritura de los dos archivos de salida
mod exportar;

pub use io::{data_to_valor, normalize_header};
pub use base::{base_desde_filas, base_desde_tabla, leer_base_excel, leer_base_excel_bytes};
pub use exportar::{escribir_base, escribir_vicidial, nombre_archivo_base, nombre_archivo_vicidial, MIME_XLSX};
