use chrono::NaiveDate;
use std::io::Cursor;
use umya_spreadsheet::{new_file, writer, Worksheet};

use crate::error::{AsignadorError, Result};
use crate::models::{BaseLeads, FilaVicidial, Valor};

pub const MIME_XLSX: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

const HOJA: &str = "Sheet1";

const FORMATO_FECHA: &str = "yyyy-mm-dd";
const FORMATO_FECHA_HORA: &str = "yyyy-mm-dd hh:mm:ss";

/// `carga_vicidial_<MM-DD>.xlsx`
pub fn nombre_archivo_vicidial(fecha: NaiveDate) -> String {
    format!("carga_vicidial_{}.xlsx", fecha.format("%m-%d"))
}

/// `base_actualizada_<MM-DD>.xlsx`
pub fn nombre_archivo_base(fecha: NaiveDate) -> String {
    format!("base_actualizada_{}.xlsx", fecha.format("%m-%d"))
}

fn escribir_celda(hoja: &mut Worksheet, col: u32, row: u32, valor: &Valor) {
    match valor {
        Valor::Vacio => {}
        Valor::Texto(s) => {
            hoja.get_cell_mut((col, row)).set_value_string(s.as_str());
        }
        Valor::Numero(f) => {
            hoja.get_cell_mut((col, row)).set_value_number(*f);
        }
        Valor::Fecha(serial) => {
            let formato = if serial.fract() == 0.0 { FORMATO_FECHA } else { FORMATO_FECHA_HORA };
            let celda = hoja.get_cell_mut((col, row));
            celda.set_value_number(*serial);
            celda.get_style_mut().get_number_format_mut().set_format_code(formato);
        }
        Valor::Booleano(b) => {
            hoja.get_cell_mut((col, row)).set_value_bool(*b);
        }
    }
}

/// Escribe una tabla (encabezado + filas) en un libro nuevo y devuelve los bytes xlsx.
fn tabla_a_xlsx<I>(encabezados: &[String], filas: I) -> Result<Vec<u8>>
where
    I: IntoIterator<Item = Vec<Valor>>,
{
    let mut book = new_file();
    let hoja = book
        .get_sheet_by_name_mut(HOJA)
        .ok_or_else(|| AsignadorError::Escritura(format!("hoja '{}' no encontrada", HOJA)))?;

    for (c, h) in encabezados.iter().enumerate() {
        hoja.get_cell_mut((c as u32 + 1, 1u32)).set_value_string(h.as_str());
    }
    for (r, fila) in filas.into_iter().enumerate() {
        for (c, valor) in fila.iter().enumerate() {
            escribir_celda(hoja, c as u32 + 1, r as u32 + 2, valor);
        }
    }

    let mut buffer = Cursor::new(Vec::new());
    writer::xlsx::write_writer(&book, &mut buffer).map_err(|e| AsignadorError::Escritura(e.to_string()))?;
    Ok(buffer.into_inner())
}

/// Archivo de carga Vicidial: `id_cliente` (texto de 8 caracteres) e `id_asesor`.
pub fn escribir_vicidial(filas: &[FilaVicidial]) -> Result<Vec<u8>> {
    let encabezados = vec!["id_cliente".to_string(), "id_asesor".to_string()];
    tabla_a_xlsx(
        &encabezados,
        filas.iter().map(|f| {
            vec![
                Valor::Texto(f.id_cliente.clone()),
                Valor::Texto(f.id_asesor.clone()),
            ]
        }),
    )
}

/// Base completa con las columnas de estado actualizadas.
pub fn escribir_base(base: &BaseLeads) -> Result<Vec<u8>> {
    let encabezados = base.nombres_columnas();
    tabla_a_xlsx(
        &encabezados,
        base.registros()
            .iter()
            .map(|lead| base.columnas().iter().map(|c| base.celda(lead, c)).collect::<Vec<Valor>>()),
    )
}
