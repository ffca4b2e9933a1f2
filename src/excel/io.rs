use calamine::{open_workbook_auto, open_workbook_auto_from_rs, Data, Reader, Sheets};
use std::io::{Cursor, Read, Seek};
use std::path::Path;

use crate::error::{AsignadorError, Result};
use crate::models::Valor;

/// Convierte un `Data` de calamine a `Valor` conservando el tipo de la celda.
/// El texto se guarda sin recortar; solo la cadena vacía se trata como celda vacía.
pub fn data_to_valor(d: &Data) -> Valor {
    match d {
        Data::String(s) if s.is_empty() => Valor::Vacio,
        Data::String(s) => Valor::Texto(s.clone()),
        Data::Float(f) => Valor::Numero(*f),
        Data::Int(i) => Valor::Numero(*i as f64),
        Data::Bool(b) => Valor::Booleano(*b),
        Data::Empty => Valor::Vacio,
        Data::Error(_) => Valor::Vacio,
        Data::DateTime(dt) if dt.is_duration() => Valor::Numero(dt.as_f64()),
        Data::DateTime(dt) => Valor::Fecha(dt.as_f64()),
        Data::DateTimeIso(s) => Valor::Texto(s.clone()),
        Data::DurationIso(s) => Valor::Texto(s.clone()),
    }
}

/// Normaliza encabezados eliminando espacios y pasando a minúsculas.
pub fn normalize_header(s: &str) -> String {
    s.to_lowercase().chars().filter(|c| !c.is_whitespace()).collect()
}

/// Lee la primera hoja del libro y la devuelve fila por fila.
fn filas_primera_hoja<RS: Read + Seek>(workbook: &mut Sheets<RS>) -> Result<Vec<Vec<Valor>>> {
    let range = match workbook.worksheet_range_at(0) {
        Some(Ok(r)) => r,
        Some(Err(e)) => return Err(AsignadorError::Lectura(e.to_string())),
        None => return Err(AsignadorError::HojaNoEncontrada),
    };

    Ok(range
        .rows()
        .map(|r| r.iter().map(data_to_valor).collect())
        .collect())
}

/// Lee la primera hoja de un archivo en disco (xlsx/xls/xlsb/ods).
pub fn leer_filas_excel<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<Valor>>> {
    let mut workbook = open_workbook_auto(path).map_err(|e| AsignadorError::Lectura(e.to_string()))?;
    filas_primera_hoja(&mut workbook)
}

/// Igual que `leer_filas_excel` pero a partir de los bytes de un archivo subido.
pub fn leer_filas_excel_bytes(bytes: Vec<u8>) -> Result<Vec<Vec<Valor>>> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
        .map_err(|e| AsignadorError::Lectura(e.to_string()))?;
    filas_primera_hoja(&mut workbook)
}
