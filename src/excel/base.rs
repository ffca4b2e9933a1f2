use std::path::Path;
use tracing::{debug, info};

use crate::error::{AsignadorError, Result};
use crate::excel::io::{leer_filas_excel, leer_filas_excel_bytes, normalize_header};
use crate::models::{BaseLeads, Columna, EstadoAsignacion, Lead, Valor};

/// Lee la base principal desde un archivo Excel en disco.
pub fn leer_base_excel<P: AsRef<Path>>(path: P) -> Result<BaseLeads> {
    let filas = leer_filas_excel(path.as_ref())?;
    info!(path = %path.as_ref().display(), filas = filas.len(), "base leída");
    base_desde_tabla(filas)
}

/// Lee la base principal desde los bytes de un archivo subido.
pub fn leer_base_excel_bytes(bytes: Vec<u8>) -> Result<BaseLeads> {
    let filas = leer_filas_excel_bytes(bytes)?;
    base_desde_tabla(filas)
}

/// La primera fila de la tabla es el encabezado.
pub fn base_desde_tabla(mut tabla: Vec<Vec<Valor>>) -> Result<BaseLeads> {
    if tabla.is_empty() {
        return Err(AsignadorError::ColumnaFaltante("razon_social".to_string()));
    }
    let encabezados: Vec<String> = tabla.remove(0).iter().map(Valor::como_texto).collect();
    base_desde_filas(&encabezados, tabla)
}

/// Construye la base a partir de encabezados y filas ya leídas.
///
/// - `razon_social` e `id_cliente` son obligatorias.
/// - `asignado`, `id_asesor` y `dia_asignacion` se agregan al final si faltan
///   (con "NO", "" y ""). Si `asignado` existe, una celda vacía no es "NO".
/// - `dia_asignacion` se conserva tal cual llegó.
/// - Las filas completamente vacías se ignoran.
pub fn base_desde_filas<S: AsRef<str>>(encabezados: &[S], filas: Vec<Vec<Valor>>) -> Result<BaseLeads> {
    let mut columnas: Vec<Columna> = Vec::with_capacity(encabezados.len() + 3);
    // posición en la fila de cada columna reconocida
    let mut pos_id: Option<usize> = None;
    let mut pos_razon: Option<usize> = None;
    let mut pos_asignado: Option<usize> = None;
    let mut pos_asesor: Option<usize> = None;
    let mut pos_dia: Option<usize> = None;
    let mut pos_extras: Vec<usize> = Vec::new();

    for (i, h) in encabezados.iter().enumerate() {
        let crudo = h.as_ref();
        let slot = match normalize_header(crudo).as_str() {
            "id_cliente" => Some((&mut pos_id, Columna::IdCliente)),
            "razon_social" => Some((&mut pos_razon, Columna::RazonSocial)),
            "asignado" => Some((&mut pos_asignado, Columna::Asignado)),
            "id_asesor" => Some((&mut pos_asesor, Columna::IdAsesor)),
            "dia_asignacion" => Some((&mut pos_dia, Columna::DiaAsignacion)),
            _ => None,
        };

        match slot {
            // una columna repetida se conserva como extra
            Some((pos, columna)) if pos.is_none() => {
                *pos = Some(i);
                columnas.push(columna);
            }
            _ => {
                let nombre = if crudo.trim().is_empty() { format!("Unnamed: {}", i) } else { crudo.to_string() };
                columnas.push(Columna::Extra { nombre, indice: pos_extras.len() });
                pos_extras.push(i);
            }
        }
    }

    let pos_id = pos_id.ok_or_else(|| AsignadorError::ColumnaFaltante("id_cliente".to_string()))?;
    let pos_razon = pos_razon.ok_or_else(|| AsignadorError::ColumnaFaltante("razon_social".to_string()))?;
    if pos_asignado.is_none() {
        columnas.push(Columna::Asignado);
    }
    if pos_asesor.is_none() {
        columnas.push(Columna::IdAsesor);
    }
    if pos_dia.is_none() {
        columnas.push(Columna::DiaAsignacion);
    }

    let mut registros: Vec<Lead> = Vec::with_capacity(filas.len());
    let mut omitidas = 0usize;
    for fila in filas.iter() {
        if fila.iter().all(Valor::es_vacio) {
            omitidas += 1;
            continue;
        }
        let celda = |pos: Option<usize>| -> Valor {
            pos.and_then(|p| fila.get(p)).cloned().unwrap_or(Valor::Vacio)
        };

        registros.push(Lead {
            id_cliente: celda(Some(pos_id)),
            razon_social: celda(Some(pos_razon)).como_texto().trim().to_string(),
            asignado: match pos_asignado {
                Some(p) => EstadoAsignacion::desde_texto(&celda(Some(p)).como_texto()),
                None => EstadoAsignacion::No,
            },
            id_asesor: celda(pos_asesor).como_texto().trim().to_string(),
            dia_asignacion: celda(pos_dia),
            extras: pos_extras.iter().map(|p| celda(Some(*p))).collect(),
        });
    }

    if omitidas > 0 {
        debug!(omitidas, "filas vacías ignoradas");
    }

    Ok(BaseLeads::new(columnas, registros))
}
