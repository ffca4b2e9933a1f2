use serde::Serialize;
use tracing::{info, warn};

use crate::algorithm::libro::LibroAsignaciones;
use crate::error::{AsignadorError, Result};
use crate::models::{AvisoFaltante, BaseLeads, FilaVicidial};

/// Ancho fijo de `id_cliente` en la carga Vicidial.
pub const ANCHO_ID_CLIENTE: usize = 8;

/// Resultado de una pasada de asignación. La base actualizada es la misma
/// `BaseLeads` que se pasó a `ejecutar_asignacion`, modificada en el lugar.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ResultadoAsignacion {
    /// Índices de fila asignados en esta pasada, en el orden en que se procesaron las solicitudes.
    pub seleccionados: Vec<usize>,
    pub vicidial: Vec<FilaVicidial>,
    pub avisos: Vec<AvisoFaltante>,
}

impl ResultadoAsignacion {
    pub fn total_asignado(&self) -> usize {
        self.seleccionados.len()
    }
}

/// Rellena con ceros a la izquierda hasta `ANCHO_ID_CLIENTE` caracteres.
/// Los valores más largos no se truncan. Un signo inicial se mantiene delante
/// de los ceros (`-42` -> `-0000042`).
pub fn rellenar_id_cliente(id: &str) -> String {
    let largo = id.chars().count();
    if largo >= ANCHO_ID_CLIENTE {
        return id.to_string();
    }
    let ceros = "0".repeat(ANCHO_ID_CLIENTE - largo);
    match id.chars().next() {
        Some(signo @ ('+' | '-')) => format!("{}{}{}", signo, ceros, &id[signo.len_utf8()..]),
        _ => format!("{}{}", ceros, id),
    }
}

/// Ejecuta una pasada de asignación sobre `base`.
///
/// Para cada solicitud del libro (en orden de asesor y luego de razón social)
/// toma las primeras `cantidad` filas con esa razón social y `asignado == "NO"`,
/// en el orden actual de la base, y las marca como asignadas al asesor con el
/// día `dia`. Las filas marcadas ya no están disponibles para las solicitudes
/// siguientes de la misma pasada. Si hay menos filas que las pedidas se asigna
/// lo que haya y se agrega un `AvisoFaltante`.
///
/// Falla con `LibroVacio` si no hay solicitudes; en ese caso la base no cambia.
pub fn ejecutar_asignacion(base: &mut BaseLeads, libro: &LibroAsignaciones, dia: u32) -> Result<ResultadoAsignacion> {
    if libro.is_empty() {
        return Err(AsignadorError::LibroVacio);
    }

    let mut resultado = ResultadoAsignacion::default();

    for solicitud in libro.solicitudes() {
        let pedidos = solicitud.cantidad as usize;
        let tomar: Vec<usize> = base.indices_disponibles(solicitud.razon_social).take(pedidos).collect();

        if tomar.len() < pedidos {
            let aviso = AvisoFaltante {
                id_asesor: solicitud.id_asesor.to_string(),
                razon_social: solicitud.razon_social.to_string(),
                disponibles: tomar.len(),
                solicitados: solicitud.cantidad,
            };
            warn!("{}", aviso);
            resultado.avisos.push(aviso);
        }

        for idx in tomar {
            if let Some(lead) = base.marcar_asignado(idx, solicitud.id_asesor, dia) {
                resultado.vicidial.push(FilaVicidial {
                    id_cliente: rellenar_id_cliente(&lead.id_cliente.como_texto()),
                    id_asesor: lead.id_asesor.clone(),
                });
                resultado.seleccionados.push(idx);
            }
        }
    }

    info!(
        total = resultado.total_asignado(),
        avisos = resultado.avisos.len(),
        "asignación completada"
    );
    Ok(resultado)
}
