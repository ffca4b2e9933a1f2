//! Libro de asignaciones: asesor -> (razón social -> cantidad solicitada).
//!
//! Conserva el orden de inserción de asesores y, dentro de cada asesor, de
//! razones sociales. Ese orden es el que usa `ejecutar_asignacion`.

use serde::Serialize;
use tracing::debug;

use crate::error::{AsignadorError, Result};
use crate::models::BaseLeads;

/// Una solicitud (asesor, razón social, cantidad) tal como vive en el libro.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Solicitud<'a> {
    pub id_asesor: &'a str,
    pub razon_social: &'a str,
    pub cantidad: u32,
}

/// Solicitud junto con los leads disponibles en este momento.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResumenSolicitud {
    pub id_asesor: String,
    pub razon_social: String,
    pub cantidad: u32,
    pub disponibles: usize,
}

#[derive(Debug, Clone, Default)]
pub struct LibroAsignaciones {
    asesores: Vec<(String, Vec<(String, u32)>)>,
}

impl LibroAsignaciones {
    pub fn new() -> Self {
        Self::default()
    }

    /// Agrega o reemplaza la cantidad pedida para (asesor, razón social).
    /// Volver a agregar el mismo par sustituye la cantidad anterior; no suma.
    pub fn agregar(&mut self, id_asesor: &str, razon_social: &str, cantidad: u32) -> Result<()> {
        let id_asesor = id_asesor.trim();
        if id_asesor.is_empty() {
            return Err(AsignadorError::AsesorVacio);
        }
        if cantidad < 1 {
            return Err(AsignadorError::CantidadInvalida(cantidad));
        }
        let razon_social = razon_social.trim();

        let idx = match self.asesores.iter().position(|(a, _)| a == id_asesor) {
            Some(i) => i,
            None => {
                self.asesores.push((id_asesor.to_string(), Vec::new()));
                self.asesores.len() - 1
            }
        };
        let razones = &mut self.asesores[idx].1;
        match razones.iter_mut().find(|(r, _)| r == razon_social) {
            Some(entry) => entry.1 = cantidad,
            None => razones.push((razon_social.to_string(), cantidad)),
        }

        debug!(id_asesor, razon_social, cantidad, "solicitud registrada");
        Ok(())
    }

    /// Recorre las solicitudes en orden de inserción. Cada llamada empieza de nuevo.
    pub fn solicitudes(&self) -> impl Iterator<Item = Solicitud<'_>> + '_ {
        self.asesores.iter().flat_map(|(asesor, razones)| {
            razones.iter().map(move |(razon, cantidad)| Solicitud {
                id_asesor: asesor.as_str(),
                razon_social: razon.as_str(),
                cantidad: *cantidad,
            })
        })
    }

    /// Cantidad pedida para el par, si existe.
    pub fn cantidad(&self, id_asesor: &str, razon_social: &str) -> Option<u32> {
        self.solicitudes()
            .find(|s| s.id_asesor == id_asesor && s.razon_social == razon_social)
            .map(|s| s.cantidad)
    }

    /// Solicitudes con los disponibles actuales de la base, para mostrar antes de asignar.
    pub fn resumen(&self, base: &BaseLeads) -> Vec<ResumenSolicitud> {
        self.solicitudes()
            .map(|s| ResumenSolicitud {
                id_asesor: s.id_asesor.to_string(),
                razon_social: s.razon_social.to_string(),
                cantidad: s.cantidad,
                disponibles: disponibles(s.razon_social, base),
            })
            .collect()
    }

    /// Número de solicitudes (pares asesor/razón social).
    pub fn len(&self) -> usize {
        self.asesores.iter().map(|(_, r)| r.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn limpiar(&mut self) {
        self.asesores.clear();
    }
}

/// Leads con la razón social indicada y `asignado == "NO"`. Solo lectura.
pub fn disponibles(razon_social: &str, base: &BaseLeads) -> usize {
    base.disponibles(razon_social)
}
