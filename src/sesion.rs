//! Estado de una sesión de trabajo: base cargada, libro de solicitudes y
//! archivos generados por la última asignación.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use tracing::info;

use crate::algorithm::{ejecutar_asignacion, LibroAsignaciones, ResultadoAsignacion, ResumenSolicitud};
use crate::error::{AsignadorError, Result};
use crate::excel;
use crate::models::BaseLeads;

/// Un archivo listo para descargar.
#[derive(Debug, Clone)]
pub struct ArchivoGenerado {
    pub nombre: String,
    pub contenido: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct Descargas {
    pub vicidial: ArchivoGenerado,
    pub base: ArchivoGenerado,
}

/// Resumen de una pasada para devolver al operador.
#[derive(Debug, Clone, Serialize)]
pub struct ResumenAsignacion {
    pub total_asignado: usize,
    pub avisos: Vec<crate::models::AvisoFaltante>,
    pub archivo_vicidial: String,
    pub archivo_base: String,
}

#[derive(Debug, Default)]
pub struct Sesion {
    base: Option<BaseLeads>,
    libro: LibroAsignaciones,
    descargas: Option<Descargas>,
}

impl Sesion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reemplaza la base. Las solicitudes acumuladas se mantienen; las
    /// descargas de la base anterior se descartan.
    pub fn cargar_base(&mut self, base: BaseLeads) {
        info!(filas = base.len(), columnas = base.columnas().len(), "base cargada");
        self.base = Some(base);
        self.descargas = None;
    }

    pub fn base(&self) -> Option<&BaseLeads> {
        self.base.as_ref()
    }

    pub fn libro(&self) -> &LibroAsignaciones {
        &self.libro
    }

    pub fn razones_sociales(&self) -> Result<Vec<String>> {
        self.base
            .as_ref()
            .map(BaseLeads::razones_sociales)
            .ok_or(AsignadorError::BaseNoCargada)
    }

    /// Agrega una solicitud. Con una base cargada, la razón social debe existir en ella.
    pub fn agregar_solicitud(&mut self, id_asesor: &str, razon_social: &str, cantidad: u32) -> Result<()> {
        if let Some(base) = &self.base {
            let razon = razon_social.trim();
            if !base.contiene_razon_social(razon) {
                return Err(AsignadorError::RazonSocialDesconocida(razon.to_string()));
            }
        }
        self.libro.agregar(id_asesor, razon_social, cantidad)
    }

    pub fn resumen(&self) -> Vec<ResumenSolicitud> {
        match &self.base {
            Some(base) => self.libro.resumen(base),
            None => self.libro.resumen(&BaseLeads::default()),
        }
    }

    pub fn limpiar_solicitudes(&mut self) {
        self.libro.limpiar();
    }

    /// Ejecuta una pasada con la fecha `hoy` (día de asignación y sufijo de
    /// los archivos) y deja listos los dos archivos para descargar.
    pub fn asignar(&mut self, hoy: NaiveDate) -> Result<(ResultadoAsignacion, ResumenAsignacion)> {
        self.asignar_con(hoy, generar_descargas)
    }

    /// Las descargas anteriores se descartan en cuanto la base cambia, aunque
    /// `generar` falle después.
    fn asignar_con<F>(&mut self, hoy: NaiveDate, generar: F) -> Result<(ResultadoAsignacion, ResumenAsignacion)>
    where
        F: FnOnce(&ResultadoAsignacion, &BaseLeads, NaiveDate) -> Result<Descargas>,
    {
        let base = self.base.as_mut().ok_or(AsignadorError::BaseNoCargada)?;
        let resultado = ejecutar_asignacion(base, &self.libro, hoy.day())?;
        self.descargas = None;

        let descargas = generar(&resultado, base, hoy)?;
        let resumen = ResumenAsignacion {
            total_asignado: resultado.total_asignado(),
            avisos: resultado.avisos.clone(),
            archivo_vicidial: descargas.vicidial.nombre.clone(),
            archivo_base: descargas.base.nombre.clone(),
        };
        self.descargas = Some(descargas);
        Ok((resultado, resumen))
    }

    pub fn descargas(&self) -> Result<&Descargas> {
        self.descargas.as_ref().ok_or(AsignadorError::SinResultado)
    }
}

fn generar_descargas(resultado: &ResultadoAsignacion, base: &BaseLeads, hoy: NaiveDate) -> Result<Descargas> {
    Ok(Descargas {
        vicidial: ArchivoGenerado {
            nombre: excel::nombre_archivo_vicidial(hoy),
            contenido: excel::escribir_vicidial(&resultado.vicidial)?,
        },
        base: ArchivoGenerado {
            nombre: excel::nombre_archivo_base(hoy),
            contenido: excel::escribir_base(base)?,
        },
    })
}
