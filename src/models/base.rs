use serde::Serialize;
use std::collections::BTreeSet;

use super::{Columna, EstadoAsignacion, Lead, Valor};

/// Base principal de leads: columnas en orden de exportación y filas en el
/// orden del archivo. Los índices de fila son estables durante toda la sesión.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BaseLeads {
    columnas: Vec<Columna>,
    registros: Vec<Lead>,
}

impl BaseLeads {
    pub fn new(columnas: Vec<Columna>, registros: Vec<Lead>) -> Self {
        BaseLeads { columnas, registros }
    }

    pub fn columnas(&self) -> &[Columna] {
        &self.columnas
    }

    pub fn nombres_columnas(&self) -> Vec<String> {
        self.columnas.iter().map(|c| c.nombre().to_string()).collect()
    }

    pub fn registros(&self) -> &[Lead] {
        &self.registros
    }

    pub fn registro(&self, idx: usize) -> Option<&Lead> {
        self.registros.get(idx)
    }

    pub fn len(&self) -> usize {
        self.registros.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registros.is_empty()
    }

    /// Índices de las filas sin asignar de la razón social, en orden de la base.
    pub fn indices_disponibles<'a>(&'a self, razon_social: &'a str) -> impl Iterator<Item = usize> + 'a {
        self.registros
            .iter()
            .enumerate()
            .filter(move |(_, lead)| lead.disponible_para(razon_social))
            .map(|(idx, _)| idx)
    }

    /// Cantidad de filas con `asignado == "NO"` para la razón social.
    pub fn disponibles(&self, razon_social: &str) -> usize {
        self.indices_disponibles(razon_social).count()
    }

    /// Razones sociales distintas, no vacías y recortadas, ordenadas.
    pub fn razones_sociales(&self) -> Vec<String> {
        let set: BTreeSet<&str> = self
            .registros
            .iter()
            .map(|l| l.razon_social.trim())
            .filter(|r| !r.is_empty())
            .collect();
        set.into_iter().map(str::to_string).collect()
    }

    pub fn contiene_razon_social(&self, razon_social: &str) -> bool {
        self.registros.iter().any(|l| l.razon_social == razon_social)
    }

    /// Única mutación permitida sobre la base: NO -> SI.
    pub(crate) fn marcar_asignado(&mut self, idx: usize, id_asesor: &str, dia: u32) -> Option<&Lead> {
        let lead = self.registros.get_mut(idx)?;
        lead.asignado = EstadoAsignacion::Si;
        lead.id_asesor = id_asesor.to_string();
        lead.dia_asignacion = Valor::Numero(dia as f64);
        Some(lead)
    }

    /// Valor de una celda para exportar la base actualizada.
    pub fn celda(&self, lead: &Lead, columna: &Columna) -> Valor {
        match columna {
            Columna::IdCliente => lead.id_cliente.clone(),
            Columna::RazonSocial => Valor::Texto(lead.razon_social.clone()),
            Columna::Asignado => match lead.asignado.as_str() {
                "" => Valor::Vacio,
                s => Valor::Texto(s.to_string()),
            },
            Columna::IdAsesor => {
                if lead.id_asesor.is_empty() {
                    Valor::Vacio
                } else {
                    Valor::Texto(lead.id_asesor.clone())
                }
            }
            Columna::DiaAsignacion => lead.dia_asignacion.clone(),
            Columna::Extra { indice, .. } => lead.extras.get(*indice).cloned().unwrap_or(Valor::Vacio),
        }
    }
}
