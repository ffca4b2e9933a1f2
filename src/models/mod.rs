// Estructuras de datos principales

mod base;

pub use base::BaseLeads;

use chrono::{NaiveDate, TimeDelta};
use serde::Serialize;

/// Mayor entero que un `f64` representa sin pérdida (2^53).
const ENTERO_EXACTO_F64: f64 = 9_007_199_254_740_992.0;

/// Valor de una celda tal como se leyó del Excel.
/// Se conserva el tipo para que la base actualizada se escriba igual que llegó.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Valor {
    Vacio,
    Texto(String),
    Numero(f64),
    /// Fecha/hora de Excel como número de serie (días desde 1899-12-30).
    Fecha(f64),
    Booleano(bool),
}

impl Valor {
    /// Representación textual de la celda. Los números enteros se escriben
    /// sin decimales (`12345.0` -> `"12345"`); las fechas como `AAAA-MM-DD`.
    pub fn como_texto(&self) -> String {
        match self {
            Valor::Vacio => String::new(),
            Valor::Texto(s) => s.clone(),
            Valor::Numero(f) => {
                if f.is_finite() && f.abs() < ENTERO_EXACTO_F64 && f.fract() == 0.0 {
                    format!("{}", *f as i64)
                } else {
                    format!("{}", f)
                }
            }
            Valor::Fecha(serial) => fecha_excel_a_texto(*serial),
            Valor::Booleano(b) => format!("{}", b),
        }
    }

    pub fn es_vacio(&self) -> bool {
        match self {
            Valor::Vacio => true,
            Valor::Texto(s) => s.trim().is_empty(),
            _ => false,
        }
    }
}

fn fecha_excel_a_texto(serial: f64) -> String {
    let fecha = NaiveDate::from_ymd_opt(1899, 12, 30)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .zip(TimeDelta::try_seconds((serial * 86_400.0).round() as i64))
        .and_then(|(origen, delta)| origen.checked_add_signed(delta));
    match fecha {
        Some(dt) if serial.fract() == 0.0 => dt.format("%Y-%m-%d").to_string(),
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => format!("{}", serial),
    }
}

impl From<&str> for Valor {
    fn from(s: &str) -> Self {
        Valor::Texto(s.to_string())
    }
}

impl From<f64> for Valor {
    fn from(f: f64) -> Self {
        Valor::Numero(f)
    }
}

/// Estado de la columna `asignado`.
/// `Otro` guarda valores que no son "SI"/"NO", incluida la celda vacía de una
/// columna existente; esas filas nunca se asignan pero se exportan tal cual.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum EstadoAsignacion {
    No,
    Si,
    Otro(String),
}

impl EstadoAsignacion {
    pub fn desde_texto(s: &str) -> Self {
        match s.trim() {
            "NO" => EstadoAsignacion::No,
            "SI" => EstadoAsignacion::Si,
            otro => EstadoAsignacion::Otro(otro.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            EstadoAsignacion::No => "NO",
            EstadoAsignacion::Si => "SI",
            EstadoAsignacion::Otro(s) => s.as_str(),
        }
    }

    pub fn disponible(&self) -> bool {
        *self == EstadoAsignacion::No
    }
}

/// Una fila de la base principal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Lead {
    pub id_cliente: Valor,
    pub razon_social: String,
    pub asignado: EstadoAsignacion,
    pub id_asesor: String,
    /// Celda tal como llegó; `marcar_asignado` la reemplaza por el día del mes.
    pub dia_asignacion: Valor,
    /// Celdas de las columnas no reconocidas, en el orden de `BaseLeads::columnas`.
    pub extras: Vec<Valor>,
}

impl Lead {
    pub fn disponible_para(&self, razon_social: &str) -> bool {
        self.asignado.disponible() && self.razon_social == razon_social
    }
}

/// Columnas de la base. Las cinco primeras tienen significado para el
/// asignador; el resto se copian sin tocar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Columna {
    IdCliente,
    RazonSocial,
    Asignado,
    IdAsesor,
    DiaAsignacion,
    Extra { nombre: String, indice: usize },
}

impl Columna {
    pub fn nombre(&self) -> &str {
        match self {
            Columna::IdCliente => "id_cliente",
            Columna::RazonSocial => "razon_social",
            Columna::Asignado => "asignado",
            Columna::IdAsesor => "id_asesor",
            Columna::DiaAsignacion => "dia_asignacion",
            Columna::Extra { nombre, .. } => nombre.as_str(),
        }
    }
}

/// Fila del archivo de carga Vicidial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilaVicidial {
    pub id_cliente: String,
    pub id_asesor: String,
}

/// Aviso de asignación parcial: había menos leads disponibles que los pedidos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvisoFaltante {
    pub id_asesor: String,
    pub razon_social: String,
    pub disponibles: usize,
    pub solicitados: u32,
}

impl std::fmt::Display for AvisoFaltante {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - {}: solo {} disponibles (solicitados {})",
            self.id_asesor, self.razon_social, self.disponibles, self.solicitados
        )
    }
}
