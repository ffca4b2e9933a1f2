use chrono::{FixedOffset, NaiveDate, Offset, Utc};
use std::env;
use tracing::warn;

/// Desfase de America/Lima (UTC-05:00, sin horario de verano).
pub const UTC_OFFSET_LIMA: i32 = -5;

pub const BIND_POR_DEFECTO: &str = "127.0.0.1:8080";

#[derive(Debug, Clone)]
pub struct AsignadorConfig {
    /// Dirección donde escucha el servidor HTTP (`ASIGNADOR_BIND`).
    pub bind_addr: String,
    /// Zona horaria de referencia como desfase fijo en horas (`ASIGNADOR_UTC_OFFSET`).
    /// Define el `MM-DD` de los archivos y el `dia_asignacion`.
    pub utc_offset_horas: i32,
    /// Tamaño máximo de la base subida (`ASIGNADOR_MAX_UPLOAD_MB`).
    pub max_upload_bytes: usize,
}

impl Default for AsignadorConfig {
    fn default() -> Self {
        Self {
            bind_addr: BIND_POR_DEFECTO.to_string(),
            utc_offset_horas: UTC_OFFSET_LIMA,
            max_upload_bytes: 50 * 1024 * 1024,
        }
    }
}

// load .env if present
fn load_dotenv() {
    let _ = dotenv::dotenv();
}

impl AsignadorConfig {
    /// Lee la configuración del entorno (y de `.env` si existe). Los valores
    /// inválidos se reemplazan por los por defecto.
    pub fn from_env() -> Self {
        load_dotenv();
        let mut cfg = Self::default();

        if let Ok(bind) = env::var("ASIGNADOR_BIND") {
            if !bind.trim().is_empty() {
                cfg.bind_addr = bind.trim().to_string();
            }
        }

        if let Ok(raw) = env::var("ASIGNADOR_UTC_OFFSET") {
            match raw.trim().parse::<i32>() {
                Ok(h) if (-12..=14).contains(&h) => cfg.utc_offset_horas = h,
                _ => warn!(valor = %raw, "ASIGNADOR_UTC_OFFSET inválido, usando America/Lima"),
            }
        }

        if let Ok(raw) = env::var("ASIGNADOR_MAX_UPLOAD_MB") {
            match raw.trim().parse::<usize>() {
                Ok(mb) if mb > 0 => cfg.max_upload_bytes = mb * 1024 * 1024,
                _ => warn!(valor = %raw, "ASIGNADOR_MAX_UPLOAD_MB inválido, usando 50"),
            }
        }

        cfg
    }

    pub fn zona_horaria(&self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_horas * 3600)
            .or_else(|| FixedOffset::east_opt(UTC_OFFSET_LIMA * 3600))
            .unwrap_or_else(|| Utc.fix())
    }

    /// Fecha actual en la zona de referencia.
    pub fn hoy(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.zona_horaria()).date_naive()
    }
}
