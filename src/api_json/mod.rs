use actix_web::HttpResponse;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::{Mutex, MutexGuard};

use crate::config::AsignadorConfig;
use crate::error::AsignadorError;
use crate::sesion::Sesion;

pub mod handlers;

/// Cuerpo de `POST /asignaciones`.
///
/// # Estructura del JSON esperado:
/// ```json
/// {
///   "id_asesor": "E1",
///   "razon_social": "EMPRESA A",
///   "cantidad": 30
/// }
/// ```
///
/// # Campos:
/// - `id_asesor`: ID del asesor (requerido, no vacío)
/// - `razon_social`: una de las razones sociales de `GET /razones`
/// - `cantidad`: leads a asignar (mínimo 1)
#[derive(Debug, Serialize, Deserialize)]
pub struct SolicitudInput {
	pub id_asesor: String,
	pub razon_social: String,
	pub cantidad: u32,
}

pub fn parse_solicitud(json_str: &str) -> Result<SolicitudInput, serde_json::Error> {
	serde_json::from_str::<SolicitudInput>(json_str)
}

/// Estado compartido del servidor: configuración y la sesión del operador.
pub struct EstadoApp {
	pub config: AsignadorConfig,
	pub sesion: Mutex<Sesion>,
}

impl EstadoApp {
	pub fn new(config: AsignadorConfig) -> Self {
		EstadoApp { config, sesion: Mutex::new(Sesion::new()) }
	}

	pub fn con_sesion(config: AsignadorConfig, sesion: Sesion) -> Self {
		EstadoApp { config, sesion: Mutex::new(sesion) }
	}

	/// Bloquea la sesión; un mutex envenenado se responde como 500.
	pub fn sesion(&self) -> Result<MutexGuard<'_, Sesion>, HttpResponse> {
		self.sesion
			.lock()
			.map_err(|_| HttpResponse::InternalServerError().json(json!({"error": "session mutex poisoned"})))
	}
}

/// Traduce un `AsignadorError` a la respuesta HTTP correspondiente.
pub fn respuesta_error(e: &AsignadorError) -> HttpResponse {
	let body = json!({"error": e.to_string()});
	if e.es_error_de_entrada() {
		return HttpResponse::BadRequest().json(body);
	}
	match e {
		AsignadorError::LibroVacio | AsignadorError::BaseNoCargada | AsignadorError::SinResultado => {
			HttpResponse::Conflict().json(body)
		}
		_ => HttpResponse::InternalServerError().json(body),
	}
}
