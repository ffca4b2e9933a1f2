use actix_multipart::Multipart;
use actix_web::{web, HttpResponse, Responder};
use futures_util::stream::StreamExt;
use serde_json::json;
use tracing::{error, info, warn};

use crate::api_json::{respuesta_error, EstadoApp};
use crate::excel::leer_base_excel_bytes;

/// POST /base
/// Recibe la base principal (multipart, primer archivo del formulario) y la
/// carga en la sesión. Las solicitudes ya agregadas se conservan.
pub async fn base_upload_handler(estado: web::Data<EstadoApp>, mut payload: Multipart) -> impl Responder {
    let limite = estado.config.max_upload_bytes;
    let mut archivo: Option<(String, Vec<u8>)> = None;

    while let Some(field_res) = payload.next().await {
        let mut field = match field_res {
            Ok(f) => f,
            Err(e) => {
                warn!("multipart field error: {}", e);
                return HttpResponse::BadRequest().json(json!({"error": format!("invalid multipart body: {}", e)}));
            }
        };

        let filename = field
            .content_disposition()
            .get_filename()
            .map(|s| s.to_string())
            .unwrap_or_else(|| "base.xlsx".to_string());

        let mut bytes: Vec<u8> = Vec::new();
        while let Some(chunk) = field.next().await {
            match chunk {
                Ok(data) => {
                    if bytes.len() + data.len() > limite {
                        return HttpResponse::PayloadTooLarge()
                            .json(json!({"error": format!("el archivo supera el máximo de {} bytes", limite)}));
                    }
                    bytes.extend_from_slice(&data);
                }
                Err(e) => {
                    error!("upload stream error: {}", e);
                    return HttpResponse::BadRequest().json(json!({"error": format!("upload stream error: {}", e)}));
                }
            }
        }

        // sólo interesa el primer archivo del formulario
        if archivo.is_none() && !bytes.is_empty() {
            archivo = Some((filename, bytes));
        }
    }

    let (nombre, bytes) = match archivo {
        Some(a) => a,
        None => return HttpResponse::BadRequest().json(json!({"error": "no se recibió ningún archivo"})),
    };

    let base = match leer_base_excel_bytes(bytes) {
        Ok(b) => b,
        Err(e) => {
            warn!(archivo = %nombre, "no se pudo leer la base: {}", e);
            return respuesta_error(&e);
        }
    };

    let filas = base.len();
    let columnas = base.nombres_columnas();
    let razones = base.razones_sociales();

    let mut sesion = match estado.sesion() {
        Ok(s) => s,
        Err(resp) => return resp,
    };
    sesion.cargar_base(base);
    info!(archivo = %nombre, filas, "base principal recibida");

    HttpResponse::Ok().json(json!({
        "status": "ok",
        "archivo": nombre,
        "filas": filas,
        "columnas": columnas,
        "razones_sociales": razones,
    }))
}

/// GET /razones
/// Razones sociales distintas de la base cargada, ordenadas.
pub async fn razones_handler(estado: web::Data<EstadoApp>) -> impl Responder {
    let sesion = match estado.sesion() {
        Ok(s) => s,
        Err(resp) => return resp,
    };
    match sesion.razones_sociales() {
        Ok(razones) => HttpResponse::Ok().json(json!({"razones_sociales": razones})),
        Err(e) => respuesta_error(&e),
    }
}
