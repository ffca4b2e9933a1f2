use actix_web::{web, HttpResponse, Responder};
use serde_json::json;
use tracing::info;

use crate::api_json::{respuesta_error, EstadoApp, SolicitudInput};

/// POST /asignaciones
/// Agrega (o reemplaza) la cantidad pedida para un asesor y una razón social.
pub async fn agregar_asignacion_handler(
    estado: web::Data<EstadoApp>,
    body: web::Json<SolicitudInput>,
) -> impl Responder {
    let solicitud = body.into_inner();
    let mut sesion = match estado.sesion() {
        Ok(s) => s,
        Err(resp) => return resp,
    };

    match sesion.agregar_solicitud(&solicitud.id_asesor, &solicitud.razon_social, solicitud.cantidad) {
        Ok(()) => {
            let id_asesor = solicitud.id_asesor.trim();
            let razon_social = solicitud.razon_social.trim();
            HttpResponse::Ok().json(json!({
                "status": "ok",
                "mensaje": format!("{} → {}: {}", id_asesor, razon_social, solicitud.cantidad),
                "total_solicitudes": sesion.libro().len(),
            }))
        }
        Err(e) => respuesta_error(&e),
    }
}

/// GET /asignaciones
/// Solicitudes acumuladas con los leads disponibles en este momento.
pub async fn listar_asignaciones_handler(estado: web::Data<EstadoApp>) -> impl Responder {
    let sesion = match estado.sesion() {
        Ok(s) => s,
        Err(resp) => return resp,
    };
    HttpResponse::Ok().json(json!({"asignaciones": sesion.resumen()}))
}

/// DELETE /asignaciones
/// Vacía el libro de solicitudes. La base no cambia.
pub async fn limpiar_asignaciones_handler(estado: web::Data<EstadoApp>) -> impl Responder {
    let mut sesion = match estado.sesion() {
        Ok(s) => s,
        Err(resp) => return resp,
    };
    sesion.limpiar_solicitudes();
    HttpResponse::Ok().json(json!({"status": "ok"}))
}

/// POST /asignar
/// Ejecuta una pasada de asignación con la fecha de la zona de referencia y
/// deja listos los archivos de descarga.
pub async fn asignar_handler(estado: web::Data<EstadoApp>) -> impl Responder {
    let hoy = estado.config.hoy();
    let mut sesion = match estado.sesion() {
        Ok(s) => s,
        Err(resp) => return resp,
    };

    match sesion.asignar(hoy) {
        Ok((_, resumen)) => {
            info!(total = resumen.total_asignado, "total asignado");
            HttpResponse::Ok().json(json!({"status": "ok", "resultado": resumen}))
        }
        Err(e) => respuesta_error(&e),
    }
}
