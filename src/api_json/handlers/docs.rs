use actix_web::{HttpResponse, Responder};
use serde_json::json;

use crate::api_json::SolicitudInput;

/// GET /help
pub async fn help_handler() -> impl Responder {
    let example = SolicitudInput {
        id_asesor: "E1".to_string(),
        razon_social: "EMPRESA A".to_string(),
        cantidad: 30,
    };

    let help = json!({
        "description": "Asignador de base Vicidial (multi asesor). Subir la base, agregar solicitudes asesor/razón social/cantidad y ejecutar la asignación.",
        "flujo": [
            "POST /base (multipart, archivo xlsx con columnas razon_social e id_cliente)",
            "GET /razones",
            "POST /asignaciones (ver 'post_example')",
            "GET /asignaciones (resumen con disponibles)",
            "POST /asignar",
            "GET /descargas/vicidial",
            "GET /descargas/base"
        ],
        "post_example": example,
        "note": "Volver a agregar el mismo asesor y razón social reemplaza la cantidad. DELETE /asignaciones vacía las solicitudes sin tocar la base.",
        "archivos": ["carga_vicidial_<MM-DD>.xlsx", "base_actualizada_<MM-DD>.xlsx"]
    });

    HttpResponse::Ok().json(help)
}
