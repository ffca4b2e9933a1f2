use actix_web::{web, HttpResponse, Responder};

use crate::api_json::{respuesta_error, EstadoApp};
use crate::excel::MIME_XLSX;
use crate::sesion::ArchivoGenerado;

fn adjuntar(archivo: &ArchivoGenerado) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(MIME_XLSX)
        .append_header((
            actix_web::http::header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", archivo.nombre),
        ))
        .body(archivo.contenido.clone())
}

/// GET /descargas/vicidial
pub async fn descargar_vicidial_handler(estado: web::Data<EstadoApp>) -> impl Responder {
    let sesion = match estado.sesion() {
        Ok(s) => s,
        Err(resp) => return resp,
    };
    let respuesta = match sesion.descargas() {
        Ok(d) => adjuntar(&d.vicidial),
        Err(e) => respuesta_error(&e),
    };
    respuesta
}

/// GET /descargas/base
pub async fn descargar_base_handler(estado: web::Data<EstadoApp>) -> impl Responder {
    let sesion = match estado.sesion() {
        Ok(s) => s,
        Err(resp) => return resp,
    };
    let respuesta = match sesion.descargas() {
        Ok(d) => adjuntar(&d.base),
        Err(e) => respuesta_error(&e),
    };
    respuesta
}
