use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use tracing::info;

use crate::api_json::handlers::*;
use crate::api_json::EstadoApp;
use crate::config::AsignadorConfig;

/// Rutas del API. Separado de `run_server` para poder montarlo en los tests.
pub fn configurar_rutas(cfg: &mut web::ServiceConfig) {
    cfg.route("/base", web::post().to(base_upload_handler))
        .route("/razones", web::get().to(razones_handler))
        .route("/asignaciones", web::post().to(agregar_asignacion_handler))
        .route("/asignaciones", web::get().to(listar_asignaciones_handler))
        .route("/asignaciones", web::delete().to(limpiar_asignaciones_handler))
        .route("/asignar", web::post().to(asignar_handler))
        .route("/descargas/vicidial", web::get().to(descargar_vicidial_handler))
        .route("/descargas/base", web::get().to(descargar_base_handler))
        .route("/help", web::get().to(help_handler));
}

pub async fn run_server(config: AsignadorConfig) -> std::io::Result<()> {
    let bind_addr = config.bind_addr.clone();
    let estado = web::Data::new(EstadoApp::new(config));

    info!("Iniciando servidor en http://{}", bind_addr);
    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .app_data(estado.clone())
            .configure(configurar_rutas)
    })
    .bind(bind_addr.as_str())?
    .run()
    .await
}
