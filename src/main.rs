// --- Asignador de base Vicidial (multi asesor) - Archivo principal ---

use asignador_vicidial::config::AsignadorConfig;
use asignador_vicidial::run_server;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AsignadorConfig::from_env();
    tracing::info!("=== Asignador de base Vicidial (API) ===");
    run_server(config).await
}
