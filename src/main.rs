use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info, warn, Level};

use zouggari_transport::config::EnvironmentConfig;
use zouggari_transport::database::DatabaseConnection;
use zouggari_transport::{create_app_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::from_env()?;

    // Configurar logging
    let level = config.log_level.parse::<Level>().unwrap_or(Level::INFO);
    tracing_subscriber::fmt().with_max_level(level).init();

    info!("🚗 Zouggari Transport - API de alquiler de vehículos");
    info!("================================================");
    info!("🌍 Entorno: {}", config.environment);

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::new(&config.database).await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {:#}", e);
            return Err(e);
        }
    };

    if config.admin.username.is_none() || config.admin.password.is_none() {
        warn!("⚠️ ADMIN_USERNAME/ADMIN_PASSWORD no configurados, el login del panel fallará");
    }

    let addr: SocketAddr = config.server_url().parse()?;
    let app_state = AppState::new(db_connection.pool().clone(), config)?;
    let app = create_app_router(app_state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints públicos:");
    info!("   GET  /health");
    info!("   GET  /api/vehicles - Catálogo completo");
    info!("   GET  /api/vehicles/search - Catálogo filtrado");
    info!("   GET  /api/catalog/options - Opciones de filtro");
    info!("   POST /api/track-page-view - Contar visita");
    info!("   GET  /api/page-views - Total de visitas");
    info!("   POST /api/contact - Formulario de contacto");
    info!("   POST /api/reservations/whatsapp - Enlace de reserva");
    info!("   POST /api/language - Preferencia de idioma");
    info!("🔐 Panel de administración:");
    info!("   GET|POST /admin/login, POST /admin/logout");
    info!("   GET  /admin/dashboard, /admin/dashboard/vehicles");
    info!("   POST /admin/api/vehicles, GET|PUT|DELETE /admin/api/vehicles/:id");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Error del servidor: {}", e);
        return Err(e.into());
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el manejador de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el manejador de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
