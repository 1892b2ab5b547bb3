use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryBuildRepository};
use crate::routes::with_build_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use pc_builder::assembly::BuildSessionService;
use pc_builder::config::AppConfig;
use pc_builder::error::AppError;
use pc_builder::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let catalog = Arc::new(config.builder.load_catalog()?);
    info!(
        board = %catalog.motherboard().name(),
        socket = %catalog.motherboard().socket,
        parts = catalog.parts().len(),
        "part catalog loaded"
    );

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let repository = Arc::new(InMemoryBuildRepository::default());
    let build_service = Arc::new(BuildSessionService::new(
        repository,
        catalog,
        config.builder.settings,
    ));

    let app = with_build_routes(build_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "pc builder service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
