use crate::cli::ServeArgs;
use crate::infra::{AppState, ConfiguredSink};
use crate::routes::with_intake_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use circle_intake::config::AppConfig;
use circle_intake::error::AppError;
use circle_intake::telemetry;
use circle_intake::workflows::events::EventService;
use circle_intake::workflows::recruitment::applications::RecruitmentService;
use std::sync::atomic::Ordering;
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

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let timeout = config.webhooks.timeout();
    let application_sink = Arc::new(ConfiguredSink::from_url(
        config.webhooks.application_url.as_deref(),
        timeout,
    )?);
    let registration_sink = Arc::new(ConfiguredSink::from_url(
        config.webhooks.registration_url.as_deref(),
        timeout,
    )?);
    info!(
        applications = application_sink.describe(),
        registrations = registration_sink.describe(),
        "submission sinks configured"
    );

    let recruitment_service = Arc::new(RecruitmentService::new(application_sink)?);
    let event_service = Arc::new(EventService::new(registration_sink));

    let app = with_intake_routes(recruitment_service, event_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "circle intake service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
