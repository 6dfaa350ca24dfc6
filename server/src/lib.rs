mod api;
mod span;

use std::net::{IpAddr, SocketAddr};

use axum::{Router, middleware::from_fn, routing::get};
use error::{Context, InternalError};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

#[derive(Debug, Clone)]
pub struct ServerOpts {
    pub host: IpAddr,
    pub port: u16,
}

pub fn server() -> Router {
    let middleware = ServiceBuilder::new()
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(from_fn(middleware::mw_client_ip))
        .layer(TraceLayer::new_for_http().make_span_with(span::span))
        .layer(from_fn(middleware::latency_ms))
        .layer(from_fn(middleware::mw_handle_leaked_5xx));

    let router = Router::new().route(api::health::PATH, get(api::health::handler));

    #[cfg(feature = "openapi")]
    let router = router.route(api::OPEN_API_DOCS_PATH, get(axum::Json(api::openapi())));

    #[cfg(feature = "scalar")]
    let router = {
        use axum::response::Html;
        use utoipa_scalar::Scalar;

        router.route(
            api::DOCS_PATH,
            get(Html(Scalar::new(api::openapi()).to_html())),
        )
    };

    router
        .method_not_allowed_fallback(api::fallback::method_not_allowed)
        .fallback(api::fallback::handler)
        .layer(middleware)
}

/// Binds `opts.host:opts.port` and serves until Ctrl-C or SIGTERM.
pub async fn run(opts: ServerOpts) -> Result<(), InternalError> {
    tracing::info!("{:?}", opts);

    let addr = SocketAddr::new(opts.host, opts.port);
    let listener = TcpListener::bind(addr)
        .await
        .context(format!("bind :: {addr}"))?;

    serve(listener, shutdown_signal()).await
}

/// Serves on an already bound listener. In-flight requests are drained once `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, shutdown: F) -> Result<(), InternalError>
where
    F: Future<Output = ()> + Send + 'static,
{
    tracing::info!(
        "listening on {}",
        listener.local_addr().context("local_addr")?
    );

    let app = server().into_make_service_with_connect_info::<SocketAddr>();
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .context("axum::serve")
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("unable to listen for ctrl-c :: {:?}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("unable to listen for SIGTERM :: {:?}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received, draining connections");
}
