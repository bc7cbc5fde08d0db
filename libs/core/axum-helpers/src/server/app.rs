use crate::errors::handlers::not_found;
use crate::http::{access_log, cors_layer, security_headers};
use super::shutdown::shutdown_signal;
use axum::{Json, Router, extract::DefaultBodyLimit, middleware, routing::get};
use core_config::cors::CorsConfig;
use core_config::server::ServerConfig;
use std::io;
use tower_http::compression::CompressionLayer;
use tower_http::normalize_path::NormalizePath;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

/// Starts the Axum server with graceful shutdown.
///
/// # Errors
/// Returns an error if:
/// - The TCP listener fails to bind to the configured address
/// - The server encounters an error during operation
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use core_config::server::ServerConfig;
/// use axum_helpers::server::create_app;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let router = Router::new();
///     let config = ServerConfig::default();
///     create_app(router, &config).await?;
///     Ok(())
/// }
/// ```
pub async fn create_app(router: Router, server_config: &ServerConfig) -> io::Result<()> {
    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;

    info!("Server starting on {}", listener.local_addr()?);
    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        })?;

    Ok(())
}

/// Creates a configured Axum router with common middleware and documentation.
///
/// This function sets up:
/// - OpenAPI document at `/api-docs/openapi.json` and a Scalar UI at `/scalar`
/// - The given routes, mounted at the root
/// - A 404 fallback (also used for known paths with an unsupported method)
/// - Request body limit from `server_config.max_body_bytes`
/// - Access log, tracing spans, security headers, CORS and compression
/// - Trailing-slash trimming before routing, so `/items/` serves `/items`
///
/// Routes should already have their state applied; domain routers own their
/// state and this function only adds cross-cutting concerns.
///
/// # Errors
/// Returns `InvalidInput` if the CORS configuration contains an invalid origin.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use utoipa::OpenApi;
/// use axum_helpers::server::create_router;
///
/// #[derive(OpenApi)]
/// #[openapi(paths(/* your paths */))]
/// struct ApiDoc;
///
/// let api_routes = Router::new()
///     .route("/example", get(handler))
///     .with_state(my_state);
///
/// let router = create_router::<ApiDoc>(api_routes, &ServerConfig::default(), &CorsConfig::Permissive)?;
/// ```
pub fn create_router<T>(
    apis: Router,
    server_config: &ServerConfig,
    cors: &CorsConfig,
) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    let openapi = T::openapi();
    let spec = openapi.clone();

    let router = Router::new()
        .merge(Scalar::with_url("/scalar", openapi))
        .route(
            "/api-docs/openapi.json",
            get(move || {
                let spec = spec.clone();
                async move { Json(spec) }
            }),
        )
        .merge(apis)
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
        .layer(DefaultBodyLimit::max(server_config.max_body_bytes))
        .layer(middleware::from_fn(access_log))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers))
        .layer(cors_layer(cors)?)
        .layer(CompressionLayer::new());

    // Path rewriting must happen before route matching, so it wraps the whole router.
    Ok(Router::new().fallback_service(NormalizePath::trim_trailing_slash(router)))
}
