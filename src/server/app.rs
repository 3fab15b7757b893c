use std::net::SocketAddr;

use axum::Router;
use axum::routing::{get, post};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::config::{CorsConfig, ServerConfig};
use crate::server::routes;
use crate::server::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let cors_layer = build_cors_layer(
        state
            .server_config
            .as_ref()
            .and_then(|cfg| cfg.cors.as_ref()),
    );

    let mut app = Router::new()
        .route("/", get(routes::root))
        .route("/assign_team", post(routes::assign_team))
        .route("/match_scheduled", post(routes::match_scheduled))
        .route("/notify_moderator", post(routes::notify_moderator))
        .route("/dispute_resolved", post(routes::dispute_resolved))
        .route("/send", post(routes::send))
        .with_state(state);

    app = app.layer(
        ServiceBuilder::new()
            .layer(RequestBodyLimitLayer::new(64 * 1024))
            .layer(TraceLayer::new_for_http()),
    );
    app = app.layer(cors_layer);

    app
}

pub fn bind_address(config: Option<&ServerConfig>) -> SocketAddr {
    let bind = config
        .and_then(|cfg| cfg.bind.clone())
        .unwrap_or_else(|| "127.0.0.1:5000".to_string());
    bind.parse().unwrap_or_else(|err| {
        tracing::warn!(bind = %bind, error = %err, "unparseable bind address, using fallback");
        "127.0.0.1:5000".parse().expect("valid fallback bind")
    })
}

fn build_cors_layer(config: Option<&CorsConfig>) -> CorsLayer {
    let Some(config) = config else {
        return CorsLayer::new().allow_origin(Any);
    };
    if config.allowed_origins.is_empty() {
        return CorsLayer::new().allow_origin(Any);
    }
    let origins = config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect::<Vec<_>>();
    CorsLayer::new().allow_origin(origins)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_address_uses_the_configured_bind() {
        let config = ServerConfig {
            bind: Some("0.0.0.0:8123".to_string()),
            cors: None,
        };
        assert_eq!(
            bind_address(Some(&config)),
            "0.0.0.0:8123".parse::<SocketAddr>().expect("addr")
        );
    }

    #[test]
    fn bind_address_falls_back_when_unparseable() {
        let config = ServerConfig {
            bind: Some("not-an-address".to_string()),
            cors: None,
        };
        assert_eq!(
            bind_address(Some(&config)),
            "127.0.0.1:5000".parse::<SocketAddr>().expect("addr")
        );
        assert_eq!(
            bind_address(None),
            "127.0.0.1:5000".parse::<SocketAddr>().expect("addr")
        );
    }
}
