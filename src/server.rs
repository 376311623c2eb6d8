use std::net::SocketAddr;

use axum::Router;
use leptos::prelude::*;
use leptos_axum::{generate_route_list, LeptosRoutes};
use thiserror::Error;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::app::{shell, App};

#[derive(Error, Debug)]
pub enum ServeError {
    #[error("couldn't read leptos configuration: {0}")]
    Config(String),
    #[error("couldn't bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("server stopped: {0}")]
    Serve(#[from] std::io::Error),
}

/// Installs the fmt subscriber. Override the filter via `RUST_LOG`.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

pub fn router(leptos_options: LeptosOptions) -> Router {
    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);

    Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}

pub async fn serve() -> Result<(), ServeError> {
    let conf = get_configuration(None).map_err(|e| ServeError::Config(e.to_string()))?;
    let addr = conf.leptos_options.site_addr;
    let app = router(conf.leptos_options);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServeError::Bind { addr, source })?;
    info!("listening on http://{}", addr);
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
