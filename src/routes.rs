//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds Leptos SSR rendering for every client route, the compiled WASM/CSS
//! bundle under `/pkg`, and a health probe. There are no API routes here;
//! the browser calls the REST backend directly.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::{ConfigError, ServerConfig};

/// Build the application router and the address it should listen on.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app(config: &ServerConfig) -> Result<(Router, SocketAddr), ConfigError> {
    let conf = get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
    let mut leptos_options = conf.leptos_options;
    leptos_options.site_addr = config.addr();
    if let Some(site_root) = &config.site_root {
        leptos_options.site_root = site_root.to_string_lossy().as_ref().into();
    }
    let routes = generate_route_list(client::app::App);
    let pkg_dir = pkg_path(leptos_options.site_root.as_ref(), leptos_options.site_pkg_dir.as_ref());
    tracing::info!(pkg_dir = %pkg_dir.display(), "serving client bundle");

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let router = service_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(pkg_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http());

    Ok((router, leptos_options.site_addr))
}

/// Routes that do not render the client.
fn service_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

fn pkg_path(site_root: &str, pkg_dir: &str) -> PathBuf {
    Path::new(site_root).join(pkg_dir)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
