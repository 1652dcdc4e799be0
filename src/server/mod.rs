// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 slipway contributors

//! Static file server for previewing build output.
//!
//! Serves the configured output directory over HTTP so a browser can
//! load `dist/index.html` and the bundled assets without any extra
//! tooling. Requests map directly onto files under the directory; a
//! path with no matching file gets a 404.

use axum::Router;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;

use crate::config::ServeConfig;
use crate::errors::SlipwayError;

/// Build the router that maps every request path onto a file in `dir`.
pub fn router(dir: &std::path::Path) -> Router {
    Router::new().fallback_service(ServeDir::new(dir))
}

/// Bind to the configured address and serve until interrupted.
///
/// `port_override` takes precedence over the configured port so the
/// CLI flag can pick an ephemeral port without touching the config
/// file.
pub async fn serve(config: &ServeConfig, port_override: Option<u16>) -> Result<(), SlipwayError> {
    let port = port_override.unwrap_or(config.port);
    let addr = format!("{}:{}", config.host, port);

    let listener = TcpListener::bind(&addr).await.map_err(|e| SlipwayError::Io {
        message: format!("failed to bind {addr}: {e}"),
    })?;

    tracing::info!("serving {} on http://{}", config.dir.display(), addr);

    axum::serve(listener, router(&config.dir))
        .await
        .map_err(|e| SlipwayError::Io {
            message: format!("server error: {e}"),
        })?;

    Ok(())
}
