//! Blocking JSON endpoint over the catalog query interface.
//!
//! One thread serves requests in arrival order from a single
//! [`CatalogContext`]; `POST /api/cache/clear` invalidates its caches.

mod routes;

use audit_catalog::CatalogContext;
use tiny_http::{Header, Response, Server, StatusCode};

use routes::route;

/// Serve until the process is stopped.
pub fn run(addr: &str, catalog: &mut CatalogContext) -> anyhow::Result<()> {
    let server =
        Server::http(addr).map_err(|error| anyhow::anyhow!("failed to bind {addr}: {error}"))?;
    let content_type = Header::from_bytes("Content-Type", "application/json")
        .map_err(|()| anyhow::anyhow!("invalid content-type header"))?;

    tracing::info!(addr, "serving audit catalog");

    for request in server.incoming_requests() {
        let response = route(catalog, request.method(), request.url());
        tracing::debug!(
            method = %request.method(),
            url = request.url(),
            status = response.status,
            "request"
        );

        let http = Response::from_string(response.body.to_string())
            .with_status_code(StatusCode(response.status))
            .with_header(content_type.clone());
        if let Err(error) = request.respond(http) {
            tracing::warn!(%error, "failed to send response");
        }
    }

    Ok(())
}
