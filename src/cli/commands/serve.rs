use std::path::Path;

use anyhow::Result;
use tokio::net::TcpListener;
use tracing::{debug, error, info, trace};

use crate::config::initialize_app_state;
use crate::router::create_router;

pub async fn serve(bind_address: &str, catalog: Option<&Path>) -> Result<()> {
    trace!("Entering serve function");
    info!("Billboard API starting up");
    debug!("Bind address: {}", bind_address);

    let state = match initialize_app_state(catalog) {
        Ok(state) => {
            debug!(
                "Application state initialized with {} billboards",
                state.billboards.len()
            );
            state
        }
        Err(e) => {
            error!("Failed to initialize application state: {:#}", e);
            return Err(e);
        }
    };

    let app = create_router(state);

    trace!("Attempting to bind TCP listener to {}", bind_address);
    let listener = match TcpListener::bind(bind_address).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind to address {}: {}", bind_address, e);
            return Err(e.into());
        }
    };

    info!("Billboard API server running on http://{}", bind_address);
    info!("OpenAPI document available at http://{}/api-docs/openapi.json", bind_address);

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server shutdown gracefully");
    Ok(())
}
