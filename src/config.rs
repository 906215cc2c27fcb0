use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::catalog::{builtin_catalog, load_catalog};
use crate::schemas::AppState;

/// Bind address used when neither `--bind-address` nor `BIND_ADDRESS` is set
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:5000";

/// Initialize application state from the built-in or a file catalogue
pub fn initialize_app_state(catalog_path: Option<&Path>) -> Result<AppState> {
    let billboards = match catalog_path {
        Some(path) => load_catalog(path)
            .with_context(|| format!("Failed to load billboard catalogue {}", path.display()))?,
        None => {
            info!("Using built-in billboard catalogue");
            builtin_catalog()
        }
    };

    Ok(AppState::new(billboards))
}
