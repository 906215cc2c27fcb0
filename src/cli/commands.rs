pub mod billboards;
pub mod forecast;
pub mod serve;

pub use billboards::billboards;
pub use forecast::forecast;
pub use serve::serve;

use anyhow::Result;
use frontend::{ClientSettings, Dashboard, HttpApiClient, Msg};

/// Builds the API client from the environment, optionally overriding the URL.
fn client(api_url: Option<&str>) -> Result<HttpApiClient> {
    let mut settings = ClientSettings::from_environment();
    if let Some(url) = api_url {
        let timeout = settings.request_timeout_ms;
        settings = ClientSettings::new(url);
        settings.request_timeout_ms = timeout;
    }
    Ok(HttpApiClient::new(settings)?)
}

/// Loads the billboard collection into a fresh dashboard.
async fn load_dashboard(api: &HttpApiClient) -> Result<Dashboard> {
    let mut dashboard = Dashboard::new();
    dashboard.dispatch(api, Msg::Refresh).await;

    if let Some(message) = dashboard
        .store()
        .error_message(api.settings().api_base_url())
    {
        anyhow::bail!(message);
    }
    Ok(dashboard)
}
