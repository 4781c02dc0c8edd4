use std::sync::Arc;
use std::time::Duration;

use messaging_client::application::{InboxService, InboxWatcher};
use messaging_client::config::AppConfig;
use messaging_client::infrastructure::backend::{AuthContext, HttpLmsApiClient};
use tracing::info;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;
    config.validate()?;

    let registry = tracing_subscriber::registry().with(EnvFilter::new(config.logging.level.clone()));
    if config.logging.json_format {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(true),
            )
            .init();
    } else {
        registry.with(fmt::layer()).init();
    }

    let auth = AuthContext::new(config.auth.token.clone());
    let api = Arc::new(HttpLmsApiClient::new(config.api.clone(), auth)?);
    let service = InboxService::new(api);

    let interval = Duration::from_secs(config.polling.interval_seconds);
    info!(
        base_url = %config.api.base_url,
        viewer_id = %config.auth.viewer_id,
        interval_seconds = config.polling.interval_seconds,
        "starting inbox watcher"
    );

    InboxWatcher::new(service, config.auth.viewer_id.clone(), interval)
        .run()
        .await;

    Ok(())
}
