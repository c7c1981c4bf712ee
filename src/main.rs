use seller_console_client::application::{self, ApplicationEnv};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    #[cfg(debug_assertions)]
    {
        // Ignore error because .env file is not required
        // as long as env variables are set
        let _ = dotenvy::dotenv();
    }

    let env = ApplicationEnv::parse()?;

    application::setup_tracing(&env)?;

    let state = application::create_state(&env);

    match state.notification_feed_service.server_unread_count().await {
        Ok(unread_count) => tracing::info!(unread_count, "unread notifications on server"),
        Err(error) => tracing::warn!(%error, "failed to fetch unread count"),
    }

    state.notification_channel_service.connect().await;

    application::shutdown_signal().await;

    state.notification_channel_service.disconnect().await;

    Ok(())
}
