use super::ApplicationEnv;
use crate::{
    api::RestApiClient,
    auth::{Credentials, Role, SessionStoreImpl},
    service::{
        bulk_import_service::{BulkImportService, BulkImportServiceImpl},
        notification_channel_service::{
            NotificationChannelService, NotificationChannelServiceConfig,
            NotificationChannelServiceImpl, WebSocketChannelConnector,
        },
        notification_feed_service::{
            NotificationFeed, NotificationFeedService, NotificationFeedServiceConfig,
            NotificationFeedServiceImpl,
        },
    },
};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct ApplicationState {
    pub session_store: Arc<SessionStoreImpl>,
    pub notification_channel_service: Arc<dyn NotificationChannelService>,
    pub notification_feed_service: Arc<dyn NotificationFeedService>,
    pub bulk_import_service: Arc<dyn BulkImportService>,
}

pub fn create_state(env: &ApplicationEnv) -> ApplicationState {
    tracing::info!("creating session store");
    let session_store = Arc::new(SessionStoreImpl::new());
    session_store.sign_in(Credentials {
        seller_id: env.seller_id,
        role: Role::Seller,
        token: env.auth_token.clone(),
    });

    tracing::info!("creating api client");
    let api_client = RestApiClient::new(env.api_base_url.clone(), session_store.clone());
    let api_client = Arc::new(api_client);

    tracing::info!("creating services");
    let feed = Arc::new(RwLock::new(NotificationFeed::new()));

    let config = NotificationFeedServiceConfig {
        refresh_limit: env.refresh_limit,
    };
    let notification_feed_service =
        NotificationFeedServiceImpl::new(config, api_client.clone(), feed.clone());
    let notification_feed_service = Arc::new(notification_feed_service);

    let connector = WebSocketChannelConnector::new(env.ws_base_url.clone());
    let connector = Arc::new(connector);

    let config = NotificationChannelServiceConfig {
        reconnect_base_delay: env.reconnect_base_delay,
        reconnect_max_attempts: env.reconnect_max_attempts,
        refresh_limit: env.refresh_limit,
    };
    let notification_channel_service = NotificationChannelServiceImpl::new(
        config,
        session_store.clone(),
        connector,
        api_client.clone(),
        feed,
    );
    let notification_channel_service = Arc::new(notification_channel_service);

    let bulk_import_service = BulkImportServiceImpl::new(api_client);
    let bulk_import_service = Arc::new(bulk_import_service);

    ApplicationState {
        session_store,
        notification_channel_service,
        notification_feed_service,
        bulk_import_service,
    }
}
