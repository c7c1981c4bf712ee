use super::{
    channel_state_machine::ChannelStateMachine,
    dto::{ConnectionState, NotificationChannelServiceConfig},
    ChannelConnector, NotificationChannelService,
};
use crate::{
    api::NotificationsApi,
    auth::{Role, SessionStore},
    service::notification_feed_service::NotificationFeed,
};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::{
    sync::{watch, Mutex, Notify, RwLock},
    task::JoinHandle,
};

pub struct NotificationChannelServiceImpl {
    config: NotificationChannelServiceConfig,

    session_store: Arc<dyn SessionStore>,
    connector: Arc<dyn ChannelConnector>,
    notifications_api: Arc<dyn NotificationsApi>,
    feed: Arc<RwLock<NotificationFeed>>,

    state_tx: watch::Sender<ConnectionState>,

    task: Mutex<Option<ChannelTask>>,
}

struct ChannelTask {
    handle: JoinHandle<()>,
    close_notify: Arc<Notify>,
}

impl NotificationChannelServiceImpl {
    pub fn new(
        config: NotificationChannelServiceConfig,
        session_store: Arc<dyn SessionStore>,
        connector: Arc<dyn ChannelConnector>,
        notifications_api: Arc<dyn NotificationsApi>,
        feed: Arc<RwLock<NotificationFeed>>,
    ) -> Self {
        let (state_tx, _) = watch::channel(ConnectionState::Disconnected);

        Self {
            config,
            session_store,
            connector,
            notifications_api,
            feed,
            state_tx,
            task: Mutex::new(None),
        }
    }
}

#[async_trait]
impl NotificationChannelService for NotificationChannelServiceImpl {
    async fn connect(&self) {
        let mut task = self.task.lock().await;

        if let Some(running) = task.as_ref() {
            // A finished task means retries were exhausted, a new
            // caller initiated connect starts the channel over
            if !running.handle.is_finished() {
                tracing::debug!("channel already running");
                return;
            }
        }

        let Some(credentials) = self.session_store.credentials() else {
            tracing::debug!("no signed in user, channel not started");
            return;
        };
        if credentials.role != Role::Seller || credentials.token.is_empty() {
            tracing::debug!("signed in user is not a seller, channel not started");
            return;
        }

        tracing::info!(seller_id = credentials.seller_id, "starting channel task");
        let close_notify = Arc::new(Notify::new());
        let state_machine = ChannelStateMachine::new(
            self.config.clone(),
            Arc::clone(&self.session_store),
            Arc::clone(&self.connector),
            Arc::clone(&self.notifications_api),
            Arc::clone(&self.feed),
            self.state_tx.clone(),
        );
        let handle = tokio::spawn(keep_alive(Arc::clone(&close_notify), state_machine));

        *task = Some(ChannelTask {
            handle,
            close_notify,
        });
    }

    async fn disconnect(&self) {
        let mut task = self.task.lock().await;

        let Some(ChannelTask {
            handle,
            close_notify,
        }) = task.take()
        else {
            tracing::debug!("channel already closed");
            return;
        };

        close_notify.notify_one();
        handle.await.unwrap(); // task can't be aborted and will never panic

        self.state_tx.send_replace(ConnectionState::Disconnected);
        tracing::info!("channel closed");
    }

    fn state(&self) -> watch::Receiver<ConnectionState> {
        self.state_tx.subscribe()
    }
}

async fn keep_alive(close_notify: Arc<Notify>, mut state_machine: ChannelStateMachine) {
    tracing::info!("channel task started");

    tokio::select! {
        biased;

        _ = close_notify.notified() => {}
        _ = state_machine.run() => {}
    }

    tracing::info!("channel task finished");
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        api::MockNotificationsApi,
        auth::{Credentials, MockSessionStore},
        service::notification_channel_service::MockChannelConnector,
    };
    use futures::StreamExt;
    use std::time::Duration;
    use tokio::time::timeout;

    fn create_test_config() -> NotificationChannelServiceConfig {
        NotificationChannelServiceConfig {
            reconnect_base_delay: Duration::from_millis(10),
            reconnect_max_attempts: 5,
            refresh_limit: 50,
        }
    }

    fn create_credentials() -> Credentials {
        Credentials {
            seller_id: 7,
            role: Role::Seller,
            token: "token".to_string(),
        }
    }

    fn create_service(
        session_store: MockSessionStore,
        connector: MockChannelConnector,
        notifications_api: MockNotificationsApi,
    ) -> NotificationChannelServiceImpl {
        NotificationChannelServiceImpl::new(
            create_test_config(),
            Arc::new(session_store),
            Arc::new(connector),
            Arc::new(notifications_api),
            Arc::new(RwLock::new(NotificationFeed::new())),
        )
    }

    ///
    /// Connector whose connection stays open until the service is
    /// disconnected
    ///
    fn create_pending_connector() -> MockChannelConnector {
        let mut connector = MockChannelConnector::new();
        connector
            .expect_connect()
            .returning(|_| Ok(futures::stream::pending().boxed()));
        connector
    }

    fn create_notifications_api() -> MockNotificationsApi {
        let mut notifications_api = MockNotificationsApi::new();
        notifications_api
            .expect_find_notifications()
            .returning(|_, _| Ok(vec![]));
        notifications_api
    }

    #[tokio::test]
    async fn connect_no_credentials_does_not_start_task() {
        let mut session_store = MockSessionStore::new();
        session_store.expect_credentials().returning(|| None);
        let mut connector = MockChannelConnector::new();
        connector.expect_connect().never();
        let service = create_service(session_store, connector, MockNotificationsApi::new());

        service.connect().await;

        assert!(service.task.lock().await.is_none());
    }

    #[tokio::test]
    async fn connect_not_a_seller_does_not_start_task() {
        let mut credentials = create_credentials();
        credentials.role = Role::Admin;
        let mut session_store = MockSessionStore::new();
        session_store
            .expect_credentials()
            .returning(move || Some(credentials.clone()));
        let mut connector = MockChannelConnector::new();
        connector.expect_connect().never();
        let service = create_service(session_store, connector, MockNotificationsApi::new());

        service.connect().await;

        assert!(service.task.lock().await.is_none());
    }

    #[tokio::test]
    async fn connect_twice_single_connection() {
        let mut session_store = MockSessionStore::new();
        session_store
            .expect_credentials()
            .returning(|| Some(create_credentials()));
        let mut connector = MockChannelConnector::new();
        connector
            .expect_connect()
            .times(1) // second connect must not open another connection
            .returning(|_| Ok(futures::stream::pending().boxed()));
        let service = create_service(session_store, connector, create_notifications_api());

        service.connect().await;
        tokio::time::sleep(Duration::from_millis(50)).await;
        service.connect().await;
        tokio::time::sleep(Duration::from_millis(50)).await;

        service.disconnect().await;
    }

    #[tokio::test]
    async fn disconnect_closes_running_channel() {
        let mut session_store = MockSessionStore::new();
        session_store
            .expect_credentials()
            .returning(|| Some(create_credentials()));
        let service = create_service(
            session_store,
            create_pending_connector(),
            create_notifications_api(),
        );

        service.connect().await;
        let mut state_rx = service.state();
        timeout(Duration::from_secs(1), async {
            state_rx
                .wait_for(|state| *state == ConnectionState::Connected)
                .await
                .unwrap();
        })
        .await
        .unwrap();

        // disconnect cancels the task even though the stream is pending
        timeout(Duration::from_secs(1), service.disconnect())
            .await
            .unwrap();

        assert_eq!(*service.state().borrow(), ConnectionState::Disconnected);
        assert!(service.task.lock().await.is_none());
    }

    #[tokio::test]
    async fn disconnect_cancels_pending_reconnect() {
        let mut session_store = MockSessionStore::new();
        session_store
            .expect_credentials()
            .returning(|| Some(create_credentials()));
        let mut connector = MockChannelConnector::new();
        connector
            .expect_connect()
            .returning(|_| Err(anyhow::anyhow!("connection refused")));
        let mut config = create_test_config();
        config.reconnect_base_delay = Duration::from_secs(1200);
        let service = NotificationChannelServiceImpl::new(
            config,
            Arc::new(session_store),
            Arc::new(connector),
            Arc::new(MockNotificationsApi::new()),
            Arc::new(RwLock::new(NotificationFeed::new())),
        );

        service.connect().await;
        let mut state_rx = service.state();
        timeout(Duration::from_secs(1), async {
            state_rx
                .wait_for(|state| matches!(*state, ConnectionState::Reconnecting(_)))
                .await
                .unwrap();
        })
        .await
        .unwrap();

        // the backoff timer is nowhere near firing, disconnect must not wait for it
        timeout(Duration::from_secs(1), service.disconnect())
            .await
            .unwrap();

        assert_eq!(*service.state().borrow(), ConnectionState::Disconnected);
    }

    #[tokio::test]
    async fn disconnect_idempotent() {
        let mut session_store = MockSessionStore::new();
        session_store
            .expect_credentials()
            .returning(|| Some(create_credentials()));
        let service = create_service(
            session_store,
            create_pending_connector(),
            create_notifications_api(),
        );

        service.connect().await;
        service.disconnect().await;
        service.disconnect().await;
        service.disconnect().await;

        assert_eq!(*service.state().borrow(), ConnectionState::Disconnected);
    }

    #[tokio::test]
    async fn disconnect_without_connect_is_noop() {
        let service = create_service(
            MockSessionStore::new(),
            MockChannelConnector::new(),
            MockNotificationsApi::new(),
        );

        service.disconnect().await;

        assert_eq!(*service.state().borrow(), ConnectionState::Disconnected);
    }

    #[tokio::test]
    async fn connect_after_exhausted_retries_starts_over() {
        let mut session_store = MockSessionStore::new();
        session_store
            .expect_credentials()
            .returning(|| Some(create_credentials()));
        let mut connector = MockChannelConnector::new();
        connector
            .expect_connect()
            .returning(|_| Err(anyhow::anyhow!("connection refused")));
        let mut config = create_test_config();
        config.reconnect_max_attempts = 1;
        let service = NotificationChannelServiceImpl::new(
            config,
            Arc::new(session_store),
            Arc::new(connector),
            Arc::new(MockNotificationsApi::new()),
            Arc::new(RwLock::new(NotificationFeed::new())),
        );

        service.connect().await;
        let mut state_rx = service.state();
        timeout(Duration::from_secs(1), async {
            // initial state is Disconnected already, wait for the
            // transition through Reconnecting to tell exhaustion apart
            state_rx
                .wait_for(|state| matches!(*state, ConnectionState::Reconnecting(_)))
                .await
                .unwrap();
            state_rx
                .wait_for(|state| *state == ConnectionState::Disconnected)
                .await
                .unwrap();
        })
        .await
        .unwrap();
        timeout(Duration::from_secs(1), async {
            loop {
                let task = service.task.lock().await;
                if task.as_ref().is_some_and(|task| task.handle.is_finished()) {
                    break;
                }
                drop(task);
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
        })
        .await
        .unwrap();

        // channel gave up, only an explicit connect may revive it
        service.connect().await;
        assert!(service
            .task
            .lock()
            .await
            .as_ref()
            .is_some_and(|task| !task.handle.is_finished()));

        service.disconnect().await;
    }
}
