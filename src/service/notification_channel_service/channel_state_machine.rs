use super::{
    dto::{ConnectionState, NotificationChannelServiceConfig},
    ChannelConnector, ChannelStream,
};
use crate::{
    api::NotificationsApi,
    auth::{Role, SessionStore},
    dto::input::ChannelFrame,
    service::notification_feed_service::NotificationFeed,
};
use futures::StreamExt;
use std::sync::Arc;
use tokio::sync::{watch, RwLock};

pub struct ChannelStateMachine {
    config: NotificationChannelServiceConfig,

    session_store: Arc<dyn SessionStore>,
    connector: Arc<dyn ChannelConnector>,
    notifications_api: Arc<dyn NotificationsApi>,
    feed: Arc<RwLock<NotificationFeed>>,

    state_tx: watch::Sender<ConnectionState>,

    state: State,
    attempt: u32,
    stream: Option<ChannelStream>,
}

impl ChannelStateMachine {
    pub fn new(
        config: NotificationChannelServiceConfig,
        session_store: Arc<dyn SessionStore>,
        connector: Arc<dyn ChannelConnector>,
        notifications_api: Arc<dyn NotificationsApi>,
        feed: Arc<RwLock<NotificationFeed>>,
        state_tx: watch::Sender<ConnectionState>,
    ) -> Self {
        Self {
            config,
            session_store,
            connector,
            notifications_api,
            feed,
            state_tx,
            state: State::Connecting,
            attempt: 0,
            stream: None,
        }
    }

    ///
    /// Keeps the connection alive until reconnect attempts are
    /// exhausted or the session disappears. Designed to work with an
    /// external signal that stops it:
    /// ```ignore
    /// tokio::select! {
    ///     _ = close_notify.notified() => {}
    ///     _ = state_machine.run() => {}
    /// }
    /// ```
    ///
    pub async fn run(&mut self) {
        loop {
            match self.state {
                State::Connecting => {
                    tracing::info!("channel state: Connecting");
                    self.connecting_state().await
                }
                State::Connected => {
                    tracing::info!("channel state: Connected");
                    self.connected_state().await
                }
                State::Reconnecting => {
                    tracing::info!(attempt = self.attempt, "channel state: Reconnecting");
                    self.reconnecting_state().await
                }
                State::Disconnected => {
                    tracing::info!("channel state: Disconnected");
                    self.state_tx.send_replace(ConnectionState::Disconnected);
                    return;
                }
            }
        }
    }

    async fn connecting_state(&mut self) {
        self.state_tx.send_replace(ConnectionState::Connecting);

        // Credentials are read fresh on every attempt, the token may
        // have rotated since the connection broke
        let Some(credentials) = self.session_store.credentials() else {
            tracing::info!("no signed in user, closing channel");
            self.state = State::Disconnected;
            return;
        };
        if credentials.role != Role::Seller || credentials.token.is_empty() {
            tracing::info!("signed in user is not a seller, closing channel");
            self.state = State::Disconnected;
            return;
        }

        match self.connector.connect(&credentials).await {
            Ok(stream) => {
                self.stream = Some(stream);
                self.state = State::Connected;
            }
            Err(err) => {
                tracing::warn!(%err, "failed to open channel");
                self.attempt += 1;
                self.state = State::Reconnecting;
            }
        }
    }

    async fn connected_state(&mut self) {
        self.state_tx.send_replace(ConnectionState::Connected);
        self.attempt = 0;

        let Some(mut stream) = self.stream.take() else {
            // Cannot happen, Connected is only entered with a live stream
            self.attempt = 1;
            self.state = State::Reconnecting;
            return;
        };

        // Push delivery during the disconnected gap is not guaranteed,
        // a full refresh reconciles anything missed. Frames buffered on
        // the socket while the refresh is in flight are applied after
        // it, prepend is idempotent by id so the refresh response stays
        // the authoritative base.
        self.refresh_feed().await;

        loop {
            match stream.next().await {
                Some(Ok(frame)) => self.process_frame(frame).await,
                Some(Err(err)) => {
                    tracing::warn!(%err, "channel broken");
                    break;
                }
                None => {
                    tracing::warn!("channel closed by server");
                    break;
                }
            }
        }

        self.attempt = 1;
        self.state = State::Reconnecting;
    }

    async fn reconnecting_state(&mut self) {
        if self.attempt > self.config.reconnect_max_attempts {
            tracing::warn!(
                max_attempts = self.config.reconnect_max_attempts,
                "reconnect attempts exhausted, closing channel"
            );
            self.state = State::Disconnected;
            return;
        }

        self.state_tx
            .send_replace(ConnectionState::Reconnecting(self.attempt));

        // Linear backoff, attempt n waits n times the base delay
        let delay = self.config.reconnect_base_delay * self.attempt;
        tracing::info!(attempt = self.attempt, ?delay, "waiting before reconnect");
        tokio::time::sleep(delay).await;

        self.state = State::Connecting;
    }

    async fn refresh_feed(&mut self) {
        match self
            .notifications_api
            .find_notifications(self.config.refresh_limit, None)
            .await
        {
            Ok(notifications) => {
                let mut feed = self.feed.write().await;
                feed.apply_refresh(notifications);
                tracing::info!(
                    count = feed.len(),
                    unread = feed.unread_count(),
                    "feed refreshed after connect"
                );
            }
            Err(err) => {
                // The channel stays up, pushes keep the feed close to
                // the server state until the next refresh
                tracing::warn!(%err, "failed to refresh feed after connect");
            }
        }
    }

    async fn process_frame(&mut self, frame: String) {
        let frame = match serde_json::from_str::<ChannelFrame>(&frame) {
            Ok(frame) => frame,
            Err(err) => {
                // Malformed frames are isolated, they never break the channel
                tracing::warn!(%err, "dropping malformed frame");
                return;
            }
        };

        match frame {
            ChannelFrame::Notification { data } => {
                tracing::debug!(id = data.id, "received notification");
                let mut feed = self.feed.write().await;
                feed.prepend(data);
            }
            ChannelFrame::Unsupported => {
                tracing::debug!("dropping frame without payload");
            }
        }
    }
}

enum State {
    Connecting,
    Connected,
    Reconnecting,
    Disconnected,
}
