use async_trait::async_trait;
use futures::Future;
use seller_console_client::{
    api::{Error, NotificationFilter, NotificationsApi},
    auth::{Credentials, Role, SessionStoreImpl},
    dto::input::{Notification, NotificationPriority, NotificationType},
};
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};
use time::OffsetDateTime;
use tokio::net::{TcpListener, TcpStream};
use tokio_tungstenite::WebSocketStream;

///
/// In process replacement of the backend rest api. Serves a fixed
/// refresh payload and accepts every mutation.
///
pub struct StubNotificationsApi {
    notifications: Mutex<Vec<Notification>>,
    find_calls: AtomicUsize,
}

impl StubNotificationsApi {
    pub fn new(notifications: Vec<Notification>) -> Self {
        Self {
            notifications: Mutex::new(notifications),
            find_calls: AtomicUsize::new(0),
        }
    }

    pub fn find_calls(&self) -> usize {
        self.find_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl NotificationsApi for StubNotificationsApi {
    async fn find_notifications(
        &self,
        limit: u32,
        _filter: Option<NotificationFilter>,
    ) -> Result<Vec<Notification>, Error> {
        self.find_calls.fetch_add(1, Ordering::SeqCst);

        let notifications = self.notifications.lock().unwrap();
        let notifications = notifications
            .iter()
            .take(limit as usize)
            .cloned()
            .collect();

        Ok(notifications)
    }

    async fn update_read(&self, id: i64, is_read: bool) -> Result<Notification, Error> {
        let mut notifications = self.notifications.lock().unwrap();
        let notification = notifications
            .iter_mut()
            .find(|notification| notification.id == id)
            .ok_or(Error::UnexpectedStatus(reqwest::StatusCode::NOT_FOUND))?;
        notification.is_read = is_read;

        Ok(notification.clone())
    }

    async fn delete_notification(&self, id: i64) -> Result<(), Error> {
        let mut notifications = self.notifications.lock().unwrap();
        notifications.retain(|notification| notification.id != id);

        Ok(())
    }

    async fn unread_count(&self) -> Result<u32, Error> {
        let notifications = self.notifications.lock().unwrap();
        let unread_count = notifications
            .iter()
            .filter(|notification| !notification.is_read)
            .count() as u32;

        Ok(unread_count)
    }
}

pub fn notification(id: i64, is_read: bool) -> Notification {
    Notification {
        id,
        notification_type: NotificationType::Order,
        message: Some(format!("notification {id}")),
        order_id: Some(id),
        product_id: None,
        sku: None,
        size: None,
        color: None,
        is_read,
        priority: NotificationPriority::Unset,
        created_at: OffsetDateTime::now_utc(),
    }
}

pub fn notification_frame(id: i64) -> String {
    format!(
        r#"{{
            "type": "notification",
            "data": {{
                "id": {id},
                "type": "order",
                "message": "pushed notification",
                "is_read": false,
                "created_at": "2024-05-01T12:30:00Z"
            }}
        }}"#
    )
}

pub fn seller_session() -> Arc<SessionStoreImpl> {
    let session_store = Arc::new(SessionStoreImpl::new());
    session_store.sign_in(Credentials {
        seller_id: 1,
        role: Role::Seller,
        token: "integration-test-token".to_string(),
    });

    session_store
}

///
/// Spawn a websocket server on an ephemeral port. Connections are
/// accepted one at a time and passed to the handler.
///
/// ### Returns
/// Base url of the server
///
pub async fn spawn_ws_server<H, Fut>(mut handler: H) -> anyhow::Result<String>
where
    H: FnMut(WebSocketStream<TcpStream>) -> Fut + Send + 'static,
    Fut: Future<Output = ()> + Send,
{
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let address = listener.local_addr()?;

    tokio::spawn(async move {
        loop {
            let Ok((stream, _)) = listener.accept().await else {
                break;
            };
            let Ok(socket) = tokio_tungstenite::accept_async(stream).await else {
                continue;
            };
            handler(socket).await;
        }
    });

    Ok(format!("ws://{address}"))
}
