use super::{Error, NotificationFilter, NotificationsApi, ProductsApi};
use crate::{
    auth::SessionStore,
    dto::{input, output},
};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use std::sync::Arc;

///
/// Reqwest implementation of the REST collaborators.
/// The bearer token is read from the session store per request,
/// never cached, so token rotation is picked up immediately.
///
pub struct RestApiClient {
    base_url: String,
    client: reqwest::Client,
    session_store: Arc<dyn SessionStore>,
}

impl RestApiClient {
    pub fn new(base_url: String, session_store: Arc<dyn SessionStore>) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        let client = reqwest::Client::new();

        Self {
            base_url,
            client,
            session_store,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn token(&self) -> Result<String, Error> {
        let credentials = self
            .session_store
            .credentials()
            .ok_or(Error::MissingCredentials)?;
        if credentials.token.is_empty() {
            return Err(Error::MissingCredentials);
        }

        Ok(credentials.token)
    }

    fn check_status(response: &reqwest::Response) -> Result<(), Error> {
        let status = response.status();
        match status.is_success() {
            true => Ok(()),
            false => Err(Error::UnexpectedStatus(status)),
        }
    }
}

#[async_trait]
impl NotificationsApi for RestApiClient {
    async fn find_notifications(
        &self,
        limit: u32,
        filter: Option<NotificationFilter>,
    ) -> Result<Vec<input::Notification>, Error> {
        let token = self.token()?;

        let mut request = self
            .client
            .get(self.endpoint("/seller/notifications"))
            .query(&[("limit", limit)])
            .bearer_auth(token);
        if let Some(filter) = filter {
            request = request.query(&[("filter", filter.as_ref())]);
        }

        let response = request.send().await?;
        Self::check_status(&response)?;

        Ok(response.json().await?)
    }

    async fn update_read(&self, id: i64, is_read: bool) -> Result<input::Notification, Error> {
        let token = self.token()?;

        let response = self
            .client
            .patch(self.endpoint(&format!("/seller/notifications/{id}/read")))
            .bearer_auth(token)
            .json(&output::ReadUpdate { is_read })
            .send()
            .await?;
        Self::check_status(&response)?;

        Ok(response.json().await?)
    }

    async fn delete_notification(&self, id: i64) -> Result<(), Error> {
        let token = self.token()?;

        let response = self
            .client
            .delete(self.endpoint(&format!("/seller/notifications/{id}")))
            .bearer_auth(token)
            .send()
            .await?;
        Self::check_status(&response)?;

        Ok(())
    }

    async fn unread_count(&self) -> Result<u32, Error> {
        let token = self.token()?;

        let response = self
            .client
            .get(self.endpoint("/seller/notifications/unread/count"))
            .bearer_auth(token)
            .send()
            .await?;
        Self::check_status(&response)?;

        let count = response.json::<input::UnreadCount>().await?;

        Ok(count.unread_count)
    }
}

#[async_trait]
impl ProductsApi for RestApiClient {
    async fn bulk_upload_with_images(
        &self,
        request: output::BulkUploadRequest,
    ) -> Result<input::BulkUploadReport, Error> {
        let token = self.token()?;

        let csv_part = Part::text(request.csv_content)
            .file_name(request.csv_file_name)
            .mime_str("text/csv")?;
        let mut form = Form::new().part("csv_file", csv_part);

        for row_images in request.images {
            let field_name = format!("images_{}", row_images.row_index);
            for image in row_images.images {
                let part = Part::bytes(image.bytes)
                    .file_name(image.file_name)
                    .mime_str(&image.content_type)?;
                form = form.part(field_name.clone(), part);
            }
        }

        let response = self
            .client
            .post(self.endpoint("/seller/products/bulk-upload-with-images"))
            .bearer_auth(token)
            .multipart(form)
            .send()
            .await?;
        Self::check_status(&response)?;

        Ok(response.json().await?)
    }
}
