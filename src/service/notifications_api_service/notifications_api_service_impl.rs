use super::{
    dto::{NotificationsApiServiceConfig, NotificationsList},
    error::Error,
    NotificationsApiService,
};
use crate::{
    dto::{input, output},
    store::dto::Notification,
};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

pub struct NotificationsApiServiceImpl {
    config: NotificationsApiServiceConfig,
    client: Client,
}

impl NotificationsApiServiceImpl {
    pub fn new(config: NotificationsApiServiceConfig) -> Self {
        Self::with_client(config, Client::new())
    }

    pub fn with_client(config: NotificationsApiServiceConfig, client: Client) -> Self {
        Self { config, client }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.api_url.trim_end_matches('/'), path)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, Error> {
        let response = request
            .bearer_auth(&self.config.access_token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status(status));
        }

        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, Error> {
        let bytes = response.bytes().await?;
        let response = serde_json::from_slice::<input::ApiResponse<T>>(&bytes)?;

        Ok(response.result)
    }
}

#[async_trait]
impl NotificationsApiService for NotificationsApiServiceImpl {
    async fn find_many(
        &self,
        query: output::NotificationsQuery,
    ) -> Result<NotificationsList, Error> {
        tracing::debug!("fetching notifications");
        tracing::trace!(?query);

        let request = self.client.get(self.url("/notifications")).query(&query);
        let response = self.send(request).await?;
        let page = Self::decode::<input::NotificationsPage>(response).await?;

        tracing::debug!(
            count = page.data.len(),
            total_count = page.total_count,
            unread_count = page.unread_count,
            "fetched notifications"
        );

        Ok(page.into())
    }

    async fn find_one(&self, id: &str) -> Result<Notification, Error> {
        tracing::debug!(id, "fetching notification");

        let request = self.client.get(self.url(&format!("/notifications/{id}")));
        let response = self.send(request).await?;
        let notification = Self::decode::<input::Notification>(response).await?;

        Ok(notification.into())
    }

    async fn mark_as_read(&self, id: &str) -> Result<(), Error> {
        tracing::debug!(id, "marking notification as read");

        let request = self
            .client
            .patch(self.url(&format!("/notifications/{id}/read")));
        self.send(request).await?;

        Ok(())
    }

    async fn mark_all_as_read(&self) -> Result<(), Error> {
        tracing::debug!("marking all notifications as read");

        let request = self.client.patch(self.url("/notifications/read-all"));
        self.send(request).await?;

        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), Error> {
        tracing::debug!(id, "deleting notification");

        let request = self
            .client
            .delete(self.url(&format!("/notifications/{id}")));
        self.send(request).await?;

        Ok(())
    }
}
