use super::{
    dto::RealtimeServiceConfig,
    error::Error,
    realtime_connector::{RealtimeConnector, RealtimeEventStream},
};
use crate::dto::input;
use async_trait::async_trait;
use futures::{future, StreamExt};
use std::sync::Arc;
use tokio_tungstenite::{
    connect_async,
    tungstenite::{
        client::IntoClientRequest,
        http::{header::AUTHORIZATION, HeaderValue},
        Message,
    },
};

pub struct WebSocketRealtimeConnector {
    config: Arc<RealtimeServiceConfig>,
}

impl WebSocketRealtimeConnector {
    pub fn new(config: Arc<RealtimeServiceConfig>) -> Self {
        Self { config }
    }
}

#[async_trait]
impl RealtimeConnector for WebSocketRealtimeConnector {
    async fn connect(&self) -> Result<RealtimeEventStream, Error> {
        let mut request = self.config.realtime_url.as_str().into_client_request()?;
        let authorization = HeaderValue::from_str(&format!("Bearer {}", self.config.access_token))
            .map_err(|_| Error::InvalidAccessToken)?;
        request.headers_mut().insert(AUTHORIZATION, authorization);

        tracing::debug!(url = self.config.realtime_url, "connecting to realtime channel");
        let (websocket, _) = tokio::time::timeout(self.config.connect_timeout, connect_async(request))
            .await
            .map_err(|_| Error::ConnectTimeout(self.config.connect_timeout))??;

        let stream = websocket
            .filter_map(|message| future::ready(decode_message(message)))
            .boxed();

        Ok(stream)
    }
}

fn decode_message(
    message: Result<Message, tokio_tungstenite::tungstenite::Error>,
) -> Option<Result<input::RealtimeEvent, Error>> {
    match message {
        Ok(Message::Text(text)) => match serde_json::from_str::<input::RealtimeEvent>(&text) {
            Ok(event) => Some(Ok(event)),
            Err(err) => {
                tracing::debug!(%err, "skipping malformed realtime frame");
                None
            }
        },
        Ok(Message::Close(_)) => Some(Err(Error::Closed)),
        // Pings are answered by tungstenite itself
        Ok(_) => None,
        Err(err) => Some(Err(Error::WebSocket(err))),
    }
}
