use super::error::Error;
use crate::dto::input;
use async_trait::async_trait;
use futures::stream::BoxStream;

pub type RealtimeEventStream = BoxStream<'static, Result<input::RealtimeEvent, Error>>;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RealtimeConnector: Send + Sync {
    ///
    /// Opens a new connection to the realtime channel.
    /// Stream ends when the connection is closed.
    ///
    async fn connect(&self) -> Result<RealtimeEventStream, Error>;
}
