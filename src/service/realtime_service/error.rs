use tokio_tungstenite::tungstenite;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("websocket error: {0}")]
    WebSocket(#[from] tungstenite::Error),

    #[error("connection not established within {0:?}")]
    ConnectTimeout(std::time::Duration),

    #[error("access token is not a valid header value")]
    InvalidAccessToken,

    #[error("connection closed by server")]
    Closed,
}
