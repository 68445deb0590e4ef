use std::time::Duration;

#[derive(Debug, Clone)]
pub struct RealtimeServiceConfig {
    /// WebSocket url, e.g. `wss://college.example/realtime`
    pub realtime_url: String,
    pub access_token: String,

    pub connect_timeout: Duration,

    /// Consecutive failed connection attempts tolerated before giving up
    pub reconnect_attempts: u32,
    pub reconnect_delay: Duration,
    pub reconnect_delay_max: Duration,
}
