use serde::Deserialize;
use serde_json::Value;

///
/// Single frame received from the realtime channel.
/// `data` is kept untyped, it is normalized per event name.
///
#[derive(Debug, Deserialize)]
pub struct RealtimeEvent {
    pub event: String,
    #[serde(default)]
    pub data: Value,
}
