//!
//! Turns loosely typed realtime payloads into [Notification]s.
//! Missing, empty or mistyped fields are replaced with defaults,
//! so normalization never fails.
//!

use super::dto::RealtimeEventKind;
use crate::store::dto::{Notification, NotificationPriority};
use serde_json::{Map, Value};
use time::{format_description::well_known::Rfc3339, OffsetDateTime};

pub fn normalize(
    kind: RealtimeEventKind,
    payload: Value,
    received_at: OffsetDateTime,
) -> Notification {
    let fields = match payload {
        Value::Object(fields) => fields,
        payload => {
            tracing::debug!(%kind, ?payload, "payload is not an object");
            Map::new()
        }
    };

    let notification_type = kind.notification_type();

    let source_id = string_field(&fields, "_id").or_else(|| string_field(&fields, "id"));
    let id = source_id.clone().unwrap_or_else(|| {
        let millis = received_at.unix_timestamp_nanos() / 1_000_000;
        format!("{notification_type}-{millis}")
    });

    let title =
        string_field(&fields, "title").unwrap_or_else(|| kind.default_title().to_string());

    let message = kind
        .message_fields()
        .iter()
        .find_map(|field| string_field(&fields, field))
        .unwrap_or_default();

    let priority = string_field(&fields, "priority")
        .and_then(|priority| priority.parse::<NotificationPriority>().ok())
        .unwrap_or_else(|| notification_type.default_priority());

    let timestamp = string_field(&fields, "createdAt")
        .and_then(|created_at| OffsetDateTime::parse(&created_at, &Rfc3339).ok())
        .unwrap_or(received_at);

    let mut metadata = Map::new();
    if let Some(source_id) = source_id {
        metadata.insert(kind.reference_field().to_string(), Value::String(source_id));
    }
    // Payload fields win over the derived reference
    metadata.extend(fields);

    Notification {
        id,
        notification_type,
        title,
        message,
        timestamp,
        read: false,
        priority,
        metadata,
    }
}

fn string_field(fields: &Map<String, Value>, name: &str) -> Option<String> {
    match fields.get(name)? {
        Value::String(value) if !value.is_empty() => Some(value.clone()),
        Value::Number(value) => Some(value.to_string()),
        _ => None,
    }
}
