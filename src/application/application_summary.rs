use campus_notifications::store::SharedSessionState;
use time::OffsetDateTime;

pub async fn log_summary(session_state: &SharedSessionState) {
    let state = session_state.lock().await;
    let now = OffsetDateTime::now_utc();

    tracing::info!(
        count = state.store.len(),
        unread_count = state.store.unread_count(),
        unread_listed = state.store.unread().count(),
        loading = state.is_loading(),
        "notifications"
    );

    for notification in state.store.iter() {
        tracing::info!(
            id = %notification.id,
            kind = %notification.notification_type,
            priority = %notification.priority,
            read = notification.read,
            received = %notification.relative_time(now),
            target = ?notification.navigation_target(),
            "{}",
            notification.title
        );
    }
}
