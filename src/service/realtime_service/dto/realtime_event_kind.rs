use crate::store::dto::NotificationType;

///
/// Realtime events that produce notifications
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString)]
pub enum RealtimeEventKind {
    #[strum(serialize = "notice:new")]
    Notice,
    #[strum(serialize = "event:new")]
    Event,
    #[strum(serialize = "announcement:new")]
    Announcement,
}

impl RealtimeEventKind {
    pub fn notification_type(self) -> NotificationType {
        match self {
            RealtimeEventKind::Notice => NotificationType::Notice,
            RealtimeEventKind::Event => NotificationType::Event,
            RealtimeEventKind::Announcement => NotificationType::Announcement,
        }
    }

    pub fn default_title(self) -> &'static str {
        match self {
            RealtimeEventKind::Notice => "New Notice",
            RealtimeEventKind::Event => "New Event",
            RealtimeEventKind::Announcement => "New Announcement",
        }
    }

    /// Payload fields holding the body, in order of preference
    pub fn message_fields(self) -> &'static [&'static str] {
        match self {
            RealtimeEventKind::Notice => &["message", "content"],
            RealtimeEventKind::Event => &["description"],
            RealtimeEventKind::Announcement => &["message"],
        }
    }

    /// Metadata key under which id of the source entity is stored
    pub fn reference_field(self) -> &'static str {
        match self {
            RealtimeEventKind::Notice => "noticeId",
            RealtimeEventKind::Event => "eventId",
            RealtimeEventKind::Announcement => "announcementId",
        }
    }
}
