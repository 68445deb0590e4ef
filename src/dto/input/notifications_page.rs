use super::Notification;
use serde::Deserialize;

///
/// Envelope the backend wraps every successful response in
///
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub result: T,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationsPage {
    pub data: Vec<Notification>,
    pub total_count: u64,
    pub unread_count: u64,
    #[serde(default)]
    pub current_page: u32,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub limit: u32,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn notifications_page_json_deserialize_ok() {
        let json = r#"{
            "success": true,
            "message": "Notifications fetched",
            "result": {
                "data": [{
                    "_id": "1",
                    "type": "notice",
                    "title": "Exam Schedule",
                    "message": "",
                    "timestamp": "2024-01-01T00:00:00Z",
                    "read": false
                }],
                "totalCount": 12,
                "unreadCount": 4,
                "currentPage": 1,
                "totalPages": 2,
                "limit": 10
            }
        }"#;

        let page = serde_json::from_str::<ApiResponse<NotificationsPage>>(json)
            .unwrap()
            .result;

        assert_eq!(page.data.len(), 1);
        assert_eq!(page.total_count, 12);
        assert_eq!(page.unread_count, 4);
        assert_eq!(page.total_pages, 2);
    }
}
