pub struct NotificationsApiServiceConfig {
    /// Base url without trailing path, e.g. `https://college.example/api/v1`
    pub api_url: String,
    pub access_token: String,
}
