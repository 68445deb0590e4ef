use anyhow::anyhow;
use std::time::Duration;

pub struct ApplicationEnv {
    pub log_directory: String,
    pub log_filename: String,

    pub api_url: String,
    pub realtime_url: String,
    pub access_token: String,

    pub realtime_connect_timeout: Duration,
    pub realtime_reconnect_attempts: u32,
    pub realtime_reconnect_delay: Duration,
    pub realtime_reconnect_delay_max: Duration,
}

impl ApplicationEnv {
    pub fn parse() -> anyhow::Result<Self> {
        let log_directory = Self::env_var("CAMPUS_NOTIFICATIONS_LOG_DIRECTORY")?;
        let log_filename = Self::env_var("CAMPUS_NOTIFICATIONS_LOG_FILENAME")?;
        let api_url = Self::env_var("CAMPUS_NOTIFICATIONS_API_URL")?;
        let realtime_url = Self::env_var("CAMPUS_NOTIFICATIONS_REALTIME_URL")?;
        let access_token = Self::env_var("CAMPUS_NOTIFICATIONS_ACCESS_TOKEN")?;
        let realtime_connect_timeout =
            Self::env_var("CAMPUS_NOTIFICATIONS_REALTIME_CONNECT_TIMEOUT")?.parse()?;
        let realtime_connect_timeout = Duration::from_secs(realtime_connect_timeout);
        let realtime_reconnect_attempts =
            Self::env_var("CAMPUS_NOTIFICATIONS_REALTIME_RECONNECT_ATTEMPTS")?.parse()?;
        let realtime_reconnect_delay =
            Self::env_var("CAMPUS_NOTIFICATIONS_REALTIME_RECONNECT_DELAY")?.parse()?;
        let realtime_reconnect_delay = Duration::from_millis(realtime_reconnect_delay);
        let realtime_reconnect_delay_max =
            Self::env_var("CAMPUS_NOTIFICATIONS_REALTIME_RECONNECT_DELAY_MAX")?.parse()?;
        let realtime_reconnect_delay_max = Duration::from_millis(realtime_reconnect_delay_max);

        if realtime_reconnect_delay > realtime_reconnect_delay_max {
            return Err(anyhow!(
                "CAMPUS_NOTIFICATIONS_REALTIME_RECONNECT_DELAY must not exceed CAMPUS_NOTIFICATIONS_REALTIME_RECONNECT_DELAY_MAX"
            ));
        }

        Ok(Self {
            log_directory,
            log_filename,
            api_url,
            realtime_url,
            access_token,
            realtime_connect_timeout,
            realtime_reconnect_attempts,
            realtime_reconnect_delay,
            realtime_reconnect_delay_max,
        })
    }

    fn env_var(name: &'static str) -> anyhow::Result<String> {
        std::env::var(name).map_err(|_| anyhow!("environment variable {name} not set"))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serial_test::serial;

    const VARS: [(&str, &str); 9] = [
        ("CAMPUS_NOTIFICATIONS_LOG_DIRECTORY", "logs"),
        ("CAMPUS_NOTIFICATIONS_LOG_FILENAME", "campus-notifications.log"),
        ("CAMPUS_NOTIFICATIONS_API_URL", "http://127.0.0.1:8080/api/v1"),
        ("CAMPUS_NOTIFICATIONS_REALTIME_URL", "ws://127.0.0.1:8080/realtime"),
        ("CAMPUS_NOTIFICATIONS_ACCESS_TOKEN", "token"),
        ("CAMPUS_NOTIFICATIONS_REALTIME_CONNECT_TIMEOUT", "20"),
        ("CAMPUS_NOTIFICATIONS_REALTIME_RECONNECT_ATTEMPTS", "5"),
        ("CAMPUS_NOTIFICATIONS_REALTIME_RECONNECT_DELAY", "1000"),
        ("CAMPUS_NOTIFICATIONS_REALTIME_RECONNECT_DELAY_MAX", "5000"),
    ];

    fn set_vars() {
        for (name, value) in VARS {
            std::env::set_var(name, value);
        }
    }

    #[test]
    #[serial]
    fn parse_ok() {
        set_vars();

        let env = ApplicationEnv::parse().unwrap();

        assert_eq!(env.realtime_connect_timeout, Duration::from_secs(20));
        assert_eq!(env.realtime_reconnect_attempts, 5);
        assert_eq!(env.realtime_reconnect_delay, Duration::from_secs(1));
        assert_eq!(env.realtime_reconnect_delay_max, Duration::from_secs(5));
    }

    #[test]
    #[serial]
    fn parse_missing_variable_err() {
        set_vars();
        std::env::remove_var("CAMPUS_NOTIFICATIONS_ACCESS_TOKEN");

        let result = ApplicationEnv::parse();

        let err = result.err().unwrap();
        assert!(err
            .to_string()
            .contains("CAMPUS_NOTIFICATIONS_ACCESS_TOKEN"));
    }

    #[test]
    #[serial]
    fn parse_delay_above_max_err() {
        set_vars();
        std::env::set_var("CAMPUS_NOTIFICATIONS_REALTIME_RECONNECT_DELAY", "9000");

        let result = ApplicationEnv::parse();

        assert!(result.is_err());
    }
}
