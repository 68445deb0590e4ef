use super::ApplicationEnv;
use campus_notifications::{
    service::{
        notifications_api_service::{NotificationsApiServiceConfig, NotificationsApiServiceImpl},
        realtime_service::{RealtimeServiceConfig, WebSocketRealtimeConnector},
        reconciliation_service::{ReconciliationService, ReconciliationServiceImpl},
        session_service::{SessionService, SessionServiceImpl},
    },
    store::{SessionState, SharedSessionState},
};
use std::sync::Arc;

#[derive(Clone)]
pub struct ApplicationState {
    pub session_state: SharedSessionState,
    pub session_service: Arc<dyn SessionService>,
    pub reconciliation_service: Arc<dyn ReconciliationService>,
}

pub fn create_state(env: &ApplicationEnv) -> ApplicationState {
    tracing::info!("creating session state");
    let session_state = SessionState::default().shared();

    tracing::info!("creating services");
    let config = NotificationsApiServiceConfig {
        api_url: env.api_url.clone(),
        access_token: env.access_token.clone(),
    };
    let notifications_api_service = NotificationsApiServiceImpl::new(config);
    let notifications_api_service = Arc::new(notifications_api_service);

    let reconciliation_service =
        ReconciliationServiceImpl::new(session_state.clone(), notifications_api_service);
    let reconciliation_service = Arc::new(reconciliation_service);

    let config = RealtimeServiceConfig {
        realtime_url: env.realtime_url.clone(),
        access_token: env.access_token.clone(),
        connect_timeout: env.realtime_connect_timeout,
        reconnect_attempts: env.realtime_reconnect_attempts,
        reconnect_delay: env.realtime_reconnect_delay,
        reconnect_delay_max: env.realtime_reconnect_delay_max,
    };
    let config = Arc::new(config);
    let realtime_connector = WebSocketRealtimeConnector::new(config.clone());
    let realtime_connector = Arc::new(realtime_connector);

    let session_service = SessionServiceImpl::new(
        config,
        session_state.clone(),
        realtime_connector,
        reconciliation_service.clone(),
    );
    let session_service = Arc::new(session_service);

    ApplicationState {
        session_state,
        session_service,
        reconciliation_service,
    }
}
