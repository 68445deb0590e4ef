mod application;

use application::ApplicationEnv;
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    #[cfg(debug_assertions)]
    {
        // Ignore error because .env file is not required
        // as long as env variables are set
        let _ = dotenvy::dotenv();
    }

    let env = ApplicationEnv::parse()?;

    application::setup_tracing(&env)?;

    let state = application::create_state(&env);

    let outcome = state.session_service.authenticate().await;
    tracing::info!(%outcome, "initial synchronization finished");
    application::log_summary(&state.session_state).await;

    let commands = async {
        let stdin = BufReader::new(tokio::io::stdin());
        if let Err(err) = application::run_commands(&state, stdin).await {
            tracing::error!(%err, "failed to read commands");
        }
        // keep running without input until a shutdown signal arrives
        std::future::pending::<()>().await
    };

    tokio::select! {
        biased;
        _ = application::shutdown_signal() => {},
        _ = commands => {},
    }

    application::log_summary(&state.session_state).await;
    application::close(state).await;

    Ok(())
}
