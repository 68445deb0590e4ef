use super::{log_summary, ApplicationState};
use campus_notifications::service::reconciliation_service::SyncOutcome;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    List,
    Refresh,
    MarkAsRead(String),
    MarkAllAsRead,
    Remove(String),
    ClearAll,
}

impl Command {
    pub fn parse(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace();
        let command = match (parts.next()?, parts.next()) {
            ("list", None) => Self::List,
            ("refresh", None) => Self::Refresh,
            ("read", Some(id)) => Self::MarkAsRead(id.to_string()),
            ("read-all", None) => Self::MarkAllAsRead,
            ("remove", Some(id)) => Self::Remove(id.to_string()),
            ("clear", None) => Self::ClearAll,
            _ => return None,
        };

        match parts.next() {
            Some(_) => None,
            None => Some(command),
        }
    }
}

///
/// Reads one command per line and applies it to the session
/// until the input is exhausted
///
pub async fn run_commands<R>(state: &ApplicationState, input: R) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let Some(command) = Command::parse(&line) else {
            tracing::warn!(line, "unknown command");
            continue;
        };

        execute(state, command).await;
    }

    tracing::debug!("command input closed");
    Ok(())
}

async fn execute(state: &ApplicationState, command: Command) {
    let service = &state.reconciliation_service;
    let outcome = match &command {
        Command::List => {
            log_summary(&state.session_state).await;
            return;
        }
        Command::Refresh => service.refresh().await,
        Command::MarkAsRead(id) => service.mark_as_read(id).await,
        Command::MarkAllAsRead => service.mark_all_as_read().await,
        Command::Remove(id) => service.remove(id).await,
        Command::ClearAll => service.clear_all().await,
    };

    match outcome {
        SyncOutcome::Failed | SyncOutcome::RolledBack => {
            tracing::warn!(?command, %outcome, "command not applied")
        }
        _ => tracing::info!(?command, %outcome, "command finished"),
    }
}
