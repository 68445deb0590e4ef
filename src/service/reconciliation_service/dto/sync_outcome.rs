///
/// How a user action settled once the backend responded
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum SyncOutcome {
    /// Backend confirmed the change that was already applied locally
    Applied,

    /// Nothing to do: not authenticated or nothing matched
    NoOp,

    /// Backend failed, local change was reverted
    RolledBack,

    /// Backend failed, local state was replaced with the server list
    Resynchronized,

    /// Session ended or restarted before the backend responded, result ignored
    Stale,

    /// Backend failed and so did the refresh meant to recover from it
    Failed,
}
