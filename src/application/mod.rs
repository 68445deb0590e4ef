mod application_commands;
mod application_env;
mod application_shutdown;
mod application_state;
mod application_summary;
mod application_tracing;

pub use application_commands::*;
pub use application_env::*;
pub use application_shutdown::*;
pub use application_state::*;
pub use application_summary::*;
pub use application_tracing::*;
