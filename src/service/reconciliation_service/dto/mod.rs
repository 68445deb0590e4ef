mod sync_outcome;

pub use sync_outcome::*;
