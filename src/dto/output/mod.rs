mod notifications_query;

pub use notifications_query::*;
