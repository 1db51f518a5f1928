//! Aggregations over rows that have already been fetched for one user.
//! Nothing here touches the database; "now" is always passed in.

pub mod goals;
pub mod progress;
pub mod stats;
