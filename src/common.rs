use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for the database.
///
/// Returned by [`crate::TurkiyeDb::stats`], these counts reflect the
/// materialized in-memory tree and are recomputed on every call.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DbStats {
    pub cities: usize,
    pub towns: usize,
    pub districts: usize,
    pub quarters: usize,
}
