//! turkiyedb prelude: bring the common types into scope for examples.

pub use crate::common::DbStats;
pub use crate::error::{LoadError, Result};
pub use crate::model::{City, Country, District, Location, Quarter, Town, TurkiyeDb};
