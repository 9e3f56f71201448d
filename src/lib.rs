// src/lib.rs

//! Embedded database of Türkiye's administrative divisions.
//!
//! The bundled JSON dataset covers all 81 provinces (cities) with their
//! towns, districts and quarters, plus fixed country metadata. It is parsed
//! once by [`TurkiyeDb::load`]; every query afterwards is a pure in-memory
//! scan handing out borrows into the tree.
//!
//! Entity IDs are unique only among siblings (the same town ID exists under
//! many cities), so lookups below the city level take the full ID path.
//!
//! ```
//! use turkiyedb::TurkiyeDb;
//!
//! let db = TurkiyeDb::load();
//!
//! let ankara = db.find_city_by_id(6).unwrap();
//! assert_eq!(ankara.name(), "Ankara");
//!
//! assert_eq!(db.country().phone_code(), "+90");
//! ```

pub mod common;
pub mod error;
pub mod loader;
pub mod model;
pub mod prelude;

// Re-exports
pub use crate::common::DbStats;
pub use crate::error::{LoadError, Result};
pub use crate::model::{City, Country, District, Location, Quarter, Town, TurkiyeDb};
