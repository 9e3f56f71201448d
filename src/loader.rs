// src/loader.rs

//! # Data Loader
//!
//! Reads the dataset (a plain UTF-8 JSON array of cities) from disk and
//! materializes the owned [`TurkiyeDb`] tree. Loading happens at most once
//! per instance; there is no cache layer and no mutation after the parse.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::error::{LoadError, Result};
use crate::model::{City, Country, TurkiyeDb};

impl TurkiyeDb {
    /// Directory holding the bundled dataset.
    ///
    /// Resolved relative to the crate root (`CARGO_MANIFEST_DIR`), so this
    /// works both when running from the project and when using the crate as
    /// a dependency, as long as the `data/` directory ships alongside.
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    /// File name of the bundled dataset inside [`TurkiyeDb::default_data_dir`].
    pub fn default_dataset_filename() -> &'static str {
        "turkiye.json"
    }

    /// Load the bundled dataset.
    ///
    /// The dataset is an artifact shipped with the crate, not runtime input;
    /// if it cannot be read or parsed there is nothing sensible a caller can
    /// do, so this panics rather than returning an error. Use
    /// [`TurkiyeDb::try_load`] to handle the failure yourself.
    ///
    /// # Panics
    ///
    /// Panics if the bundled dataset is missing or malformed.
    ///
    /// # Examples
    ///
    /// ```
    /// use turkiyedb::TurkiyeDb;
    ///
    /// let db = TurkiyeDb::load();
    /// assert_eq!(db.city_count(), 81);
    /// ```
    pub fn load() -> Self {
        Self::try_load()
            .unwrap_or_else(|e| panic!("turkiyedb: failed to load bundled dataset: {e}"))
    }

    /// Fallible twin of [`TurkiyeDb::load`].
    pub fn try_load() -> Result<Self> {
        let dir = Self::default_data_dir();
        let file = Self::default_dataset_filename();
        Self::load_from_path(dir.join(file))
    }

    /// Load a dataset from an explicit path.
    ///
    /// The file must contain a JSON array of city objects shaped like the
    /// bundled dataset. Useful for tests and for callers that ship their own
    /// snapshot.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let file = File::open(path).map_err(|e| {
            LoadError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
        })?;

        let reader = BufReader::new(file);
        let cities: Vec<City> = serde_json::from_reader(reader)?;

        Ok(TurkiyeDb {
            cities,
            country: Country::turkiye().clone(),
        })
    }
}
