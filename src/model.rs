use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::common::DbStats;

// Fixed metadata for the one country the bundled dataset covers.
static TURKIYE: Lazy<Country> = Lazy::new(|| Country {
    name: "Türkiye".to_owned(),
    phone_code: "+90".to_owned(),
    alpha2_code: "TR".to_owned(),
    alpha3_code: "TUR".to_owned(),
    abbreviation: "TR".to_owned(),
});

/// A latitude/longitude pair.
///
/// Either coordinate may be missing in the source data, independently of
/// the other, so both sides are optional.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(rename = "lat")]
    pub latitude: Option<f64>,
    #[serde(rename = "lon")]
    pub longitude: Option<f64>,
}

/// A quarter (mahalle), the leaf of the division tree.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Quarter {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub location: Option<Location>,
}

/// A district and the quarters it contains.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct District {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub quarters: Vec<Quarter>,
}

/// A town (ilçe) and the districts it contains.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Town {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(rename = "districtsData", default)]
    pub districts: Vec<District>,
}

/// A city (il) and the towns it contains.
///
/// Cities are the top level of the division tree; `id` is the province's
/// license-plate code (1 for Adana through 81 for Düzce).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct City {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(rename = "townsData", default)]
    pub towns: Vec<Town>,
}

/// Country-level metadata.
///
/// The dataset covers exactly one country, so these values are fixed in the
/// crate rather than parsed from the wire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Country {
    pub name: String,
    pub phone_code: String,
    pub alpha2_code: String,
    pub alpha3_code: String,
    pub abbreviation: String,
}

/// Top-level database structure.
///
/// Holds the ordered city list plus the fixed country metadata. Constructed
/// by the loader module from the bundled JSON dataset, or via `Default` for
/// an empty tree. Never mutated after construction, so every accessor takes
/// `&self` and hands out borrows into the tree.
#[derive(Clone, Debug)]
pub struct TurkiyeDb {
    pub cities: Vec<City>,
    pub country: Country,
}

impl Default for TurkiyeDb {
    fn default() -> Self {
        TurkiyeDb {
            cities: Vec::new(),
            country: TURKIYE.clone(),
        }
    }
}

impl TurkiyeDb {
    /// All cities in the database, in dataset order.
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// Total number of cities in the database.
    ///
    /// Equivalent to `self.cities().len()`; provided for convenience.
    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    /// Find a city by its license-plate ID.
    pub fn find_city_by_id(&self, id: u32) -> Option<&City> {
        // Linear scan of cities is fast (N = 81).
        self.cities.iter().find(|c| c.id == id)
    }

    /// Find a town by the `(city, town)` ID path.
    ///
    /// Town IDs are unique only among siblings, so the city ID is part of
    /// the key. Returns `None` as soon as any segment of the path is
    /// missing.
    pub fn find_town_by_id(&self, city_id: u32, town_id: u32) -> Option<&Town> {
        self.find_city_by_id(city_id)?
            .towns
            .iter()
            .find(|t| t.id == town_id)
    }

    /// Find a district by the `(city, town, district)` ID path.
    pub fn find_district_by_id(
        &self,
        city_id: u32,
        town_id: u32,
        district_id: u32,
    ) -> Option<&District> {
        self.find_town_by_id(city_id, town_id)?
            .districts
            .iter()
            .find(|d| d.id == district_id)
    }

    /// Find a quarter by the full `(city, town, district, quarter)` ID path.
    pub fn find_quarter_by_id(
        &self,
        city_id: u32,
        town_id: u32,
        district_id: u32,
        quarter_id: u32,
    ) -> Option<&Quarter> {
        self.find_district_by_id(city_id, town_id, district_id)?
            .quarters
            .iter()
            .find(|q| q.id == quarter_id)
    }

    /// Country metadata. The same fixed values for every instance, whether
    /// the city tree was loaded or left empty.
    pub fn country(&self) -> &Country {
        &self.country
    }

    /// Aggregate statistics for the database.
    pub fn stats(&self) -> DbStats {
        let cities = self.cities.len();

        let mut towns = 0usize;
        let mut districts = 0usize;
        let mut quarters = 0usize;

        for city in &self.cities {
            towns += city.towns.len();
            for town in &city.towns {
                districts += town.districts.len();
                for district in &town.districts {
                    quarters += district.quarters.len();
                }
            }
        }

        DbStats {
            cities,
            towns,
            districts,
            quarters,
        }
    }

    /// Iterate over all quarters together with their district, town and city.
    pub fn iter_quarters(&self) -> impl Iterator<Item = (&Quarter, &District, &Town, &City)> {
        self.cities.iter().flat_map(|city| {
            city.towns.iter().flat_map(move |town| {
                town.districts.iter().flat_map(move |district| {
                    district
                        .quarters
                        .iter()
                        .map(move |quarter| (quarter, district, town, city))
                })
            })
        })
    }
}

impl Country {
    /// The fixed Türkiye metadata, available without loading a dataset.
    pub fn turkiye() -> &'static Country {
        &TURKIYE
    }

    /// Country display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// International phone calling code rendered as a string (e.g. "+90").
    pub fn phone_code(&self) -> &str {
        &self.phone_code
    }

    /// ISO 3166-1 alpha-2 country code.
    pub fn alpha2_code(&self) -> &str {
        &self.alpha2_code
    }

    /// ISO 3166-1 alpha-3 country code.
    pub fn alpha3_code(&self) -> &str {
        &self.alpha3_code
    }

    /// Short country abbreviation used by the dataset.
    pub fn abbreviation(&self) -> &str {
        &self.abbreviation
    }
}

impl City {
    /// City display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Read-only slice of towns belonging to this city.
    pub fn towns(&self) -> &[Town] {
        &self.towns
    }
}

impl Town {
    /// Town display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Read-only slice of districts belonging to this town.
    pub fn districts(&self) -> &[District] {
        &self.districts
    }
}

impl District {
    /// District display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Read-only slice of quarters belonging to this district.
    pub fn quarters(&self) -> &[Quarter] {
        &self.quarters
    }
}

impl Quarter {
    /// Quarter display name.
    pub fn name(&self) -> &str {
        &self.name
    }
}
