//! Integration tests over the bundled dataset.

use turkiyedb::{Country, TurkiyeDb};

#[test]
fn bundled_dataset_has_81_cities() {
    let db = TurkiyeDb::load();
    assert_eq!(db.city_count(), 81);
    assert_eq!(db.cities().len(), 81);
}

#[test]
fn every_city_resolves_by_its_own_id() {
    let db = TurkiyeDb::load();
    for city in db.cities() {
        let found = db
            .find_city_by_id(city.id)
            .unwrap_or_else(|| panic!("city {} did not resolve by ID", city.id));
        assert_eq!(found.name(), city.name());
    }
}

#[test]
fn city_ids_follow_license_plates() {
    let db = TurkiyeDb::load();
    assert_eq!(db.find_city_by_id(1).map(|c| c.name()), Some("Adana"));
    assert_eq!(db.find_city_by_id(6).map(|c| c.name()), Some("Ankara"));
    assert_eq!(db.find_city_by_id(34).map(|c| c.name()), Some("İstanbul"));
    assert_eq!(db.find_city_by_id(81).map(|c| c.name()), Some("Düzce"));
}

#[test]
fn unknown_city_id_is_none() {
    let db = TurkiyeDb::load();
    assert!(db.find_city_by_id(0).is_none());
    assert!(db.find_city_by_id(82).is_none());
    assert!(db.find_city_by_id(100).is_none());
}

#[test]
fn every_level_of_the_tree_is_populated() {
    let db = TurkiyeDb::load();

    let city = &db.cities()[0];
    assert!(!city.towns().is_empty());

    let town = &city.towns()[0];
    assert!(!town.districts().is_empty());

    let district = &town.districts()[0];
    assert!(!district.quarters().is_empty());
}

#[test]
fn id_path_lookup_matches_direct_traversal() {
    let db = TurkiyeDb::load();

    let city = &db.cities()[0];
    let town = &city.towns()[0];
    let district = &town.districts()[0];
    let quarter = &district.quarters()[0];

    let found_town = db.find_town_by_id(city.id, town.id).unwrap();
    assert_eq!(found_town.name(), town.name());

    let found_district = db
        .find_district_by_id(city.id, town.id, district.id)
        .unwrap();
    assert_eq!(found_district.name(), district.name());

    let found_quarter = db
        .find_quarter_by_id(city.id, town.id, district.id, quarter.id)
        .unwrap();
    assert_eq!(found_quarter.name(), quarter.name());
}

#[test]
fn unknown_trailing_id_is_none_at_every_level() {
    let db = TurkiyeDb::load();
    assert!(db.find_town_by_id(1, 999).is_none());
    assert!(db.find_district_by_id(1, 1, 999).is_none());
    assert!(db.find_quarter_by_id(1, 1, 1, 999).is_none());

    // Absence propagates from the first missing segment.
    assert!(db.find_quarter_by_id(999, 1, 1, 1).is_none());
}

#[test]
fn default_db_is_empty_but_answers_lookups() {
    let db = TurkiyeDb::default();
    assert_eq!(db.city_count(), 0);
    assert!(db.find_city_by_id(1).is_none());
    assert!(db.find_town_by_id(1, 1).is_none());
    assert!(db.find_district_by_id(1, 1, 1).is_none());
    assert!(db.find_quarter_by_id(1, 1, 1, 1).is_none());
}

#[test]
fn country_is_fixed_regardless_of_load_state() {
    let loaded = TurkiyeDb::load();
    let empty = TurkiyeDb::default();

    for db in [&loaded, &empty] {
        let country = db.country();
        assert_eq!(country.name(), "Türkiye");
        assert_eq!(country.phone_code(), "+90");
        assert_eq!(country.alpha2_code(), "TR");
        assert_eq!(country.alpha3_code(), "TUR");
        assert_eq!(country.abbreviation(), "TR");
    }

    assert_eq!(loaded.country(), Country::turkiye());
}

#[test]
fn stats_agree_with_the_quarter_iterator() {
    let db = TurkiyeDb::load();
    let stats = db.stats();

    assert_eq!(stats.cities, 81);
    assert!(stats.towns > stats.cities);
    assert!(stats.districts >= stats.towns);
    assert!(stats.quarters > stats.districts);
    assert_eq!(stats.quarters, db.iter_quarters().count());
}

#[test]
fn town_ids_restart_under_each_city() {
    let db = TurkiyeDb::load();

    // Town ID 1 exists under every city; the resolved town depends on the
    // city segment of the path.
    let first = db.find_town_by_id(1, 1).unwrap();
    let second = db.find_town_by_id(2, 1).unwrap();
    assert!(std::ptr::eq(first, db.find_town_by_id(1, 1).unwrap()));
    assert!(!std::ptr::eq(first, second));
}
