use cargonet_lib::{Error, FileStore, NetworkSource, Path, Station};
use tempfile::TempDir;

fn station(name: &str, cargo_amount: f64) -> Station {
    Station {
        name: name.to_string(),
        cargo_amount,
    }
}

fn path(src: &str, dst: &str, distance: f64) -> Path {
    Path {
        src: src.to_string(),
        dst: dst.to_string(),
        distance,
    }
}

fn seeded_store() -> (TempDir, FileStore) {
    let dir = TempDir::new().expect("tempdir");
    let store = FileStore::create(dir.path()).expect("create store");
    store.add_station(station("Alpha", 10.0)).unwrap();
    store.add_station(station("Beta", 0.0)).unwrap();
    store.add_path(path("Alpha", "Beta", 5.0)).unwrap();
    (dir, store)
}

#[test]
fn open_requires_existing_directory() {
    let err = FileStore::open("/nonexistent/cargonet/data").unwrap_err();
    assert!(matches!(err, Error::DataDirNotFound { .. }));
}

#[test]
fn empty_store_reads_as_empty_lists() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::create(dir.path()).unwrap();

    assert!(store.stations().unwrap().is_empty());
    assert!(store.paths().unwrap().is_empty());
}

#[test]
fn stations_persist_across_reopen() {
    let (dir, store) = seeded_store();
    drop(store);

    let reopened = FileStore::open(dir.path()).unwrap();
    let stations = reopened.stations().unwrap();
    assert_eq!(stations.len(), 2);
    assert_eq!(stations[0].name, "Alpha");
}

#[test]
fn duplicate_station_names_are_rejected_case_insensitively() {
    let (_dir, store) = seeded_store();

    let err = store.add_station(station("alpha", 3.0)).unwrap_err();
    assert!(matches!(err, Error::DuplicateStation { .. }));
    assert_eq!(store.stations().unwrap().len(), 2);
}

#[test]
fn update_station_changes_cargo_only() {
    let (_dir, store) = seeded_store();

    store.update_station_cargo("Alpha", 42.0).unwrap();
    let stations = store.stations().unwrap();
    let alpha = stations.iter().find(|s| s.name == "Alpha").unwrap();
    assert_eq!(alpha.cargo_amount, 42.0);

    let err = store.update_station_cargo("Ghost", 1.0).unwrap_err();
    assert!(matches!(err, Error::UnknownStation { .. }));
}

#[test]
fn station_wired_into_a_path_cannot_be_deleted() {
    let (_dir, store) = seeded_store();

    let err = store.delete_station("Alpha").unwrap_err();
    assert!(matches!(err, Error::StationInPath { .. }));

    store.delete_path("Alpha", "Beta").unwrap();
    store.delete_station("Alpha").unwrap();
    assert_eq!(store.stations().unwrap().len(), 1);
}

#[test]
fn path_endpoints_must_exist() {
    let (_dir, store) = seeded_store();

    let err = store.add_path(path("Alpha", "Ghost", 2.0)).unwrap_err();
    match err {
        Error::UnknownStation { name } => assert_eq!(name, "Ghost"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn duplicate_paths_match_either_direction() {
    let (_dir, store) = seeded_store();

    let err = store.add_path(path("Beta", "Alpha", 9.0)).unwrap_err();
    assert!(matches!(err, Error::DuplicatePath { .. }));
}

#[test]
fn update_path_moves_endpoints_and_distance() {
    let (_dir, store) = seeded_store();
    store.add_station(station("Gamma", 1.0)).unwrap();

    // The path to edit may be named in reverse endpoint order.
    store
        .update_path("Beta", "Alpha", "Alpha", "Gamma", 7.5)
        .unwrap();

    let paths = store.paths().unwrap();
    assert_eq!(paths.len(), 1);
    assert!(paths[0].connects("Alpha", "Gamma"));
    assert_eq!(paths[0].distance, 7.5);
}

#[test]
fn update_path_rejects_missing_original() {
    let (_dir, store) = seeded_store();
    store.add_station(station("Gamma", 0.0)).unwrap();

    let err = store
        .update_path("Alpha", "Gamma", "Alpha", "Gamma", 1.0)
        .unwrap_err();
    assert!(matches!(err, Error::PathNotFound { .. }));
}

#[test]
fn delete_path_matches_either_direction() {
    let (_dir, store) = seeded_store();

    store.delete_path("Beta", "Alpha").unwrap();
    assert!(store.paths().unwrap().is_empty());

    let err = store.delete_path("Alpha", "Beta").unwrap_err();
    assert!(matches!(err, Error::PathNotFound { .. }));
}
