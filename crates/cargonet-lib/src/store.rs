//! JSON file-backed store for stations and paths.
//!
//! The store owns the referential and uniqueness invariants of the network:
//! unique station names, path endpoints that resolve to known stations, at
//! most one path per unordered station pair, and no deletion of a station
//! that is still wired into a path. Format-level validation of incoming
//! values (non-empty names, non-negative numbers) belongs to the caller.
//!
//! Every read loads a fresh snapshot from disk and every write rewrites the
//! whole file. Callers that mutate concurrently are expected to serialize
//! access themselves.

use std::fs;
use std::path::{Path as FsPath, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::model::{Path, Station};

const STATIONS_FILE: &str = "stations.json";
const PATHS_FILE: &str = "paths.json";

/// Read access to the current network snapshot.
///
/// The route core consumes plain slices, so this trait is the seam that
/// lets the service inject the file store while tests hand in synthetic
/// in-memory lists.
pub trait NetworkSource {
    /// Current full station list.
    fn stations(&self) -> Result<Vec<Station>>;
    /// Current full path list.
    fn paths(&self) -> Result<Vec<Path>>;
}

/// Station/path store persisted as two JSON arrays in a data directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at an existing data directory.
    ///
    /// Missing data files are treated as empty lists; they are created on
    /// first write.
    pub fn open(data_dir: impl Into<PathBuf>) -> Result<Self> {
        let data_dir = data_dir.into();
        if !data_dir.is_dir() {
            return Err(Error::DataDirNotFound { path: data_dir });
        }
        Ok(Self { data_dir })
    }

    /// Create the data directory if needed and open a store over it.
    pub fn create(data_dir: impl Into<PathBuf>) -> Result<Self> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir)?;
        Ok(Self { data_dir })
    }

    /// Directory holding the JSON data files.
    pub fn data_dir(&self) -> &FsPath {
        &self.data_dir
    }

    /// Add a new station. Names are compared case-insensitively for the
    /// duplicate check so two spellings of the same name cannot coexist.
    pub fn add_station(&self, station: Station) -> Result<()> {
        let mut stations = self.load_stations()?;

        let lowered = station.name.to_lowercase();
        if stations
            .iter()
            .any(|existing| existing.name.to_lowercase() == lowered)
        {
            return Err(Error::DuplicateStation { name: station.name });
        }

        stations.push(station);
        self.save(STATIONS_FILE, &stations)
    }

    /// Update a station's cargo amount. The name is immutable.
    pub fn update_station_cargo(&self, name: &str, cargo_amount: f64) -> Result<()> {
        let mut stations = self.load_stations()?;

        let station = stations
            .iter_mut()
            .find(|station| station.name == name)
            .ok_or_else(|| Error::UnknownStation {
                name: name.to_string(),
            })?;
        station.cargo_amount = cargo_amount;

        self.save(STATIONS_FILE, &stations)
    }

    /// Delete a station, refusing while any path still references it.
    pub fn delete_station(&self, name: &str) -> Result<()> {
        let mut stations = self.load_stations()?;
        let paths = self.load_paths()?;

        if !stations.iter().any(|station| station.name == name) {
            return Err(Error::UnknownStation {
                name: name.to_string(),
            });
        }
        if paths.iter().any(|path| path.touches(name)) {
            return Err(Error::StationInPath {
                name: name.to_string(),
            });
        }

        stations.retain(|station| station.name != name);
        self.save(STATIONS_FILE, &stations)
    }

    /// Add a new path between two existing stations.
    pub fn add_path(&self, path: Path) -> Result<()> {
        let stations = self.load_stations()?;
        let mut paths = self.load_paths()?;

        for endpoint in [&path.src, &path.dst] {
            if !stations.iter().any(|station| &station.name == endpoint) {
                return Err(Error::UnknownStation {
                    name: endpoint.clone(),
                });
            }
        }
        if paths
            .iter()
            .any(|existing| existing.connects(&path.src, &path.dst))
        {
            return Err(Error::DuplicatePath {
                src: path.src,
                dst: path.dst,
            });
        }

        paths.push(path);
        self.save(PATHS_FILE, &paths)
    }

    /// Re-point an existing path (matched in either direction) at new
    /// endpoints and distance.
    pub fn update_path(
        &self,
        init_src: &str,
        init_dst: &str,
        final_src: &str,
        final_dst: &str,
        distance: f64,
    ) -> Result<()> {
        let stations = self.load_stations()?;
        let mut paths = self.load_paths()?;

        for endpoint in [final_src, final_dst] {
            if !stations.iter().any(|station| station.name == endpoint) {
                return Err(Error::UnknownStation {
                    name: endpoint.to_string(),
                });
            }
        }

        let index = paths
            .iter()
            .position(|path| path.connects(init_src, init_dst))
            .ok_or_else(|| Error::PathNotFound {
                src: init_src.to_string(),
                dst: init_dst.to_string(),
            })?;

        // The updated endpoints must not collide with any path, the one
        // being edited included.
        if paths.iter().any(|path| path.connects(final_src, final_dst)) {
            return Err(Error::DuplicatePath {
                src: final_src.to_string(),
                dst: final_dst.to_string(),
            });
        }

        paths[index] = Path {
            src: final_src.to_string(),
            dst: final_dst.to_string(),
            distance,
        };
        self.save(PATHS_FILE, &paths)
    }

    /// Delete the path between two stations, matched in either direction.
    pub fn delete_path(&self, src: &str, dst: &str) -> Result<()> {
        let mut paths = self.load_paths()?;

        if !paths.iter().any(|path| path.connects(src, dst)) {
            return Err(Error::PathNotFound {
                src: src.to_string(),
                dst: dst.to_string(),
            });
        }

        paths.retain(|path| !path.connects(src, dst));
        self.save(PATHS_FILE, &paths)
    }

    fn load_stations(&self) -> Result<Vec<Station>> {
        self.load(STATIONS_FILE)
    }

    fn load_paths(&self) -> Result<Vec<Path>> {
        self.load(PATHS_FILE)
    }

    fn load<T: DeserializeOwned>(&self, file: &str) -> Result<Vec<T>> {
        let path = self.data_dir.join(file);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    fn save<T: Serialize>(&self, file: &str, records: &[T]) -> Result<()> {
        let json = serde_json::to_string_pretty(records)?;
        fs::write(self.data_dir.join(file), json)?;
        tracing::debug!(file = %file, records = records.len(), "store file written");
        Ok(())
    }
}

impl NetworkSource for FileStore {
    fn stations(&self) -> Result<Vec<Station>> {
        self.load_stations()
    }

    fn paths(&self) -> Result<Vec<Path>> {
        self.load_paths()
    }
}
