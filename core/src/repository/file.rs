use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::debug;

use crate::config::default_data_dir;
use crate::repository::store::{validate_key, KeyValueStore, StoreError};

const FILE_EXTENSION: &str = "json";
const TEMP_EXTENSION: &str = "json.tmp";

/// Stores each key as `<key>.json` inside a data directory.
#[derive(Clone, Debug)]
pub struct FileKeyValueStore {
    base_dir: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self> {
        let path = match base_dir {
            Some(dir) => dir,
            None => default_data_dir()?,
        };
        fs::create_dir_all(&path)?; // Ensure the directory exists
        Ok(FileKeyValueStore { base_dir: path })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        validate_key(key)?;
        Ok(self.base_dir.join(format!("{key}.{FILE_EXTENSION}")))
    }

    fn temp_path_for(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{key}.{TEMP_EXTENSION}"))
    }
}

fn io_error(key: &str) -> impl FnOnce(io::Error) -> StoreError + '_ {
    move |source| StoreError::Io {
        key: key.to_string(),
        source,
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_error(key)(e)),
        }
    }

    /// Writes `<key>.json.tmp` and renames it over `<key>.json`, so an
    /// interrupted write leaves the previous value in place.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        let temp_path = self.temp_path_for(key);

        let file = File::create(&temp_path).map_err(io_error(key))?;
        let mut writer = BufWriter::new(file);
        writer.write_all(value.as_bytes()).map_err(io_error(key))?;
        writer.flush().map_err(io_error(key))?;
        writer.get_ref().sync_all().map_err(io_error(key))?;
        drop(writer);

        fs::rename(&temp_path, &path).map_err(io_error(key))?;
        debug!(key, path = %path.display(), bytes = value.len(), "wrote stored value");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_error(key)(e)),
        }
    }
}
