use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

#[cfg(not(target_arch = "wasm32"))]
use std::fs;
#[cfg(not(target_arch = "wasm32"))]
use std::io::ErrorKind;
#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;

#[cfg(target_arch = "wasm32")]
use anyhow::anyhow;
use anyhow::{Context, Result};

pub const STORAGE_KEY: &str = "planet_clicker_state_v1";

/// Key-value storage for serialized saves.
pub trait SaveBackend: Send + Sync {
    /// `Ok(None)` when nothing is stored under `key`.
    fn read(&self, key: &str) -> Result<Option<String>>;

    fn write(&self, key: &str, payload: &str) -> Result<()>;
}

impl<B: SaveBackend + ?Sized> SaveBackend for Arc<B> {
    fn read(&self, key: &str) -> Result<Option<String>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, payload: &str) -> Result<()> {
        (**self).write(key, payload)
    }
}

/// One `<key>.json` file per key inside `dir`.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileBackend {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl SaveBackend for FileBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => {
                Err(err).with_context(|| format!("failed reading save file: {}", path.display()))
            }
        }
    }

    fn write(&self, key: &str, payload: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("failed creating save directory: {}", self.dir.display()))?;

        let path = self.path_for(key);
        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, payload)
            .with_context(|| format!("failed writing save file: {}", tmp_path.display()))?;
        fs::rename(&tmp_path, &path)
            .with_context(|| format!("failed replacing save file: {}", path.display()))
    }
}

/// Browser `localStorage`.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageBackend;

#[cfg(target_arch = "wasm32")]
impl LocalStorageBackend {
    fn storage() -> Result<web_sys::Storage> {
        web_sys::window()
            .context("no browser window")?
            .local_storage()
            .map_err(|err| anyhow!("localStorage is not accessible: {err:?}"))?
            .context("localStorage is disabled")
    }
}

#[cfg(target_arch = "wasm32")]
impl SaveBackend for LocalStorageBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Self::storage()?
            .get_item(key)
            .map_err(|err| anyhow!("failed reading localStorage key {key}: {err:?}"))
    }

    fn write(&self, key: &str, payload: &str) -> Result<()> {
        Self::storage()?
            .set_item(key, payload)
            .map_err(|err| anyhow!("failed writing localStorage key {key}: {err:?}"))
    }
}

/// In-process storage, used headless and in tests.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn with_entry(key: &str, payload: &str) -> Self {
        let backend = Self::default();
        backend.insert(key, payload);
        backend
    }

    pub fn insert(&self, key: &str, payload: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), payload.to_string());
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }
}

impl SaveBackend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.get(key))
    }

    fn write(&self, key: &str, payload: &str) -> Result<()> {
        self.insert(key, payload);
        Ok(())
    }
}
