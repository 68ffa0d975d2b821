//! Read-only resource bundles
//!
//! A bundle is a directory tree of named byte streams. Entries are addressed by
//! `/`-separated keys relative to the bundle root (e.g. `configs/default.json`).
//! Keys can never escape the root: absolute keys and keys containing `..` are
//! rejected.

use std::fs::{self, File};
use std::io::{BufReader, Read};
use std::path::{Component, Path, PathBuf};

use blake3::Hasher;
use walkdir::WalkDir;

use crate::error::{Result, resource};

/// Hash prefix for bundle fingerprints
pub const FINGERPRINT_PREFIX: &str = "blake3:";

/// Handle to a read-only tree of named byte streams
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceBundle {
    root: PathBuf,
}

impl ResourceBundle {
    /// Open the bundle rooted at `root`
    ///
    /// Fails with `ResourceUnavailable` when the root does not exist, is not a
    /// directory or cannot be listed.
    pub fn open(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        let display = root.display().to_string();

        let root = dunce::canonicalize(root)
            .map_err(|e| resource::unavailable(&display, e.to_string()))?;

        if !root.is_dir() {
            return Err(resource::unavailable(display, "not a directory"));
        }

        fs::read_dir(&root).map_err(|e| resource::unavailable(&display, e.to_string()))?;

        Ok(Self { root })
    }

    /// Absolute, canonical path of the bundle root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute path of the entry named by `key`
    ///
    /// The entry is not required to exist.
    pub fn path_of(&self, key: &str) -> Result<PathBuf> {
        let mut path = self.root.clone();
        let mut depth = 0usize;

        for component in Path::new(key).components() {
            match component {
                Component::Normal(part) => {
                    path.push(part);
                    depth += 1;
                }
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                    return Err(resource::unavailable(
                        key,
                        "entry keys must be relative and stay inside the bundle",
                    ));
                }
            }
        }

        if depth == 0 {
            return Err(resource::unavailable(key, "empty entry key"));
        }

        Ok(path)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.path_of(key).is_ok_and(|path| path.is_file())
    }

    /// Read the whole entry named by `key`
    pub fn read(&self, key: &str) -> Result<Vec<u8>> {
        let path = self.path_of(key)?;
        fs::read(&path).map_err(|e| resource::unavailable(path.display().to_string(), e.to_string()))
    }

    /// Keys of all entries, sorted for deterministic iteration
    pub fn keys(&self) -> Result<Vec<String>> {
        let mut keys = Vec::new();

        for entry in WalkDir::new(&self.root).follow_links(true) {
            let entry =
                entry.map_err(|e| resource::unavailable(self.root.display().to_string(), e.to_string()))?;
            if !entry.file_type().is_file() {
                continue;
            }

            let relative = entry.path().strip_prefix(&self.root).unwrap_or(entry.path());
            let key = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");
            keys.push(key);
        }

        keys.sort();
        Ok(keys)
    }

    /// BLAKE3 fingerprint over every key and its contents
    ///
    /// Two handles to unchanged content always produce the same fingerprint.
    pub fn fingerprint(&self) -> Result<String> {
        let mut hasher = Hasher::new();

        for key in self.keys()? {
            hasher.update(key.as_bytes());
            hasher.update(b"\0");

            let path = self.path_of(&key)?;
            let file = File::open(&path)
                .map_err(|e| resource::unavailable(path.display().to_string(), e.to_string()))?;

            let mut reader = BufReader::new(file);
            let mut buffer = [0u8; 8192];

            loop {
                let bytes_read = reader
                    .read(&mut buffer)
                    .map_err(|e| resource::unavailable(path.display().to_string(), e.to_string()))?;

                if bytes_read == 0 {
                    break;
                }

                hasher.update(&buffer[..bytes_read]);
            }

            hasher.update(b"\0");
        }

        Ok(format!("{}{}", FINGERPRINT_PREFIX, hasher.finalize().to_hex()))
    }
}
