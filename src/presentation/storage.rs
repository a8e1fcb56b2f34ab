//! Named local storage roots.
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::common::{Error, Result};

/// Storage disks by name, each a directory on the local filesystem.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Disks {
    roots: BTreeMap<String, PathBuf>,
}

impl Disks {
    pub fn new(roots: BTreeMap<String, PathBuf>) -> Self {
        Self { roots }
    }

    pub fn insert(&mut self, name: impl Into<String>, root: impl Into<PathBuf>) {
        self.roots.insert(name.into(), root.into());
    }

    pub fn names(&self) -> Vec<String> {
        self.roots.keys().cloned().collect()
    }

    pub fn root(&self, disk: &str) -> Result<&Path> {
        self.roots
            .get(disk)
            .map(PathBuf::as_path)
            .ok_or_else(|| Error::UnknownDisk {
                disk: disk.to_string(),
                available: self.names(),
            })
    }

    /// Write `bytes` to `relative_path` on `disk`, creating parent directories.
    ///
    /// Returns the absolute path written.
    pub fn put(&self, disk: &str, relative_path: &str, bytes: &[u8]) -> Result<PathBuf> {
        let path = self.root(disk)?.join(relative_path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, bytes)?;
        let absolute = std::path::absolute(&path)?;
        debug!(disk, path = %absolute.display(), bytes = bytes.len(), "wrote file");
        Ok(absolute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let mut disks = Disks::default();
        disks.insert("local", dir.path());
        let path = disks.put("local", "ppt/deck.phppt", b"{}").unwrap();
        assert!(path.is_absolute());
        assert_eq!(std::fs::read(&path).unwrap(), b"{}");
        assert!(dir.path().join("ppt").is_dir());
    }

    #[test]
    fn test_unknown_disk_lists_names() {
        let mut disks = Disks::default();
        disks.insert("local", "storage");
        disks.insert("public", "public");
        let err = disks.put("s3", "x", b"").unwrap_err();
        assert_eq!(err.to_string(), "Unknown storage disk 's3'. Available disks: local, public");
    }
}
