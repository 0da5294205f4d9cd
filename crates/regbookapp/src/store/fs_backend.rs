use super::backend::SessionStorage;
use crate::error::{RegbookError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// File-backed session storage: each key is a `<key>.json` file inside the
/// session directory.
pub struct FsSessionStorage {
    root: PathBuf,
}

impl FsSessionStorage {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn item_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    /// End the session for `key`: remove its item file and any temp files left
    /// by interrupted writes. Other files are never touched; the directory
    /// itself goes only once it is empty.
    pub fn clear(&self, key: &str) -> Result<()> {
        if !self.root.exists() {
            return Ok(());
        }

        let item = self.item_path(key);
        if item.exists() {
            fs::remove_file(item).map_err(RegbookError::Io)?;
        }

        let tmp_prefix = format!(".{}-", key);
        for entry in fs::read_dir(&self.root).map_err(RegbookError::Io)? {
            let path = entry.map_err(RegbookError::Io)?.path();
            let owned = path
                .file_name()
                .and_then(|s| s.to_str())
                .is_some_and(|name| name.starts_with(&tmp_prefix) && name.ends_with(".tmp"));
            if owned && path.is_file() {
                fs::remove_file(path).map_err(RegbookError::Io)?;
            }
        }

        let is_empty = fs::read_dir(&self.root)
            .map_err(RegbookError::Io)?
            .next()
            .is_none();
        if is_empty {
            fs::remove_dir(&self.root).map_err(RegbookError::Io)?;
        }
        Ok(())
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(RegbookError::Io)?;
        }
        Ok(())
    }
}

impl SessionStorage for FsSessionStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let path = self.item_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(RegbookError::Io)?;
        Ok(Some(content))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.ensure_dir()?;

        // Atomic write
        let tmp_path = self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        if let Err(err) =
            fs::write(&tmp_path, value).and_then(|_| fs::rename(&tmp_path, self.item_path(key)))
        {
            let _ = fs::remove_file(&tmp_path);
            return Err(RegbookError::Io(err));
        }

        Ok(())
    }
}
