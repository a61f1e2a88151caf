use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::errors::Result;

/// Filesystem operations needed to discover, read and publish content paths.
///
/// Implementations must be shareable across threads because manifest existence
/// checks run in parallel.
pub trait FileSystem: Send + Sync {
    /// Whether `path` exists and is a regular file.
    ///
    /// A missing file is `Ok(false)`; any other failure (permissions, I/O) is an error.
    fn file_exists(&self, path: &Path) -> Result<bool>;

    /// Read the whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Replace the file at `path` with `content` so readers never see a partial write.
    fn write_atomic(&self, path: &Path, content: &str) -> Result<()>;
}

/// The local disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem;

impl FileSystem for LocalFileSystem {
    fn file_exists(&self, path: &Path) -> Result<bool> {
        match fs::metadata(path) {
            Ok(metadata) => Ok(metadata.is_file()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        Ok(fs::read_to_string(path)?)
    }

    fn write_atomic(&self, path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let temp_path = temp_path_for(path);

        if let Err(e) = write_then_rename(&temp_path, path, content) {
            // Best effort, the write error is returned either way.
            let _ = fs::remove_file(&temp_path);
            return Err(e.into());
        }

        Ok(())
    }
}

fn write_then_rename(temp_path: &Path, path: &Path, content: &str) -> io::Result<()> {
    let mut file = fs::File::create(temp_path)?;
    file.write_all(content.as_bytes())?;
    file.sync_all()?;
    drop(file);

    fs::rename(temp_path, path)
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut file_name = path.file_name().unwrap_or_default().to_os_string();
    file_name.push(".tmp");
    path.with_file_name(file_name)
}

/// In-memory file system for unit tests.
#[cfg(test)]
#[derive(Clone, Default)]
pub struct MockFileSystem {
    pub files: std::sync::Arc<std::sync::Mutex<std::collections::HashMap<PathBuf, String>>>,
}

#[cfg(test)]
impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files
            .lock()
            .unwrap()
            .insert(path.into(), content.to_string());
        self
    }

    pub fn contents(&self, path: &Path) -> Option<String> {
        self.files.lock().unwrap().get(path).cloned()
    }
}

#[cfg(test)]
impl FileSystem for MockFileSystem {
    fn file_exists(&self, path: &Path) -> Result<bool> {
        Ok(self.files.lock().unwrap().contains_key(path))
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        self.contents(path).ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("{} not found", path.display())).into()
        })
    }

    fn write_atomic(&self, path: &Path, content: &str) -> Result<()> {
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}
