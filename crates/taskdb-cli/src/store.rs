//! Task file location and disk I/O.
//!
//! The core never touches the file system; this module is the load/save
//! boundary around a [`Session`].

use std::path::{Path, PathBuf};

use log::{debug, info};
use taskdb_core::{Result, Session, TaskDbError, DEFAULT_FILE_NAME};

/// The task file a session is loaded from and saved to.
#[derive(Debug, Clone)]
pub struct TaskFile {
    path: PathBuf,
}

impl TaskFile {
    /// Uses `path`, or the XDG default when none is given.
    ///
    /// # Errors
    ///
    /// Returns `TaskDbError::XdgDirectory` if the default location cannot be
    /// determined
    pub fn resolve(path: Option<PathBuf>) -> Result<Self> {
        let path = match path {
            Some(path) => path,
            None => Self::default_path()?,
        };
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Opens a session over the file. A missing file gives a blank session.
    ///
    /// # Errors
    ///
    /// Returns `TaskDbError::FileSystem` if the file exists but cannot be read
    /// Returns `TaskDbError::FileParse` if it is not a readable task file
    pub fn open_session(&self) -> Result<Session> {
        let mut session = Session::new();
        if !self.exists() {
            debug!("{} does not exist, starting blank", self.path.display());
            session.rename(&self.file_name());
            return Ok(session);
        }
        let bytes = read_bytes(&self.path)?;
        session.load(&self.file_name(), &bytes)?;
        info!(
            "Loaded {} tasks from {}",
            session.table().len(),
            self.path.display()
        );
        Ok(session)
    }

    /// Writes the session's canonical bytes to the file.
    ///
    /// # Errors
    ///
    /// Returns `TaskDbError::FileSystem` if the file or its directory cannot
    /// be written
    pub fn save(&self, session: &Session) -> Result<()> {
        write_bytes(&self.path, &session.save()?)?;
        info!(
            "Saved {} tasks to {}",
            session.table().len(),
            self.path.display()
        );
        Ok(())
    }

    fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_FILE_NAME.to_string())
    }

    /// Returns the default task file path following XDG Base Directory
    /// specification.
    fn default_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("taskdb")
            .place_data_file(DEFAULT_FILE_NAME)
            .map_err(|e| TaskDbError::XdgDirectory(e.to_string()))
    }
}

/// Reads a whole file.
pub fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|e| TaskDbError::FileSystem {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Writes a whole file, creating its parent directory first.
pub fn write_bytes(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| TaskDbError::FileSystem {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }
    std::fs::write(path, bytes).map_err(|e| TaskDbError::FileSystem {
        path: path.to_path_buf(),
        source: e,
    })
}
