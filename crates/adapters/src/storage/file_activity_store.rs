use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use domain::activity::error::ActivityError;
use ports::secondary::activity_store::ActivityStore;

/// `ActivityStore` backed by a plain UTF-8 text file, one entry per line.
///
/// The file handle is opened in append mode once and guarded by a mutex:
/// concurrent recordings are serialized, so lines never interleave and
/// none are lost. The file is created empty on first run and only ever
/// grows; rotation/compaction is left to the operator.
pub struct FileActivityStore {
    path: PathBuf,
    file: Mutex<File>,
}

impl FileActivityStore {
    /// Open (or create) the log file at `path`.
    pub fn open(path: &Path) -> Result<Self, ActivityError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .map_err(|e| ActivityError::StoreUnavailable(format!("{}: {e}", parent.display())))?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| ActivityError::StoreUnavailable(format!("{}: {e}", path.display())))?;
        Ok(Self {
            path: path.to_path_buf(),
            file: Mutex::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ActivityStore for FileActivityStore {
    fn append_line(&self, line: &str) -> Result<(), ActivityError> {
        let mut file = self
            .file
            .lock()
            .map_err(|e| ActivityError::WriteFailed(e.to_string()))?;
        file.write_all(line.as_bytes())
            .and_then(|()| file.write_all(b"\n"))
            .and_then(|()| file.flush())
            .map_err(|e| ActivityError::WriteFailed(e.to_string()))
    }

    fn read_lines(&self) -> Result<Vec<String>, ActivityError> {
        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| ActivityError::ReadFailed(format!("{}: {e}", self.path.display())))?;
        Ok(content
            .lines()
            .filter(|l| !l.is_empty())
            .map(String::from)
            .collect())
    }
}
