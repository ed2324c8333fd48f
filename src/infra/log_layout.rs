use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::infra::error::AppError;

const APP_DIR_NAME: &str = "lexchat";
const LOG_FILE_NAME: &str = "lexchat.log";

/// Where the log file lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLayout {
    pub log_dir: PathBuf,
}

impl LogLayout {
    /// Uses `configured` when set, otherwise the platform state directory
    /// (falling back to the local data directory where no state dir exists).
    pub fn resolve(configured: Option<&Path>) -> Result<Self, AppError> {
        if let Some(dir) = configured {
            return Ok(Self {
                log_dir: dir.to_path_buf(),
            });
        }

        let base = dirs::state_dir()
            .or_else(dirs::data_local_dir)
            .ok_or_else(|| AppError::LogDirResolution {
                details: "no state or local data directory for this platform/user".into(),
            })?;

        Ok(Self {
            log_dir: base.join(APP_DIR_NAME),
        })
    }

    pub fn ensure_dir(&self) -> Result<(), AppError> {
        fs::create_dir_all(&self.log_dir).map_err(|source| AppError::LogDirCreate {
            path: self.log_dir.clone(),
            source,
        })
    }

    pub fn log_file_name(&self) -> &'static str {
        LOG_FILE_NAME
    }

    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(LOG_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_dir_wins() {
        let layout = LogLayout::resolve(Some(Path::new("/tmp/lexchat-logs")))
            .expect("configured layout should resolve");

        assert_eq!(layout.log_dir, PathBuf::from("/tmp/lexchat-logs"));
        assert_eq!(layout.log_file(), PathBuf::from("/tmp/lexchat-logs/lexchat.log"));
    }

    #[test]
    fn ensure_dir_creates_nested_directories() {
        let root = tempfile::tempdir().expect("temp dir must be creatable");
        let nested = root.path().join("a").join("b");
        let layout = LogLayout::resolve(Some(nested.as_path())).expect("layout should resolve");

        layout.ensure_dir().expect("log dir should be created");

        assert!(nested.is_dir());
    }
}
