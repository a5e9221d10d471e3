use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use rand::Rng;

use crate::presentation::config::Settings;

const RANDOM_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Shared helpers for request controllers.
pub struct BaseController {
    settings: Arc<Settings>,
    base_dir: PathBuf,
    files_dir: PathBuf,
}

impl BaseController {
    /// Resolves the base directory at runtime: the working directory, or the
    /// executable's directory when that is unavailable. `FILES_DIR` overrides
    /// the files directory.
    pub fn new(settings: Arc<Settings>) -> io::Result<Self> {
        let base_dir = match std::env::current_dir() {
            Ok(dir) => dir,
            Err(_) => std::env::current_exe()?
                .parent()
                .map(Path::to_path_buf)
                .ok_or_else(|| {
                    io::Error::new(io::ErrorKind::NotFound, "executable has no parent directory")
                })?,
        };
        Ok(Self::with_base_dir(settings, base_dir))
    }

    pub fn with_base_dir(settings: Arc<Settings>, base_dir: PathBuf) -> Self {
        let files_dir = match &settings.files_dir {
            Some(dir) => PathBuf::from(dir),
            None => base_dir.join("assets").join("files"),
        };
        Self {
            settings,
            base_dir,
            files_dir,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn files_dir(&self) -> &Path {
        &self.files_dir
    }

    /// Random string of lowercase ASCII letters and digits.
    pub fn generate_random_string(&self, len: usize) -> String {
        let mut rng = rand::rng();
        (0..len)
            .map(|_| RANDOM_CHARSET[rng.random_range(0..RANDOM_CHARSET.len())] as char)
            .collect()
    }

    /// Directory holding the uploaded files of one project, created on demand.
    pub fn project_files_dir(&self, project_id: &str) -> io::Result<PathBuf> {
        let valid = !project_id.is_empty()
            && project_id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

        if !valid {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid project id: {}", project_id),
            ));
        }

        let dir = self.files_dir.join(project_id);
        std::fs::create_dir_all(&dir)?;
        Ok(dir)
    }
}
