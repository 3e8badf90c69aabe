use std::path::{Path, PathBuf};
use tracing::debug;
use crate::application::decode_profile;
use crate::domain::{ProfError, ProfileRecord};
use crate::ports::ProfileSource;

const PROFILE_EXTENSIONS: &[&str] = &["json", "mobileprovision", "provisionprofile"];

/// Profile documents on the local filesystem.
pub struct FsProfileSource;

impl FsProfileSource {
    pub fn new() -> Self { Self }

    /// Expands directories into their profile files (sorted). Other inputs are
    /// passed through untouched so missing paths surface as not-found later.
    pub fn enumerate(&self, inputs: &[PathBuf]) -> Vec<PathBuf> {
        let mut paths = Vec::new();
        for input in inputs {
            if !input.is_dir() {
                paths.push(input.clone());
                continue;
            }
            match std::fs::read_dir(input) {
                Ok(entries) => {
                    let mut found: Vec<PathBuf> = entries
                        .filter_map(|e| e.ok().map(|e| e.path()))
                        .filter(|p| p.is_file() && is_profile_file(p))
                        .collect();
                    found.sort();
                    debug!(dir = %input.display(), count = found.len(), "enumerated profiles");
                    paths.extend(found);
                }
                Err(e) => debug!(dir = %input.display(), error = %e, "cannot list directory"),
            }
        }
        paths
    }
}

impl Default for FsProfileSource {
    fn default() -> Self { Self::new() }
}

impl ProfileSource for FsProfileSource {
    fn load(&self, path: &Path) -> Result<ProfileRecord, ProfError> {
        let data = std::fs::read(path).map_err(|e| ProfError::not_found(format!("cannot read profile: {}", e)))?;
        decode_profile(&data)
    }

    fn remove(&self, path: &Path) -> Result<(), ProfError> {
        std::fs::remove_file(path).map_err(|e| ProfError::io(e.to_string()))
    }
}

fn is_profile_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| PROFILE_EXTENSIONS.iter().any(|x| e.eq_ignore_ascii_case(x)))
        .unwrap_or(false)
}
