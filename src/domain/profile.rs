use std::path::PathBuf;
use chrono::NaiveDateTime;
use super::CertificateRef;

#[derive(Debug, Clone)]
pub struct ProfileRecord {
    pub uuid: String,
    pub name: String,
    pub app_id_name: String,
    pub team_name: String,
    pub team_identifiers: Vec<String>,
    pub creation_date: NaiveDateTime,
    pub expiration_date: NaiveDateTime,
    pub certificates: Vec<CertificateRef>,
}

/// A record plus the file it came from. Deletion acts on `path`.
#[derive(Debug, Clone)]
pub struct LoadedProfile {
    pub path: PathBuf,
    pub record: ProfileRecord,
}

impl LoadedProfile {
    pub fn new(path: impl Into<PathBuf>, record: ProfileRecord) -> Self {
        Self { path: path.into(), record }
    }
}
