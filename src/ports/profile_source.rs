use std::path::Path;
use crate::domain::{ProfError, ProfileRecord};

pub trait ProfileSource {
    fn load(&self, path: &Path) -> Result<ProfileRecord, ProfError>;

    fn remove(&self, path: &Path) -> Result<(), ProfError>;
}
