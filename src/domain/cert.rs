use chrono::NaiveDateTime;
use super::ProfError;

/// A certificate embedded in a profile or installed in an identity store.
///
/// Two handles are equal only when their DER material is byte-identical; a
/// shared subject name is not enough.
#[derive(Debug, Clone)]
pub struct CertificateRef {
    der: Vec<u8>,
    subject: Result<String, String>,
    not_after: NaiveDateTime,
    sha256_fp: String,
}

impl CertificateRef {
    pub fn new(der: Vec<u8>, subject: Result<String, String>, not_after: NaiveDateTime, sha256_fp: String) -> Self {
        Self { der, subject, not_after, sha256_fp }
    }

    pub fn display_name(&self) -> Result<&str, ProfError> {
        self.subject.as_deref().map_err(|reason| ProfError::decode(reason.clone()))
    }

    pub fn not_after(&self) -> NaiveDateTime {
        self.not_after
    }

    pub fn fingerprint(&self) -> &str {
        &self.sha256_fp
    }

    pub fn short_fingerprint(&self) -> String {
        let parts: Vec<&str> = self.sha256_fp.split(':').collect();
        if parts.len() <= 6 {
            return self.sha256_fp.clone();
        }
        format!("{}:{}:...:{}", parts[0], parts[1], parts[parts.len() - 1])
    }
}

impl PartialEq for CertificateRef {
    fn eq(&self, other: &Self) -> bool {
        self.der == other.der
    }
}

impl Eq for CertificateRef {}
