use crate::domain::CertificateRef;

/// Certificates installed on the system, keyed by display name.
pub trait IdentityStore {
    fn find(&self, display_name: &str) -> Option<&CertificateRef>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
