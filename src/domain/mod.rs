mod cert;
mod diagnostic;
mod error;
mod expiry;
mod profile;
mod verdict;

pub use cert::CertificateRef;
pub use diagnostic::{Diagnostic, Severity};
pub use error::{ErrorClass, ProfError};
pub use expiry::{days_to_expiration, ExpiryState, Tone};
pub use profile::{LoadedProfile, ProfileRecord};
pub use verdict::{
    AnalysisOutcome, CertStatus, CertificateCheck, DeletionCandidate, MatchReport, Outcome, ProfileReport,
    PurgeReport, Verdict,
};
