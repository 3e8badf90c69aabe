use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CertStatus {
    MatchedValid { days_left: i64 },
    MatchedExpired,
    NotInStore,
    /// The store holds a certificate with this name but different DER bytes.
    MatchedButDifferentMaterial,
}

impl CertStatus {
    pub fn is_usable(&self) -> bool {
        matches!(self, CertStatus::MatchedValid { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateCheck {
    pub name: String,
    pub status: CertStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchReport {
    pub has_valid: bool,
    pub checks: Vec<CertificateCheck>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Expired,
    ExpiringSoon { days_left: i64 },
    Valid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Pass,
    Fail,
}

impl Outcome {
    pub fn combine(self, other: Outcome) -> Outcome {
        match (self, other) {
            (Outcome::Pass, Outcome::Pass) => Outcome::Pass,
            _ => Outcome::Fail,
        }
    }

    pub fn is_pass(&self) -> bool {
        *self == Outcome::Pass
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileReport {
    pub uuid: String,
    pub verdict: Verdict,
    pub has_valid_certificate: bool,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionCandidate {
    pub path: PathBuf,
    pub rendered_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisOutcome {
    pub status: Outcome,
    pub profiles: Vec<ProfileReport>,
    pub deletion_candidates: Vec<DeletionCandidate>,
}

impl Default for AnalysisOutcome {
    fn default() -> Self {
        Self { status: Outcome::Pass, profiles: Vec::new(), deletion_candidates: Vec::new() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PurgeReport {
    pub confirmed: bool,
    pub removed: Vec<PathBuf>,
    pub failed: Vec<PathBuf>,
}
