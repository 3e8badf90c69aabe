use chrono::NaiveDateTime;
use crate::domain::{days_to_expiration, CertStatus, CertificateCheck, CertificateRef, MatchReport, ProfError};
use crate::ports::IdentityStore;

pub struct IdentityMatcher<'a, S: IdentityStore> {
    store: &'a S,
}

impl<'a, S: IdentityStore> IdentityMatcher<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Decides the status of every embedded certificate. A certificate whose
    /// subject cannot be decoded aborts the evaluation.
    pub fn evaluate(&self, certificates: &[CertificateRef], now: NaiveDateTime) -> Result<MatchReport, ProfError> {
        let mut report = MatchReport::default();

        for cert in certificates {
            let name = cert.display_name()?;
            let status = match self.store.find(name) {
                None => CertStatus::NotInStore,
                Some(installed) if installed != cert => CertStatus::MatchedButDifferentMaterial,
                Some(installed) => {
                    let days_left = days_to_expiration(installed.not_after(), now);
                    if days_left <= 0 {
                        CertStatus::MatchedExpired
                    } else {
                        CertStatus::MatchedValid { days_left }
                    }
                }
            };

            report.has_valid |= status.is_usable();
            report.checks.push(CertificateCheck { name: name.to_string(), status });
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::MemoryIdentityStore;
    use chrono::{Duration, NaiveDate};

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 7, 1).unwrap().and_hms_opt(0, 0, 0).unwrap()
    }

    fn cert(der: &[u8], name: &str, days: i64) -> CertificateRef {
        CertificateRef::new(der.to_vec(), Ok(name.to_string()), now() + Duration::days(days), String::new())
    }

    #[test]
    fn classifies_each_certificate() {
        let store = MemoryIdentityStore::from_certificates(vec![
            cert(b"valid", "Apple Development: A", 100),
            cert(b"old", "Apple Development: B", -1),
            cert(b"other-bytes", "Apple Distribution: C", 50),
        ]);
        let embedded = vec![
            cert(b"valid", "Apple Development: A", 100),
            cert(b"old", "Apple Development: B", -1),
            cert(b"mine", "Apple Distribution: C", 50),
            cert(b"gone", "Apple Development: D", 20),
        ];

        let report = IdentityMatcher::new(&store).evaluate(&embedded, now()).unwrap();
        let statuses: Vec<CertStatus> = report.checks.iter().map(|c| c.status).collect();
        assert_eq!(
            statuses,
            vec![
                CertStatus::MatchedValid { days_left: 100 },
                CertStatus::MatchedExpired,
                CertStatus::MatchedButDifferentMaterial,
                CertStatus::NotInStore,
            ]
        );
        assert!(report.has_valid);
    }

    #[test]
    fn no_usable_certificate_means_no_valid() {
        let store = MemoryIdentityStore::from_certificates(vec![cert(b"a", "A", 0)]);
        let report = IdentityMatcher::new(&store)
            .evaluate(&[cert(b"a", "A", 0), cert(b"b", "B", 10)], now())
            .unwrap();
        assert!(!report.has_valid);
        assert_eq!(report.checks[0].status, CertStatus::MatchedExpired);
    }

    #[test]
    fn empty_certificate_list_has_no_valid() {
        let store = MemoryIdentityStore::default();
        let report = IdentityMatcher::new(&store).evaluate(&[], now()).unwrap();
        assert!(!report.has_valid);
        assert!(report.checks.is_empty());
    }

    #[test]
    fn undecodable_subject_propagates() {
        let store = MemoryIdentityStore::default();
        let broken = CertificateRef::new(vec![0], Err("no common name".into()), now(), String::new());
        let err = IdentityMatcher::new(&store).evaluate(&[broken], now()).unwrap_err();
        assert!(err.is_decode());
    }
}
