use std::path::{Path, PathBuf};
use regex::Regex;
use tracing::debug;
use crate::domain::{Diagnostic, LoadedProfile, ProfError, ProfileRecord};
use crate::ports::{DiagnosticSink, ProfileSource};

/// Searchable text for one record, one attribute per line.
pub struct SearchIndex;

impl SearchIndex {
    pub fn build(record: &ProfileRecord) -> String {
        let mut lines = vec![
            record.uuid.clone(),
            record.name.clone(),
            record.app_id_name.clone(),
            record.team_name.clone(),
        ];
        lines.extend(record.team_identifiers.iter().cloned());

        for cert in &record.certificates {
            match cert.display_name() {
                Ok(name) => lines.push(name.to_string()),
                Err(e) => debug!(uuid = %record.uuid, error = %e, "skipping certificate name in search index"),
            }
            lines.push(cert.fingerprint().to_string());
        }

        lines.join("\n")
    }
}

#[derive(Debug, Clone)]
pub struct ContentFilter {
    pattern: Regex,
}

impl ContentFilter {
    pub fn new(pattern: &str) -> Result<Self, ProfError> {
        let pattern = Regex::new(pattern)
            .map_err(|e| ProfError::invalid_pattern(format!("invalid filter pattern '{}': {}", pattern, e)))?;
        Ok(Self { pattern })
    }

    pub fn matches(&self, record: &ProfileRecord) -> bool {
        self.pattern.is_match(&SearchIndex::build(record))
    }
}

/// Loads every path in order. Paths that do not yield a record are reported
/// and skipped; they never fail the run.
pub fn collect_profiles<P, D>(source: &P, paths: &[PathBuf], filter: Option<&ContentFilter>, diagnostics: &mut D) -> Vec<LoadedProfile>
where
    P: ProfileSource,
    D: DiagnosticSink,
{
    let mut profiles = Vec::with_capacity(paths.len());
    for path in paths {
        match source.load(path) {
            Ok(record) => {
                if filter.map_or(true, |f| f.matches(&record)) {
                    profiles.push(LoadedProfile::new(path.clone(), record));
                } else {
                    debug!(path = %path.display(), "filtered out");
                }
            }
            Err(e) => diagnostics.emit(Diagnostic::warning(skip_message(path, &e))),
        }
    }
    profiles
}

fn skip_message(path: &Path, e: &ProfError) -> String {
    format!("skipping {}: {}", path.display(), e.message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use chrono::NaiveDate;
    use crate::domain::CertificateRef;
    use crate::infrastructure::RecordingDiagnostics;

    fn record(uuid: &str, name: &str) -> ProfileRecord {
        let at = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
        ProfileRecord {
            uuid: uuid.into(),
            name: name.into(),
            app_id_name: "Shop".into(),
            team_name: "Acme".into(),
            team_identifiers: vec!["Q7Z".into()],
            creation_date: at,
            expiration_date: at,
            certificates: vec![
                CertificateRef::new(vec![1], Ok("Apple Development: Jo".into()), at, "aa:bb".into()),
                CertificateRef::new(vec![2], Err("no common name".into()), at, "cc:dd".into()),
            ],
        }
    }

    struct MapSource(HashMap<PathBuf, ProfileRecord>);

    impl ProfileSource for MapSource {
        fn load(&self, path: &Path) -> Result<ProfileRecord, ProfError> {
            self.0.get(path).cloned().ok_or_else(|| ProfError::not_found("no such profile"))
        }

        fn remove(&self, _path: &Path) -> Result<(), ProfError> {
            Ok(())
        }
    }

    #[test]
    fn index_skips_undecodable_names_but_keeps_fingerprints() {
        let index = SearchIndex::build(&record("U1", "Shop Dev"));
        assert!(index.contains("Apple Development: Jo"));
        assert!(index.contains("cc:dd"));
        assert!(index.contains("Q7Z"));
    }

    #[test]
    fn filter_matches_any_attribute() {
        let rec = record("U1", "Shop Dev");
        assert!(ContentFilter::new("Development: Jo$").unwrap().matches(&rec));
        assert!(ContentFilter::new("^Q7Z$").unwrap().matches(&rec));
        assert!(!ContentFilter::new("Distribution").unwrap().matches(&rec));
    }

    #[test]
    fn invalid_pattern_is_rejected() {
        let err = ContentFilter::new("(unclosed").unwrap_err();
        assert_eq!(err.class, crate::domain::ErrorClass::InvalidPattern);
    }

    #[test]
    fn collect_reports_missing_and_applies_filter() {
        let source = MapSource(HashMap::from([
            (PathBuf::from("a.json"), record("A", "Shop Dev")),
            (PathBuf::from("b.json"), record("B", "Shop Store")),
        ]));
        let paths = vec![PathBuf::from("a.json"), PathBuf::from("missing.json"), PathBuf::from("b.json")];
        let filter = ContentFilter::new("Store").unwrap();
        let mut diag = RecordingDiagnostics::default();

        let all = collect_profiles(&source, &paths, None, &mut diag);
        assert_eq!(all.iter().map(|p| p.record.uuid.as_str()).collect::<Vec<_>>(), vec!["A", "B"]);
        assert_eq!(diag.warnings().len(), 1);
        assert!(diag.warnings()[0].contains("missing.json"));

        let mut diag = RecordingDiagnostics::default();
        let filtered = collect_profiles(&source, &paths, Some(&filter), &mut diag);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].record.uuid, "B");
    }
}
