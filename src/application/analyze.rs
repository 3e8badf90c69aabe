use std::io::Write;
use tracing::{debug, info};
use crate::domain::*;
use crate::ports::*;
use super::{FieldOptions, FieldProvider, FormatSpec, IdentityMatcher};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalysisOptions {
    /// 0 disables expiring-soon warnings.
    pub warn_days: u32,
    pub quiet: bool,
    /// Colors the `%e` field instead of the whole line.
    pub mark_expired: bool,
    pub color: bool,
}

impl AnalysisOptions {
    fn field_options(&self) -> FieldOptions {
        FieldOptions { warn_days: self.warn_days, mark_expired: self.mark_expired && self.color }
    }

    fn warns(&self, days_left: i64) -> bool {
        self.warn_days > 0 && days_left <= i64::from(self.warn_days)
    }
}

pub struct AnalyzeProfilesUseCase<S, C>
where
    S: IdentityStore,
    C: Clock,
{
    store: S,
    clock: C,
    spec: FormatSpec,
    options: AnalysisOptions,
}

impl<S, C> AnalyzeProfilesUseCase<S, C>
where
    S: IdentityStore,
    C: Clock,
{
    pub fn new(store: S, clock: C, spec: FormatSpec, options: AnalysisOptions) -> Self {
        Self { store, clock, spec, options }
    }

    /// Classifies every profile in input order. Listing lines go to `out`,
    /// everything else to `diagnostics`. An undecodable certificate subject
    /// aborts the run.
    pub fn execute<W, D>(&self, profiles: &[LoadedProfile], out: &mut W, diagnostics: &mut D) -> Result<AnalysisOutcome, ProfError>
    where
        W: Write,
        D: DiagnosticSink,
    {
        let now = self.clock.now();
        let matcher = IdentityMatcher::new(&self.store);
        let mut outcome = AnalysisOutcome::default();
        debug!(profiles = profiles.len(), identities = self.store.len(), "analyzing");

        for profile in profiles {
            let record = &profile.record;
            let days_left = days_to_expiration(record.expiration_date, now);

            if !self.options.quiet {
                let line = self.render_line(record, now);
                writeln!(out, "{}", line).map_err(|e| ProfError::io(format!("failed to write listing: {}", e)))?;
            }

            if days_left <= 0 {
                diagnostics.emit(Diagnostic::error(format!("{} is expired", describe(record))));
                outcome.deletion_candidates.push(DeletionCandidate {
                    path: profile.path.clone(),
                    rendered_name: self.render_plain(record, now),
                });
                self.tally(&mut outcome, record, Verdict::Expired, false, Outcome::Fail);
                continue;
            }

            let verdict = if self.options.warns(days_left) {
                diagnostics.emit(Diagnostic::warning(format!("{} will expire in {} days", describe(record), days_left)));
                Verdict::ExpiringSoon { days_left }
            } else {
                Verdict::Valid
            };

            let report = matcher.evaluate(&record.certificates, now)?;
            for check in &report.checks {
                if let Some(message) = self.certificate_warning(check, record) {
                    diagnostics.emit(Diagnostic::warning(message));
                }
            }

            let result = if report.has_valid {
                Outcome::Pass
            } else {
                diagnostics.emit(Diagnostic::error(format!("no valid certificate found for {}", describe(record))));
                Outcome::Fail
            };
            self.tally(&mut outcome, record, verdict, report.has_valid, result);
        }

        info!(status = ?outcome.status, candidates = outcome.deletion_candidates.len(), "analysis finished");
        Ok(outcome)
    }

    /// Asks `confirmer` before removing the expired profiles found by
    /// `execute`. Removal failures are reported per file and do not stop the
    /// batch.
    pub fn purge_expired<P, D>(&self, outcome: &AnalysisOutcome, confirmer: Option<&mut dyn DeletionConfirmer>, source: &P, diagnostics: &mut D) -> PurgeReport
    where
        P: ProfileSource,
        D: DiagnosticSink,
    {
        let mut report = PurgeReport::default();
        let Some(confirmer) = confirmer else { return report };
        if outcome.deletion_candidates.is_empty() {
            return report;
        }

        let names: Vec<String> = outcome.deletion_candidates.iter().map(|c| c.rendered_name.clone()).collect();
        if !confirmer.confirm(&names) {
            return report;
        }
        report.confirmed = true;

        for candidate in &outcome.deletion_candidates {
            match source.remove(&candidate.path) {
                Ok(()) => {
                    diagnostics.emit(Diagnostic::info(format!("removed {}", candidate.path.display())));
                    report.removed.push(candidate.path.clone());
                }
                Err(e) => {
                    diagnostics.emit(Diagnostic::warning(format!("failed to remove {}: {}", candidate.path.display(), e.message)));
                    report.failed.push(candidate.path.clone());
                }
            }
        }
        report
    }

    fn tally(&self, outcome: &mut AnalysisOutcome, record: &ProfileRecord, verdict: Verdict, has_valid: bool, result: Outcome) {
        outcome.status = outcome.status.combine(result);
        outcome.profiles.push(ProfileReport {
            uuid: record.uuid.clone(),
            verdict,
            has_valid_certificate: has_valid,
            outcome: result,
        });
    }

    fn render_line(&self, record: &ProfileRecord, now: chrono::NaiveDateTime) -> String {
        let provider = FieldProvider::new(record, self.options.field_options(), now);
        let line = self.spec.render(&provider);
        if self.options.color && !self.options.mark_expired {
            provider.expiry_state().tone().paint(&line)
        } else {
            line
        }
    }

    fn render_plain(&self, record: &ProfileRecord, now: chrono::NaiveDateTime) -> String {
        let options = FieldOptions { warn_days: self.options.warn_days, mark_expired: false };
        self.spec.render(&FieldProvider::new(record, options, now))
    }

    fn certificate_warning(&self, check: &CertificateCheck, record: &ProfileRecord) -> Option<String> {
        match check.status {
            CertStatus::MatchedExpired => Some(format!("certificate '{}' in {} is expired", check.name, describe(record))),
            CertStatus::NotInStore => Some(format!(
                "certificate '{}' in {} is not present in the identity store",
                check.name,
                describe(record)
            )),
            CertStatus::MatchedButDifferentMaterial => Some(format!(
                "certificate '{}' in {} is not present in the identity store (an installed certificate has the same name)",
                check.name,
                describe(record)
            )),
            CertStatus::MatchedValid { days_left } if self.options.warns(days_left) => Some(format!(
                "certificate '{}' in {} will expire in {} days",
                check.name,
                describe(record),
                days_left
            )),
            CertStatus::MatchedValid { .. } => None,
        }
    }
}

fn describe(record: &ProfileRecord) -> String {
    format!("profile '{}' ({})", record.name, record.uuid)
}
