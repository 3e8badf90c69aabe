use chrono::{DateTime, NaiveDateTime};
use ring::digest;
use x509_parser::prelude::*;
use crate::domain::{CertificateRef, ProfError};

/// Decodes DER certificate bytes. Only a structurally broken certificate is an
/// error here; an unreadable subject is kept and reported when the display
/// name is asked for.
pub fn decode_certificate(der: &[u8]) -> Result<CertificateRef, ProfError> {
    let (_, cert) = X509Certificate::from_der(der)
        .map_err(|e| ProfError::decode(format!("failed to parse certificate: {}", e)))?;

    let subject = match cert.subject().iter_common_name().next() {
        Some(cn) => cn
            .as_str()
            .map(|s| s.to_string())
            .map_err(|e| format!("certificate subject common name is not a string: {}", e)),
        None => Err(format!("certificate subject has no common name ({})", cert.subject())),
    };

    let not_after = asn1_to_naive(&cert.validity().not_after)?;
    let sha256_fp = compute_sha256_fingerprint(der);

    Ok(CertificateRef::new(der.to_vec(), subject, not_after, sha256_fp))
}

fn asn1_to_naive(time: &ASN1Time) -> Result<NaiveDateTime, ProfError> {
    DateTime::from_timestamp(time.timestamp(), 0)
        .map(|dt| dt.naive_utc())
        .ok_or_else(|| ProfError::decode(format!("certificate validity out of range: {}", time)))
}

fn compute_sha256_fingerprint(der: &[u8]) -> String {
    digest::digest(&digest::SHA256, der)
        .as_ref()
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(":")
}
