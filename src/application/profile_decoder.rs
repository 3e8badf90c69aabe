use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use crate::domain::{ProfError, ProfileRecord};
use super::decode_certificate;

/// Profile document as exported from a provisioning profile's payload.
#[derive(Debug, Deserialize)]
struct ProfileDocument {
    #[serde(rename = "UUID")]
    uuid: String,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "AppIDName", default)]
    app_id_name: String,
    #[serde(rename = "TeamName", default)]
    team_name: String,
    #[serde(rename = "TeamIdentifier", default)]
    team_identifiers: Vec<String>,
    #[serde(rename = "CreationDate")]
    creation_date: DateTime<Utc>,
    #[serde(rename = "ExpirationDate")]
    expiration_date: DateTime<Utc>,
    #[serde(rename = "DeveloperCertificates", default)]
    developer_certificates: Vec<String>,
}

pub fn decode_profile(data: &[u8]) -> Result<ProfileRecord, ProfError> {
    let doc: ProfileDocument = serde_json::from_slice(data)
        .map_err(|e| ProfError::not_found(format!("not a profile document: {}", e)))?;

    let certificates = doc.developer_certificates.iter().enumerate()
        .map(|(i, encoded)| {
            let der = STANDARD.decode(encoded.trim())
                .map_err(|e| ProfError::decode(format!("certificate #{} is not valid base64: {}", i, e)))?;
            decode_certificate(&der)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ProfileRecord {
        uuid: doc.uuid,
        name: doc.name,
        app_id_name: doc.app_id_name,
        team_name: doc.team_name,
        team_identifiers: doc.team_identifiers,
        creation_date: doc.creation_date.naive_utc(),
        expiration_date: doc.expiration_date.naive_utc(),
        certificates,
    })
}
