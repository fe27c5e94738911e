//! Leaf certificate selection
//!
//! Parses DER certificates from the peer chain using x509-parser.

use crate::utils::CertificateError;
use chrono::{DateTime, TimeZone, Utc};
use x509_parser::prelude::*;

/// The end-entity certificate of a peer chain
#[derive(Debug, Clone)]
pub struct LeafCertificate {
    pub subject: String,
    pub not_after: DateTime<Utc>,
    /// Position of the certificate in the chain as sent by the server
    pub position: usize,
}

/// Return the first certificate in chain order that is not a CA.
///
/// Certificates after the leaf are not parsed.
pub fn find_leaf<C: AsRef<[u8]>>(chain: &[C]) -> Result<LeafCertificate, CertificateError> {
    for (position, der) in chain.iter().enumerate() {
        let (_, cert) = X509Certificate::from_der(der.as_ref()).map_err(|e| {
            CertificateError::ParseError {
                message: format!("certificate #{}: {:?}", position, e),
            }
        })?;

        if is_ca(&cert) {
            continue;
        }

        return Ok(LeafCertificate {
            subject: cert.subject().to_string(),
            not_after: asn1_time_to_datetime(cert.validity().not_after)?,
            position,
        });
    }

    Err(CertificateError::NoLeafCertificate)
}

// A missing or unreadable basic constraints extension means "not a CA"
fn is_ca(cert: &X509Certificate) -> bool {
    cert.basic_constraints()
        .map(|bc| bc.map(|ext| ext.value.ca).unwrap_or(false))
        .unwrap_or(false)
}

/// Convert ASN.1 time to chrono DateTime
fn asn1_time_to_datetime(time: ASN1Time) -> Result<DateTime<Utc>, CertificateError> {
    Utc.timestamp_opt(time.timestamp(), 0)
        .single()
        .ok_or(CertificateError::InvalidTimestamp)
}
