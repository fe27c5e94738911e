//! TLS certificate inspector
//!
//! Connects to a host, completes a TLS handshake and classifies the expiry of
//! the leaf certificate. Chain trust is not evaluated: the handshake accepts
//! any certificate so that expired and self-signed ones can still be read.

use super::certificate::{find_leaf, LeafCertificate};
use super::expiry::{classify, relative_time};
use crate::config::ProbeSettings;
use crate::models::{ExpiryThreshold, HostAddress, ProbeResult};
use crate::utils::{ProbeError, SslError, TcpError};
use chrono::Utc;
use rustls::client::danger::{HandshakeSignatureValid, ServerCertVerified, ServerCertVerifier};
use rustls::pki_types::{CertificateDer, ServerName, UnixTime};
use rustls::{ClientConfig, DigitallySignedStruct, Error as RustlsError, SignatureScheme};
use std::io::ErrorKind;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::{lookup_host, TcpStream};
use tokio_rustls::TlsConnector;
use tracing::debug;

/// A certificate verifier that accepts any certificate.
// Trust is not checked: expired and self-signed leaves must still be read.
#[derive(Debug)]
struct AcceptAnyCertVerifier;

impl ServerCertVerifier for AcceptAnyCertVerifier {
    fn verify_server_cert(
        &self,
        _end_entity: &CertificateDer<'_>,
        _intermediates: &[CertificateDer<'_>],
        _server_name: &ServerName<'_>,
        _ocsp_response: &[u8],
        _now: UnixTime,
    ) -> Result<ServerCertVerified, RustlsError> {
        Ok(ServerCertVerified::assertion())
    }

    fn verify_tls12_signature(
        &self,
        _message: &[u8],
        _cert: &CertificateDer<'_>,
        _dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, RustlsError> {
        Ok(HandshakeSignatureValid::assertion())
    }

    fn verify_tls13_signature(
        &self,
        _message: &[u8],
        _cert: &CertificateDer<'_>,
        _dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, RustlsError> {
        Ok(HandshakeSignatureValid::assertion())
    }

    fn supported_verify_schemes(&self) -> Vec<SignatureScheme> {
        vec![
            SignatureScheme::RSA_PKCS1_SHA256,
            SignatureScheme::RSA_PKCS1_SHA384,
            SignatureScheme::RSA_PKCS1_SHA512,
            SignatureScheme::ECDSA_NISTP256_SHA256,
            SignatureScheme::ECDSA_NISTP384_SHA384,
            SignatureScheme::ECDSA_NISTP521_SHA512,
            SignatureScheme::RSA_PSS_SHA256,
            SignatureScheme::RSA_PSS_SHA384,
            SignatureScheme::RSA_PSS_SHA512,
            SignatureScheme::ED25519,
            SignatureScheme::ED448,
        ]
    }
}

/// Probes a single host and classifies its leaf certificate.
///
/// Stateless across calls; one instance is shared by every probe task.
pub struct CertificateInspector {
    settings: ProbeSettings,
    threshold: ExpiryThreshold,
    connector: TlsConnector,
}

impl CertificateInspector {
    /// Create a new inspector with the given settings
    pub fn new(settings: ProbeSettings) -> Self {
        // Ensure a default crypto provider is installed
        let _ = rustls::crypto::ring::default_provider().install_default();

        let config = ClientConfig::builder()
            .dangerous()
            .with_custom_certificate_verifier(Arc::new(AcceptAnyCertVerifier))
            .with_no_client_auth();

        Self {
            threshold: settings.threshold(),
            settings,
            connector: TlsConnector::from(Arc::new(config)),
        }
    }

    /// Inspect `host`. Every failure is returned as an `Error` result.
    pub async fn inspect(&self, host: &HostAddress) -> ProbeResult {
        match self.fetch_leaf(host).await {
            Ok(leaf) => {
                let now = Utc::now();
                let status = classify(now, leaf.not_after, self.threshold);
                debug!(
                    host = %host,
                    subject = %leaf.subject,
                    not_after = %leaf.not_after,
                    status = %status,
                    "leaf certificate classified"
                );
                ProbeResult::classified(
                    host.clone(),
                    status,
                    leaf.not_after,
                    relative_time(now, leaf.not_after),
                )
            }
            Err(e) => {
                debug!(host = %host, error = %e, "probe failed");
                ProbeResult::failed(host.clone(), e)
            }
        }
    }

    /// Connect, handshake and pick the leaf certificate. The connection is
    /// closed when this returns, on every path.
    async fn fetch_leaf(&self, host: &HostAddress) -> Result<LeafCertificate, ProbeError> {
        let name = host.server_name();
        let server_name = ServerName::try_from(name.to_string())
            .map_err(|_| SslError::InvalidServerName {
                host: name.to_string(),
            })?;

        let endpoint = host.endpoint();
        let stream = self.connect(&endpoint).await?;
        debug!(endpoint = %endpoint, "connected");

        let tls_stream = tokio::time::timeout(
            self.settings.handshake_timeout(),
            self.connector.connect(server_name, stream),
        )
        .await
        .map_err(|_| SslError::Timeout {
            secs: self.settings.handshake_timeout_secs,
        })?
        .map_err(|e| SslError::HandshakeFailed {
            message: e.to_string(),
        })?;

        let (_, client_connection) = tls_stream.get_ref();
        let chain = client_connection
            .peer_certificates()
            .filter(|certs| !certs.is_empty())
            .ok_or(SslError::NoPeerCertificates)?;
        debug!(endpoint = %endpoint, certificates = chain.len(), "handshake complete");

        Ok(find_leaf(chain)?)
    }

    /// Resolve and connect, both bounded by the connect timeout
    async fn connect(&self, endpoint: &str) -> Result<TcpStream, TcpError> {
        tokio::time::timeout(self.settings.connect_timeout(), resolve_and_connect(endpoint))
            .await
            .map_err(|_| TcpError::Timeout {
                addr: endpoint.to_string(),
                secs: self.settings.connect_timeout_secs,
            })?
    }
}

async fn resolve_and_connect(endpoint: &str) -> Result<TcpStream, TcpError> {
    let addrs: Vec<SocketAddr> = lookup_host(endpoint)
        .await
        .map_err(|e| TcpError::Resolve {
            addr: endpoint.to_string(),
            message: e.to_string(),
        })?
        .collect();

    if addrs.is_empty() {
        return Err(TcpError::Resolve {
            addr: endpoint.to_string(),
            message: "no addresses found".to_string(),
        });
    }

    TcpStream::connect(&addrs[..])
        .await
        .map_err(|e| match e.kind() {
            ErrorKind::ConnectionRefused => TcpError::ConnectionRefused {
                addr: endpoint.to_string(),
            },
            _ => TcpError::ConnectionFailed {
                addr: endpoint.to_string(),
                message: e.to_string(),
            },
        })
}
