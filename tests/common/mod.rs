//! Local TLS endpoints for integration tests

#![allow(dead_code)]

use rcgen::{BasicConstraints, CertificateParams, IsCa, KeyPair};
use rustls::pki_types::{CertificateDer, PrivateKeyDer, PrivatePkcs8KeyDer};
use rustls::ServerConfig;
use ssl_expiry::models::{ExpiryStatus, ProbeResult};
use ssl_expiry::output::Reporter;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::io::AsyncReadExt;
use tokio::net::TcpListener;
use tokio_rustls::TlsAcceptor;

pub fn install_crypto_provider() {
    let _ = rustls::crypto::ring::default_provider().install_default();
}

/// Self-signed certificate for `localhost` expiring `validity_days` from now
/// (negative for an already expired one)
pub fn certificate(
    validity_days: i64,
    ca: bool,
) -> (CertificateDer<'static>, PrivateKeyDer<'static>) {
    let mut params =
        CertificateParams::new(vec!["localhost".to_string()]).expect("certificate params");
    let now = time::OffsetDateTime::now_utc();
    params.not_before = now - time::Duration::days(365);
    params.not_after = now + time::Duration::days(validity_days);
    if ca {
        params.is_ca = IsCa::Ca(BasicConstraints::Unconstrained);
    }

    let key_pair = KeyPair::generate().expect("key pair");
    let cert = params.self_signed(&key_pair).expect("self-signed certificate");

    (
        cert.der().clone(),
        PrivateKeyDer::Pkcs8(PrivatePkcs8KeyDer::from(key_pair.serialize_der())),
    )
}

/// Serve `cert` on an ephemeral localhost port until the runtime shuts down
pub async fn spawn_tls_server(
    cert: CertificateDer<'static>,
    key: PrivateKeyDer<'static>,
) -> SocketAddr {
    install_crypto_provider();

    let config = ServerConfig::builder()
        .with_no_client_auth()
        .with_single_cert(vec![cert], key)
        .expect("server config");
    let acceptor = TlsAcceptor::from(Arc::new(config));

    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        while let Ok((stream, _)) = listener.accept().await {
            let acceptor = acceptor.clone();
            tokio::spawn(async move {
                if let Ok(mut tls) = acceptor.accept(stream).await {
                    let mut buf = [0u8; 1];
                    let _ = tls.read(&mut buf).await;
                }
            });
        }
    });

    addr
}

/// Accepts TCP connections and never answers, stalling any TLS handshake
pub async fn spawn_silent_server() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((stream, _)) = listener.accept().await {
            held.push(stream);
        }
    });

    addr
}

/// An address nothing is listening on
pub async fn closed_port() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    listener.local_addr().expect("local addr")
}

/// Reporter that keeps every delivered result
#[derive(Default)]
pub struct CollectingReporter {
    results: Mutex<Vec<ProbeResult>>,
}

impl CollectingReporter {
    pub fn results(&self) -> Vec<ProbeResult> {
        self.results.lock().unwrap().clone()
    }

    pub fn status_of(&self, host: &str) -> Option<ExpiryStatus> {
        self.results
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.host().as_str() == host)
            .map(|r| r.status())
    }
}

impl Reporter for CollectingReporter {
    fn report(&self, result: &ProbeResult) {
        self.results.lock().unwrap().push(result.clone());
    }
}
