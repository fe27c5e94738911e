//! Check modules for ssl-expiry
//!
//! The inspector opens a TLS session, picks the leaf certificate out of the
//! peer chain and classifies its expiry.

pub mod certificate;
pub mod expiry;
pub mod ssl;

pub use certificate::{find_leaf, LeafCertificate};
pub use expiry::{classify, relative_time};
pub use ssl::CertificateInspector;
