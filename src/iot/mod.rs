pub mod client;
pub mod session;

pub use client::IotClient;
pub use session::{CredentialSource, SessionConfig};

use crate::utils::errors::Result;
use async_trait::async_trait;
use tracing::debug;

/// Anything that can resolve a certificate ID to its PEM body.
#[async_trait]
pub trait CertificateSource {
    async fn certificate_pem(&self, certificate_id: &str) -> Result<String>;
}

/// Look up one certificate. Failures are returned untouched; nothing is retried.
pub async fn fetch_certificate_pem<S>(source: &S, certificate_id: &str) -> Result<String>
where
    S: CertificateSource + ?Sized,
{
    debug!(certificate_id, "describing certificate");
    let pem = source.certificate_pem(certificate_id).await?;
    debug!(bytes = pem.len(), "received certificate PEM");
    Ok(pem)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::errors::IotCertError;
    use std::sync::Mutex;

    const PEM: &str = "-----BEGIN CERTIFICATE-----\n...\n-----END CERTIFICATE-----\n";

    struct FakeRegistry {
        known_id: &'static str,
        calls: Mutex<Vec<String>>,
    }

    impl FakeRegistry {
        fn new(known_id: &'static str) -> Self {
            Self {
                known_id,
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl CertificateSource for FakeRegistry {
        async fn certificate_pem(&self, certificate_id: &str) -> Result<String> {
            self.calls.lock().unwrap().push(certificate_id.to_string());
            if certificate_id == self.known_id {
                Ok(PEM.to_string())
            } else {
                Err(IotCertError::MissingField("certificateDescription"))
            }
        }
    }

    #[tokio::test]
    async fn test_fetch_known_certificate() {
        let registry = FakeRegistry::new("abc123");

        let pem = fetch_certificate_pem(&registry, "abc123").await.unwrap();
        assert_eq!(pem, PEM);
        assert_eq!(*registry.calls.lock().unwrap(), vec!["abc123".to_string()]);
    }

    #[tokio::test]
    async fn test_fetch_failure_propagates_after_single_call() {
        let registry = FakeRegistry::new("abc123");

        let result = fetch_certificate_pem(&registry, "unknown").await;
        assert!(matches!(
            result,
            Err(IotCertError::MissingField("certificateDescription"))
        ));
        assert_eq!(registry.calls.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_fetch_through_trait_object() {
        let registry = FakeRegistry::new("abc123");
        let source: &dyn CertificateSource = &registry;

        assert_eq!(fetch_certificate_pem(source, "abc123").await.unwrap(), PEM);
    }
}
