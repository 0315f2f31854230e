use crate::iot::session::SessionConfig;
use crate::iot::CertificateSource;
use crate::utils::errors::{IotCertError, Result};
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_iot::operation::describe_certificate::DescribeCertificateOutput;
use aws_sdk_iot::Client;

pub struct IotClient {
    client: Client,
}

impl IotClient {
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            client: Client::new(config),
        }
    }

    /// Build a client from a freshly resolved session.
    pub async fn connect(session: &SessionConfig) -> Self {
        let config = session.load().await;
        Self::new(&config)
    }

    /// Issue a single DescribeCertificate call
    pub async fn describe_certificate(
        &self,
        certificate_id: &str,
    ) -> Result<DescribeCertificateOutput> {
        let output = self
            .client
            .describe_certificate()
            .certificate_id(certificate_id)
            .send()
            .await
            .map_err(aws_sdk_iot::Error::from)?;

        Ok(output)
    }
}

#[async_trait]
impl CertificateSource for IotClient {
    async fn certificate_pem(&self, certificate_id: &str) -> Result<String> {
        let output = self.describe_certificate(certificate_id).await?;
        pem_from_output(output)
    }
}

/// Extract `certificateDescription.certificatePem` from a DescribeCertificate response.
pub fn pem_from_output(output: DescribeCertificateOutput) -> Result<String> {
    let description = output
        .certificate_description
        .ok_or(IotCertError::MissingField("certificateDescription"))?;

    description
        .certificate_pem
        .ok_or(IotCertError::MissingField("certificatePem"))
}
