use aws_config::SdkConfig;
use aws_sdk_iot::config::Region;
use tracing::debug;

/// How credentials for the session are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource<'a> {
    /// A named profile from the shared AWS config/credentials files.
    Profile(&'a str),
    /// The default provider chain: environment, shared files, SSO, instance role.
    Ambient,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionConfig {
    pub profile: Option<String>,
    pub region: Option<String>,
    pub endpoint_url: Option<String>,
}

impl SessionConfig {
    pub fn new(
        profile: Option<String>,
        region: Option<String>,
        endpoint_url: Option<String>,
    ) -> Self {
        Self {
            profile,
            region,
            endpoint_url,
        }
    }

    pub fn credential_source(&self) -> CredentialSource<'_> {
        match self.profile.as_deref() {
            Some(profile) => CredentialSource::Profile(profile),
            None => CredentialSource::Ambient,
        }
    }

    /// Resolve the shared SDK configuration. Credentials are resolved lazily
    /// by the SDK, so a bad profile only surfaces on the first request.
    pub async fn load(&self) -> SdkConfig {
        let mut loader = aws_config::from_env();

        match self.credential_source() {
            CredentialSource::Profile(profile) => {
                debug!(profile, "scoping credentials to profile");
                loader = loader.profile_name(profile);
            }
            CredentialSource::Ambient => debug!("using ambient credential resolution"),
        }

        if let Some(region) = &self.region {
            loader = loader.region(Region::new(region.clone()));
        }
        if let Some(endpoint_url) = &self.endpoint_url {
            debug!(%endpoint_url, "overriding IoT endpoint");
            loader = loader.endpoint_url(endpoint_url);
        }

        let config = loader.load().await;
        debug!(region = ?config.region(), "loaded AWS configuration");
        config
    }
}
