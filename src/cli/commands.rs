use crate::cli::args::Cli;
use crate::cli::completions::write_completions;
use crate::iot::{fetch_certificate_pem, CertificateSource, IotClient, SessionConfig};
use crate::utils::errors::Result;
use crate::utils::output::write_pem;
use clap::error::ErrorKind;
use clap::CommandFactory;
use std::future::Future;
use std::io::{self, Write};
use tracing::info;
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::EnvFilter;

pub async fn handle_command(cli: Cli) -> Result<()> {
    if let Some(shell) = cli.completions {
        return write_completions(shell, &mut io::stdout().lock());
    }

    // Logging lives for this invocation only, always to stderr
    let _log_guard = init_logging(cli.verbose, cli.quiet);

    run(
        cli,
        |session| async move { IotClient::connect(&session).await },
        &mut io::stdout().lock(),
    )
    .await
}

/// Log the invocation, open a session through `connect` and download one certificate.
pub async fn run<C, F, S, W>(cli: Cli, connect: C, out: &mut W) -> Result<()>
where
    C: FnOnce(SessionConfig) -> F,
    F: Future<Output = S>,
    S: CertificateSource,
    W: Write,
{
    let Some(certificate_id) = cli.certificate_id else {
        Cli::command()
            .error(
                ErrorKind::MissingRequiredArgument,
                "the following required arguments were not provided: <ID>",
            )
            .exit()
    };

    log_invocation(&certificate_id, cli.profile.as_deref());

    let session = SessionConfig::new(cli.profile, cli.region, cli.endpoint_url);
    let source = connect(session).await;

    download_certificate(&source, &certificate_id, out).await
}

/// Fetch one certificate and write its PEM to `out`. Nothing is written on failure.
pub async fn download_certificate<S, W>(
    source: &S,
    certificate_id: &str,
    out: &mut W,
) -> Result<()>
where
    S: CertificateSource + ?Sized,
    W: Write,
{
    let pem = fetch_certificate_pem(source, certificate_id).await?;
    write_pem(out, &pem)
}

pub fn log_invocation(certificate_id: &str, profile: Option<&str>) {
    info!("certificate ID: {certificate_id}");
    if let Some(profile) = profile {
        info!("using profile: {profile}");
    }
}

/// Filter directive for the given flags; `RUST_LOG` takes precedence when set.
pub fn log_directive(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "off";
    }
    match verbose {
        0 => "iot_cert_fetch=info",
        1 => "iot_cert_fetch=debug,aws_config=debug,aws_sdk_iot=debug",
        _ => "trace",
    }
}

fn init_logging(verbose: u8, quiet: bool) -> DefaultGuard {
    let directive = log_directive(verbose, quiet);
    let filter = if quiet {
        EnvFilter::new(directive)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive))
    };

    let subscriber = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .finish();

    tracing::subscriber::set_default(subscriber)
}
