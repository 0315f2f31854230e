use clap::builder::NonEmptyStringValueParser;
use clap::Parser;
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(name = "iot-cert-fetch")]
#[command(version = "1.0.0")]
#[command(about = "Downloads the certificate of an IoT device")]
#[command(long_about = None)]
pub struct Cli {
    /// ID of the certificate to be obtained
    #[arg(
        value_name = "ID",
        required_unless_present = "completions",
        value_parser = NonEmptyStringValueParser::new()
    )]
    pub certificate_id: Option<String>,

    /// Optional profile name for the credential (default: None)
    #[arg(long, value_name = "PROFILE")]
    pub profile: Option<String>,

    /// AWS region (default: resolved from the profile or environment)
    #[arg(long, value_name = "REGION")]
    pub region: Option<String>,

    /// Override the IoT control-plane endpoint
    #[arg(long, value_name = "URL", value_hint = clap::ValueHint::Url)]
    pub endpoint_url: Option<String>,

    /// Enable verbose logging (repeat for more verbosity: -v DEBUG, -vv TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress diagnostic output
    #[arg(short, long)]
    pub quiet: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_name = "SHELL", exclusive = true)]
    pub completions: Option<Shell>,
}
