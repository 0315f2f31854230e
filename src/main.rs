use iot_cert_fetch::cli::{handle_command, Cli};
use iot_cert_fetch::utils::errors::report;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    use clap::Parser;
    let cli = Cli::parse();

    if let Err(e) = handle_command(cli).await {
        eprintln!("{}", report(&e));
        std::process::exit(1);
    }
}
