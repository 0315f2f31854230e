pub mod cli;
pub mod iot;
pub mod utils;

pub use cli::{args, commands};
pub use iot::{fetch_certificate_pem, CertificateSource, IotClient, SessionConfig};
pub use utils::errors;
