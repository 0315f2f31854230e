use thiserror::Error;

#[derive(Error, Debug)]
pub enum IotCertError {
    #[error("IoT API error")]
    IotApi(#[from] aws_sdk_iot::Error),

    #[error("Response is missing field: {0}")]
    MissingField(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, IotCertError>;

/// Render an error followed by its `source()` chain, one cause per line.
pub fn report(err: &(dyn std::error::Error + 'static)) -> String {
    let mut out = format!("Error: {err}");
    let mut source = err.source();
    if source.is_some() {
        out.push_str("\n\nCaused by:");
    }
    let mut depth = 0;
    while let Some(cause) = source {
        out.push_str(&format!("\n    {depth}: {cause}"));
        depth += 1;
        source = cause.source();
    }
    out
}
