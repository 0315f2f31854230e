use crate::utils::errors::Result;
use std::io::Write;

/// Write a PEM document so that the output ends with exactly one newline.
pub fn write_pem<W: Write>(out: &mut W, pem: &str) -> Result<()> {
    out.write_all(pem.as_bytes())?;
    if !pem.ends_with('\n') {
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}
