use crate::cli::args::Cli;
use crate::utils::errors::Result;
use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io::Write;

pub fn write_completions<W: Write>(shell: Shell, out: &mut W) -> Result<()> {
    let mut cmd = Cli::command();
    let app_name = cmd.get_name().to_string();

    generate(shell, &mut cmd, app_name, out);
    out.flush()?;
    Ok(())
}
