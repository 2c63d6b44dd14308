use anyhow::{Context, Result};
use std::path::PathBuf;
use std::process::{Command, Output};

pub fn helper_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_resolve-collection"))
}

/// Build a helper command with a scrubbed `REFCOLLECTION_*` environment.
pub fn helper_command() -> Command {
    let mut cmd = Command::new(helper_binary());
    cmd.env_remove("REFCOLLECTION_FORMAT")
        .env_remove("REFCOLLECTION_NAMES");
    cmd
}

/// Run a command to completion without judging its exit status.
pub fn run_command(mut cmd: Command) -> Result<Output> {
    cmd.output()
        .with_context(|| format!("failed to run command: {:?}", cmd))
}

pub fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(|line| line.to_string())
        .collect()
}
